//! Probewire codecs
//!
//! Wire-format builders and parsers for NTP time probes, DNS address lookups
//! and NAPTR-based discovery. Nothing in here touches the network.
pub mod dns;
pub mod ntp;

pub use dns::{DnsQueryCodec, ScbDiscoveryResolver};
pub use ntp::NtpCodec;
