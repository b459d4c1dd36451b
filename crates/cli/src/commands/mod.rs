pub mod dns;
pub mod ntp;
pub mod scb;

pub use dns::DnsAction;
pub use ntp::NtpAction;
pub use scb::ScbAction;

/// Printed when a parse yields no usable answer.
pub const ABSENT: &str = "(none)";

pub fn render_optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| ABSENT.to_string())
}
