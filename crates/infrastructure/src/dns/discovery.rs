//! NAPTR-based bootstrap discovery
//!
//! A discovery zone publishes NAPTR records whose `services` field carries a
//! fixed tag and whose replacement names the bootstrap server. The answer
//! section is untrusted, so selection is strict:
//!
//! - any non-NAPTR answer rejects the whole response
//! - NAPTR records with a different service tag are skipped
//! - among the rest, the last record with the terminal flag `A` wins
//!
//! `order` and `preference` are not consulted.

use super::forwarding::{AnswerRecord, MessageBuilder, ResponseParser};
use probewire_domain::config::{DiscoveryConfig, SCION_DISCOVERY_SERVICE};
use probewire_domain::{DomainError, RecordType};
use tracing::{debug, warn};

/// NAPTR flag marking a replacement that needs no further lookup.
pub const TERMINAL_FLAG: &str = "A";

#[derive(Debug, Clone)]
pub struct ScbDiscoveryResolver {
    service: String,
}

impl ScbDiscoveryResolver {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self::new(config.service.clone())
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn build_query(&self, name: &str) -> Result<Vec<u8>, DomainError> {
        MessageBuilder::build_query(name, &RecordType::NAPTR)
    }

    /// Discovered endpoint from a NAPTR response, or `None` if nothing usable
    /// was advertised.
    pub fn resolve(&self, response_bytes: &[u8]) -> Result<Option<String>, DomainError> {
        let response = ResponseParser::parse(response_bytes)?;
        Ok(self.select(&response.answers))
    }

    pub fn select(&self, answers: &[AnswerRecord]) -> Option<String> {
        let mut endpoint = None;

        for answer in answers {
            let naptr = match answer {
                AnswerRecord::NAPTR(naptr) => naptr,
                AnswerRecord::A(_) | AnswerRecord::AAAA(_) | AnswerRecord::Other(_) => {
                    warn!(answer = %answer, "Non-NAPTR record in discovery response, rejecting");
                    return None;
                }
            };

            if naptr.service != self.service {
                continue;
            }

            if naptr.flags == TERMINAL_FLAG {
                // Overwrites any earlier match.
                endpoint = Some(naptr.replacement.clone());
            }
        }

        debug!(endpoint = ?endpoint, candidates = answers.len(), "Discovery selection done");
        endpoint
    }
}

impl Default for ScbDiscoveryResolver {
    fn default() -> Self {
        Self::new(SCION_DISCOVERY_SERVICE)
    }
}
