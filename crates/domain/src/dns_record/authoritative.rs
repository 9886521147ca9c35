use super::{Answer, RecordType};
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// TTL given to an authoritative record created without one.
pub const DEFAULT_RECORD_TTL: u32 = 300;

/// A record served authoritatively from the local store.
///
/// `(domain, record_type, value)` is unique across the store. `priority` is
/// present exactly when `record_type` is MX.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoritativeRecord {
    pub id: Option<i64>,
    pub domain: String,
    pub record_type: RecordType,
    pub value: String,
    pub ttl: u32,
    pub priority: Option<u16>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl AuthoritativeRecord {
    pub fn new(domain: impl Into<String>, record_type: RecordType, value: impl Into<String>) -> Self {
        Self {
            id: None,
            domain: domain.into(),
            record_type,
            value: value.into(),
            ttl: DEFAULT_RECORD_TTL,
            priority: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.domain.trim().is_empty() {
            return Err(DomainError::Validation("domain is required".to_string()));
        }
        if self.value.trim().is_empty() {
            return Err(DomainError::Validation("value is required".to_string()));
        }

        match (self.record_type, self.priority) {
            (RecordType::MX, None) => {
                return Err(DomainError::Validation(
                    "MX records require a priority value".to_string(),
                ))
            }
            (rt, Some(_)) if rt != RecordType::MX => {
                return Err(DomainError::Validation(
                    "priority is only allowed for MX records".to_string(),
                ))
            }
            _ => {}
        }

        match self.record_type {
            RecordType::A if self.value.parse::<Ipv4Addr>().is_err() => Err(
                DomainError::Validation(format!("'{}' is not an IPv4 address", self.value)),
            ),
            RecordType::AAAA if self.value.parse::<Ipv6Addr>().is_err() => Err(
                DomainError::Validation(format!("'{}' is not an IPv6 address", self.value)),
            ),
            _ => Ok(()),
        }
    }

    /// Transcodes this record into an answer for `name`.
    pub fn to_answer(&self, name: &str) -> Answer {
        Answer::new(name, self.record_type, self.ttl, self.answer_data())
    }

    fn answer_data(&self) -> String {
        match self.record_type {
            RecordType::MX => {
                let exchange = self.value.trim_end_matches('.');
                match self.priority {
                    Some(priority) => format!("{} {}", priority, exchange),
                    None => exchange.to_string(),
                }
            }
            rt if rt.is_name_target() => self.value.trim_end_matches('.').to_string(),
            _ => self.value.clone(),
        }
    }
}

/// Optional filters for listing authoritative records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub domain: Option<String>,
    pub record_type: Option<RecordType>,
    pub value: Option<String>,
}
