use crate::{DomainError, RecordType};
use std::sync::Arc;

/// A normalized question: lowercase domain without trailing dot, plus a
/// supported record type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Builds a query from raw caller input.
    ///
    /// The domain is trimmed, stripped of its trailing dot and lowercased;
    /// the type is matched case-insensitively against the supported set.
    pub fn parse(domain: &str, record_type: &str) -> Result<Self, DomainError> {
        let record_type = record_type.parse::<RecordType>()?;
        let domain = normalize_domain(domain);
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain must not be empty".to_string(),
            ));
        }
        Ok(Self::new(domain, record_type))
    }
}

pub fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_lowercase()
}
