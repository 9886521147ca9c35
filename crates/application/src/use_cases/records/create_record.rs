use crate::ports::RecordRepository;
use cascade_dns_domain::{
    normalize_domain, AuthoritativeRecord, DomainError, RecordType, DEFAULT_RECORD_TTL,
};
use std::sync::Arc;
use tracing::info;

/// Unvalidated input for a new authoritative record.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub domain: String,
    pub record_type: String,
    pub value: String,
    pub ttl: Option<u32>,
    pub priority: Option<u16>,
}

pub struct CreateRecordUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl CreateRecordUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: NewRecord) -> Result<AuthoritativeRecord, DomainError> {
        let record_type = input.record_type.parse::<RecordType>()?;

        let mut record = AuthoritativeRecord::new(
            normalize_domain(&input.domain),
            record_type,
            input.value.trim(),
        )
        .with_ttl(input.ttl.unwrap_or(DEFAULT_RECORD_TTL));
        record.priority = input.priority;
        record.validate()?;

        let created = self.repository.create(record).await?;

        info!(
            domain = %created.domain,
            record_type = %created.record_type,
            value = %created.value,
            "Authoritative record created"
        );

        Ok(created)
    }
}
