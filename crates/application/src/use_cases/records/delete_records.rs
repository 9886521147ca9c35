use crate::ports::RecordRepository;
use cascade_dns_domain::{normalize_domain, DomainError};
use std::sync::Arc;
use tracing::info;

pub struct DeleteRecordsUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl DeleteRecordsUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Removes every record for `domain`; `NotFound` when there were none.
    pub async fn execute(&self, domain: &str) -> Result<u64, DomainError> {
        let domain = normalize_domain(domain);
        let deleted = self.repository.delete_by_domain(&domain).await?;

        if deleted == 0 {
            return Err(DomainError::NotFound(format!(
                "No records for domain '{}'",
                domain
            )));
        }

        info!(domain = %domain, deleted, "Authoritative records deleted");
        Ok(deleted)
    }
}
