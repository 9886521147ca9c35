use async_trait::async_trait;
use cascade_dns_domain::{AuthoritativeRecord, DomainError, RecordFilter, RecordType};

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Authoritative records for an already normalized domain.
    async fn find(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<AuthoritativeRecord>, DomainError>;

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<AuthoritativeRecord>, DomainError>;

    /// Fails with `RecordConflict` when `(domain, record_type, value)` exists.
    async fn create(&self, record: AuthoritativeRecord)
        -> Result<AuthoritativeRecord, DomainError>;

    /// Returns the number of records removed.
    async fn delete_by_domain(&self, domain: &str) -> Result<u64, DomainError>;
}
