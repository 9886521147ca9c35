use crate::ports::RecordRepository;
use cascade_dns_domain::{normalize_domain, AuthoritativeRecord, DomainError, RecordFilter};
use std::sync::Arc;

pub struct GetRecordsUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl GetRecordsUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        mut filter: RecordFilter,
    ) -> Result<Vec<AuthoritativeRecord>, DomainError> {
        filter.domain = filter.domain.as_deref().map(normalize_domain);
        self.repository.list(&filter).await
    }
}
