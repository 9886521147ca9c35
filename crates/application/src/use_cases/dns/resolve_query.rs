use crate::ports::{AnswerCachePort, RecordRepository, UpstreamResolver};
use cascade_dns_domain::{
    Answer, AnswerSource, DnsQuery, DomainError, Resolution, UpstreamStatus,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// The resolution waterfall: cache, then authoritative records, then
/// upstream.
///
/// Only non-empty answer sets from the local store or a successful upstream
/// query are cached. Name errors and upstream failures always go back to
/// upstream on the next request.
pub struct ResolveQueryUseCase {
    cache: Arc<dyn AnswerCachePort>,
    records: Arc<dyn RecordRepository>,
    upstream: Arc<dyn UpstreamResolver>,
}

impl ResolveQueryUseCase {
    pub fn new(
        cache: Arc<dyn AnswerCachePort>,
        records: Arc<dyn RecordRepository>,
        upstream: Arc<dyn UpstreamResolver>,
    ) -> Self {
        Self {
            cache,
            records,
            upstream,
        }
    }

    /// Resolves raw caller input. Unsupported types and empty names fail
    /// before any lookup.
    pub async fn execute(
        &self,
        domain: &str,
        record_type: &str,
    ) -> Result<Resolution, DomainError> {
        let query = DnsQuery::parse(domain, record_type)?;
        self.resolve(query).await
    }

    pub async fn resolve(&self, query: DnsQuery) -> Result<Resolution, DomainError> {
        if let Some(answers) = self.cache.get(&query.domain, query.record_type) {
            debug!(domain = %query.domain, record_type = %query.record_type, "Cache hit");
            return Ok(Resolution::answered(query, answers, AnswerSource::Cache));
        }

        let records = self.records.find(&query.domain, query.record_type).await?;
        if !records.is_empty() {
            let answers: Vec<Answer> = records
                .iter()
                .map(|record| record.to_answer(&query.domain))
                .collect();
            self.cache.put(&query.domain, query.record_type, &answers);
            debug!(
                domain = %query.domain,
                record_type = %query.record_type,
                answers = answers.len(),
                "Answered from local records"
            );
            return Ok(Resolution::answered(query, answers, AnswerSource::Local));
        }

        let result = self.upstream.query(&query).await;
        match result.status {
            UpstreamStatus::Success if !result.answers.is_empty() => {
                self.cache
                    .put(&query.domain, query.record_type, &result.answers);
            }
            UpstreamStatus::ServerFailure => {
                warn!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    comment = result.comment.as_deref().unwrap_or(""),
                    "Upstream resolution failed"
                );
            }
            _ => {}
        }

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            status = ?result.status,
            answers = result.answers.len(),
            "Answered from upstream"
        );

        Ok(Resolution {
            query,
            answers: result.answers,
            source: AnswerSource::Upstream,
            status: result.status,
            comment: result.comment,
        })
    }
}
