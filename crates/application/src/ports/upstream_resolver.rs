use async_trait::async_trait;
use cascade_dns_domain::{DnsQuery, UpstreamResult};

/// Recursive resolution delegated to external nameservers.
///
/// Never fails: timeouts and errors come back as a `ServerFailure` result.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    async fn query(&self, query: &DnsQuery) -> UpstreamResult;
}
