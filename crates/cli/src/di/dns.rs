use cascade_dns_domain::Config;
use cascade_dns_infrastructure::dns::{ForwardingResolver, TtlAnswerCache};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub cache: Arc<TtlAnswerCache>,
    pub upstream: Arc<ForwardingResolver>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let upstream = ForwardingResolver::from_config(&config.upstream)?;

        info!(
            nameservers = ?upstream.nameservers(),
            timeout_secs = config.upstream.timeout_secs,
            lifetime_secs = config.upstream.lifetime_secs,
            "Upstream resolver configured"
        );

        Ok(Self {
            cache: Arc::new(TtlAnswerCache::new()),
            upstream: Arc::new(upstream),
        })
    }
}
