use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use crate::dns::transport::Transport;
use async_trait::async_trait;
use cascade_dns_application::ports::UpstreamResolver;
use cascade_dns_domain::config::UpstreamConfig;
use cascade_dns_domain::{ConfigError, DnsQuery, DomainError, UpstreamResult};
use hickory_proto::op::ResponseCode;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

/// Forwards queries to a list of recursive nameservers, tried in order.
///
/// Each attempt is bounded by `timeout` and the whole query by `lifetime`.
/// A server that errors, times out or answers SERVFAIL/REFUSED hands the
/// query to the next one.
pub struct ForwardingResolver {
    nameservers: Vec<SocketAddr>,
    timeout: Duration,
    lifetime: Duration,
}

impl ForwardingResolver {
    pub fn new(nameservers: Vec<SocketAddr>, timeout: Duration, lifetime: Duration) -> Self {
        Self {
            nameservers,
            timeout,
            lifetime,
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.socket_addrs()?,
            config.timeout(),
            config.lifetime(),
        ))
    }

    pub fn nameservers(&self) -> &[SocketAddr] {
        &self.nameservers
    }

    async fn query_server(
        &self,
        server: SocketAddr,
        query: &DnsQuery,
        id: u16,
        request: &[u8],
        deadline: Instant,
    ) -> Result<DnsResponse, DomainError> {
        let udp = Transport::udp(server);
        let reply = udp.send(request, self.attempt_budget(deadline)?).await?;
        let response = ResponseParser::parse(&reply, id, query)?;

        if !response.truncated {
            return Ok(response);
        }

        debug!(server = %server, "Truncated UDP response, retrying over TCP");
        let tcp = Transport::tcp(server);
        let reply = tcp.send(request, self.attempt_budget(deadline)?).await?;
        ResponseParser::parse(&reply, id, query)
    }

    fn attempt_budget(&self, deadline: Instant) -> Result<Duration, DomainError> {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(DomainError::UpstreamTimeout);
        }
        Ok(self.timeout.min(remaining))
    }
}

#[async_trait]
impl UpstreamResolver for ForwardingResolver {
    #[instrument(skip(self), fields(domain = %query.domain, record_type = %query.record_type))]
    async fn query(&self, query: &DnsQuery) -> UpstreamResult {
        let (id, request) = match MessageBuilder::build_query(query) {
            Ok(built) => built,
            Err(e) => return UpstreamResult::server_failure(upstream_error(e).to_string()),
        };

        let deadline = Instant::now() + self.lifetime;
        let mut last_error = DomainError::UpstreamTimeout;

        for &server in &self.nameservers {
            if Instant::now() >= deadline {
                last_error = DomainError::UpstreamTimeout;
                break;
            }

            match self.query_server(server, query, id, &request, deadline).await {
                Ok(response) if response.rcode == ResponseCode::NoError => {
                    debug!(server = %server, answers = response.answers.len(), "Upstream answered");
                    return UpstreamResult::success(response.answers);
                }
                Ok(response) if response.is_nxdomain() => {
                    debug!(server = %server, "Upstream answered NXDOMAIN");
                    return UpstreamResult::name_error();
                }
                Ok(response) if response.is_server_error() => {
                    warn!(server = %server, rcode = ?response.rcode, "Upstream refused query");
                    last_error = DomainError::UpstreamFailure(format!(
                        "{} answered {}",
                        server, response.rcode
                    ));
                }
                Ok(response) => {
                    warn!(server = %server, rcode = ?response.rcode, "Unexpected upstream response code");
                    last_error = DomainError::UpstreamFailure(format!(
                        "{} answered {}",
                        server, response.rcode
                    ));
                }
                Err(e) => {
                    warn!(server = %server, error = %e, "Upstream query failed");
                    last_error = upstream_error(e);
                }
            }
        }

        UpstreamResult::server_failure(last_error.to_string())
    }
}

fn upstream_error(error: DomainError) -> DomainError {
    match error {
        DomainError::UpstreamTimeout | DomainError::UpstreamFailure(_) => error,
        other => DomainError::UpstreamFailure(other.to_string()),
    }
}
