use crate::dns::codec::{DecodedRequest, WireCodec};
use async_trait::async_trait;
use cascade_dns_application::ports::DnsMessageHandler;
use cascade_dns_application::use_cases::ResolveQueryUseCase;
use cascade_dns_domain::{DomainError, Resolution, UpstreamStatus};
use hickory_proto::op::ResponseCode;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Decode, resolve and encode one wire-format DNS exchange.
///
/// Shared by the UDP and TCP listeners and by DoH's binary path.
pub struct DnsServerHandler {
    resolve_query: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(resolve_query: Arc<ResolveQueryUseCase>) -> Self {
        Self { resolve_query }
    }

    /// Answers a raw request. Errors only when the request cannot be
    /// decoded, in which case there is nobody to address a reply to.
    pub async fn handle(&self, request_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let request = WireCodec::decode(request_bytes)?;

        debug!(
            id = request.id(),
            domain = %request.domain,
            record_type = %request.record_type,
            "DNS query received"
        );

        match self
            .resolve_query
            .execute(&request.domain, &request.record_type)
            .await
        {
            Ok(resolution) => Self::encode(&request, &resolution),
            Err(e) => {
                if e.is_validation() {
                    debug!(domain = %request.domain, error = %e, "Rejecting query");
                } else {
                    error!(domain = %request.domain, error = %e, "Query resolution failed");
                }
                WireCodec::encode_error(&request, ResponseCode::ServFail)
            }
        }
    }

    fn encode(request: &DecodedRequest, resolution: &Resolution) -> Result<Vec<u8>, DomainError> {
        let code = response_code(resolution.status);
        WireCodec::encode_with_code(request, &resolution.answers, code).or_else(|e| {
            warn!(
                domain = %resolution.query.domain,
                error = %e,
                "Answer could not be encoded, replying SERVFAIL"
            );
            WireCodec::encode_error(request, ResponseCode::ServFail)
        })
    }
}

pub fn response_code(status: UpstreamStatus) -> ResponseCode {
    match status {
        UpstreamStatus::Success => ResponseCode::NoError,
        UpstreamStatus::NameError => ResponseCode::NXDomain,
        UpstreamStatus::ServerFailure => ResponseCode::ServFail,
    }
}

#[async_trait]
impl DnsMessageHandler for DnsServerHandler {
    async fn handle_message(&self, request: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.handle(request).await
    }

    fn encode_resolution(&self, resolution: &Resolution) -> Result<Vec<u8>, DomainError> {
        let request = WireCodec::synthesize_query(&resolution.query)?;
        Self::encode(&request, resolution)
    }
}
