use async_trait::async_trait;
use cascade_dns_domain::{DomainError, Resolution};

/// Binary DNS message handling shared by the wire listeners and DoH.
#[async_trait]
pub trait DnsMessageHandler: Send + Sync {
    /// Decodes a wire request, resolves it and encodes the response.
    ///
    /// Fails with `MalformedMessage` only when the request cannot be decoded;
    /// resolution failures are encoded as response codes.
    async fn handle_message(&self, request: &[u8]) -> Result<Vec<u8>, DomainError>;

    /// Encodes a resolution as a response to a synthesized question.
    fn encode_resolution(&self, resolution: &Resolution) -> Result<Vec<u8>, DomainError>;
}
