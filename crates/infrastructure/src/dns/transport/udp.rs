//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). If the response has the TC bit set,
//! the caller should retry via TCP.

use super::DnsTransport;
use async_trait::async_trait;
use cascade_dns_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr()).await.map_err(|e| {
            DomainError::UpstreamFailure(format!("failed to bind UDP socket: {}", e))
        })?;

        // Connecting filters out datagrams from other sources.
        socket.connect(self.server_addr).await.map_err(|e| {
            DomainError::UpstreamFailure(format!(
                "failed to connect UDP socket to {}: {}",
                self.server_addr, e
            ))
        })?;

        let bytes_sent = socket.send(message_bytes).await.map_err(|e| {
            DomainError::UpstreamFailure(format!(
                "failed to send UDP query to {}: {}",
                self.server_addr, e
            ))
        })?;

        debug!(server = %self.server_addr, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let bytes_received = socket.recv(&mut recv_buf).await.map_err(|e| {
                DomainError::UpstreamFailure(format!(
                    "failed to receive UDP response from {}: {}",
                    self.server_addr, e
                ))
            })?;

            // Stale replies to earlier queries carry another id.
            if bytes_received >= 2 && recv_buf[..2] == message_bytes[..2] {
                recv_buf.truncate(bytes_received);
                debug!(
                    server = %self.server_addr,
                    bytes_received = bytes_received,
                    "UDP response received"
                );
                return Ok(recv_buf);
            }

            warn!(server = %self.server_addr, "Discarding UDP datagram with foreign id");
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        if message_bytes.len() < 2 {
            return Err(DomainError::MalformedMessage(
                "query shorter than its id".to_string(),
            ));
        }

        tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::UpstreamTimeout)?
    }
}
