pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use cascade_dns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use tcp::{read_framed, write_framed, TcpTransport};
pub use udp::UdpTransport;

/// One exchange with an upstream nameserver, returning the raw reply.
/// `timeout` bounds the whole exchange and expiry surfaces as
/// [`DomainError::UpstreamTimeout`].
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;
}

pub enum Transport {
    Udp(UdpTransport),
    Tcp(TcpTransport),
}

impl Transport {
    pub fn udp(server_addr: SocketAddr) -> Self {
        Self::Udp(UdpTransport::new(server_addr))
    }

    pub fn tcp(server_addr: SocketAddr) -> Self {
        Self::Tcp(TcpTransport::new(server_addr))
    }

    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}
