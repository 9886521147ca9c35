//! TCP Transport for DNS queries (RFC 1035 §4.2.2)
//!
//! Every message is preceded by its length as a two-byte big-endian prefix.

use super::DnsTransport;
use async_trait::async_trait;
use cascade_dns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

const MAX_TCP_MESSAGE_SIZE: usize = 65535;

/// DNS over TCP transport. One connection per exchange.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let mut stream = TcpStream::connect(self.server_addr).await.map_err(|e| {
            DomainError::UpstreamFailure(format!(
                "connection refused by TCP server {}: {}",
                self.server_addr, e
            ))
        })?;
        stream.set_nodelay(true)?;

        write_framed(&mut stream, message_bytes).await?;
        debug!(server = %self.server_addr, message_len = message_bytes.len(), "TCP query sent");

        let response = read_framed(&mut stream).await?;
        debug!(server = %self.server_addr, response_len = response.len(), "TCP response received");

        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::UpstreamTimeout)?
    }
}

/// Writes one length-prefixed DNS message.
pub async fn write_framed<S>(stream: &mut S, message_bytes: &[u8]) -> Result<(), DomainError>
where
    S: AsyncWrite + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        DomainError::MalformedMessage(format!(
            "message too large for TCP: {} bytes",
            message_bytes.len()
        ))
    })?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await?;

    Ok(())
}

/// Reads one length-prefixed DNS message.
pub async fn read_framed<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let message_len = u16::from_be_bytes(len_buf) as usize;
    if message_len == 0 || message_len > MAX_TCP_MESSAGE_SIZE {
        return Err(DomainError::MalformedMessage(format!(
            "invalid TCP message length {}",
            message_len
        )));
    }

    let mut message = vec![0u8; message_len];
    stream.read_exact(&mut message).await?;

    Ok(message)
}
