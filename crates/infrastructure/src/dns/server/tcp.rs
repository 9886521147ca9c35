use super::handler::DnsServerHandler;
use crate::dns::transport::{read_framed, write_framed};
use cascade_dns_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

/// Serves DNS over TCP until the listener fails.
///
/// At most `max_connections` connections are handled at once; further
/// clients wait in the accept backlog. Each connection carries one
/// length-prefixed request and its response.
pub async fn run_tcp_listener(
    listener: TcpListener,
    handler: Arc<DnsServerHandler>,
    max_connections: usize,
    read_timeout: Duration,
) {
    if let Ok(addr) = listener.local_addr() {
        info!(bind_address = %addr, max_connections, "TCP DNS listener started");
    }

    let permits = Arc::new(Semaphore::new(max_connections));

    loop {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };

        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "TCP accept failed");
                continue;
            }
        };

        let handler = handler.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, &handler, read_timeout).await {
                debug!(client = %peer, error = %e, "TCP exchange aborted");
            }
            drop(permit);
        });
    }

    error!("TCP DNS listener stopped");
}

/// Runs one framed exchange on `stream`.
pub async fn handle_connection<S>(
    mut stream: S,
    handler: &DnsServerHandler,
    read_timeout: Duration,
) -> Result<(), DomainError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let request = tokio::time::timeout(read_timeout, read_framed(&mut stream))
        .await
        .map_err(|_| DomainError::IoError("TCP read timed out".to_string()))??;

    let response = match handler.handle(&request).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Dropping malformed TCP request");
            return Ok(());
        }
    };

    write_framed(&mut stream, &response).await
}
