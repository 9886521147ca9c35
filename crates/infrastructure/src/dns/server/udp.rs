use super::handler::DnsServerHandler;
use std::io;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

/// Receive buffer per datagram; larger requests are truncated by the kernel
/// and then fail to decode.
pub const UDP_BUFFER_SIZE: usize = 4096;

/// Serves DNS over UDP until the socket fails.
///
/// Every datagram is handled in its own task, so a slow upstream lookup
/// never holds up the receive loop.
pub async fn run_udp_listener(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    if let Ok(addr) = socket.local_addr() {
        info!(bind_address = %addr, "UDP DNS listener started");
    }

    let mut recv_buf = [0u8; UDP_BUFFER_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) if is_transient(&e) => {
                debug!(error = %e, "Transient UDP receive error");
                continue;
            }
            Err(e) => {
                error!(error = %e, "UDP receive failed, stopping listener");
                break;
            }
        };

        let request: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let handler = handler.clone();
        let socket = socket.clone();

        tokio::spawn(async move {
            match handler.handle(&request).await {
                Ok(response) => {
                    if let Err(e) = socket.send_to(&response, from).await {
                        warn!(client = %from, error = %e, "Failed to send UDP response");
                    }
                }
                Err(e) => {
                    warn!(client = %from, error = %e, "Dropping malformed UDP request");
                }
            }
        });
    }
}

// ICMP port-unreachable from an earlier reply surfaces as ConnectionReset on
// some platforms.
fn is_transient(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::ConnectionReset | io::ErrorKind::WouldBlock
    )
}
