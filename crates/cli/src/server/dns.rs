use cascade_dns_domain::config::ServerConfig;
use cascade_dns_infrastructure::dns::server::{run_tcp_listener, run_udp_listener};
use cascade_dns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinSet;
use tracing::{error, info};

/// Serves DNS over UDP and TCP on the same address until either listener stops.
pub async fn start_dns_server(
    socket_addr: SocketAddr,
    handler: Arc<DnsServerHandler>,
    server: &ServerConfig,
) -> anyhow::Result<()> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    info!(bind_address = %socket_addr, "Starting DNS server");

    let udp_socket = Arc::new(create_udp_socket(domain, socket_addr)?);
    let tcp_listener = create_tcp_listener(domain, socket_addr)?;
    let max_connections = server.max_tcp_connections;
    let read_timeout = Duration::from_secs(server.tcp_timeout_secs);

    let mut join_set: JoinSet<&'static str> = JoinSet::new();

    let handler_udp = handler.clone();
    join_set.spawn(async move {
        run_udp_listener(udp_socket, handler_udp).await;
        "udp"
    });

    join_set.spawn(async move {
        run_tcp_listener(tcp_listener, handler, max_connections, read_timeout).await;
        "tcp"
    });

    info!(
        max_tcp_connections = max_connections,
        tcp_timeout_secs = server.tcp_timeout_secs,
        "DNS server ready on {}",
        socket_addr
    );

    if let Some(result) = join_set.join_next().await {
        match result {
            Ok(listener) => error!(listener, "DNS listener stopped"),
            Err(e) => error!(error = %e, "DNS listener task failed"),
        }
    }

    join_set.shutdown().await;
    anyhow::bail!("DNS server stopped unexpectedly")
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
