mod handler;
mod tcp;
mod udp;

pub use handler::{response_code, DnsServerHandler};
pub use tcp::{handle_connection, run_tcp_listener};
pub use udp::{run_udp_listener, UDP_BUFFER_SIZE};
