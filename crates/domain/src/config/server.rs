use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Shared by the UDP and TCP listeners.
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_web_port")]
    pub web_port: u16,

    /// Upper bound on TCP connections handled at once.
    #[serde(default = "default_max_tcp_connections")]
    pub max_tcp_connections: usize,

    #[serde(default = "default_tcp_timeout_secs")]
    pub tcp_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
            web_port: default_web_port(),
            max_tcp_connections: default_max_tcp_connections(),
            tcp_timeout_secs: default_tcp_timeout_secs(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_dns_port() -> u16 {
    8053
}

fn default_web_port() -> u16 {
    8080
}

fn default_max_tcp_connections() -> usize {
    512
}

fn default_tcp_timeout_secs() -> u64 {
    10
}
