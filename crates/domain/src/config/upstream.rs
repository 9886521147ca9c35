use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Tried in order. Entries are `ip` or `ip:port`.
    #[serde(default = "default_nameservers")]
    pub nameservers: Vec<String>,

    /// Budget for a single attempt against one nameserver.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Budget for the whole query across every attempt.
    #[serde(default = "default_lifetime_secs")]
    pub lifetime_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            nameservers: default_nameservers(),
            timeout_secs: default_timeout_secs(),
            lifetime_secs: default_lifetime_secs(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn lifetime(&self) -> Duration {
        Duration::from_secs(self.lifetime_secs)
    }

    pub fn socket_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.nameservers
            .iter()
            .map(|server| parse_nameserver(server))
            .collect()
    }
}

fn parse_nameserver(server: &str) -> Result<SocketAddr, ConfigError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    server
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| ConfigError::Validation(format!("Invalid nameserver address '{}'", server)))
}

fn default_nameservers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
}

fn default_timeout_secs() -> u64 {
    3
}

fn default_lifetime_secs() -> u64 {
    5
}
