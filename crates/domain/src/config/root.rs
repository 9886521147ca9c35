use serde::{Deserialize, Serialize};
use std::path::Path;

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "cascade-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/cascade-dns/config.toml";

/// Main configuration structure for Cascade DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (ports, bind address, TCP limits)
    #[serde(default)]
    pub server: ServerConfig,

    /// Recursive upstream resolvers
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Authoritative record store
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. cascade-dns.toml in current directory
    /// 3. /etc/cascade-dns/config.toml
    /// 4. Default configuration
    ///
    /// CLI overrides are applied last, then the result is validated.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(LOCAL_CONFIG_PATH).exists() => Self::from_file(LOCAL_CONFIG_PATH)?,
            None if Path::new(SYSTEM_CONFIG_PATH).exists() => Self::from_file(SYSTEM_CONFIG_PATH)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }
        if self.server.dns_port == self.server.web_port {
            return Err(ConfigError::Validation(format!(
                "DNS and web listeners cannot share port {}",
                self.server.dns_port
            )));
        }
        if self.server.max_tcp_connections == 0 {
            return Err(ConfigError::Validation(
                "max_tcp_connections must be at least 1".to_string(),
            ));
        }
        if self.server.tcp_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "tcp_timeout_secs must be non-zero".to_string(),
            ));
        }

        if self.upstream.nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream nameservers configured".to_string(),
            ));
        }
        self.upstream.socket_addrs()?;

        if self.upstream.timeout_secs == 0 || self.upstream.lifetime_secs == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout and lifetime must be non-zero".to_string(),
            ));
        }
        if self.upstream.timeout_secs > self.upstream.lifetime_secs {
            return Err(ConfigError::Validation(format!(
                "Upstream timeout ({}s) exceeds lifetime ({}s)",
                self.upstream.timeout_secs, self.upstream.lifetime_secs
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
