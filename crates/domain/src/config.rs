pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
