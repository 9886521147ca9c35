//! Cascade DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod resolution;
pub mod upstream_result;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{normalize_domain, DnsQuery};
pub use dns_record::{
    Answer, AuthoritativeRecord, RecordFilter, RecordType, DEFAULT_ANSWER_TTL,
    DEFAULT_RECORD_TTL,
};
pub use errors::DomainError;
pub use resolution::{AnswerSource, Resolution};
pub use upstream_result::{UpstreamResult, UpstreamStatus};
