mod answer_cache;
mod dns_message_handler;
mod record_repository;
mod upstream_resolver;

pub use answer_cache::{AnswerCachePort, CacheStatsSnapshot};
pub use dns_message_handler::DnsMessageHandler;
pub use record_repository::RecordRepository;
pub use upstream_resolver::UpstreamResolver;
