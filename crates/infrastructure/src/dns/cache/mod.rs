mod answer_cache;
mod key;
mod metrics;

pub use answer_cache::TtlAnswerCache;
pub use key::CacheKey;
