use cascade_dns_domain::{Answer, RecordType};
use serde::Serialize;

/// Point-in-time view of the cache counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStatsSnapshot {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub expirations: u64,
}

impl CacheStatsSnapshot {
    /// Percentage of lookups served from the cache; 0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups > 0 {
            (self.hits as f64 / lookups as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// TTL-indexed answer cache keyed by `(domain, record_type)`.
///
/// Implementations synchronize internally and never block on anything but
/// their own locks.
pub trait AnswerCachePort: Send + Sync {
    /// Returns the cached answers, evicting the entry if it has expired.
    fn get(&self, domain: &str, record_type: RecordType) -> Option<Vec<Answer>>;

    /// Stores `answers` for the minimum TTL among them. Empty input is ignored.
    fn put(&self, domain: &str, record_type: RecordType, answers: &[Answer]);

    fn stats(&self) -> CacheStatsSnapshot;
}
