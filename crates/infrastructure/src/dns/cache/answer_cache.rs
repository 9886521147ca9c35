use super::key::CacheKey;
use super::metrics::CacheMetrics;
use cascade_dns_application::ports::{AnswerCachePort, CacheStatsSnapshot};
use cascade_dns_domain::{Answer, RecordType};
use dashmap::DashMap;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    answers: Vec<Answer>,
    expires_at: Instant,
}

impl CacheEntry {
    #[inline]
    fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }
}

/// Answer cache with per-entry expiry and lazy eviction.
///
/// An entry lives for the smallest TTL among its answers and is only removed
/// when a read finds it expired. There is no background sweep.
#[derive(Default)]
pub struct TtlAnswerCache {
    entries: DashMap<CacheKey, CacheEntry>,
    metrics: CacheMetrics,
}

impl TtlAnswerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// [`AnswerCachePort::get`] against an explicit clock reading.
    pub fn get_at(
        &self,
        domain: &str,
        record_type: RecordType,
        now: Instant,
    ) -> Option<Vec<Answer>> {
        let key = CacheKey::new(domain, record_type);

        // The read guard must be released before `remove_if` locks the shard.
        match self.entries.get(&key) {
            None => {
                self.metrics.record_miss();
                return None;
            }
            Some(entry) if !entry.is_expired(now) => {
                self.metrics.record_hit();
                return Some(entry.answers.clone());
            }
            Some(_) => {}
        }

        if self
            .entries
            .remove_if(&key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            self.metrics.expirations.fetch_add(1, Ordering::Relaxed);
            debug!(domain = %domain, record_type = %record_type, "Evicted expired cache entry");
        }
        self.metrics.record_miss();
        None
    }

    /// [`AnswerCachePort::put`] against an explicit clock reading.
    pub fn put_at(&self, domain: &str, record_type: RecordType, answers: &[Answer], now: Instant) {
        let Some(ttl) = answers.iter().map(Answer::ttl_or_default).min() else {
            return;
        };

        self.entries.insert(
            CacheKey::new(domain, record_type),
            CacheEntry {
                answers: answers.to_vec(),
                expires_at: now + Duration::from_secs(u64::from(ttl)),
            },
        );
        self.metrics.insertions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AnswerCachePort for TtlAnswerCache {
    fn get(&self, domain: &str, record_type: RecordType) -> Option<Vec<Answer>> {
        self.get_at(domain, record_type, Instant::now())
    }

    fn put(&self, domain: &str, record_type: RecordType, answers: &[Answer]) {
        self.put_at(domain, record_type, answers, Instant::now())
    }

    fn stats(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            entries: self.entries.len(),
            hits: self.metrics.hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
            insertions: self.metrics.insertions.load(Ordering::Relaxed),
            expirations: self.metrics.expirations.load(Ordering::Relaxed),
        }
    }
}
