use cascade_dns_application::ports::CacheStatsSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStatsResponse {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub expirations: u64,
    /// Percentage of lookups served from the cache.
    pub hit_rate: f64,
}

impl From<CacheStatsSnapshot> for CacheStatsResponse {
    fn from(stats: CacheStatsSnapshot) -> Self {
        let hit_rate = stats.hit_rate();

        Self {
            entries: stats.entries,
            hits: stats.hits,
            misses: stats.misses,
            insertions: stats.insertions,
            expirations: stats.expirations,
            hit_rate,
        }
    }
}
