use crate::ports::{AnswerCachePort, CacheStatsSnapshot};
use std::sync::Arc;

pub struct GetCacheStatsUseCase {
    cache: Arc<dyn AnswerCachePort>,
}

impl GetCacheStatsUseCase {
    pub fn new(cache: Arc<dyn AnswerCachePort>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> CacheStatsSnapshot {
        self.cache.stats()
    }
}
