mod get_cache_stats;

pub use get_cache_stats::GetCacheStatsUseCase;
