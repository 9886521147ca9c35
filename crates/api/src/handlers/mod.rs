pub mod cache;
pub mod doh;
pub mod health;
pub mod records;

pub use cache::get_cache_stats;
pub use health::health_check;
