pub mod cache;
pub mod doh;
pub mod record;

pub use cache::CacheStatsResponse;
pub use doh::{DohJsonResponse, DohQueryParams, DohQuestion};
pub use record::{CreateRecordRequest, RecordQuery, RecordResponse, StatusResponse};
