pub mod cache;
pub mod dns;
pub mod records;

pub use cache::GetCacheStatsUseCase;
pub use dns::ResolveQueryUseCase;
pub use records::{CreateRecordUseCase, DeleteRecordsUseCase, GetRecordsUseCase, NewRecord};
