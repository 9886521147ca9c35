mod create_record;
mod delete_records;
mod get_records;

pub use create_record::{CreateRecordUseCase, NewRecord};
pub use delete_records::DeleteRecordsUseCase;
pub use get_records::GetRecordsUseCase;
