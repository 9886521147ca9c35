mod answer;
mod authoritative;
mod record_type;

pub use answer::{Answer, DEFAULT_ANSWER_TTL};
pub use authoritative::{AuthoritativeRecord, RecordFilter, DEFAULT_RECORD_TTL};
pub use record_type::RecordType;
