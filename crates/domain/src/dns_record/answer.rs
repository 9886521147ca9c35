use super::RecordType;
use serde::{Deserialize, Serialize};

/// TTL assumed for an answer that carries none.
pub const DEFAULT_ANSWER_TTL: u32 = 60;

/// One answer record in the server's canonical text form.
///
/// `data` is type specific: an address literal for A/AAAA, a target name
/// without trailing dot for CNAME/PTR/NS, `"<preference> <exchange>"` for MX,
/// and the concatenated character strings for TXT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: u16,

    #[serde(rename = "TTL", default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,

    pub data: String,
}

impl Answer {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.to_u16(),
            ttl: Some(ttl),
            data: data.into(),
        }
    }

    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(DEFAULT_ANSWER_TTL)
    }

    pub fn kind(&self) -> Option<RecordType> {
        RecordType::from_u16(self.record_type)
    }
}
