use cascade_dns_domain::AuthoritativeRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub id: i64,
    pub domain: String,
    pub record_type: String,
    pub value: String,
    pub ttl: u32,
    pub priority: Option<u16>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl RecordResponse {
    pub fn from_domain(r: AuthoritativeRecord) -> Self {
        Self {
            id: r.id.unwrap_or(0),
            domain: r.domain,
            record_type: r.record_type.to_string(),
            value: r.value,
            ttl: r.ttl,
            priority: r.priority,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Body of `POST /admin/record`. The type may be sent as `record_type` or
/// `type`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordRequest {
    pub domain: Option<String>,
    #[serde(alias = "type")]
    pub record_type: Option<String>,
    pub value: Option<String>,
    pub ttl: Option<u32>,
    pub priority: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordQuery {
    pub domain: Option<String>,
    pub record_type: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RecordResponse>,
}

impl StatusResponse {
    pub fn success(message: &str, data: Option<RecordResponse>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            data,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: "error".to_string(),
            message: message.to_string(),
            data: None,
        }
    }
}
