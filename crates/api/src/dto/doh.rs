use cascade_dns_domain::{Answer, Resolution};
use serde::{Deserialize, Serialize};

/// Question fields of a DoH request, from the query string or a JSON body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DohQueryParams {
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub record_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DohQuestion {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: u16,
}

/// JSON body in the `application/dns-json` shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DohJsonResponse {
    pub status: u8,
    pub question: Vec<DohQuestion>,
    pub answer: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl DohJsonResponse {
    pub fn from_resolution(name: &str, resolution: &Resolution) -> Self {
        Self {
            status: resolution.status.doh_code(),
            question: vec![DohQuestion {
                name: name.to_string(),
                record_type: resolution.query.record_type.to_u16(),
            }],
            answer: resolution.answers.clone(),
            comment: resolution.comment.clone(),
        }
    }
}
