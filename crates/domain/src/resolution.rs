use crate::{Answer, DnsQuery, UpstreamStatus};
use serde::Serialize;

/// Where a resolution's answers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    Cache,
    Local,
    Upstream,
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub query: DnsQuery,
    pub answers: Vec<Answer>,
    pub source: AnswerSource,
    pub status: UpstreamStatus,
    pub comment: Option<String>,
}

impl Resolution {
    pub fn answered(query: DnsQuery, answers: Vec<Answer>, source: AnswerSource) -> Self {
        Self {
            query,
            answers,
            source,
            status: UpstreamStatus::Success,
            comment: None,
        }
    }
}
