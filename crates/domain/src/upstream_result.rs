use crate::Answer;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpstreamStatus {
    Success,
    ServerFailure,
    NameError,
}

impl UpstreamStatus {
    /// Numeric status used in DoH JSON bodies.
    pub fn doh_code(&self) -> u8 {
        match self {
            UpstreamStatus::Success => 0,
            UpstreamStatus::ServerFailure => 2,
            UpstreamStatus::NameError => 3,
        }
    }
}

/// Outcome of one upstream query. Failures are carried in `status`, never
/// raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResult {
    pub status: UpstreamStatus,
    pub answers: Vec<Answer>,
    pub comment: Option<String>,
}

impl UpstreamResult {
    pub fn success(answers: Vec<Answer>) -> Self {
        Self {
            status: UpstreamStatus::Success,
            answers,
            comment: None,
        }
    }

    pub fn name_error() -> Self {
        Self {
            status: UpstreamStatus::NameError,
            answers: Vec::new(),
            comment: None,
        }
    }

    pub fn server_failure(comment: impl Into<String>) -> Self {
        Self {
            status: UpstreamStatus::ServerFailure,
            answers: Vec::new(),
            comment: Some(comment.into()),
        }
    }
}
