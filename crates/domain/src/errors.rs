use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Invalid record data: {0}")]
    InvalidRecordData(String),

    #[error("Upstream DNS timeout")]
    UpstreamTimeout,

    #[error("Upstream DNS error: {0}")]
    UpstreamFailure(String),

    #[error("Record already exists: {0}")]
    RecordConflict(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Errors caused by the caller's input rather than by the server.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDomainName(_)
                | DomainError::UnsupportedRecordType(_)
                | DomainError::Validation(_)
        )
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}
