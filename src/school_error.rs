use thiserror::Error;

/// Problems with the school identity itself.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("unknown school type: {0:?}")]
    UnknownSchoolType(String),
    #[error("unknown region: {0:?}")]
    UnknownRegion(String),
    #[error("school already initialized with code {school_code}")]
    AlreadyInitialized { school_code: String },
}

#[derive(Debug, Error)]
pub enum SchoolError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("school has not been initialized")]
    NotInitialized,
    #[error("unknown page kind: {0:?}")]
    UnknownKind(String),
    #[error("year and month must be given together")]
    IncompleteDate,
    #[error("month must be between 1 and 12, got {0:?}")]
    MonthRange(String),
    #[error("invalid query options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    /// Whatever the fetcher returned, untouched.
    #[error(transparent)]
    Fetch(anyhow::Error),
}
