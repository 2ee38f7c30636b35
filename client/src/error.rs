use pokedex_model::{MappingError, ParseError};
use thiserror::Error;

/// Failure of a single API round trip
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No connectivity, DNS failure, timeout or a dropped body
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    /// The body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Mapping(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        ApiError::Mapping(err.to_string())
    }
}

impl From<MappingError> for ApiError {
    fn from(err: MappingError) -> Self {
        ApiError::Mapping(err.to_string())
    }
}

/// Failure as seen by presentation code: a message, nothing else
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LoadFailure {
    message: String,
}

impl LoadFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApiError> for LoadFailure {
    fn from(err: ApiError) -> Self {
        Self::new(err.to_string())
    }
}

/// Result type returned across the repository boundary
pub type Outcome<T> = Result<T, LoadFailure>;
