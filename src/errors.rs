use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AppError {
    /// Short stable code used in log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Csv(_) => "CSV_ERROR",
            AppError::Http(_) => "HTTP_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure while fetching or reading a dataset's web page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrichmentError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("could not read response body: {0}")]
    Body(String),
}

impl From<reqwest::Error> for EnrichmentError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => EnrichmentError::Status(status.as_u16()),
            None => EnrichmentError::Request(err.to_string()),
        }
    }
}

/// Failure of the remote chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("content policy violation: {0}")]
    ContentPolicy(String),

    #[error("completion returned no content")]
    EmptyResponse,
}
