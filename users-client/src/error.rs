use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for users-client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while setting up the client or preparing a request.
///
/// Failures of the API calls themselves never show up here; those are
/// reported as [`crate::Outcome::Error`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Cannot read photo {path}: {message}")]
    Photo { path: PathBuf, message: String },
}

impl ClientError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new photo error
    pub fn photo<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Photo {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Failure reported by a [`crate::traits::Transport`] before a complete
/// HTTP response was available.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connectivity problem on the local side (no route, DNS, socket reset)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by the reqwest stack
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request was dropped on purpose by the caller
    #[error("Request cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Create a new uncategorized transport error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other(message.into())
    }
}
