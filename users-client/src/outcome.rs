//! Closed set of results an API call can end with.
//!
//! Callers branch on [`Outcome`] instead of handling errors: the classifier
//! folds every transport, decoding and server failure into the `Error`
//! variant, so a call site can match exhaustively on what happened.

use std::fmt;

/// Message shown to the user for connectivity failures
pub const MESSAGE_NO_CONNECTION: &str = "No internet connection";

/// Message shown to the user for every other failure
pub const MESSAGE_UNKNOWN_ERROR: &str = "Unknown error";

/// Completion state of one API call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 2xx response with a decoded body
    Success(T),
    /// 2xx response without a body (or 204)
    SuccessEmpty,
    /// Transport, decoding or server failure
    Error(ApiFailure),
    /// Call was cancelled by its owner; not an error
    Aborted,
    /// Call is in flight. Only ever set by state holders, never by the classifier.
    Loading,
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_) | Self::SuccessEmpty)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Payload of a `Success`, if any
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Error(failure) => Some(failure),
            _ => None,
        }
    }

    /// Transform the success payload, keeping every other variant as is
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Success(data) => Outcome::Success(f(data)),
            Self::SuccessEmpty => Outcome::SuccessEmpty,
            Self::Error(failure) => Outcome::Error(failure),
            Self::Aborted => Outcome::Aborted,
            Self::Loading => Outcome::Loading,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(data) => write!(f, "Success[data={data:?}]"),
            Self::SuccessEmpty => write!(f, "Success EmptyResponse"),
            Self::Error(failure) => write!(f, "Error[{failure}]"),
            Self::Aborted => write!(f, "Aborted"),
            Self::Loading => write!(f, "Loading"),
        }
    }
}

/// Sub-classification of non-2xx statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorClass {
    /// 400-499
    Client,
    /// 500-599
    Server,
    /// Any other non-2xx status (1xx, 3xx, 6xx+)
    Other,
}

impl HttpErrorClass {
    pub fn from_status(status: u16) -> Self {
        match status {
            400..=499 => Self::Client,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

/// Category of a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No connectivity, DNS failure, timeout
    Network,
    /// Response body malformed
    Parsing,
    /// Server answered with a non-2xx status
    Http(HttpErrorClass),
    Unknown,
}

impl ErrorKind {
    /// Short category used in log lines
    pub fn category(&self) -> &'static str {
        match self {
            Self::Network => "network error",
            Self::Parsing => "parsing error",
            Self::Http(_) => "http error",
            Self::Unknown => "unknown error",
        }
    }
}

/// Data carried by [`Outcome::Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub kind: ErrorKind,
    /// Human-readable message suitable for a transient notification
    pub message: String,
    /// HTTP status, present for `ErrorKind::Http`
    pub status: Option<u16>,
    /// Underlying error text, for diagnostics only
    pub detail: Option<String>,
}

impl ApiFailure {
    pub fn network<S: Into<String>>(detail: S) -> Self {
        Self {
            kind: ErrorKind::Network,
            message: MESSAGE_NO_CONNECTION.to_string(),
            status: None,
            detail: Some(detail.into()),
        }
    }

    pub fn parsing<S: Into<String>>(detail: S) -> Self {
        Self {
            kind: ErrorKind::Parsing,
            message: MESSAGE_UNKNOWN_ERROR.to_string(),
            status: None,
            detail: Some(detail.into()),
        }
    }

    pub fn http<S: Into<String>>(status: u16, detail: S) -> Self {
        Self {
            kind: ErrorKind::Http(HttpErrorClass::from_status(status)),
            message: MESSAGE_UNKNOWN_ERROR.to_string(),
            status: Some(status),
            detail: Some(detail.into()),
        }
    }

    pub fn unknown() -> Self {
        Self {
            kind: ErrorKind::Unknown,
            message: MESSAGE_UNKNOWN_ERROR.to_string(),
            status: None,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn is_network_error(&self) -> bool {
        self.kind == ErrorKind::Network
    }

    pub fn is_parsing_error(&self) -> bool {
        self.kind == ErrorKind::Parsing
    }

    pub fn is_http_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Http(_))
    }

    pub fn is_client_error(&self) -> bool {
        self.kind == ErrorKind::Http(HttpErrorClass::Client)
    }

    pub fn is_server_error(&self) -> bool {
        self.kind == ErrorKind::Http(HttpErrorClass::Server)
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind.category())?;
        if let Some(status) = self.status {
            write!(f, " status={status}")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}
