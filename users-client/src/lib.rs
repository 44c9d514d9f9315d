//! Users client - typed access to the users directory REST API
//!
//! This crate wraps every API call in an [`Outcome`], loads the users list
//! page by page and drives the sign-up flow (validation, token, multipart
//! registration).

// Core modules
pub mod config;
pub mod error;
pub mod models;
pub mod outcome;
pub mod traits;
pub mod types;

// Transport and classification
pub mod classifier;
pub mod client;
pub mod http;

// Screens
pub mod pagination;
pub mod phone;
pub mod signup;
pub mod validation;

pub mod testing;

// Re-export main types for convenience
pub use classifier::{abortable, call_api, classify_error, classify_response};
pub use client::{ApiClient, TOKEN_HEADER};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ClientError, Result, TransportError};
pub use http::ReqwestTransport;
pub use models::{
    Links, NewUser, PhotoUpload, Position, PositionsResponse, RegistrationResponse, TokenResponse,
    User, UsersPage,
};
pub use outcome::{ApiFailure, ErrorKind, HttpErrorClass, Outcome};
pub use pagination::{PageCursor, PageLoad, UserListLoader};
pub use phone::{format_phone, sanitize_phone_input};
pub use signup::{SignUpController, SignUpForm, SignUpResult};
pub use traits::{Transport, UsersApi};
pub use types::{ApiRequest, FormPart, HttpResponse, RequestBody};
pub use validation::{FieldErrors, PhoneRule};
pub use tokio_util::sync::CancellationToken;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let error = ClientError::invalid_config("test error");
        assert!(error.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_default_config_builds_client() {
        let config = ClientConfig::default();
        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(config.validation.phone_rule, PhoneRule::LeadingZero);
        assert!(ApiClient::new(&config).is_ok());
    }
}
