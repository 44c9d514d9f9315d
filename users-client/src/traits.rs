use crate::error::{Result, TransportError};
use crate::models::{NewUser, PositionsResponse, RegistrationResponse, TokenResponse, UsersPage};
use crate::outcome::Outcome;
use crate::types::{ApiRequest, HttpResponse};
use std::future::Future;

/// Trait for HTTP transport implementations
pub trait Transport: Send + Sync {
    /// Send one request and return the raw response
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = std::result::Result<HttpResponse, TransportError>> + Send;
}

/// Operations offered by the users directory API
pub trait UsersApi: Send + Sync {
    /// Fetch one page of users
    fn get_users(&self, page: u32, count: u32) -> impl Future<Output = Outcome<UsersPage>> + Send;

    /// Fetch the positions a new user can pick from
    fn get_positions(&self) -> impl Future<Output = Outcome<PositionsResponse>> + Send;

    /// Fetch a one-time registration token
    fn get_token(&self) -> impl Future<Output = Outcome<TokenResponse>> + Send;

    /// Register a new user with a token obtained from [`UsersApi::get_token`]
    fn register_user(
        &self,
        token: &str,
        user: &NewUser,
    ) -> impl Future<Output = Outcome<RegistrationResponse>> + Send;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
