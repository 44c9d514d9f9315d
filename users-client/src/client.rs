use crate::classifier::call_api;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::ReqwestTransport;
use crate::models::{NewUser, PositionsResponse, RegistrationResponse, TokenResponse, UsersPage};
use crate::outcome::Outcome;
use crate::traits::{Transport, UsersApi};
use crate::types::{ApiRequest, FormPart};

/// Header carrying the registration token
pub const TOKEN_HEADER: &str = "Token";

/// Users directory API client.
///
/// Every operation goes through [`call_api`], so callers only ever see an
/// [`Outcome`].
#[derive(Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Create a client talking HTTP with the given configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(ReqwestTransport::new(&config.api)?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Multipart fields of a registration
fn registration_form(user: &NewUser) -> Vec<FormPart> {
    vec![
        FormPart::text("name", user.name.clone()),
        FormPart::text("email", user.email.clone()),
        FormPart::text("phone", user.phone.clone()),
        FormPart::text("position_id", user.position_id.to_string()),
        FormPart::File {
            name: "photo".to_string(),
            file_name: user.photo.file_name.clone(),
            content_type: user.photo.content_type.clone(),
            bytes: user.photo.bytes.clone(),
        },
    ]
}

impl<T: Transport> UsersApi for ApiClient<T> {
    async fn get_users(&self, page: u32, count: u32) -> Outcome<UsersPage> {
        let request = ApiRequest::get("users")
            .query("page", page)
            .query("count", count);
        call_api("getUsers", self.transport.send(request)).await
    }

    async fn get_positions(&self) -> Outcome<PositionsResponse> {
        call_api("positions", self.transport.send(ApiRequest::get("positions"))).await
    }

    async fn get_token(&self) -> Outcome<TokenResponse> {
        call_api("token", self.transport.send(ApiRequest::get("token"))).await
    }

    async fn register_user(&self, token: &str, user: &NewUser) -> Outcome<RegistrationResponse> {
        let request = ApiRequest::post("users")
            .header(TOKEN_HEADER, token)
            .multipart(registration_form(user));
        call_api("setUser", self.transport.send(request)).await
    }
}
