use crate::validation::PhoneRule;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://frontend-test-assignment-api.abz.agency/api/v1/";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Users fetched per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest `count` the API accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Configuration file looked up when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "users-client.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Connection settings
    pub api: ApiSettings,
    /// Page loading settings
    pub pagination: PaginationSettings,
    /// Sign-up form rules
    pub validation: ValidationSettings,
}

/// Connection settings for the REST API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Root URL every request path is joined onto
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Value of the User-Agent header
    pub user_agent: Option<String>,
    /// Headers applied to all requests
    pub headers: HashMap<String, String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: Some(concat!("users-client/", env!("CARGO_PKG_VERSION")).to_string()),
            headers: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationSettings {
    /// Users requested per page
    pub page_size: u32,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// Which phone number rule the sign-up form enforces
    pub phone_rule: PhoneRule,
}
