use crate::config::types::{ApiSettings, ClientConfig, PaginationSettings, ValidationSettings};
use crate::error::Result;
use crate::validation::PhoneRule;

/// Builder for ClientConfig to improve API ergonomics
pub struct ClientConfigBuilder {
    api: ApiSettings,
    pagination: PaginationSettings,
    validation: ValidationSettings,
}

impl ClientConfigBuilder {
    /// Create a new config builder starting from defaults
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            pagination: PaginationSettings::default(),
            validation: ValidationSettings::default(),
        }
    }

    /// Set the API root URL
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.api.timeout_seconds = seconds;
        self
    }

    /// Set the User-Agent header value
    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.api.user_agent = Some(user_agent.into());
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn header<S: Into<String>>(mut self, key: S, value: S) -> Self {
        self.api.headers.insert(key.into(), value.into());
        self
    }

    /// Set users per page
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = page_size;
        self
    }

    /// Set the phone validation rule
    #[must_use]
    pub fn phone_rule(mut self, rule: PhoneRule) -> Self {
        self.validation.phone_rule = rule;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid (e.g., malformed base URL or zero page size)
    pub fn build(self) -> Result<ClientConfig> {
        let config = ClientConfig {
            api: self.api,
            pagination: self.pagination,
            validation: self.validation,
        };

        use crate::config::validator::ConfigValidatorImpl;
        use crate::traits::ConfigValidator;
        let validator = ConfigValidatorImpl;
        validator.validate(&config)?;

        Ok(config)
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
