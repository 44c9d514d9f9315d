use crate::config::types::{ClientConfig, MAX_PAGE_SIZE};
use crate::error::{ClientError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;
use url::Url;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = ClientConfig;

    /// Validate configuration (uses enhanced validation with default context)
    fn validate(&self, config: &ClientConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation with enhanced error context
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &ClientConfig,
        config_path: P,
    ) -> Result<()> {
        let config_path_str = config_path.as_ref().to_string_lossy();

        let base_url = Url::parse(&config.api.base_url).map_err(|e| {
            ClientError::invalid_config(format!(
                "Invalid base_url '{}' in {}: {}",
                config.api.base_url, config_path_str, e
            ))
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::invalid_config(format!(
                "Unsupported scheme '{}' for base_url in {}. Use http or https.",
                base_url.scheme(),
                config_path_str
            )));
        }

        if base_url.host_str().is_none() {
            return Err(ClientError::invalid_config(format!(
                "base_url '{}' in {} has no host",
                config.api.base_url, config_path_str
            )));
        }

        if config.api.timeout_seconds == 0 {
            return Err(ClientError::invalid_config(format!(
                "timeout_seconds must be greater than zero in {}",
                config_path_str
            )));
        }

        let page_size = config.pagination.page_size;
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ClientError::invalid_config(format!(
                "page_size must be between 1 and {} in {}, got {}",
                MAX_PAGE_SIZE, config_path_str, page_size
            )));
        }

        for name in config.api.headers.keys() {
            if reqwest::header::HeaderName::from_bytes(name.as_bytes()).is_err() {
                return Err(ClientError::invalid_config(format!(
                    "Invalid header name '{}' in {}",
                    name, config_path_str
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}
