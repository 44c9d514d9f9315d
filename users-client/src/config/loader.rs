use crate::config::types::ClientConfig;
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{ClientError, Result};
use std::path::Path;
use tracing::debug;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ClientConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| ClientError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with enhanced error context, then validate it
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ClientError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(ClientError::Io)?;

        let config: ClientConfig = toml::from_str(&content).map_err(|e| {
            ClientError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;
        debug!(path = %path_ref.display(), base_url = %config.api.base_url, "Loaded configuration");
        Ok(config)
    }
}

// Convenience functions maintaining the API
impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::ClientConfigBuilder {
        crate::config::builder::ClientConfigBuilder::new()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration with enhanced error context
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Load and validate the file if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_with_validation(path)
        } else {
            debug!(path = %path.as_ref().display(), "Configuration file missing, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECONDS};
    use crate::validation::PhoneRule;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users-client.toml");
        fs::write(
            &path,
            r#"
[api]
base_url = "http://127.0.0.1:9000/api/v1/"
timeout_seconds = 5
user_agent = "tests/1.0"

[api.headers]
"X-Trace" = "on"

[pagination]
page_size = 6

[validation]
phone_rule = "ten-digits"
"#,
        )
        .unwrap();

        let config = ClientConfig::load_with_validation(&path).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api/v1/");
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.api.user_agent.as_deref(), Some("tests/1.0"));
        assert_eq!(config.api.headers.get("X-Trace").map(String::as_str), Some("on"));
        assert_eq!(config.pagination.page_size, 6);
        assert_eq!(config.validation.phone_rule, PhoneRule::TenDigits);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.toml");
        fs::write(&path, "[pagination]\npage_size = 20\n").unwrap();

        let config = ClientConfig::load_from_file(&path).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.pagination.page_size, 20);
        assert_eq!(config.validation.phone_rule, PhoneRule::LeadingZero);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");

        assert!(matches!(
            ClientConfig::load_with_validation(&path),
            Err(ClientError::ConfigNotFound { .. })
        ));

        let config = ClientConfig::load_or_default(&path).unwrap();
        assert_eq!(config.pagination.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[pagination]\npage_size = 0\n").unwrap();

        let err = ClientConfig::load_with_validation(&path).unwrap_err();
        assert!(err.to_string().contains("page_size"));

        fs::write(&path, "[api\nbase_url = 1").unwrap();
        let err = ClientConfig::load_with_validation(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
