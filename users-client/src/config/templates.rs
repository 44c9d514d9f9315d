use crate::config::types::{ClientConfig, MAX_PAGE_SIZE};
use crate::error::{ClientError, Result};
use std::fs;
use std::path::Path;

/// Generate default users-client.toml template with comments.
///
/// Values come from [`ClientConfig::default`], so a freshly written file
/// behaves exactly like running without one.
pub fn generate_default_config_template() -> String {
    let defaults = ClientConfig::default();
    let user_agent = match &defaults.api.user_agent {
        Some(agent) => format!("user_agent = \"{agent}\""),
        None => "# user_agent = \"users-client\"".to_string(),
    };

    format!(
        r#"# Users directory client configuration

[api]
# Root URL every request path is resolved against (keep the trailing slash)
base_url = "{base_url}"
# Request timeout in seconds
timeout_seconds = {timeout}
{user_agent}

# Headers applied to all requests, e.g. "Accept" = "application/json"
[api.headers]

[pagination]
# Users requested per page (1-{max_page_size})
page_size = {page_size}

[validation]
# "leading-zero": exactly 10 digits starting with 0
# "ten-digits":   exactly 10 digits
phone_rule = "{phone_rule}"
"#,
        base_url = defaults.api.base_url,
        timeout = defaults.api.timeout_seconds,
        max_page_size = MAX_PAGE_SIZE,
        page_size = defaults.pagination.page_size,
        phone_rule = defaults.validation.phone_rule,
    )
}

/// Write the default configuration if it is missing (or always, with `force`).
///
/// Returns whether a file was written.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, force: bool) -> Result<bool> {
    let path = config_path.as_ref();
    if path.exists() && !force {
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(ClientError::Io)?;
    }
    fs::write(path, generate_default_config_template()).map_err(ClientError::Io)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::DEFAULT_BASE_URL;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_and_validates() {
        let config: ClientConfig = toml::from_str(&generate_default_config_template()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.pagination.page_size, 10);
    }

    #[test]
    fn test_template_matches_defaults() {
        let config: ClientConfig = toml::from_str(&generate_default_config_template()).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert!(config.api.headers.is_empty());
    }

    #[test]
    fn test_ensure_config_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("users-client.toml");

        assert!(ensure_config_file_exists(&path, false).unwrap());
        assert!(path.exists());
        assert!(ClientConfig::load_with_validation(&path).is_ok());

        fs::write(&path, "# edited").unwrap();
        assert!(!ensure_config_file_exists(&path, false).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# edited");

        assert!(ensure_config_file_exists(&path, true).unwrap());
        assert!(fs::read_to_string(&path).unwrap().contains("[pagination]"));
    }
}
