pub mod builder;
pub mod loader;
pub mod templates;
pub mod types;
pub mod validator;

pub use builder::ClientConfigBuilder;
pub use loader::{ConfigLoader, DefaultConfigLoader};
pub use templates::{ensure_config_file_exists, generate_default_config_template};
pub use types::{
    ApiSettings, ClientConfig, PaginationSettings, ValidationSettings, DEFAULT_BASE_URL,
    DEFAULT_CONFIG_FILE, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECONDS, MAX_PAGE_SIZE,
};
pub use validator::ConfigValidatorImpl;
