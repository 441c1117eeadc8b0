pub mod settings;

pub use settings::{AuthConfig, CatalogConfig, Config, LoggingConfig, ServerConfig};
