// Common test helpers for integration tests

use std::sync::Arc;

use streamview_server::config::{AuthConfig, CatalogConfig, Config, LoggingConfig, ServerConfig};
use streamview_server::server::app_state::AppState;
use streamview_server::storage::memory::MemoryStorage;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig::default(),
        auth: AuthConfig::with_secret("integration-test-secret"),
        catalog: CatalogConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub fn app_state_with_memory() -> Arc<AppState> {
    let storage = Arc::new(MemoryStorage::new());
    AppState::new_with_storage(test_config(), storage)
        .expect("Failed to build AppState")
        .into()
}
