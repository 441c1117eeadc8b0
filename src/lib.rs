// Re-export core functionality for external use
pub use async_trait::async_trait;

// Core module definitions
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Unified error handling
pub use error::{AppError, Result};

// Essential re-exports for convenience
pub use server::{
    app_state::AppState,
    startup::{start_server, start_server_with_storage},
};

pub use config::{AuthConfig, CatalogConfig, Config, LoggingConfig, ServerConfig};

// Storage abstractions
pub use storage::{init_storage, memory::MemoryStorage, Storage, StorageError};

// Model exports
pub use models::{Account, Profile, WatchHistoryItem, WatchlistItem};

// Authentication building blocks
pub use auth::{token::TokenCodec, AuthError};

// Version and build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Account, AppError, AppState, AuthConfig, Config, Profile, Result, ServerConfig, Storage,
        TokenCodec, NAME, VERSION,
    };

    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use tokio;
    pub use tracing::{debug, error, info, instrument, warn};
}

// Constants
pub mod constants {
    /// Default bearer token time-to-live in days
    pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

    /// Default HTTP listen port
    pub const DEFAULT_PORT: u16 = 8001;

    /// Default page size when proxying catalog listings
    pub const DEFAULT_PAGE: u32 = 1;
}
