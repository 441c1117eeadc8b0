pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::{
    error::AppError,
    models::{Account, Profile, WatchHistoryItem, WatchlistItem},
};

/// Storage Result type
pub type Result<T> = std::result::Result<T, StorageError>;

/// Error types for storage operations
#[derive(Debug, Error, Clone)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorageError::Connection(_))
    }

    /// Get error category for metrics
    pub fn category(&self) -> &'static str {
        match self {
            StorageError::Database(_) => "database",
            StorageError::Connection(_) => "connection",
            StorageError::NotFound(_) => "not_found",
            StorageError::Conflict(_) => "conflict",
            StorageError::InvalidData(_) => "validation",
            StorageError::Internal(_) => "internal",
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(msg) => AppError::not_found(msg),
            StorageError::Conflict(msg) => AppError::conflict(msg),
            StorageError::InvalidData(msg) => AppError::validation(msg),
            _ => AppError::storage(err.to_string()),
        }
    }
}

/// Account, profile and watch-state persistence.
///
/// Implementations must provide read-your-writes consistency: once
/// `create_account` returns, lookups by email and id observe the new record.
/// The identity resolver's register-before-login ordering depends on this
/// guarantee and does not re-check it.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Health check with connection validation
    async fn health_check(&self) -> Result<bool>;

    // Account related methods.
    // Email matching is case-insensitive; uniqueness is enforced atomically
    // inside `create_account`, which returns `Conflict` for a taken email.
    async fn create_account(&self, account: &Account) -> Result<()>;
    async fn get_account_by_id(&self, id: &str) -> Result<Option<Account>>;
    async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>>;
    async fn update_account(&self, account: &Account) -> Result<()>;
    async fn delete_account(&self, id: &str) -> Result<()>;

    // Profile related methods
    async fn create_profile(&self, profile: &Profile) -> Result<()>;
    async fn get_profiles_by_account(&self, account_id: &str) -> Result<Vec<Profile>>;

    // Watchlist related methods
    async fn get_watchlist_item(
        &self,
        profile_id: &str,
        tmdb_id: i64,
    ) -> Result<Option<WatchlistItem>>;
    async fn add_watchlist_item(&self, item: &WatchlistItem) -> Result<()>;
    async fn get_watchlist(&self, profile_id: &str) -> Result<Vec<WatchlistItem>>;
    async fn remove_watchlist_item(&self, profile_id: &str, tmdb_id: i64) -> Result<()>;

    // Watch history related methods
    async fn get_watch_history_item(
        &self,
        profile_id: &str,
        tmdb_id: i64,
    ) -> Result<Option<WatchHistoryItem>>;
    async fn upsert_watch_history(&self, item: &WatchHistoryItem) -> Result<()>;
    /// List history entries most recently watched first
    async fn get_watch_history(&self, profile_id: &str) -> Result<Vec<WatchHistoryItem>>;
}

/// Initialize the storage layer.
///
/// The in-memory backend is the in-tree implementation; durable backends
/// plug in behind the same trait.
pub async fn init_storage() -> crate::error::Result<Arc<dyn Storage>> {
    info!("Initializing in-memory storage layer");

    let storage = memory::MemoryStorage::new();
    storage
        .health_check()
        .await
        .map_err(|e| AppError::storage(format!("Storage health check failed: {}", e)))?;

    Ok(Arc::new(storage))
}
