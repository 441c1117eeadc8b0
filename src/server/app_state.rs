use std::sync::Arc;

use crate::auth::token::TokenCodec;
use crate::config::Config;
use crate::error::Result;
use crate::services::{AuthService, CatalogService, LibraryService, ProfileService};
use crate::storage::Storage;

/// Application state that is shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Storage backend for persisting data
    pub storage: Arc<dyn Storage>,
    /// Identity resolver for registration, login and authorization
    pub auth: AuthService,
    /// Upstream catalog proxy
    pub catalog: CatalogService,
    /// Viewing profile service
    pub profiles: ProfileService,
    /// Watchlist and watch history service
    pub library: LibraryService,
}

impl AppState {
    /// Create a new application state with the given storage backend.
    ///
    /// The token codec is built exactly once here from the auth
    /// configuration; services receive it by reference counting, so the
    /// signing key lives in one place for the process lifetime.
    pub fn new_with_storage(config: Config, storage: Arc<dyn Storage>) -> Result<Self> {
        let tokens = Arc::new(TokenCodec::new(&config.auth));
        let auth = AuthService::new(storage.clone(), tokens)?;
        let catalog = CatalogService::new(config.catalog.clone())?;
        let profiles = ProfileService::new(storage.clone());
        let library = LibraryService::new(storage.clone());

        Ok(Self {
            config,
            storage,
            auth,
            catalog,
            profiles,
            library,
        })
    }
}
