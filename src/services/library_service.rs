use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::models::{WatchHistoryItem, WatchlistItem};
use crate::storage::Storage;

/// Outcome of a watchlist add
#[derive(Debug, PartialEq, Eq)]
pub enum WatchlistAddOutcome {
    Added,
    AlreadyPresent,
}

/// Watchlist and watch-history management, keyed by profile
#[derive(Clone)]
pub struct LibraryService {
    storage: Arc<dyn Storage>,
}

impl LibraryService {
    /// Create a new library service with the given storage backend
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Add a title to a profile's watchlist; idempotent per (profile, title)
    pub async fn add_to_watchlist(
        &self,
        profile_id: &str,
        tmdb_id: i64,
        media_type: &str,
    ) -> Result<WatchlistAddOutcome> {
        if self
            .storage
            .get_watchlist_item(profile_id, tmdb_id)
            .await?
            .is_some()
        {
            return Ok(WatchlistAddOutcome::AlreadyPresent);
        }

        let item = WatchlistItem::new(profile_id, tmdb_id, media_type);
        self.storage.add_watchlist_item(&item).await?;
        debug!("Added title {} to watchlist of profile {}", tmdb_id, profile_id);
        Ok(WatchlistAddOutcome::Added)
    }

    /// List a profile's watchlist
    pub async fn get_watchlist(&self, profile_id: &str) -> Result<Vec<WatchlistItem>> {
        Ok(self.storage.get_watchlist(profile_id).await?)
    }

    /// Remove a title from a profile's watchlist
    pub async fn remove_from_watchlist(&self, profile_id: &str, tmdb_id: i64) -> Result<()> {
        self.storage.remove_watchlist_item(profile_id, tmdb_id).await?;
        Ok(())
    }

    /// Record playback progress for a title, inserting or updating
    pub async fn update_watch_history(
        &self,
        profile_id: &str,
        tmdb_id: i64,
        media_type: &str,
        position: i64,
        duration: i64,
    ) -> Result<()> {
        let mut item = WatchHistoryItem::new(profile_id, tmdb_id, media_type, position, duration);
        item.last_watched = Utc::now();
        self.storage.upsert_watch_history(&item).await?;
        Ok(())
    }

    /// List a profile's watch history, most recent first
    pub async fn get_watch_history(&self, profile_id: &str) -> Result<Vec<WatchHistoryItem>> {
        Ok(self.storage.get_watch_history(profile_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    #[tokio::test]
    async fn watchlist_add_is_idempotent() {
        let library = LibraryService::new(Arc::new(MemoryStorage::new()));

        let first = library.add_to_watchlist("p1", 42, "movie").await.unwrap();
        let second = library.add_to_watchlist("p1", 42, "movie").await.unwrap();

        assert_eq!(first, WatchlistAddOutcome::Added);
        assert_eq!(second, WatchlistAddOutcome::AlreadyPresent);
        assert_eq!(library.get_watchlist("p1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_clears_the_entry() {
        let library = LibraryService::new(Arc::new(MemoryStorage::new()));
        library.add_to_watchlist("p1", 42, "movie").await.unwrap();
        library.remove_from_watchlist("p1", 42).await.unwrap();
        assert!(library.get_watchlist("p1").await.unwrap().is_empty());
    }
}
