use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex as TokioMutex;
use tracing::debug;

use crate::models::{Account, Profile, WatchHistoryItem, WatchlistItem};
use crate::storage::{Result, Storage, StorageError};

// In-memory storage data structure (using Mutex for thread safety)
struct StorageData {
    accounts: HashMap<String, Account>,       // account_id -> account
    email_index: HashMap<String, String>,     // lowercase email -> account_id
    profiles: HashMap<String, Profile>,       // profile_id -> profile
    watchlist: Vec<WatchlistItem>,
    watch_history: Vec<WatchHistoryItem>,
}

impl StorageData {
    fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            email_index: HashMap::new(),
            profiles: HashMap::new(),
            watchlist: Vec::new(),
            watch_history: Vec::new(),
        }
    }
}

/// In-memory storage implementation (useful for testing and development).
///
/// All operations run under a single async mutex, which gives the
/// check-and-insert in `create_account` the atomicity the email uniqueness
/// invariant needs.
pub struct MemoryStorage {
    data: TokioMutex<StorageData>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            data: TokioMutex::new(StorageData::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    /// Create a new account, enforcing email uniqueness atomically
    async fn create_account(&self, account: &Account) -> Result<()> {
        let mut data = self.data.lock().await;

        let email_key = account.email.to_lowercase();
        if data.email_index.contains_key(&email_key) {
            return Err(StorageError::Conflict(format!(
                "Account already exists for email: {}",
                account.email
            )));
        }

        data.email_index.insert(email_key, account.id.clone());
        data.accounts.insert(account.id.clone(), account.clone());
        debug!("Created account {}", account.id);
        Ok(())
    }

    /// Get account by ID
    async fn get_account_by_id(&self, id: &str) -> Result<Option<Account>> {
        let data = self.data.lock().await;
        Ok(data.accounts.get(id).cloned())
    }

    /// Get account by email (case-insensitive)
    async fn get_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        let data = self.data.lock().await;

        let account = data
            .email_index
            .get(&email.to_lowercase())
            .and_then(|id| data.accounts.get(id))
            .cloned();
        Ok(account)
    }

    /// Update account
    async fn update_account(&self, account: &Account) -> Result<()> {
        let mut data = self.data.lock().await;

        if !data.accounts.contains_key(&account.id) {
            return Err(StorageError::NotFound(format!(
                "Account not found: {}",
                account.id
            )));
        }
        data.accounts.insert(account.id.clone(), account.clone());
        Ok(())
    }

    /// Delete account
    async fn delete_account(&self, id: &str) -> Result<()> {
        let mut data = self.data.lock().await;

        match data.accounts.remove(id) {
            Some(account) => {
                data.email_index.remove(&account.email.to_lowercase());
                Ok(())
            }
            None => Err(StorageError::NotFound(format!("Account not found: {}", id))),
        }
    }

    /// Create a new profile
    async fn create_profile(&self, profile: &Profile) -> Result<()> {
        let mut data = self.data.lock().await;
        data.profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    /// Get all profiles for an account
    async fn get_profiles_by_account(&self, account_id: &str) -> Result<Vec<Profile>> {
        let data = self.data.lock().await;

        let mut profiles: Vec<Profile> = data
            .profiles
            .values()
            .filter(|p| p.account_id == account_id)
            .cloned()
            .collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(profiles)
    }

    /// Get a watchlist entry by profile and title
    async fn get_watchlist_item(
        &self,
        profile_id: &str,
        tmdb_id: i64,
    ) -> Result<Option<WatchlistItem>> {
        let data = self.data.lock().await;

        Ok(data
            .watchlist
            .iter()
            .find(|i| i.profile_id == profile_id && i.tmdb_id == tmdb_id)
            .cloned())
    }

    /// Add a watchlist entry
    async fn add_watchlist_item(&self, item: &WatchlistItem) -> Result<()> {
        let mut data = self.data.lock().await;
        data.watchlist.push(item.clone());
        Ok(())
    }

    /// Get all watchlist entries for a profile
    async fn get_watchlist(&self, profile_id: &str) -> Result<Vec<WatchlistItem>> {
        let data = self.data.lock().await;

        Ok(data
            .watchlist
            .iter()
            .filter(|i| i.profile_id == profile_id)
            .cloned()
            .collect())
    }

    /// Remove a watchlist entry
    async fn remove_watchlist_item(&self, profile_id: &str, tmdb_id: i64) -> Result<()> {
        let mut data = self.data.lock().await;
        data.watchlist
            .retain(|i| !(i.profile_id == profile_id && i.tmdb_id == tmdb_id));
        Ok(())
    }

    /// Get a watch history entry by profile and title
    async fn get_watch_history_item(
        &self,
        profile_id: &str,
        tmdb_id: i64,
    ) -> Result<Option<WatchHistoryItem>> {
        let data = self.data.lock().await;

        Ok(data
            .watch_history
            .iter()
            .find(|i| i.profile_id == profile_id && i.tmdb_id == tmdb_id)
            .cloned())
    }

    /// Insert or update a watch history entry
    async fn upsert_watch_history(&self, item: &WatchHistoryItem) -> Result<()> {
        let mut data = self.data.lock().await;

        match data
            .watch_history
            .iter_mut()
            .find(|i| i.profile_id == item.profile_id && i.tmdb_id == item.tmdb_id)
        {
            Some(existing) => {
                existing.position = item.position;
                existing.duration = item.duration;
                existing.last_watched = item.last_watched;
            }
            None => data.watch_history.push(item.clone()),
        }
        Ok(())
    }

    /// Get watch history for a profile, most recent first
    async fn get_watch_history(&self, profile_id: &str) -> Result<Vec<WatchHistoryItem>> {
        let data = self.data.lock().await;

        let mut items: Vec<WatchHistoryItem> = data
            .watch_history
            .iter()
            .filter(|i| i.profile_id == profile_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.last_watched.cmp(&a.last_watched));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_account_is_read_your_writes() {
        let storage = MemoryStorage::new();
        let account = Account::new("a@x.com", "hash");
        storage.create_account(&account).await.unwrap();

        let by_email = storage.get_account_by_email("a@x.com").await.unwrap();
        assert_eq!(by_email.map(|a| a.id), Some(account.id.clone()));

        let by_id = storage.get_account_by_id(&account.id).await.unwrap();
        assert_eq!(by_id.map(|a| a.email), Some("a@x.com".to_string()));
    }

    #[tokio::test]
    async fn duplicate_email_insert_conflicts() {
        let storage = MemoryStorage::new();
        storage
            .create_account(&Account::new("a@x.com", "hash1"))
            .await
            .unwrap();

        // Case differs but the email key is the same
        let err = storage
            .create_account(&Account::new("A@X.COM", "hash2"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }

    #[tokio::test]
    async fn deleted_account_no_longer_resolves() {
        let storage = MemoryStorage::new();
        let account = Account::new("gone@x.com", "hash");
        storage.create_account(&account).await.unwrap();
        storage.delete_account(&account.id).await.unwrap();

        assert!(storage
            .get_account_by_id(&account.id)
            .await
            .unwrap()
            .is_none());
        assert!(storage
            .get_account_by_email("gone@x.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn watch_history_upsert_and_ordering() {
        let storage = MemoryStorage::new();

        let mut first = WatchHistoryItem::new("p1", 100, "movie", 10, 7200);
        storage.upsert_watch_history(&first).await.unwrap();

        let second = WatchHistoryItem::new("p1", 200, "tv", 5, 2400);
        storage.upsert_watch_history(&second).await.unwrap();

        // Updating the older entry moves it to the front
        first.position = 500;
        first.last_watched = second.last_watched + chrono::Duration::seconds(1);
        storage.upsert_watch_history(&first).await.unwrap();

        let history = storage.get_watch_history("p1").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].tmdb_id, 100);
        assert_eq!(history[0].position, 500);
    }
}
