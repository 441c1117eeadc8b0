use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::models::Profile;
use crate::storage::Storage;

/// Viewing profile management
#[derive(Clone)]
pub struct ProfileService {
    storage: Arc<dyn Storage>,
}

impl ProfileService {
    /// Create a new profile service with the given storage backend
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Create a profile under the given account
    pub async fn create_profile(
        &self,
        account_id: &str,
        name: &str,
        is_kids: bool,
    ) -> Result<Profile> {
        let profile = Profile::new(account_id, name, is_kids);
        self.storage.create_profile(&profile).await?;
        debug!("Created profile {} for account {}", profile.id, account_id);
        Ok(profile)
    }

    /// List all profiles belonging to an account
    pub async fn list_profiles(&self, account_id: &str) -> Result<Vec<Profile>> {
        Ok(self.storage.get_profiles_by_account(account_id).await?)
    }
}
