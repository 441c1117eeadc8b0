use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Viewing profile belonging to an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier
    pub id: String,
    /// Owning account identifier
    pub account_id: String,
    /// Display name
    pub name: String,
    /// Avatar image URL, empty when unset
    pub avatar_url: String,
    /// Whether the profile is restricted to kids content
    pub is_kids: bool,
    /// Profile creation time
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(account_id: impl Into<String>, name: impl Into<String>, is_kids: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            account_id: account_id.into(),
            name: name.into(),
            avatar_url: String::new(),
            is_kids,
            created_at: Utc::now(),
        }
    }
}
