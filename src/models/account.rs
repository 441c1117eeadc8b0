use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default subscription plan assigned at registration
pub const DEFAULT_PLAN: &str = "free";

/// User account record.
///
/// `password_hash` is a self-describing PHC string (algorithm, parameters,
/// salt and digest); the plaintext is never stored. Emails are matched
/// case-insensitively by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique, immutable identifier
    pub id: String,
    /// Email address, used as the login key
    pub email: String,
    /// Derived credential hash, never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account creation time (UTC, immutable)
    pub created_at: DateTime<Utc>,
    /// Subscription plan, defaults to the baseline tier
    pub subscription_plan: String,
}

impl Account {
    /// Build a new account with a freshly generated identifier
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
            subscription_plan: DEFAULT_PLAN.to_string(),
        }
    }
}
