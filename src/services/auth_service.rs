use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenCodec;
use crate::auth::{AuthError, Result};
use crate::models::Account;
use crate::storage::{Storage, StorageError};

/// Identity resolver: registration, login and request authorization.
///
/// Stateless per call; the only shared state is the token codec's signing
/// key (read-only after startup) and the external account store, so a single
/// instance is safe to share across concurrent requests without locking.
#[derive(Clone)]
pub struct AuthService {
    /// Account store backend
    storage: Arc<dyn Storage>,
    /// Bearer token codec
    tokens: Arc<TokenCodec>,
    /// Well-formed hash verified against when the email is unknown, so the
    /// unknown-email and wrong-password paths do comparable work
    fallback_hash: String,
}

impl AuthService {
    /// Create a new authentication service with the given storage backend
    /// and token codec
    pub fn new(storage: Arc<dyn Storage>, tokens: Arc<TokenCodec>) -> Result<Self> {
        let fallback_hash = hash_password("fallback-credential")?;
        Ok(Self {
            storage,
            tokens,
            fallback_hash,
        })
    }

    /// Register a new account and issue a bearer token for it.
    ///
    /// The duplicate-email pre-check mirrors the login lookup; the store's
    /// atomic uniqueness enforcement in `create_account` closes the window
    /// between check and insert.
    pub async fn register(&self, email: &str, password: &str) -> Result<String> {
        let existing = self
            .storage
            .get_account_by_email(email)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        if existing.is_some() {
            debug!("Registration rejected, email already registered");
            return Err(AuthError::EmailTaken);
        }

        let account = Account::new(email, hash_password(password)?);
        match self.storage.create_account(&account).await {
            Ok(()) => {}
            Err(StorageError::Conflict(_)) => {
                warn!("Concurrent registration lost the insert race");
                return Err(AuthError::EmailTaken);
            }
            Err(e) => return Err(AuthError::Storage(e.to_string())),
        }

        debug!("Registered account {}", account.id);
        Ok(self.tokens.issue(&account.id)?)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown email and wrong password produce the identical
    /// [`AuthError::InvalidCredentials`] outcome; callers must not add
    /// specificity.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let account = self
            .storage
            .get_account_by_email(email)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        let stored_hash = account
            .as_ref()
            .map(|a| a.password_hash.as_str())
            .unwrap_or(self.fallback_hash.as_str());
        let verified = verify_password(password, stored_hash);

        match account {
            Some(account) if verified => {
                debug!("Login succeeded for account {}", account.id);
                Ok(self.tokens.issue(&account.id)?)
            }
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    /// Authorize a request by bearer token and resolve its account.
    ///
    /// Parses and validates the token, then resolves the subject; a subject
    /// whose account has been deleted is rejected even though the token
    /// itself is still signature- and time-valid.
    pub async fn authorize(&self, token: &str) -> Result<Account> {
        let subject = self.tokens.parse(token)?;

        match self.storage.get_account_by_id(&subject).await {
            Ok(Some(account)) => Ok(account),
            Ok(None) => {
                warn!("Valid token for missing account {}", subject);
                Err(AuthError::AccountNotFound)
            }
            Err(e) => Err(AuthError::Storage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use crate::storage::memory::MemoryStorage;

    fn service() -> AuthService {
        let storage = Arc::new(MemoryStorage::new());
        let tokens = Arc::new(TokenCodec::new(&AuthConfig::with_secret("test-secret")));
        AuthService::new(storage, tokens).expect("service construction")
    }

    #[tokio::test]
    async fn unknown_email_and_wrong_password_are_indistinguishable() {
        let auth = service();
        auth.register("a@x.com", "Pw1!").await.unwrap();

        let wrong_password = auth.login("a@x.com", "nope").await.unwrap_err();
        let unknown_email = auth.login("b@x.com", "nope").await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn second_registration_conflicts_and_issues_no_token() {
        let auth = service();
        let token = auth.register("a@x.com", "Pw1!").await.unwrap();
        assert!(!token.is_empty());

        let err = auth.register("a@x.com", "Other1!").await.unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn authorize_rejects_garbage_tokens() {
        let auth = service();
        let err = auth.authorize("definitely-not-a-token").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }
}
