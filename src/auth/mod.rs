pub mod password;
pub mod token;

use thiserror::Error;

use crate::error::AppError;
use token::TokenError;

/// Authentication failure taxonomy.
///
/// Every variant is an expected, well-defined rejection of the current
/// request, never an infrastructure fault; conversion into [`AppError`]
/// maps them to conflict/unauthorized outcomes, not 500-class failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration attempted with an email that already has an account
    #[error("Email already registered")]
    EmailTaken,

    /// Login email/password mismatch. Unknown email and wrong password are
    /// intentionally indistinguishable to prevent account enumeration.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token rejected; the inner cause stays distinguishable for
    /// diagnostics while the client-facing outcome is a single 401.
    #[error(transparent)]
    InvalidToken(#[from] TokenError),

    /// Valid token whose subject no longer resolves to an account
    #[error("User not found")]
    AccountNotFound,

    /// Password hashing primitive failed; treated as fatal for the request
    #[error("Credential hashing failed")]
    Hash,

    /// Account store failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::EmailTaken => AppError::conflict(err.to_string()),
            // An issuance failure is an internal fault, not a rejection
            AuthError::InvalidToken(TokenError::Creation) => AppError::internal(err.to_string()),
            AuthError::InvalidCredentials
            | AuthError::InvalidToken(_)
            | AuthError::AccountNotFound => AppError::auth(err.to_string()),
            AuthError::Hash => AppError::internal(err.to_string()),
            AuthError::Storage(msg) => AppError::storage(msg),
        }
    }
}

/// Authentication result type
pub type Result<T> = std::result::Result<T, AuthError>;
