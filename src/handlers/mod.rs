pub mod auth_handler;
pub mod catalog_handler;
pub mod health;
pub mod library_handler;
pub mod profile_handler;

use actix_web::{http::header, HttpRequest};

use crate::error::AppError;
use crate::models::Account;
use crate::server::app_state::AppState;

/// Extract the opaque bearer credential from the Authorization header.
///
/// The transport encoding ends here; everything past this point treats the
/// token as an opaque string.
pub(crate) fn bearer_token(req: &HttpRequest) -> Result<&str, AppError> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::auth("Missing bearer token"))
}

/// Authorize the current request and resolve the authenticated account.
///
/// Every rejection here is terminal for the request and reaches the client
/// as 401 before any business logic runs.
pub(crate) async fn current_account(
    req: &HttpRequest,
    state: &AppState,
) -> Result<Account, AppError> {
    let token = bearer_token(req)?;
    Ok(state.auth.authorize(token).await?)
}
