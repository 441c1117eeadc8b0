use std::sync::Arc;

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::handlers::current_account;
use crate::server::app_state::AppState;

/// Profile creation request body
#[derive(Debug, Deserialize)]
pub struct ProfileCreateRequest {
    pub name: String,
    #[serde(default)]
    pub is_kids: bool,
}

/// Create a viewing profile under the authenticated account
#[post("/api/profiles")]
pub async fn create_profile(
    req: HttpRequest,
    body: web::Json<ProfileCreateRequest>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    let account = current_account(&req, &state).await?;

    if body.name.trim().is_empty() {
        return Err(AppError::validation("Profile name cannot be empty"));
    }

    let profile = state
        .profiles
        .create_profile(&account.id, body.name.trim(), body.is_kids)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// List the authenticated account's viewing profiles
#[get("/api/profiles")]
pub async fn list_profiles(
    req: HttpRequest,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    let account = current_account(&req, &state).await?;
    let profiles = state.profiles.list_profiles(&account.id).await?;
    Ok(HttpResponse::Ok().json(profiles))
}
