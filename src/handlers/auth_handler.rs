use std::sync::Arc;

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::handlers::current_account;
use crate::server::app_state::AppState;
use crate::utils::validator::validate_email;

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued token response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Authenticated account summary
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    pub subscription_plan: String,
}

/// Register a new account and return a bearer token
#[post("/api/auth/register")]
pub async fn register(
    body: web::Json<RegisterRequest>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    validate_email(&body.email)?;
    if body.password.is_empty() {
        return Err(AppError::validation("Password cannot be empty"));
    }

    let token = state.auth.register(&body.email, &body.password).await?;
    info!("New account registered");
    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
}

/// Verify credentials and return a bearer token
#[post("/api/auth/login")]
pub async fn login(
    body: web::Json<LoginRequest>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    let token = state.auth.login(&body.email, &body.password).await?;
    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
}

/// Return the authenticated account
#[get("/api/auth/me")]
pub async fn me(
    req: HttpRequest,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    let account = current_account(&req, &state).await?;
    Ok(HttpResponse::Ok().json(MeResponse {
        id: account.id,
        email: account.email,
        subscription_plan: account.subscription_plan,
    }))
}
