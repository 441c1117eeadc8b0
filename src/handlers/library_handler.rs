use std::sync::Arc;

use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::handlers::current_account;
use crate::server::app_state::AppState;
use crate::services::library_service::WatchlistAddOutcome;

/// Profile selector carried as a query parameter
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub profile_id: String,
}

/// Watchlist add request body
#[derive(Debug, Deserialize)]
pub struct WatchlistAddRequest {
    pub tmdb_id: i64,
    pub media_type: String,
}

/// Watch history update request body
#[derive(Debug, Deserialize)]
pub struct WatchHistoryUpdateRequest {
    pub tmdb_id: i64,
    pub media_type: String,
    pub position: i64,
    pub duration: i64,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Add a title to a profile's watchlist
#[post("/api/watchlist")]
pub async fn add_to_watchlist(
    req: HttpRequest,
    body: web::Json<WatchlistAddRequest>,
    query: web::Query<ProfileQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    current_account(&req, &state).await?;

    let outcome = state
        .library
        .add_to_watchlist(&query.profile_id, body.tmdb_id, &body.media_type)
        .await?;

    let message = match outcome {
        WatchlistAddOutcome::Added => "Added to watchlist",
        WatchlistAddOutcome::AlreadyPresent => "Already in watchlist",
    };
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

/// List a profile's watchlist
#[get("/api/watchlist")]
pub async fn get_watchlist(
    req: HttpRequest,
    query: web::Query<ProfileQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    current_account(&req, &state).await?;
    let items = state.library.get_watchlist(&query.profile_id).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// Remove a title from a profile's watchlist
#[delete("/api/watchlist/{tmdb_id}")]
pub async fn remove_from_watchlist(
    req: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<ProfileQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    current_account(&req, &state).await?;
    state
        .library
        .remove_from_watchlist(&query.profile_id, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Removed from watchlist")))
}

/// Record playback progress for a title
#[post("/api/watch-history")]
pub async fn update_watch_history(
    req: HttpRequest,
    body: web::Json<WatchHistoryUpdateRequest>,
    query: web::Query<ProfileQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    current_account(&req, &state).await?;
    state
        .library
        .update_watch_history(
            &query.profile_id,
            body.tmdb_id,
            &body.media_type,
            body.position,
            body.duration,
        )
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Watch history updated")))
}

/// List a profile's watch history, most recent first
#[get("/api/watch-history")]
pub async fn get_watch_history(
    req: HttpRequest,
    query: web::Query<ProfileQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    current_account(&req, &state).await?;
    let items = state.library.get_watch_history(&query.profile_id).await?;
    Ok(HttpResponse::Ok().json(items))
}
