use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::server::app_state::AppState;

fn default_media_type() -> String {
    "movie".to_string()
}

fn default_trending_media_type() -> String {
    "all".to_string()
}

fn default_page() -> u32 {
    crate::constants::DEFAULT_PAGE
}

/// Query parameters for popular titles
#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    #[serde(default = "default_media_type")]
    pub media_type: String,
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Query parameters for trending titles
#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    #[serde(default = "default_trending_media_type")]
    pub media_type: String,
}

/// Query parameters for title search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Popular titles for a media type
#[get("/api/titles/popular")]
pub async fn popular(
    query: web::Query<PopularQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    let data = state.catalog.popular(&query.media_type, query.page).await?;
    Ok(HttpResponse::Ok().json(data))
}

/// Trending titles
#[get("/api/titles/trending")]
pub async fn trending(
    query: web::Query<TrendingQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    let data = state.catalog.trending(&query.media_type).await?;
    Ok(HttpResponse::Ok().json(data))
}

/// Search titles across movies and tv
#[get("/api/titles/search")]
pub async fn search(
    query: web::Query<SearchQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    let data = state.catalog.search(&query.query, query.page).await?;
    Ok(HttpResponse::Ok().json(data))
}

/// Title details with videos and credits
#[get("/api/titles/{media_type}/{title_id}")]
pub async fn details(
    path: web::Path<(String, i64)>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, AppError> {
    let (media_type, title_id) = path.into_inner();
    let data = state.catalog.details(&media_type, title_id).await?;
    Ok(HttpResponse::Ok().json(data))
}
