use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};

use crate::config::CatalogConfig;
use crate::error::{AppError, Result};

/// Proxy to the upstream TMDb-compatible catalog API.
///
/// Responses are passed through as JSON; the backend adds no schema of its
/// own. Upstream failures surface as `ExternalService` errors rather than
/// crashing the request path.
#[derive(Clone)]
pub struct CatalogService {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogService {
    /// Create a new catalog service from configuration
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    async fn request(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        debug!("Catalog request: {}", endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                error!("Catalog upstream error for {}: {}", endpoint, e);
                AppError::from(e)
            })?;

        Ok(response.json::<Value>().await?)
    }

    /// Popular titles for a media type, paginated
    pub async fn popular(&self, media_type: &str, page: u32) -> Result<Value> {
        let endpoint = match media_type {
            "movie" => "movie/popular",
            _ => "tv/popular",
        };
        self.request(endpoint, &[("page", page.to_string())]).await
    }

    /// Trending titles over the last week
    pub async fn trending(&self, media_type: &str) -> Result<Value> {
        self.request(&format!("trending/{}/week", media_type), &[])
            .await
    }

    /// Multi search across movies and tv
    pub async fn search(&self, query: &str, page: u32) -> Result<Value> {
        self.request(
            "search/multi",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    /// Title details with videos and credits appended
    pub async fn details(&self, media_type: &str, title_id: i64) -> Result<Value> {
        let endpoint = match media_type {
            "movie" => format!("movie/{}", title_id),
            _ => format!("tv/{}", title_id),
        };
        self.request(
            &endpoint,
            &[("append_to_response", "videos,credits".to_string())],
        )
        .await
    }

    /// Build a full image URL from an upstream image path
    pub fn image_url(&self, path: &str, size: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        format!("{}/{}{}", self.config.image_base_url, size, path)
    }
}
