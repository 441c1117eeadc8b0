use std::env;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PORT, DEFAULT_TOKEN_TTL_DAYS};
use crate::error::{AppError, Result};

/// Main configuration container for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration settings
    pub server: ServerConfig,
    /// Authentication configuration settings
    pub auth: AuthConfig,
    /// Upstream catalog configuration settings
    pub catalog: CatalogConfig,
    /// Logging configuration settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables or use defaults.
    ///
    /// Fails when a required secret is missing so the process aborts before
    /// serving any traffic.
    pub fn load() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::load(),
            auth: AuthConfig::load()?,
            catalog: CatalogConfig::load(),
            logging: LoggingConfig::load(),
        })
    }
}

/// Server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to listen on
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Number of worker threads
    pub worker_threads: usize,
    /// Comma-separated CORS origins, "*" for any
    pub cors_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            worker_threads: num_cpus::get(),
            cors_origins: "*".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables or use defaults
    pub fn load() -> Self {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let worker_threads = env::var("WORKER_THREADS")
            .ok()
            .and_then(|t| t.parse::<usize>().ok())
            .unwrap_or_else(num_cpus::get);
        let cors_origins = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

        Self {
            host,
            port,
            worker_threads,
            cors_origins,
        }
    }

    /// Get socket address from host and port
    pub fn address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| AppError::config(format!("Invalid listen address: {}", e)))
    }
}

/// Authentication configuration settings.
///
/// Holds the process-wide signing secret. Constructed once at startup and
/// passed by reference into the services that need it; there is no ambient
/// global secret state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC signing secret for bearer tokens
    pub jwt_secret: String,
    /// Token time-to-live in days
    pub token_ttl_days: i64,
}

impl AuthConfig {
    /// Load authentication configuration from environment variables.
    ///
    /// `JWT_SECRET` is required; a missing secret is a startup failure, not a
    /// runtime default.
    pub fn load() -> Result<Self> {
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| AppError::config("Required environment variable JWT_SECRET is not set"))?;
        let token_ttl_days = env::var("TOKEN_TTL_DAYS")
            .ok()
            .and_then(|d| d.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_DAYS);

        Ok(Self {
            jwt_secret,
            token_ttl_days,
        })
    }

    /// Build a config around a known secret (used by tests)
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
        }
    }
}

/// Upstream catalog (TMDb-compatible) configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// API key for the upstream catalog
    pub api_key: String,
    /// Base URL of the catalog API
    pub base_url: String,
    /// Base URL for poster/backdrop images
    pub image_base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.themoviedb.org/3".to_string(),
            image_base_url: "https://image.tmdb.org/t/p".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables or use defaults
    pub fn load() -> Self {
        Self {
            api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
            base_url: env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),
            image_base_url: env::var("TMDB_IMAGE_BASE_URL")
                .unwrap_or_else(|_| "https://image.tmdb.org/t/p".to_string()),
            timeout_seconds: env::var("TMDB_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse::<u64>().ok())
                .unwrap_or(10),
        }
    }
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON formatted logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Load logging configuration from environment variables or use defaults
    pub fn load() -> Self {
        let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let json_format = env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(false);

        Self { level, json_format }
    }
}
