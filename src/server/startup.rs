use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::{error, info};

use crate::{
    config::Config,
    error::{AppError, Result},
    server::{app_state::AppState, http::configure_routes},
    storage::{init_storage, Storage},
};

/// Initialize storage and start the HTTP server
pub async fn start_server(config: Config) -> Result<()> {
    let storage = init_storage().await?;
    start_server_with_storage(config, storage).await
}

/// Start the HTTP server with an externally provided storage backend
pub async fn start_server_with_storage(config: Config, storage: Arc<dyn Storage>) -> Result<()> {
    let address = config.server.address()?;
    let workers = config.server.worker_threads;
    let cors_origins = config.server.cors_origins.clone();

    let app_state = Arc::new(AppState::new_with_storage(config, storage)?);

    info!("🚀 HTTP server listening on {}", address);

    HttpServer::new(move || {
        let cors = build_cors(&cors_origins);
        App::new()
            .wrap(cors)
            .app_data(web::Data::new(app_state.clone()))
            .configure(configure_routes)
    })
    .workers(workers)
    .bind(address)
    .map_err(|e| {
        error!("❌ Failed to bind {}: {}", address, e);
        AppError::ServiceUnavailable(format!("Failed to bind {}: {}", address, e))
    })?
    .run()
    .await
    .map_err(|e| AppError::internal(format!("HTTP server error: {}", e)))?;

    info!("✅ HTTP server shut down");
    Ok(())
}

fn build_cors(origins: &str) -> Cors {
    if origins.trim() == "*" {
        Cors::permissive()
    } else {
        let mut cors = Cors::default()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();
        for origin in origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            cors = cors.allowed_origin(origin);
        }
        cors
    }
}
