use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use streamview_server::{
    config::{Config, LoggingConfig},
    error::Result,
    server::startup::start_server,
};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize structured logging. The logging section is infallible, so
    // it is loaded ahead of the full configuration and the rest of startup
    // can log its failures.
    let logging = LoggingConfig::load();
    init_tracing(&logging);

    // Build configuration; a missing signing secret aborts startup here,
    // before any listener is bound
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuration error: {}", e);
            return Err(e);
        }
    };

    info!(
        "🚀 Starting StreamView Server v{}",
        env!("CARGO_PKG_VERSION")
    );
    print_startup_banner(&config);

    match start_server(config).await {
        Ok(_) => {
            info!("✅ Server shutdown completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("❌ Server failed: {}", e);
            Err(e)
        }
    }
}

/// Initialize structured logging from the logging configuration.
///
/// `RUST_LOG` still wins when set; otherwise the configured level drives
/// the filter for both the crate and its dependencies.
fn init_tracing(config: &LoggingConfig) {
    let subscriber = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(default_directives(&config.level))
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        );

    // JSON logging for production
    if config.json_format {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(false);

        subscriber.with(json_layer).init();
    } else {
        subscriber.init();
    }

    info!("✅ Structured logging initialized with level: {}", config.level);
}

/// Filter directives derived from a configured level
fn default_directives(level: &str) -> String {
    format!("streamview_server={},{}", level, level)
}

/// Print startup banner
fn print_startup_banner(config: &Config) {
    println!(
        "
╭─────────────────────────────────────────────╮
│              StreamView Server              │
│                  v{}                     │
├─────────────────────────────────────────────┤
│ 🌐 Address: {}:{}
│ 🧵 Workers: {} threads
│ 🎬 Catalog: {}
│ 🔑 Token TTL: {} days
╰─────────────────────────────────────────────╯
",
        env!("CARGO_PKG_VERSION"),
        config.server.host,
        config.server.port,
        config.server.worker_threads,
        config.catalog.base_url,
        config.auth.token_ttl_days,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_drives_the_filter_directives() {
        assert_eq!(default_directives("debug"), "streamview_server=debug,debug");
        assert_eq!(
            default_directives(&LoggingConfig::default().level),
            "streamview_server=info,info"
        );
    }
}
