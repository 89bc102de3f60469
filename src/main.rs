//! UniDesk server: university administration portal.
//!
//! Loads configuration, initializes logging, applies migrations and serves
//! the HTTP API until shutdown.

use tracing_subscriber::{EnvFilter, fmt};

use unidesk_core::config::AppConfig;
use unidesk_core::error::AppError;
use unidesk_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `UNIDESK_CONFIG` (or the default path) and the environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("UNIDESK_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    AppConfig::load(&config_path)
}

/// Initialize tracing. `RUST_LOG` takes precedence over `logging.level`.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting UniDesk v{}", env!("CARGO_PKG_VERSION"));

    let pool = DatabasePool::connect(&config.database).await?.into_pool();
    unidesk_database::migration::run_migrations(&pool).await?;

    unidesk_api::run_server(config, pool).await
}
