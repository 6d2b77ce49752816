//! AssetHub Server: asset tracking for school labs.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use assethub_core::config::AppConfig;
use assethub_core::error::AppError;
use assethub_core::traits::storage::StorageProvider;
use assethub_service::Services;
use assethub_storage::{LocalStorageProvider, UploadLayout};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("ASSETHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
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
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting AssetHub");

    // ── Step 1: File store and upload directories ────────────────
    let provider = LocalStorageProvider::new(&config.storage.root_path).await?;
    let layout = UploadLayout::from_config(&config.storage);
    provider.create_dir(layout.photo_dir()).await?;
    provider.create_dir(layout.qr_dir()).await?;
    tracing::info!(root = %provider.root().display(), "File store ready");

    // ── Step 2: Store + migrations ───────────────────────────────
    tracing::info!(provider = %config.database.provider, "Opening asset store...");
    let store = assethub_database::open_store(&config.database, true).await?;

    // ── Step 3: Services ─────────────────────────────────────────
    let provider: Arc<dyn StorageProvider> = Arc::new(provider);
    let services = Services::new(store, provider, &config);
    let admin = services.users.ensure_default_admin().await?;
    tracing::info!(user_id = %admin.id, username = %admin.username, "Default administrator ready");

    // ── Step 4: HTTP server ──────────────────────────────────────
    assethub_api::run_server(config, services).await
}
