//! Application state shared across all handlers.

use std::sync::Arc;

use assethub_core::config::AppConfig;
use assethub_service::Services;

/// Application state passed to every handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Business services
    pub services: Services,
}

impl AppState {
    /// Creates the state from configuration and wired services.
    pub fn new(config: AppConfig, services: Services) -> Self {
        Self {
            config: Arc::new(config),
            services,
        }
    }
}
