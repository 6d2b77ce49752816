//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file overlaid with `ASSETHUB__*` environment variables.
//! Every field has a default, so an empty source yields a usable config.

pub mod app;
pub mod database;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::{QrConfig, StorageConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// File store settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// QR rendering settings.
    #[serde(default)]
    pub qr: QrConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `ASSETHUB__` override it, e.g. `ASSETHUB__DATABASE__URL`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("ASSETHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("storage.allowed_photo_extensions"),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load("config/does-not-exist").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.photo_dir, "uploads/photos");
        assert_eq!(config.storage.qr_dir, "uploads/qrcodes");
        assert_eq!(
            config.storage.allowed_photo_extensions,
            vec!["png", "jpg", "jpeg", "gif"]
        );
        assert_eq!(config.qr.module_size_px, 10);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let parsed: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\npublic_base_url = \"https://aset.sekolah.id\"\n[database]\nprovider = \"memory\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(parsed.server.public_base_url, "https://aset.sekolah.id");
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.database.provider, "memory");
        assert_eq!(parsed.logging.level, "info");
    }
}
