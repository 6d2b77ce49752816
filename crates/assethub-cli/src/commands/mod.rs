//! CLI command definitions and dispatch.

pub mod asset;
pub mod audit;
pub mod catalog;
pub mod dashboard;
pub mod migrate;
pub mod qr;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use assethub_core::config::AppConfig;
use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::storage::StorageProvider;
use assethub_entity::catalog::CatalogKind;
use assethub_service::{RequestContext, Services};
use assethub_service::user::service::DEFAULT_ADMIN_USERNAME;
use assethub_storage::LocalStorageProvider;

use crate::output::OutputFormat;

/// AssetHub: asset tracking for school labs
#[derive(Debug, Parser)]
#[command(name = "assethub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Username recorded as the actor of every change
    #[arg(long, global = true, default_value = DEFAULT_ADMIN_USERNAME)]
    pub actor: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User registry
    User(user::UserArgs),
    /// Asset categories
    Category(catalog::CatalogArgs),
    /// Asset locations
    Location(catalog::CatalogArgs),
    /// Asset lifecycle
    Asset(asset::AssetArgs),
    /// Asset QR codes
    Qr(qr::QrArgs),
    /// Audit log
    Audit(audit::AuditArgs),
    /// Summary statistics
    Dashboard,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> AppResult<()> {
        let config = load_config(&self.config)?;

        if let Commands::Migrate(args) = &self.command {
            return migrate::execute(args, &config).await;
        }

        let services = open_services(&config).await?;
        let session = Session {
            services,
            actor: self.actor.clone(),
            format: self.format,
        };

        match &self.command {
            Commands::Migrate(_) => Ok(()),
            Commands::User(args) => user::execute(args, &session).await,
            Commands::Category(args) => catalog::execute(args, CatalogKind::Category, &session).await,
            Commands::Location(args) => catalog::execute(args, CatalogKind::Location, &session).await,
            Commands::Asset(args) => asset::execute(args, &session).await,
            Commands::Qr(args) => qr::execute(args, &session).await,
            Commands::Audit(args) => audit::execute(args, &session).await,
            Commands::Dashboard => dashboard::execute(&session).await,
        }
    }
}

/// Everything a command needs: services, the acting user, and the output format.
pub struct Session {
    pub services: Services,
    pub actor: String,
    pub format: OutputFormat,
}

impl Session {
    /// Resolve the acting user into a request context stamped now.
    ///
    /// The default administrator is created on first use.
    pub async fn context(&self) -> AppResult<RequestContext> {
        let user = if self.actor == DEFAULT_ADMIN_USERNAME {
            self.services.users.ensure_default_admin().await?
        } else {
            self.services.users.resolve(&self.actor).await?
        };
        Ok(RequestContext::new(user.id))
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> AppResult<AppConfig> {
    AppConfig::load(config_path)
        .map_err(|e| AppError::configuration(format!("Failed to load config: {e}")))
}

/// Helper: open the store and file store and wire every service
pub async fn open_services(config: &AppConfig) -> AppResult<Services> {
    if config.database.provider == "memory" {
        crate::output::print_warning("In-memory store: changes are lost when the command exits.");
    }
    tracing::debug!(
        database = %config.database.provider,
        root = %config.storage.root_path,
        "Opening services"
    );
    let store = assethub_database::open_store(&config.database, false).await?;
    let provider: Arc<dyn StorageProvider> =
        Arc::new(LocalStorageProvider::new(&config.storage.root_path).await?);
    Ok(Services::new(store, provider, config))
}

/// Ask for confirmation unless `yes` is set.
pub fn confirm(prompt: &str, yes: bool) -> AppResult<bool> {
    if yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_defaults_to_admin() {
        let cli = Cli::try_parse_from(["assethub", "dashboard"]).unwrap();
        assert_eq!(cli.actor, "admin");
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn actor_can_follow_subcommand() {
        let cli =
            Cli::try_parse_from(["assethub", "category", "add", "Elektronik", "--actor", "budi"])
                .unwrap();
        assert_eq!(cli.actor, "budi");
    }

    #[test]
    fn asset_create_requires_name() {
        assert!(Cli::try_parse_from(["assethub", "asset", "create"]).is_err());
    }
}
