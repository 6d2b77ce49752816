//! Database migration management commands.

use clap::{Args, Subcommand};

use assethub_core::config::AppConfig;
use assethub_core::result::AppResult;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> AppResult<()> {
    match &args.command {
        MigrateCommand::Run => {
            if config.database.provider != "postgres" {
                output::print_warning(&format!(
                    "Provider '{}' has no migrations to run.",
                    config.database.provider
                ));
                return Ok(());
            }

            println!("Running database migrations...");
            assethub_database::open_store(&config.database, true).await?;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
