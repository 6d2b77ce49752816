//! Audit log CLI commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use assethub_core::result::AppResult;
use assethub_core::types::{AssetId, UserId};
use assethub_entity::audit::{AuditAction, AuditEntry, AuditFilter};

use super::Session;
use crate::output;

/// Arguments for audit commands
#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Audit subcommand
    #[command(subcommand)]
    pub command: AuditCommand,
}

/// Audit subcommands
#[derive(Debug, Subcommand)]
pub enum AuditCommand {
    /// Search the audit log
    Log {
        /// Filter by action tag (e.g. ADD, REGENERATE_QR)
        #[arg(short, long)]
        action: Option<AuditAction>,
        /// Filter by actor (user ID)
        #[arg(long = "by")]
        actor_id: Option<i64>,
        /// Filter by UTC day (YYYY-MM-DD)
        #[arg(short, long)]
        day: Option<NaiveDate>,
        /// Number of results
        #[arg(short, long, default_value = "50")]
        limit: i64,
    },
    /// History of one asset
    History {
        /// Asset ID
        asset_id: i64,
    },
    /// Action tags present in the log
    Actions,
}

/// Audit display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct AuditRow {
    time: String,
    actor: i64,
    action: String,
    asset: String,
    description: String,
}

impl From<&AuditEntry> for AuditRow {
    fn from(e: &AuditEntry) -> Self {
        Self {
            time: e.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            actor: e.actor_id.get(),
            action: e.action.to_string(),
            asset: e.asset_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            description: e.description.clone(),
        }
    }
}

/// Execute audit commands
pub async fn execute(args: &AuditArgs, session: &Session) -> AppResult<()> {
    let audit = &session.services.audit;

    match &args.command {
        AuditCommand::Log {
            action,
            actor_id,
            day,
            limit,
        } => {
            let filter = AuditFilter {
                asset_id: None,
                actor_id: actor_id.map(UserId),
                action: *action,
                day: *day,
                limit: Some(*limit),
            };
            let rows: Vec<AuditRow> = audit.search(&filter).await?.iter().map(AuditRow::from).collect();
            output::print_list(&rows, session.format);
        }
        AuditCommand::History { asset_id } => {
            let rows: Vec<AuditRow> = audit
                .history_for_asset(AssetId(*asset_id))
                .await?
                .iter()
                .map(AuditRow::from)
                .collect();
            output::print_list(&rows, session.format);
        }
        AuditCommand::Actions => {
            let actions: Vec<String> = audit
                .actions()
                .await?
                .iter()
                .map(|a| a.to_string())
                .collect();
            match session.format {
                output::OutputFormat::Json => output::print_json(&actions),
                output::OutputFormat::Table => actions.iter().for_each(|a| println!("{a}")),
            }
        }
    }

    Ok(())
}
