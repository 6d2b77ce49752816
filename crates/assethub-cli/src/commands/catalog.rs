//! Category and location CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use assethub_core::result::AppResult;
use assethub_entity::catalog::{CatalogEntry, CatalogKind, CatalogRef};

use super::Session;
use crate::output;

/// Arguments for category and location commands
#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog subcommands
#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// Add an entry
    Add {
        /// Entry name
        name: String,
    },
    /// Rename an entry
    Rename {
        /// Entry ID
        id: i64,
        /// New name
        name: String,
    },
    /// Delete an entry no asset uses
    Delete {
        /// Entry ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List entries by name
    List,
}

#[derive(Debug, Serialize, Tabled)]
struct CatalogRow {
    id: i64,
    name: String,
    updated_at: String,
}

impl From<&CatalogEntry> for CatalogRow {
    fn from(e: &CatalogEntry) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            updated_at: e.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute catalog commands for one vocabulary
pub async fn execute(args: &CatalogArgs, kind: CatalogKind, session: &Session) -> AppResult<()> {
    let catalog = &session.services.catalog;

    match &args.command {
        CatalogCommand::Add { name } => {
            let ctx = session.context().await?;
            let entry = catalog.add(&ctx, kind, name).await?;
            output::print_success(&format!(
                "{} \"{}\" berhasil ditambahkan (id {})",
                kind.title(),
                entry.name,
                entry.id
            ));
        }
        CatalogCommand::Rename { id, name } => {
            let ctx = session.context().await?;
            let entry = catalog.rename(&ctx, CatalogRef::new(kind, *id), name).await?;
            output::print_success(&format!(
                "{} berhasil diubah menjadi \"{}\"",
                kind.title(),
                entry.name
            ));
        }
        CatalogCommand::Delete { id, yes } => {
            let entry_ref = CatalogRef::new(kind, *id);
            let entry = catalog.get(entry_ref).await?;
            if !super::confirm(&format!("Hapus {} \"{}\"?", kind.noun(), entry.name), *yes)? {
                println!("Dibatalkan.");
                return Ok(());
            }
            let ctx = session.context().await?;
            catalog.delete(&ctx, entry_ref).await?;
            output::print_success(&format!("{} \"{}\" berhasil dihapus", kind.title(), entry.name));
        }
        CatalogCommand::List => {
            let rows: Vec<CatalogRow> = catalog.list(kind).await?.iter().map(CatalogRow::from).collect();
            output::print_list(&rows, session.format);
        }
    }

    Ok(())
}
