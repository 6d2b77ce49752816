//! Asset lifecycle CLI commands.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::types::{AssetId, CategoryId, LocationId, PhotoId};
use assethub_entity::asset::{Asset, AssetFilter};
use assethub_service::{AssetDetail, AssetForm, PhotoUpload};

use super::Session;
use crate::output::{self, OutputFormat};

/// Arguments for asset commands
#[derive(Debug, Args)]
pub struct AssetArgs {
    /// Asset subcommand
    #[command(subcommand)]
    pub command: AssetCommand,
}

/// Asset subcommands
#[derive(Debug, Subcommand)]
pub enum AssetCommand {
    /// Register a new asset
    Create {
        /// Asset name
        name: String,
        /// Category ID
        #[arg(long)]
        category: Option<i64>,
        /// Location ID
        #[arg(long)]
        location: Option<i64>,
        /// Condition label
        #[arg(long, default_value = "")]
        condition: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
        /// Photo file to attach
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Edit an asset; omitted fields keep their current value
    Edit {
        /// Asset ID
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        location: Option<i64>,
        #[arg(long)]
        condition: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Photo file to attach
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Delete an asset with its photos, QR codes, and history
    Delete {
        /// Asset ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show one asset
    Show {
        /// Asset ID
        id: i64,
    },
    /// List assets, newest first
    List {
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        location: Option<i64>,
        #[arg(long)]
        condition: Option<String>,
        /// Case-insensitive match on name or code
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Delete one photo
    DeletePhoto {
        /// Photo ID
        id: i64,
    },
}

/// Asset display row
#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    id: i64,
    code: String,
    name: String,
    condition: String,
    updated_at: String,
}

impl From<&Asset> for AssetRow {
    fn from(a: &Asset) -> Self {
        Self {
            id: a.id.get(),
            code: a.asset_code.clone(),
            name: a.name.clone(),
            condition: a.condition.clone(),
            updated_at: a.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute asset commands
pub async fn execute(args: &AssetArgs, session: &Session) -> AppResult<()> {
    let assets = &session.services.assets;

    match &args.command {
        AssetCommand::Create {
            name,
            category,
            location,
            condition,
            description,
            photo,
        } => {
            let form = AssetForm {
                name: name.clone(),
                category_id: category.map(CategoryId),
                location_id: location.map(LocationId),
                condition: condition.clone(),
                description: description.clone(),
                photo: read_photo(photo.as_deref()).await?,
            };
            let ctx = session.context().await?;
            let asset = assets.create(&ctx, form).await?;
            output::print_success(&format!(
                "Aset {} berhasil ditambahkan dengan kode {}",
                asset.name, asset.asset_code
            ));
        }
        AssetCommand::Edit {
            id,
            name,
            category,
            location,
            condition,
            description,
            photo,
        } => {
            let current = assets.get(AssetId(*id)).await?;
            let form = AssetForm {
                name: name.clone().unwrap_or(current.name),
                category_id: category.map(CategoryId).or(current.category_id),
                location_id: location.map(LocationId).or(current.location_id),
                condition: condition.clone().unwrap_or(current.condition),
                description: description.clone().unwrap_or(current.description),
                photo: read_photo(photo.as_deref()).await?,
            };
            let ctx = session.context().await?;
            let asset = assets.edit(&ctx, current.id, form).await?;
            output::print_success(&format!("Aset {} berhasil diperbarui", asset.asset_code));
        }
        AssetCommand::Delete { id, yes } => {
            let asset = assets.get(AssetId(*id)).await?;
            let prompt = format!(
                "Hapus aset {} ({}) beserta foto, QR code, dan riwayatnya?",
                asset.name, asset.asset_code
            );
            if !super::confirm(&prompt, *yes)? {
                println!("Dibatalkan.");
                return Ok(());
            }
            let ctx = session.context().await?;
            assets.delete(&ctx, asset.id).await?;
            output::print_success(&format!("Aset {} berhasil dihapus", asset.asset_code));
        }
        AssetCommand::Show { id } => {
            let detail = assets.detail(AssetId(*id)).await?;
            print_detail(&detail, session.format);
        }
        AssetCommand::List {
            category,
            location,
            condition,
            search,
        } => {
            let filter = AssetFilter {
                category_id: category.map(CategoryId),
                location_id: location.map(LocationId),
                condition: condition.clone(),
                search: search.clone(),
            };
            let rows: Vec<AssetRow> = assets.list(&filter).await?.iter().map(AssetRow::from).collect();
            output::print_list(&rows, session.format);
        }
        AssetCommand::DeletePhoto { id } => {
            let ctx = session.context().await?;
            let asset_id = assets.delete_photo(&ctx, PhotoId(*id)).await?;
            output::print_success(&format!("Foto dihapus dari aset {asset_id}"));
        }
    }

    Ok(())
}

async fn read_photo(path: Option<&Path>) -> AppResult<Option<PhotoUpload>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::validation(format!("Not a file: {}", path.display())))?;
    let data = tokio::fs::read(path).await?;
    Ok(Some(PhotoUpload::new(file_name, data)))
}

fn print_detail(detail: &AssetDetail, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_json(detail);
        return;
    }

    let asset = &detail.asset;
    let name_of = |entry: &Option<assethub_entity::catalog::CatalogEntry>| {
        entry.as_ref().map_or_else(|| "-".to_string(), |e| e.name.clone())
    };

    println!("{} ({})", asset.name, asset.asset_code);
    output::print_kv("ID", &asset.id.to_string());
    output::print_kv("Kategori", &name_of(&detail.category));
    output::print_kv("Lokasi", &name_of(&detail.location));
    output::print_kv("Kondisi", &asset.condition);
    output::print_kv("Deskripsi", &asset.description);
    output::print_kv("Dibuat", &asset.created_at.to_rfc3339());
    output::print_kv("Diperbarui", &asset.updated_at.to_rfc3339());
    output::print_kv(
        "QR Code",
        detail
            .qr_code
            .as_ref()
            .map_or("-", |qr| qr.qr_value.as_str()),
    );
    for photo in &detail.photos {
        output::print_kv(&format!("Foto #{}", photo.id), &photo.file_path);
    }
}
