//! QR code CLI commands.

use clap::{Args, Subcommand};

use assethub_core::result::AppResult;
use assethub_core::types::AssetId;

use super::Session;
use crate::output;

/// Arguments for QR commands
#[derive(Debug, Args)]
pub struct QrArgs {
    #[command(subcommand)]
    pub command: QrCommand,
}

/// QR subcommands
#[derive(Debug, Subcommand)]
pub enum QrCommand {
    /// Generate a QR code for an asset that has none
    Generate {
        /// Asset ID
        asset_id: i64,
    },
    /// Replace the QR code of an asset
    Regenerate {
        /// Asset ID
        asset_id: i64,
    },
}

/// Execute QR commands
pub async fn execute(args: &QrArgs, session: &Session) -> AppResult<()> {
    let qr_codes = &session.services.qr_codes;
    let ctx = session.context().await?;

    let qr = match &args.command {
        QrCommand::Generate { asset_id } => qr_codes.generate(&ctx, AssetId(*asset_id)).await?,
        QrCommand::Regenerate { asset_id } => qr_codes.regenerate(&ctx, AssetId(*asset_id)).await?,
    };

    output::print_success("QR Code berhasil dibuat");
    output::print_kv("File", &qr.file_path);
    output::print_kv("URL", &qr.qr_value);
    Ok(())
}
