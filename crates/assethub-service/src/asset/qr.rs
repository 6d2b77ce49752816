//! QR code generation and regeneration for assets.

use std::sync::Arc;

use tracing::info;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::storage::StorageProvider;
use assethub_core::types::AssetId;
use assethub_database::{AssetStore, StoreTransaction};
use assethub_entity::asset::Asset;
use assethub_entity::audit::AuditAction;
use assethub_entity::qr::{CreateQrCode, QrCode};
use assethub_storage::QrCodeGenerator;

use crate::audit::{AuditLog, describe};
use crate::context::RequestContext;
use crate::files::remove_quietly;

/// Render a QR image for an asset and record it.
pub(crate) async fn issue_qr_code(
    tx: &mut dyn StoreTransaction,
    generator: &QrCodeGenerator,
    ctx: &RequestContext,
    asset: &Asset,
) -> AppResult<QrCode> {
    let generated = generator.generate(asset.id, &asset.asset_code).await?;
    tx.insert_qr_code(&CreateQrCode {
        asset_id: asset.id,
        file_path: generated.file_path,
        qr_value: generated.qr_value,
        generated_at: ctx.request_time,
    })
    .await
}

/// Remove every QR code of an asset: file first, then the record.
pub(crate) async fn remove_qr_codes(
    tx: &mut dyn StoreTransaction,
    provider: &dyn StorageProvider,
    asset_id: AssetId,
) -> AppResult<usize> {
    let existing = tx.list_qr_codes(asset_id).await?;
    for qr in &existing {
        remove_quietly(provider, &qr.file_path).await;
        tx.delete_qr_code(qr.id).await?;
    }
    Ok(existing.len())
}

/// Manages the QR code of an asset.
#[derive(Debug, Clone)]
pub struct QrCodeService {
    store: Arc<dyn AssetStore>,
    provider: Arc<dyn StorageProvider>,
    generator: Arc<QrCodeGenerator>,
}

impl QrCodeService {
    /// Creates a new QR code service.
    pub fn new(
        store: Arc<dyn AssetStore>,
        provider: Arc<dyn StorageProvider>,
        generator: Arc<QrCodeGenerator>,
    ) -> Self {
        Self {
            store,
            provider,
            generator,
        }
    }

    /// Generate a QR code for an asset that has none.
    ///
    /// Fails with a conflict, and writes nothing, when one already exists.
    pub async fn generate(&self, ctx: &RequestContext, asset_id: AssetId) -> AppResult<QrCode> {
        let mut tx = self.store.begin().await?;
        let asset = find_asset(tx.as_mut(), asset_id).await?;

        if !tx.list_qr_codes(asset_id).await?.is_empty() {
            return Err(AppError::conflict(
                "QR Code sudah ada. Gunakan \"Regenerate\" untuk membuat ulang.",
            ));
        }

        let qr = issue_qr_code(tx.as_mut(), &self.generator, ctx, &asset).await?;
        AuditLog::append(
            tx.as_mut(),
            ctx,
            Some(asset.id),
            AuditAction::GenerateQr,
            describe::qr_generated(&asset.asset_code),
        )
        .await?;
        tx.commit().await?;

        info!(asset_id = %asset.id, code = %asset.asset_code, path = %qr.file_path, "QR code generated");
        Ok(qr)
    }

    /// Replace every QR code of an asset with a single fresh one.
    pub async fn regenerate(&self, ctx: &RequestContext, asset_id: AssetId) -> AppResult<QrCode> {
        let mut tx = self.store.begin().await?;
        let asset = find_asset(tx.as_mut(), asset_id).await?;

        let removed = remove_qr_codes(tx.as_mut(), self.provider.as_ref(), asset_id).await?;
        let qr = issue_qr_code(tx.as_mut(), &self.generator, ctx, &asset).await?;
        AuditLog::append(
            tx.as_mut(),
            ctx,
            Some(asset.id),
            AuditAction::RegenerateQr,
            describe::qr_regenerated(&asset.asset_code),
        )
        .await?;
        tx.commit().await?;

        info!(
            asset_id = %asset.id,
            code = %asset.asset_code,
            removed,
            path = %qr.file_path,
            "QR code regenerated"
        );
        Ok(qr)
    }

    /// The live QR code of an asset, if any.
    pub async fn current(&self, asset_id: AssetId) -> AppResult<Option<QrCode>> {
        let mut tx = self.store.begin().await?;
        Ok(tx.list_qr_codes(asset_id).await?.into_iter().next())
    }
}

pub(crate) async fn find_asset(tx: &mut dyn StoreTransaction, asset_id: AssetId) -> AppResult<Asset> {
    tx.find_asset(asset_id)
        .await?
        .ok_or_else(|| AppError::not_found("Aset tidak ditemukan"))
}
