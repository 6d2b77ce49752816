//! Asset lifecycle: create, edit, delete, and photo removal.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::storage::StorageProvider;
use assethub_core::types::{AssetId, CategoryId, LocationId, PhotoId};
use assethub_database::{AssetStore, StoreTransaction};
use assethub_entity::asset::{Asset, AssetFilter, CreateAsset, UpdateAsset};
use assethub_entity::audit::AuditAction;
use assethub_entity::catalog::{CatalogEntry, CatalogRef};
use assethub_entity::photo::AssetPhoto;
use assethub_entity::qr::QrCode;
use assethub_storage::{QrCodeGenerator, UploadLayout};

use super::changes::ChangeSet;
use super::code::CodeGenerator;
use super::form::{AssetForm, ValidAssetForm};
use super::photo::{PhotoUpload, attach_photo};
use super::qr::{find_asset, issue_qr_code, remove_qr_codes};
use crate::audit::{AuditLog, describe};
use crate::context::RequestContext;
use crate::files::remove_quietly;

/// Attempts at creating an asset when its code loses a uniqueness race.
pub const MAX_CREATE_ATTEMPTS: u32 = 5;

/// An asset with everything shown on its detail page.
#[derive(Debug, Clone, Serialize)]
pub struct AssetDetail {
    /// The asset.
    pub asset: Asset,
    /// Its category, if it still resolves.
    pub category: Option<CatalogEntry>,
    /// Its location, if it still resolves.
    pub location: Option<CatalogEntry>,
    /// Photos in upload order.
    pub photos: Vec<AssetPhoto>,
    /// The live QR code.
    pub qr_code: Option<QrCode>,
}

/// Orchestrates the lifecycle of assets and their dependent records.
#[derive(Debug, Clone)]
pub struct AssetService {
    store: Arc<dyn AssetStore>,
    provider: Arc<dyn StorageProvider>,
    layout: UploadLayout,
    qr_generator: Arc<QrCodeGenerator>,
}

impl AssetService {
    /// Creates a new asset service.
    pub fn new(
        store: Arc<dyn AssetStore>,
        provider: Arc<dyn StorageProvider>,
        layout: UploadLayout,
        qr_generator: Arc<QrCodeGenerator>,
    ) -> Self {
        Self {
            store,
            provider,
            layout,
            qr_generator,
        }
    }

    /// Register a new asset with a fresh code, optional photo, and QR code.
    pub async fn create(&self, ctx: &RequestContext, form: AssetForm) -> AppResult<Asset> {
        let valid = form.validate()?;

        let mut attempt = 1;
        loop {
            match self.try_create(ctx, &valid, form.photo.as_ref()).await {
                Err(e) if e.is_storage_conflict() && attempt < MAX_CREATE_ATTEMPTS => {
                    warn!(attempt, error = %e, "Asset code taken concurrently, retrying");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn try_create(
        &self,
        ctx: &RequestContext,
        valid: &ValidAssetForm,
        photo: Option<&PhotoUpload>,
    ) -> AppResult<Asset> {
        let mut tx = self.store.begin().await?;
        require_references(tx.as_mut(), valid.category_id, valid.location_id).await?;

        let asset_code = CodeGenerator::generate_unique_code(tx.as_mut(), ctx.request_time).await?;
        let asset = tx
            .insert_asset(&CreateAsset {
                asset_code,
                name: valid.name.clone(),
                category_id: valid.category_id,
                location_id: valid.location_id,
                condition: valid.condition.clone(),
                description: valid.description.clone(),
                created_at: ctx.request_time,
            })
            .await?;

        if let Some(upload) = photo {
            attach_photo(
                tx.as_mut(),
                self.provider.as_ref(),
                &self.layout,
                ctx,
                &asset,
                upload,
            )
            .await?;
        }

        issue_qr_code(tx.as_mut(), &self.qr_generator, ctx, &asset).await?;

        AuditLog::append(
            tx.as_mut(),
            ctx,
            Some(asset.id),
            AuditAction::Add,
            describe::asset_added(&asset.name, &asset.asset_code),
        )
        .await?;
        tx.commit().await?;

        info!(
            asset_id = %asset.id,
            code = %asset.asset_code,
            actor_id = %ctx.actor_id,
            "Asset created"
        );
        Ok(asset)
    }

    /// Update an asset's fields and optionally attach another photo.
    ///
    /// The modification timestamp is always bumped; an audit entry is only
    /// written when at least one field changed or a photo was stored.
    pub async fn edit(
        &self,
        ctx: &RequestContext,
        asset_id: AssetId,
        form: AssetForm,
    ) -> AppResult<Asset> {
        let valid = form.validate()?;

        let mut tx = self.store.begin().await?;
        let current = find_asset(tx.as_mut(), asset_id).await?;
        let (new_category, new_location) =
            require_references(tx.as_mut(), valid.category_id, valid.location_id).await?;

        let old_category = match current.category_id {
            Some(id) => tx.find_catalog_entry(CatalogRef::Category(id)).await?,
            None => None,
        };
        let old_location = match current.location_id {
            Some(id) => tx.find_catalog_entry(CatalogRef::Location(id)).await?,
            None => None,
        };

        let photo_added = match &form.photo {
            Some(upload) => attach_photo(
                tx.as_mut(),
                self.provider.as_ref(),
                &self.layout,
                ctx,
                &current,
                upload,
            )
            .await?
            .is_some(),
            None => false,
        };

        let mut changes = ChangeSet::new();
        changes
            .scalar("nama", &current.name, &valid.name)
            .reference(
                "kategori",
                (current.category_id, old_category.as_ref().map(|c| c.name.as_str())),
                (Some(valid.category_id), Some(new_category.name.as_str())),
            )
            .reference(
                "lokasi",
                (current.location_id, old_location.as_ref().map(|l| l.name.as_str())),
                (Some(valid.location_id), Some(new_location.name.as_str())),
            )
            .scalar("kondisi", &current.condition, &valid.condition)
            .flag(current.description != valid.description, "deskripsi diperbarui")
            .flag(photo_added, "foto baru ditambahkan");

        let updated = tx
            .update_asset(
                asset_id,
                &UpdateAsset {
                    name: valid.name,
                    category_id: valid.category_id,
                    location_id: valid.location_id,
                    condition: valid.condition,
                    description: valid.description,
                    updated_at: ctx.request_time,
                },
            )
            .await?;

        if !changes.is_empty() {
            AuditLog::append(
                tx.as_mut(),
                ctx,
                Some(updated.id),
                AuditAction::Edit,
                describe::asset_edited(&updated.asset_code, changes.entries()),
            )
            .await?;
        }
        tx.commit().await?;

        info!(
            asset_id = %updated.id,
            code = %updated.asset_code,
            changed = changes.entries().len(),
            "Asset updated"
        );
        Ok(updated)
    }

    /// Delete an asset with its photos, QR codes, and audit history.
    ///
    /// The deletion itself is logged without an asset reference so that the
    /// entry survives the asset.
    pub async fn delete(&self, ctx: &RequestContext, asset_id: AssetId) -> AppResult<()> {
        let mut tx = self.store.begin().await?;
        let asset = find_asset(tx.as_mut(), asset_id).await?;

        let photos = tx.list_photos(asset_id).await?;
        for photo in &photos {
            remove_quietly(self.provider.as_ref(), &photo.file_path).await;
            tx.delete_photo(photo.id).await?;
        }

        let qr_codes = remove_qr_codes(tx.as_mut(), self.provider.as_ref(), asset_id).await?;
        let history = tx.delete_audit_entries_for_asset(asset_id).await?;

        AuditLog::append(
            tx.as_mut(),
            ctx,
            None,
            AuditAction::Delete,
            describe::asset_deleted(&asset.name, &asset.asset_code),
        )
        .await?;
        tx.delete_asset(asset_id).await?;
        tx.commit().await?;

        info!(
            asset_id = %asset.id,
            code = %asset.asset_code,
            photos = photos.len(),
            qr_codes,
            history,
            "Asset deleted"
        );
        Ok(())
    }

    /// Remove one photo from its asset. Returns the owning asset's id.
    pub async fn delete_photo(&self, ctx: &RequestContext, photo_id: PhotoId) -> AppResult<AssetId> {
        let mut tx = self.store.begin().await?;
        let photo = tx
            .find_photo(photo_id)
            .await?
            .ok_or_else(|| AppError::not_found("Foto tidak ditemukan"))?;
        let asset = find_asset(tx.as_mut(), photo.asset_id).await?;

        remove_quietly(self.provider.as_ref(), &photo.file_path).await;
        tx.delete_photo(photo.id).await?;

        AuditLog::append(
            tx.as_mut(),
            ctx,
            Some(asset.id),
            AuditAction::DeletePhoto,
            describe::photo_deleted(&asset.asset_code),
        )
        .await?;
        tx.commit().await?;

        info!(asset_id = %asset.id, photo_id = %photo.id, "Asset photo deleted");
        Ok(asset.id)
    }

    /// Get an asset by id.
    pub async fn get(&self, asset_id: AssetId) -> AppResult<Asset> {
        let mut tx = self.store.begin().await?;
        find_asset(tx.as_mut(), asset_id).await
    }

    /// Get an asset with its references, photos, and QR code.
    pub async fn detail(&self, asset_id: AssetId) -> AppResult<AssetDetail> {
        let mut tx = self.store.begin().await?;
        let asset = find_asset(tx.as_mut(), asset_id).await?;

        let category = match asset.category_id {
            Some(id) => tx.find_catalog_entry(CatalogRef::Category(id)).await?,
            None => None,
        };
        let location = match asset.location_id {
            Some(id) => tx.find_catalog_entry(CatalogRef::Location(id)).await?,
            None => None,
        };
        let photos = tx.list_photos(asset_id).await?;
        let qr_code = tx.list_qr_codes(asset_id).await?.into_iter().next();

        Ok(AssetDetail {
            asset,
            category,
            location,
            photos,
            qr_code,
        })
    }

    /// List assets matching a filter, newest first.
    pub async fn list(&self, filter: &AssetFilter) -> AppResult<Vec<Asset>> {
        let mut tx = self.store.begin().await?;
        tx.list_assets(filter).await
    }
}

/// Resolve the category and location an asset form points at.
async fn require_references(
    tx: &mut dyn StoreTransaction,
    category_id: CategoryId,
    location_id: LocationId,
) -> AppResult<(CatalogEntry, CatalogEntry)> {
    let category = tx
        .find_catalog_entry(CatalogRef::Category(category_id))
        .await?
        .ok_or_else(|| AppError::not_found("Kategori tidak ditemukan"))?;
    let location = tx
        .find_catalog_entry(CatalogRef::Location(location_id))
        .await?
        .ok_or_else(|| AppError::not_found("Lokasi tidak ditemukan"))?;
    Ok((category, location))
}
