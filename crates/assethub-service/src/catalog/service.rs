//! Catalog service: add, rename, and delete categories and locations.

use std::sync::Arc;

use tracing::info;

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_database::{AssetStore, StoreTransaction};
use assethub_entity::catalog::{CatalogEntry, CatalogKind, CatalogRef};

use crate::audit::{AuditLog, describe};
use crate::context::RequestContext;

/// Manages the category and location vocabularies.
///
/// Names are unique per vocabulary and compared exactly, so `Lab` and `lab`
/// are distinct entries.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<dyn AssetStore>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    /// Add an entry to a vocabulary.
    pub async fn add(
        &self,
        ctx: &RequestContext,
        kind: CatalogKind,
        name: &str,
    ) -> AppResult<CatalogEntry> {
        let name = require_name(kind, name)?;

        let mut tx = self.store.begin().await?;
        if tx.find_catalog_entry_by_name(kind, name).await?.is_some() {
            return Err(duplicate_name(kind));
        }

        let entry = tx
            .insert_catalog_entry(kind, name, ctx.request_time)
            .await
            .map_err(|e| {
                if e.is_storage_conflict() {
                    duplicate_name(kind)
                } else {
                    e
                }
            })?;

        AuditLog::append(
            tx.as_mut(),
            ctx,
            None,
            kind.add_action(),
            describe::catalog_added(kind, &entry.name),
        )
        .await?;
        tx.commit().await?;

        info!(kind = %kind, entry_id = entry.id, name = %entry.name, "Catalog entry added");
        Ok(entry)
    }

    /// Rename an entry. The duplicate check ignores the entry itself.
    pub async fn rename(
        &self,
        ctx: &RequestContext,
        entry: CatalogRef,
        new_name: &str,
    ) -> AppResult<CatalogEntry> {
        let kind = entry.kind();
        let new_name = require_name(kind, new_name)?;

        let mut tx = self.store.begin().await?;
        let current = find_entry(tx.as_mut(), entry).await?;

        if let Some(other) = tx.find_catalog_entry_by_name(kind, new_name).await?
            && other.id != current.id
        {
            return Err(duplicate_name(kind));
        }

        let renamed = tx
            .rename_catalog_entry(entry, new_name, ctx.request_time)
            .await
            .map_err(|e| {
                if e.is_storage_conflict() {
                    duplicate_name(kind)
                } else {
                    e
                }
            })?;

        AuditLog::append(
            tx.as_mut(),
            ctx,
            None,
            kind.edit_action(),
            describe::catalog_renamed(kind, &current.name, &renamed.name),
        )
        .await?;
        tx.commit().await?;

        info!(
            kind = %kind,
            entry_id = renamed.id,
            old_name = %current.name,
            new_name = %renamed.name,
            "Catalog entry renamed"
        );
        Ok(renamed)
    }

    /// Delete an entry no asset references.
    ///
    /// The reference count is read without locking the entry; an asset
    /// created concurrently may still point at it afterwards.
    pub async fn delete(&self, ctx: &RequestContext, entry: CatalogRef) -> AppResult<()> {
        let kind = entry.kind();

        let mut tx = self.store.begin().await?;
        let current = find_entry(tx.as_mut(), entry).await?;

        let in_use = tx.count_assets_referencing(entry).await?;
        if in_use > 0 {
            return Err(AppError::conflict(format!(
                "{} \"{}\" tidak dapat dihapus karena masih digunakan oleh {in_use} aset",
                kind.title(),
                current.name
            )));
        }

        tx.delete_catalog_entry(entry).await?;
        AuditLog::append(
            tx.as_mut(),
            ctx,
            None,
            kind.delete_action(),
            describe::catalog_deleted(kind, &current.name),
        )
        .await?;
        tx.commit().await?;

        info!(kind = %kind, entry_id = current.id, name = %current.name, "Catalog entry deleted");
        Ok(())
    }

    /// Get one entry.
    pub async fn get(&self, entry: CatalogRef) -> AppResult<CatalogEntry> {
        let mut tx = self.store.begin().await?;
        find_entry(tx.as_mut(), entry).await
    }

    /// List a vocabulary ordered by name.
    pub async fn list(&self, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
        let mut tx = self.store.begin().await?;
        tx.list_catalog_entries(kind).await
    }
}

fn require_name(kind: CatalogKind, name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation(format!(
            "Nama {} tidak boleh kosong",
            kind.noun()
        )));
    }
    Ok(name)
}

fn duplicate_name(kind: CatalogKind) -> AppError {
    AppError::conflict(format!("Nama {} sudah digunakan", kind.noun()))
}

async fn find_entry(tx: &mut dyn StoreTransaction, entry: CatalogRef) -> AppResult<CatalogEntry> {
    tx.find_catalog_entry(entry)
        .await?
        .ok_or_else(|| AppError::not_found(format!("{} tidak ditemukan", entry.kind().title())))
}
