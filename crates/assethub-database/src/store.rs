//! Store traits implemented by every persistence backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use assethub_core::result::AppResult;
use assethub_core::types::{AssetId, PhotoId, QrCodeId, UserId};
use assethub_entity::asset::{Asset, AssetFilter, CreateAsset, UpdateAsset};
use assethub_entity::audit::{AuditAction, AuditEntry, AuditFilter, CreateAuditEntry};
use assethub_entity::catalog::{CatalogEntry, CatalogKind, CatalogRef};
use assethub_entity::photo::{AssetPhoto, CreateAssetPhoto};
use assethub_entity::qr::{CreateQrCode, QrCode};
use assethub_entity::user::{CreateUser, User};

/// A durable store that hands out units of work.
#[async_trait]
pub trait AssetStore: Send + Sync + std::fmt::Debug + 'static {
    /// Backend name (e.g. `"postgres"`, `"memory"`).
    fn backend(&self) -> &str;

    /// Open a new unit of work.
    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>>;

    /// Check whether the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// One unit of work against the store.
///
/// Writes become visible to other units only after [`commit`](Self::commit).
/// Dropping the transaction without committing discards every write.
/// Inserts that violate a uniqueness constraint fail with
/// `ErrorKind::StorageConflict`.
#[async_trait]
pub trait StoreTransaction: Send {
    /// Make every write of this unit durable.
    async fn commit(self: Box<Self>) -> AppResult<()>;

    // -- users --

    /// Insert a user. Usernames are unique.
    async fn insert_user(&mut self, data: &CreateUser) -> AppResult<User>;

    /// Find a user by id.
    async fn find_user(&mut self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by exact username.
    async fn find_user_by_username(&mut self, username: &str) -> AppResult<Option<User>>;

    /// List users ordered by username.
    async fn list_users(&mut self) -> AppResult<Vec<User>>;

    // -- assets --

    /// Insert an asset. Asset codes are unique.
    async fn insert_asset(&mut self, data: &CreateAsset) -> AppResult<Asset>;

    /// Find an asset by id.
    async fn find_asset(&mut self, id: AssetId) -> AppResult<Option<Asset>>;

    /// Whether any asset carries this code.
    async fn asset_code_exists(&mut self, code: &str) -> AppResult<bool>;

    /// Count assets with `start <= created_at < end`.
    async fn count_assets_created_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64>;

    /// Overwrite the mutable fields of an asset.
    async fn update_asset(&mut self, id: AssetId, data: &UpdateAsset) -> AppResult<Asset>;

    /// Delete an asset row. Dependent rows must be removed first.
    async fn delete_asset(&mut self, id: AssetId) -> AppResult<()>;

    /// List assets matching a filter, newest first.
    async fn list_assets(&mut self, filter: &AssetFilter) -> AppResult<Vec<Asset>>;

    /// Count all assets.
    async fn count_assets(&mut self) -> AppResult<i64>;

    // -- photos --

    /// Record a stored photo.
    async fn insert_photo(&mut self, data: &CreateAssetPhoto) -> AppResult<AssetPhoto>;

    /// Find a photo by id.
    async fn find_photo(&mut self, id: PhotoId) -> AppResult<Option<AssetPhoto>>;

    /// List the photos of an asset, oldest first.
    async fn list_photos(&mut self, asset_id: AssetId) -> AppResult<Vec<AssetPhoto>>;

    /// Delete a photo row.
    async fn delete_photo(&mut self, id: PhotoId) -> AppResult<()>;

    // -- QR codes --

    /// Record a generated QR image.
    async fn insert_qr_code(&mut self, data: &CreateQrCode) -> AppResult<QrCode>;

    /// List the QR codes of an asset, newest first.
    async fn list_qr_codes(&mut self, asset_id: AssetId) -> AppResult<Vec<QrCode>>;

    /// Delete a QR code row.
    async fn delete_qr_code(&mut self, id: QrCodeId) -> AppResult<()>;

    /// Count all QR codes.
    async fn count_qr_codes(&mut self) -> AppResult<i64>;

    // -- categories and locations --

    /// Insert a catalog entry. Names are unique per kind.
    async fn insert_catalog_entry(
        &mut self,
        kind: CatalogKind,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CatalogEntry>;

    /// Find a catalog entry.
    async fn find_catalog_entry(&mut self, entry: CatalogRef) -> AppResult<Option<CatalogEntry>>;

    /// Find a catalog entry by exact (case-sensitive) name.
    async fn find_catalog_entry_by_name(
        &mut self,
        kind: CatalogKind,
        name: &str,
    ) -> AppResult<Option<CatalogEntry>>;

    /// Rename a catalog entry and bump its modification timestamp.
    async fn rename_catalog_entry(
        &mut self,
        entry: CatalogRef,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<CatalogEntry>;

    /// Delete a catalog entry.
    async fn delete_catalog_entry(&mut self, entry: CatalogRef) -> AppResult<()>;

    /// List the entries of one vocabulary ordered by name.
    async fn list_catalog_entries(&mut self, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>>;

    /// Count assets pointing at a catalog entry.
    async fn count_assets_referencing(&mut self, entry: CatalogRef) -> AppResult<i64>;

    /// Count the entries of one vocabulary.
    async fn count_catalog_entries(&mut self, kind: CatalogKind) -> AppResult<i64>;

    // -- audit log --

    /// Append an audit entry.
    async fn insert_audit_entry(&mut self, data: &CreateAuditEntry) -> AppResult<AuditEntry>;

    /// Delete every audit entry referencing an asset. Returns the count removed.
    async fn delete_audit_entries_for_asset(&mut self, asset_id: AssetId) -> AppResult<u64>;

    /// Query the audit log, newest first.
    async fn search_audit_entries(&mut self, filter: &AuditFilter) -> AppResult<Vec<AuditEntry>>;

    /// Distinct action tags present in the log, sorted by tag.
    async fn distinct_audit_actions(&mut self) -> AppResult<Vec<AuditAction>>;

    /// Count audit entries with `start <= created_at < end`.
    async fn count_audit_entries_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<i64>;
}
