//! Shared test helpers for service integration tests.

#![allow(dead_code)]

pub mod conflict;

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use tempfile::TempDir;

use assethub_core::config::AppConfig;
use assethub_core::traits::storage::StorageProvider;
use assethub_core::types::{AssetId, CategoryId, LocationId};
use assethub_database::AssetStore;
use assethub_database::memory::MemoryAssetStore;
use assethub_entity::asset::Asset;
use assethub_entity::audit::{AuditEntry, AuditFilter};
use assethub_entity::catalog::CatalogKind;
use assethub_entity::photo::AssetPhoto;
use assethub_entity::qr::QrCode;
use assethub_entity::user::User;
use assethub_service::{AssetForm, PhotoUpload, RequestContext, Services};
use assethub_storage::LocalStorageProvider;

/// Test application context
pub struct TestServices {
    /// Every service, over the in-memory store
    pub services: Services,
    /// The store, for direct inspection
    pub store: Arc<dyn AssetStore>,
    /// The file store
    pub provider: Arc<dyn StorageProvider>,
    /// The default administrator
    pub admin: User,
    /// A seeded category named "Elektronik"
    pub category_id: CategoryId,
    /// A seeded location named "Lab Komputer 1"
    pub location_id: LocationId,
    _files: TempDir,
}

/// 2024-05-17 09:30:00 UTC
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
}

impl TestServices {
    /// Create services over an empty store with one category and one location
    pub async fn new() -> Self {
        Self::with_store(Arc::new(MemoryAssetStore::new())).await
    }

    /// Create services over the given store, seeded the same way as [`new`](Self::new)
    pub async fn with_store(store: Arc<dyn AssetStore>) -> Self {
        let files = tempfile::tempdir().expect("Failed to create temp dir");
        let provider: Arc<dyn StorageProvider> = Arc::new(
            LocalStorageProvider::new(files.path())
                .await
                .expect("Failed to init storage"),
        );

        let mut config = AppConfig::default();
        config.server.public_base_url = "http://aset.sekolah.test".to_string();

        let services = Services::new(Arc::clone(&store), Arc::clone(&provider), &config);
        let admin = services
            .users
            .ensure_default_admin()
            .await
            .expect("Failed to create admin");

        let ctx = RequestContext::at(admin.id, fixed_time() - Duration::days(30));
        let category = services
            .catalog
            .add(&ctx, CatalogKind::Category, "Elektronik")
            .await
            .expect("Failed to seed category");
        let location = services
            .catalog
            .add(&ctx, CatalogKind::Location, "Lab Komputer 1")
            .await
            .expect("Failed to seed location");

        Self {
            services,
            store,
            provider,
            admin,
            category_id: CategoryId(category.id),
            location_id: LocationId(location.id),
            _files: files,
        }
    }

    /// Context for the admin at the fixed test time
    pub fn ctx(&self) -> RequestContext {
        RequestContext::at(self.admin.id, fixed_time())
    }

    /// Context for the admin at an explicit time
    pub fn ctx_at(&self, time: DateTime<Utc>) -> RequestContext {
        RequestContext::at(self.admin.id, time)
    }

    /// A valid form pointing at the seeded category and location
    pub fn form(&self, name: &str) -> AssetForm {
        AssetForm {
            name: name.to_string(),
            category_id: Some(self.category_id),
            location_id: Some(self.location_id),
            condition: "Baik".to_string(),
            description: "Inventaris lab".to_string(),
            photo: None,
        }
    }

    /// A form carrying a small PNG upload
    pub fn form_with_photo(&self, name: &str, file_name: &str) -> AssetForm {
        AssetForm {
            photo: Some(PhotoUpload::new(file_name, b"\x89PNG\r\n\x1a\nfake".to_vec())),
            ..self.form(name)
        }
    }

    /// Create an asset at the fixed test time
    pub async fn create_asset(&self, name: &str) -> Asset {
        self.services
            .assets
            .create(&self.ctx(), self.form(name))
            .await
            .expect("Failed to create asset")
    }

    /// Every audit entry, newest first
    pub async fn audit_entries(&self) -> Vec<AuditEntry> {
        self.services
            .audit
            .search(&AuditFilter::default())
            .await
            .expect("Failed to read audit log")
    }

    /// Photos of an asset
    pub async fn photos(&self, asset_id: AssetId) -> Vec<AssetPhoto> {
        let mut tx = self.store.begin().await.expect("Failed to begin");
        tx.list_photos(asset_id).await.expect("Failed to list photos")
    }

    /// QR codes of an asset, newest first
    pub async fn qr_codes(&self, asset_id: AssetId) -> Vec<QrCode> {
        let mut tx = self.store.begin().await.expect("Failed to begin");
        tx.list_qr_codes(asset_id).await.expect("Failed to list QR codes")
    }

    /// Root directory of the file store
    pub fn root(&self) -> &Path {
        self._files.path()
    }

    /// Whether a file exists in the file store
    pub async fn file_exists(&self, path: &str) -> bool {
        self.provider.exists(path).await.expect("Failed to stat file")
    }
}
