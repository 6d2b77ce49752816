//! Shared test helpers for HTTP tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use assethub_api::{AppState, build_app};
use assethub_core::config::AppConfig;
use assethub_core::traits::storage::StorageProvider;
use assethub_database::AssetStore;
use assethub_database::memory::MemoryAssetStore;
use assethub_entity::asset::Asset;
use assethub_entity::catalog::CatalogKind;
use assethub_service::{AssetForm, RequestContext, Services};
use assethub_storage::LocalStorageProvider;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Wired services
    pub services: Services,
    _files: TempDir,
}

/// A response with its body decoded
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    /// The body as JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).expect("Response is not JSON")
    }
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub async fn new() -> Self {
        let files = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.storage.root_path = files.path().to_string_lossy().into_owned();

        let provider: Arc<dyn StorageProvider> = Arc::new(
            LocalStorageProvider::new(files.path())
                .await
                .expect("Failed to init storage"),
        );
        let store: Arc<dyn AssetStore> = Arc::new(MemoryAssetStore::new());
        let services = Services::new(store, provider, &config);

        let router = build_app(AppState::new(config, services.clone()));

        Self {
            router,
            services,
            _files: files,
        }
    }

    /// Create one asset with a fresh category and location
    pub async fn create_asset(&self, name: &str) -> Asset {
        let admin = self
            .services
            .users
            .ensure_default_admin()
            .await
            .expect("Failed to create admin");
        let ctx = RequestContext::at(admin.id, Utc.with_ymd_and_hms(2024, 5, 17, 8, 0, 0).unwrap());

        let category = self
            .services
            .catalog
            .add(&ctx, CatalogKind::Category, &format!("Kategori {name}"))
            .await
            .expect("Failed to add category");
        let location = self
            .services
            .catalog
            .add(&ctx, CatalogKind::Location, &format!("Lokasi {name}"))
            .await
            .expect("Failed to add location");

        self.services
            .assets
            .create(
                &ctx,
                AssetForm {
                    name: name.to_string(),
                    category_id: Some(category.id.into()),
                    location_id: Some(location.id.into()),
                    condition: "Baik".to_string(),
                    description: String::new(),
                    photo: None,
                },
            )
            .await
            .expect("Failed to create asset")
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body")
            .to_vec();

        TestResponse {
            status,
            headers,
            bytes,
        }
    }
}
