//! Service wiring shared by the server and the CLI.

use std::sync::Arc;

use assethub_core::config::AppConfig;
use assethub_core::traits::storage::StorageProvider;
use assethub_database::AssetStore;
use assethub_storage::{QrCodeGenerator, UploadLayout};

use crate::asset::{AssetService, QrCodeService};
use crate::audit::AuditService;
use crate::catalog::CatalogService;
use crate::report::DashboardService;
use crate::user::UserService;

/// Every service, built over one store and one file store.
#[derive(Debug, Clone)]
pub struct Services {
    pub assets: Arc<AssetService>,
    pub qr_codes: Arc<QrCodeService>,
    pub catalog: Arc<CatalogService>,
    pub audit: Arc<AuditService>,
    pub dashboard: Arc<DashboardService>,
    pub users: Arc<UserService>,
    pub store: Arc<dyn AssetStore>,
    pub provider: Arc<dyn StorageProvider>,
}

impl Services {
    /// Build every service from configuration.
    pub fn new(
        store: Arc<dyn AssetStore>,
        provider: Arc<dyn StorageProvider>,
        config: &AppConfig,
    ) -> Self {
        let layout = UploadLayout::from_config(&config.storage);
        let qr_generator = Arc::new(QrCodeGenerator::new(
            Arc::clone(&provider),
            layout.clone(),
            &config.server.public_base_url,
            &config.qr,
        ));

        let assets = Arc::new(AssetService::new(
            Arc::clone(&store),
            Arc::clone(&provider),
            layout,
            Arc::clone(&qr_generator),
        ));
        let qr_codes = Arc::new(QrCodeService::new(
            Arc::clone(&store),
            Arc::clone(&provider),
            qr_generator,
        ));
        let catalog = Arc::new(CatalogService::new(Arc::clone(&store)));
        let audit = Arc::new(AuditService::new(Arc::clone(&store)));
        let dashboard = Arc::new(DashboardService::new(Arc::clone(&store)));
        let users = Arc::new(UserService::new(Arc::clone(&store)));

        Self {
            assets,
            qr_codes,
            catalog,
            audit,
            dashboard,
            users,
            store,
            provider,
        }
    }
}
