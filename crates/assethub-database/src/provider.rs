//! Store selection from configuration.

use std::sync::Arc;

use tracing::info;

use assethub_core::config::DatabaseConfig;
use assethub_core::error::AppError;
use assethub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::postgres::PgAssetStore;
use crate::store::AssetStore;

/// Open the store named by `config.provider`.
///
/// For PostgreSQL, pending migrations are applied when `migrate` is set.
pub async fn open_store(config: &DatabaseConfig, migrate: bool) -> AppResult<Arc<dyn AssetStore>> {
    let store: Arc<dyn AssetStore> = match config.provider.as_str() {
        "postgres" => {
            info!("Initializing PostgreSQL asset store");
            let pool = DatabasePool::connect(config).await?;
            if migrate {
                pool.migrate().await?;
            }
            Arc::new(PgAssetStore::new(pool))
        }
        #[cfg(feature = "memory")]
        "memory" => {
            info!("Initializing in-memory asset store");
            Arc::new(crate::memory::MemoryAssetStore::new())
        }
        other => {
            return Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            )));
        }
    };

    Ok(store)
}
