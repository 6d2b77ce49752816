//! Best-effort file removal.

use assethub_core::traits::storage::StorageProvider;
use tracing::warn;

/// Remove a stored file, logging instead of failing.
///
/// The file store is not transactional; a missing or undeletable file must
/// not abort the surrounding unit of work.
pub async fn remove_quietly(provider: &dyn StorageProvider, path: &str) {
    if let Err(e) = provider.delete(path).await {
        warn!(path, error = %e, "Failed to remove stored file");
    }
}
