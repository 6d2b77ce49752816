//! Stateless PostgreSQL repositories.
//!
//! Every function takes the connection of the surrounding transaction so
//! that all writes of one operation commit together.

pub mod asset;
pub mod audit;
pub mod catalog;
pub mod photo;
pub mod qr_code;
pub mod user;

pub use asset::AssetRepository;
pub use audit::AuditRepository;
pub use catalog::CatalogRepository;
pub use photo::PhotoRepository;
pub use qr_code::QrCodeRepository;
pub use user::UserRepository;

use assethub_core::error::{AppError, ErrorKind};

/// Map a failed write, turning unique violations into `StorageConflict`.
pub(crate) fn map_write_error(err: sqlx::Error, context: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            let constraint = db_err.constraint().unwrap_or("unique").to_string();
            AppError::with_source(
                ErrorKind::StorageConflict,
                format!("{context}: duplicate value violates '{constraint}'"),
                err,
            )
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}
