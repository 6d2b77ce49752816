//! # assethub-service
//!
//! Business logic service layer for AssetHub. Each service opens one unit
//! of work on the [`AssetStore`](assethub_database::AssetStore) per
//! operation, writes files through the storage provider, and appends the
//! audit entry describing the change before committing.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod asset;
pub mod audit;
pub mod catalog;
pub mod context;
pub mod files;
pub mod registry;
pub mod report;
pub mod user;

pub use asset::{AssetDetail, AssetForm, AssetService, CodeGenerator, PhotoUpload, QrCodeService};
pub use audit::{AuditLog, AuditService};
pub use catalog::CatalogService;
pub use context::RequestContext;
pub use registry::Services;
pub use report::{DashboardService, DashboardStats};
pub use user::UserService;
