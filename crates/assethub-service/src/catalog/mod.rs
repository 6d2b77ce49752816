//! Category and location management.

pub mod service;

pub use service::CatalogService;
