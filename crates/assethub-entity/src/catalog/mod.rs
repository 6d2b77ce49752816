//! Category and location vocabularies.

pub mod kind;
pub mod model;

pub use kind::{CatalogKind, CatalogRef};
pub use model::CatalogEntry;
