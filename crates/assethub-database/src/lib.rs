//! # assethub-database
//!
//! The transactional store behind AssetHub. [`AssetStore`] opens units of
//! work ([`StoreTransaction`]) that either commit every write or none.
//! Two backends implement it: PostgreSQL via sqlx, and an in-memory store
//! (feature `memory`) used by tests and throwaway deployments.

pub mod connection;
#[cfg(feature = "memory")]
pub mod memory;
pub mod postgres;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use provider::open_store;
pub use store::{AssetStore, StoreTransaction};
