//! In-memory [`AssetStore`](crate::AssetStore) backend.
//!
//! Units of work are serialized: a transaction holds the store lock from
//! `begin` until it is committed or dropped, and works on a private copy
//! of the tables that replaces the shared copy on commit.

mod store;
mod tables;

pub use store::{MemoryAssetStore, MemoryTransaction};
