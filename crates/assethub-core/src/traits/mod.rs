//! Core traits defined in `assethub-core` and implemented by other crates.

pub mod storage;

pub use storage::StorageProvider;
