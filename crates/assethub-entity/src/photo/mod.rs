//! Asset photo entities.

pub mod model;

pub use model::{AssetPhoto, CreateAssetPhoto};
