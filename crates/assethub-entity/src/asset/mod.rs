//! Asset domain entities.

pub mod code;
pub mod model;

pub use code::AssetCode;
pub use model::{Asset, AssetFilter, CreateAsset, UpdateAsset};
