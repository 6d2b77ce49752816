//! Core type definitions used across the AssetHub workspace.

pub mod id;
pub mod time;

pub use id::*;
