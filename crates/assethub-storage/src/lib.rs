//! # assethub-storage
//!
//! File storage for AssetHub: the local filesystem provider, the naming
//! scheme for uploaded photos and generated QR images, and the QR code
//! generator that renders an asset's public URL to PNG.

pub mod layout;
pub mod providers;
pub mod qr;

pub use layout::UploadLayout;
#[cfg(feature = "local")]
pub use providers::local::LocalStorageProvider;
pub use qr::{GeneratedQrCode, QrCodeGenerator};
