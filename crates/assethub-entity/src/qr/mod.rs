//! QR code (scan artifact) entities.

pub mod model;

pub use model::{CreateQrCode, QrCode};
