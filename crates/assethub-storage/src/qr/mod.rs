//! QR code rendering.

pub mod generator;

pub use generator::{GeneratedQrCode, QrCodeGenerator};
