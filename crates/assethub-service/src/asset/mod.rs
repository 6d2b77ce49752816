//! Asset lifecycle: registration, editing, deletion, photos, and QR codes.

pub mod changes;
pub mod code;
pub mod form;
pub mod photo;
pub mod qr;
pub mod service;

pub use code::CodeGenerator;
pub use form::AssetForm;
pub use photo::PhotoUpload;
pub use qr::QrCodeService;
pub use service::{AssetDetail, AssetService, MAX_CREATE_ATTEMPTS};
