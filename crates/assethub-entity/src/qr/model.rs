//! QR code entity model.

use assethub_core::types::{AssetId, QrCodeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A generated QR image encoding the public URL of an asset.
///
/// At most one should be live per asset; the service layer enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct QrCode {
    /// Unique QR code identifier.
    pub id: QrCodeId,
    /// Owning asset.
    pub asset_id: AssetId,
    /// Path within the file store (e.g. `uploads/qrcodes/QR_AST-20250101-0001_1a2b3c4d.png`).
    pub file_path: String,
    /// The URL encoded in the image.
    pub qr_value: String,
    /// When the image was generated.
    pub generated_at: DateTime<Utc>,
}

/// Data required to record a generated QR image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQrCode {
    /// Owning asset.
    pub asset_id: AssetId,
    /// Path within the file store.
    pub file_path: String,
    /// The URL encoded in the image.
    pub qr_value: String,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
}
