//! File store and QR rendering configuration.

use serde::{Deserialize, Serialize};

/// Local file store configuration for uploads and generated images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory served under `/static`.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// Directory for asset photos, relative to `root_path`.
    #[serde(default = "default_photo_dir")]
    pub photo_dir: String,
    /// Directory for QR code images, relative to `root_path`.
    #[serde(default = "default_qr_dir")]
    pub qr_dir: String,
    /// Accepted photo extensions, compared case-insensitively.
    #[serde(default = "default_allowed_photo_extensions")]
    pub allowed_photo_extensions: Vec<String>,
    /// Uploads larger than this are ignored (default 16 MB).
    #[serde(default = "default_max_photo_size")]
    pub max_photo_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            photo_dir: default_photo_dir(),
            qr_dir: default_qr_dir(),
            allowed_photo_extensions: default_allowed_photo_extensions(),
            max_photo_size_bytes: default_max_photo_size(),
        }
    }
}

/// QR code rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrConfig {
    /// Pixel size of a single QR module.
    #[serde(default = "default_module_size")]
    pub module_size_px: u32,
    /// Whether to draw the quiet zone around the symbol.
    #[serde(default = "default_quiet_zone")]
    pub quiet_zone: bool,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            module_size_px: default_module_size(),
            quiet_zone: default_quiet_zone(),
        }
    }
}

fn default_root_path() -> String {
    "./data/static".to_string()
}

fn default_photo_dir() -> String {
    "uploads/photos".to_string()
}

fn default_qr_dir() -> String {
    "uploads/qrcodes".to_string()
}

fn default_allowed_photo_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_max_photo_size() -> u64 {
    16 * 1024 * 1024
}

fn default_module_size() -> u32 {
    10
}

fn default_quiet_zone() -> bool {
    true
}
