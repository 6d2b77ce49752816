//! File naming for uploaded photos and generated QR images.
//!
//! Photos: `{photo_dir}/{asset_code}_{random8hex}.{ext}`.
//! QR images: `{qr_dir}/QR_{asset_code}_{random8hex}.png`.

use assethub_core::config::StorageConfig;
use uuid::Uuid;

/// Where uploads and generated images live inside the file store.
#[derive(Debug, Clone)]
pub struct UploadLayout {
    photo_dir: String,
    qr_dir: String,
    allowed_photo_extensions: Vec<String>,
    max_photo_size_bytes: u64,
}

impl UploadLayout {
    /// Build the layout from storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            photo_dir: config.photo_dir.trim_matches('/').to_string(),
            qr_dir: config.qr_dir.trim_matches('/').to_string(),
            allowed_photo_extensions: config
                .allowed_photo_extensions
                .iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            max_photo_size_bytes: config.max_photo_size_bytes,
        }
    }

    /// Directory holding asset photos.
    pub fn photo_dir(&self) -> &str {
        &self.photo_dir
    }

    /// Directory holding QR images.
    pub fn qr_dir(&self) -> &str {
        &self.qr_dir
    }

    /// Return the lowercased extension of an uploaded file if it is allowed.
    ///
    /// The extension is whatever follows the final `.`; names without one
    /// are rejected.
    pub fn photo_extension(&self, file_name: &str) -> Option<String> {
        let (_, ext) = file_name.rsplit_once('.')?;
        let ext = ext.to_lowercase();
        self.allowed_photo_extensions
            .iter()
            .any(|allowed| *allowed == ext)
            .then_some(ext)
    }

    /// Whether an upload of this size may be stored.
    pub fn accepts_photo_size(&self, size_bytes: u64) -> bool {
        size_bytes > 0 && size_bytes <= self.max_photo_size_bytes
    }

    /// Storage path for a new photo of an asset.
    pub fn photo_path(&self, asset_code: &str, extension: &str) -> String {
        format!(
            "{}/{asset_code}_{}.{extension}",
            self.photo_dir,
            random_suffix()
        )
    }

    /// Storage path for a new QR image of an asset.
    pub fn qr_path(&self, asset_code: &str) -> String {
        format!("{}/QR_{asset_code}_{}.png", self.qr_dir, random_suffix())
    }
}

/// Eight random lowercase hex characters.
pub fn random_suffix() -> String {
    let mut hex = Uuid::new_v4().simple().to_string();
    hex.truncate(8);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> UploadLayout {
        UploadLayout::from_config(&StorageConfig::default())
    }

    #[test]
    fn extension_is_matched_case_insensitively() {
        let layout = layout();
        assert_eq!(layout.photo_extension("foto.JPG").as_deref(), Some("jpg"));
        assert_eq!(layout.photo_extension("scan.final.png").as_deref(), Some("png"));
        assert_eq!(layout.photo_extension("anim.Gif").as_deref(), Some("gif"));
    }

    #[test]
    fn disallowed_or_missing_extension_is_rejected() {
        let layout = layout();
        assert!(layout.photo_extension("manual.pdf").is_none());
        assert!(layout.photo_extension("README").is_none());
        assert!(layout.photo_extension("image.png.exe").is_none());
    }

    #[test]
    fn photo_path_combines_code_and_random_suffix() {
        let path = layout().photo_path("AST-20250101-0001", "jpg");
        let name = path.strip_prefix("uploads/photos/AST-20250101-0001_").unwrap();
        let (suffix, ext) = name.split_once('.').unwrap();
        assert_eq!(ext, "jpg");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn qr_paths_differ_between_generations() {
        let layout = layout();
        let first = layout.qr_path("AST-20250101-0001");
        let second = layout.qr_path("AST-20250101-0001");
        assert!(first.starts_with("uploads/qrcodes/QR_AST-20250101-0001_"));
        assert!(first.ends_with(".png"));
        assert_ne!(first, second);
    }

    #[test]
    fn size_limit_rejects_empty_and_oversized_uploads() {
        let layout = layout();
        assert!(!layout.accepts_photo_size(0));
        assert!(layout.accepts_photo_size(1024));
        assert!(!layout.accepts_photo_size(16 * 1024 * 1024 + 1));
    }
}
