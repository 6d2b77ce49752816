//! QR code generator for asset public pages.

use std::io::Cursor;
use std::sync::Arc;

use bytes::Bytes;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use assethub_core::config::QrConfig;
use assethub_core::error::{AppError, ErrorKind};
use assethub_core::result::AppResult;
use assethub_core::traits::storage::StorageProvider;
use assethub_core::types::AssetId;

use crate::layout::UploadLayout;

/// A QR image written to the file store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQrCode {
    /// Path of the PNG within the file store.
    pub file_path: String,
    /// The URL encoded in the image.
    pub qr_value: String,
}

/// Renders the public URL of an asset to a PNG and stores it.
#[derive(Debug, Clone)]
pub struct QrCodeGenerator {
    /// Storage provider receiving the PNG files.
    provider: Arc<dyn StorageProvider>,
    /// File naming scheme.
    layout: UploadLayout,
    /// Absolute base URL of the public asset page.
    public_base_url: String,
    /// Pixel size of one module.
    module_size: u32,
    /// Whether to draw the quiet zone.
    quiet_zone: bool,
}

impl QrCodeGenerator {
    /// Create a new QR code generator.
    pub fn new(
        provider: Arc<dyn StorageProvider>,
        layout: UploadLayout,
        public_base_url: &str,
        config: &QrConfig,
    ) -> Self {
        Self {
            provider,
            layout,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            module_size: config.module_size_px.max(1),
            quiet_zone: config.quiet_zone,
        }
    }

    /// The stable public URL of an asset.
    pub fn public_url(&self, asset_id: AssetId) -> String {
        format!("{}/public/aset/{asset_id}", self.public_base_url)
    }

    /// Render and store a QR image for an asset.
    pub async fn generate(&self, asset_id: AssetId, asset_code: &str) -> AppResult<GeneratedQrCode> {
        let qr_value = self.public_url(asset_id);
        let module_size = self.module_size;
        let quiet_zone = self.quiet_zone;

        let url = qr_value.clone();
        let png = tokio::task::spawn_blocking(move || render_png(&url, module_size, quiet_zone))
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "QR render task panicked", e))??;

        let file_path = self.layout.qr_path(asset_code);
        self.provider.write(&file_path, png).await?;

        tracing::debug!(
            asset_id = %asset_id,
            code = asset_code,
            output = %file_path,
            "Generated QR code"
        );

        Ok(GeneratedQrCode {
            file_path,
            qr_value,
        })
    }
}

/// Encode `data` at error correction level L and return PNG bytes.
pub fn render_png(data: &str, module_size: u32, quiet_zone: bool) -> AppResult<Bytes> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L)
        .map_err(|e| AppError::internal(format!("Failed to encode QR code: {e}")))?;

    let img = code
        .render::<Luma<u8>>()
        .quiet_zone(quiet_zone)
        .module_dimensions(module_size, module_size)
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .build();

    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| AppError::internal(format!("Failed to encode QR image: {e}")))?;

    Ok(Bytes::from(buf))
}

#[cfg(all(test, feature = "local"))]
mod tests {
    use super::*;
    use crate::providers::local::LocalStorageProvider;
    use assethub_core::config::StorageConfig;

    #[test]
    fn renders_a_square_png() {
        let png = render_png("http://localhost:8080/public/aset/1", 4, true).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), img.height());
        assert_eq!(img.width() % 4, 0);
    }

    #[tokio::test]
    async fn generate_writes_png_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(LocalStorageProvider::new(dir.path()).await.unwrap());
        let generator = QrCodeGenerator::new(
            provider.clone(),
            UploadLayout::from_config(&StorageConfig::default()),
            "https://aset.sekolah.id/",
            &QrConfig::default(),
        );

        let generated = generator
            .generate(AssetId(12), "AST-20250101-0001")
            .await
            .unwrap();

        assert_eq!(generated.qr_value, "https://aset.sekolah.id/public/aset/12");
        assert!(
            generated
                .file_path
                .starts_with("uploads/qrcodes/QR_AST-20250101-0001_")
        );
        assert!(provider.exists(&generated.file_path).await.unwrap());
    }
}
