//! Photo uploads.

use bytes::Bytes;
use tracing::debug;

use assethub_core::result::AppResult;
use assethub_core::traits::storage::StorageProvider;
use assethub_database::StoreTransaction;
use assethub_entity::asset::Asset;
use assethub_entity::photo::{AssetPhoto, CreateAssetPhoto};
use assethub_storage::UploadLayout;

use crate::context::RequestContext;

/// An uploaded image: the client file name and its contents.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Original file name, used only for its extension.
    pub file_name: String,
    /// File contents.
    pub data: Bytes,
}

impl PhotoUpload {
    /// Creates a new upload.
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }
}

/// Store an upload for an asset and record it.
///
/// Returns `None` when the upload is ignored because of its extension or
/// size; nothing is written in that case.
pub(crate) async fn attach_photo(
    tx: &mut dyn StoreTransaction,
    provider: &dyn StorageProvider,
    layout: &UploadLayout,
    ctx: &RequestContext,
    asset: &Asset,
    upload: &PhotoUpload,
) -> AppResult<Option<AssetPhoto>> {
    let Some(extension) = layout.photo_extension(&upload.file_name) else {
        debug!(file_name = %upload.file_name, "Ignoring photo with unsupported extension");
        return Ok(None);
    };
    if !layout.accepts_photo_size(upload.data.len() as u64) {
        debug!(
            file_name = %upload.file_name,
            bytes = upload.data.len(),
            "Ignoring photo outside the size limit"
        );
        return Ok(None);
    }

    let file_path = layout.photo_path(&asset.asset_code, &extension);
    provider.write(&file_path, upload.data.clone()).await?;

    let photo = tx
        .insert_photo(&CreateAssetPhoto {
            asset_id: asset.id,
            file_path,
            uploaded_at: ctx.request_time,
        })
        .await?;
    Ok(Some(photo))
}
