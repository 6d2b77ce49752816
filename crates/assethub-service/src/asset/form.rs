//! Asset form input and its validation.

use serde::{Deserialize, Serialize};

use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::types::{CategoryId, LocationId};

use super::photo::PhotoUpload;

/// Field values submitted to create or edit an asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetForm {
    /// Display name.
    pub name: String,
    /// Selected category, if any.
    pub category_id: Option<CategoryId>,
    /// Selected location, if any.
    pub location_id: Option<LocationId>,
    /// Condition label.
    pub condition: String,
    /// Description.
    pub description: String,
    /// Optional photo to attach.
    #[serde(skip)]
    pub photo: Option<PhotoUpload>,
}

/// A form that passed validation, with text fields trimmed.
#[derive(Debug, Clone)]
pub(crate) struct ValidAssetForm {
    pub name: String,
    pub category_id: CategoryId,
    pub location_id: LocationId,
    pub condition: String,
    pub description: String,
}

impl AssetForm {
    /// Check required fields in order, stopping at the first failure.
    pub(crate) fn validate(&self) -> AppResult<ValidAssetForm> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Nama aset tidak boleh kosong"));
        }
        let category_id = self
            .category_id
            .ok_or_else(|| AppError::validation("Kategori harus dipilih"))?;
        let location_id = self
            .location_id
            .ok_or_else(|| AppError::validation("Lokasi harus dipilih"))?;

        Ok(ValidAssetForm {
            name: name.to_string(),
            category_id,
            location_id,
            condition: self.condition.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}
