//! Asset entity model.

use assethub_core::types::{AssetId, CategoryId, LocationId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tracked physical item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Asset {
    /// Unique asset identifier.
    pub id: AssetId,
    /// Human-readable code (`AST-YYYYMMDD-NNNN`), immutable once assigned.
    pub asset_code: String,
    /// Display name.
    pub name: String,
    /// Classification reference.
    pub category_id: Option<CategoryId>,
    /// Placement reference.
    pub location_id: Option<LocationId>,
    /// Free-text condition label (e.g. "Baik", "Rusak Ringan").
    pub condition: String,
    /// Free-text description.
    pub description: String,
    /// When the asset was registered.
    pub created_at: DateTime<Utc>,
    /// When the asset was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a new asset row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsset {
    /// Pre-generated asset code.
    pub asset_code: String,
    /// Display name (already trimmed).
    pub name: String,
    /// Category reference.
    pub category_id: CategoryId,
    /// Location reference.
    pub location_id: LocationId,
    /// Condition label.
    pub condition: String,
    /// Description.
    pub description: String,
    /// Creation timestamp (also the initial modification timestamp).
    pub created_at: DateTime<Utc>,
}

/// Field values written back to an existing asset row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAsset {
    /// Display name (already trimmed).
    pub name: String,
    /// Category reference.
    pub category_id: CategoryId,
    /// Location reference.
    pub location_id: LocationId,
    /// Condition label.
    pub condition: String,
    /// Description.
    pub description: String,
    /// New modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Criteria for listing assets. All fields are optional and combined with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetFilter {
    /// Only assets in this category.
    pub category_id: Option<CategoryId>,
    /// Only assets at this location.
    pub location_id: Option<LocationId>,
    /// Only assets with exactly this condition label.
    pub condition: Option<String>,
    /// Case-insensitive substring match on name or code.
    pub search: Option<String>,
}

impl AssetFilter {
    /// Check whether an asset satisfies every criterion of this filter.
    pub fn matches(&self, asset: &Asset) -> bool {
        if let Some(category_id) = self.category_id {
            if asset.category_id != Some(category_id) {
                return false;
            }
        }
        if let Some(location_id) = self.location_id {
            if asset.location_id != Some(location_id) {
                return false;
            }
        }
        if let Some(condition) = &self.condition {
            if &asset.condition != condition {
                return false;
            }
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            if !asset.name.to_lowercase().contains(&needle)
                && !asset.asset_code.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset() -> Asset {
        let now = Utc::now();
        Asset {
            id: AssetId(1),
            asset_code: "AST-20250301-0001".to_string(),
            name: "Proyektor Epson".to_string(),
            category_id: Some(CategoryId(2)),
            location_id: Some(LocationId(3)),
            condition: "Baik".to_string(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(AssetFilter::default().matches(&asset()));
    }

    #[test]
    fn search_matches_name_or_code_ignoring_case() {
        let by_name = AssetFilter {
            search: Some("proyektor".to_string()),
            ..Default::default()
        };
        let by_code = AssetFilter {
            search: Some("0301-0001".to_string()),
            ..Default::default()
        };
        let miss = AssetFilter {
            search: Some("laptop".to_string()),
            ..Default::default()
        };
        assert!(by_name.matches(&asset()));
        assert!(by_code.matches(&asset()));
        assert!(!miss.matches(&asset()));
    }

    #[test]
    fn reference_filters_compare_ids() {
        let filter = AssetFilter {
            category_id: Some(CategoryId(2)),
            location_id: Some(LocationId(4)),
            ..Default::default()
        };
        assert!(!filter.matches(&asset()));
    }
}
