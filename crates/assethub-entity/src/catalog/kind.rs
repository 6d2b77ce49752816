//! Catalog kind and typed references.

use std::fmt;
use std::str::FromStr;

use assethub_core::AppError;
use assethub_core::types::{CategoryId, LocationId};
use serde::{Deserialize, Serialize};

use crate::audit::AuditAction;

/// The two reference vocabularies assets are classified by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Asset categories (`categories` table).
    Category,
    /// Asset locations (`locations` table).
    Location,
}

impl CatalogKind {
    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Location => "locations",
        }
    }

    /// Column on `assets` referencing this vocabulary.
    pub fn asset_column(self) -> &'static str {
        match self {
            Self::Category => "category_id",
            Self::Location => "location_id",
        }
    }

    /// Indonesian noun used in messages and audit descriptions.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Category => "kategori",
            Self::Location => "lokasi",
        }
    }

    /// Capitalized noun for the start of a sentence.
    pub fn title(self) -> &'static str {
        match self {
            Self::Category => "Kategori",
            Self::Location => "Lokasi",
        }
    }

    /// Audit action recorded when an entry is added.
    pub fn add_action(self) -> AuditAction {
        match self {
            Self::Category => AuditAction::AddCategory,
            Self::Location => AuditAction::AddLocation,
        }
    }

    /// Audit action recorded when an entry is renamed.
    pub fn edit_action(self) -> AuditAction {
        match self {
            Self::Category => AuditAction::EditCategory,
            Self::Location => AuditAction::EditLocation,
        }
    }

    /// Audit action recorded when an entry is deleted.
    pub fn delete_action(self) -> AuditAction {
        match self {
            Self::Category => AuditAction::DeleteCategory,
            Self::Location => AuditAction::DeleteLocation,
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Location => write!(f, "location"),
        }
    }
}

impl FromStr for CatalogKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "category" | "kategori" => Ok(Self::Category),
            "location" | "lokasi" => Ok(Self::Location),
            _ => Err(AppError::validation(format!(
                "Invalid catalog kind: '{s}'. Expected one of: category, location"
            ))),
        }
    }
}

/// A typed reference to one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum CatalogRef {
    /// A category row.
    Category(CategoryId),
    /// A location row.
    Location(LocationId),
}

impl CatalogRef {
    /// Build a reference from a kind and a raw row id.
    pub fn new(kind: CatalogKind, id: i64) -> Self {
        match kind {
            CatalogKind::Category => Self::Category(CategoryId(id)),
            CatalogKind::Location => Self::Location(LocationId(id)),
        }
    }

    /// The vocabulary this reference points into.
    pub fn kind(self) -> CatalogKind {
        match self {
            Self::Category(_) => CatalogKind::Category,
            Self::Location(_) => CatalogKind::Location,
        }
    }

    /// The raw row id.
    pub fn id(self) -> i64 {
        match self {
            Self::Category(id) => id.get(),
            Self::Location(id) => id.get(),
        }
    }
}

impl From<CategoryId> for CatalogRef {
    fn from(id: CategoryId) -> Self {
        Self::Category(id)
    }
}

impl From<LocationId> for CatalogRef {
    fn from(id: LocationId) -> Self {
        Self::Location(id)
    }
}
