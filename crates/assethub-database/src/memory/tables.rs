//! Table storage for the in-memory backend.

use std::collections::BTreeMap;

use assethub_entity::asset::Asset;
use assethub_entity::audit::AuditEntry;
use assethub_entity::catalog::{CatalogEntry, CatalogKind};
use assethub_entity::photo::AssetPhoto;
use assethub_entity::qr::QrCode;
use assethub_entity::user::User;

/// One table: rows keyed by id plus the id sequence.
#[derive(Debug, Clone)]
pub(crate) struct Table<T> {
    pub rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    /// Allocate the next id. Ids are never reused, like `BIGSERIAL`.
    pub fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

/// Every table of the schema.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tables {
    pub users: Table<User>,
    pub assets: Table<Asset>,
    pub photos: Table<AssetPhoto>,
    pub qr_codes: Table<QrCode>,
    pub categories: Table<CatalogEntry>,
    pub locations: Table<CatalogEntry>,
    pub audit_log: Table<AuditEntry>,
}

impl Tables {
    pub fn catalog(&self, kind: CatalogKind) -> &Table<CatalogEntry> {
        match kind {
            CatalogKind::Category => &self.categories,
            CatalogKind::Location => &self.locations,
        }
    }

    pub fn catalog_mut(&mut self, kind: CatalogKind) -> &mut Table<CatalogEntry> {
        match kind {
            CatalogKind::Category => &mut self.categories,
            CatalogKind::Location => &mut self.locations,
        }
    }
}
