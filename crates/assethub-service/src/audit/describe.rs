//! Indonesian descriptions stored with audit entries.

use assethub_entity::catalog::CatalogKind;

pub fn asset_added(name: &str, code: &str) -> String {
    format!("Menambahkan aset: {name} ({code})")
}

/// `changes` must be non-empty.
pub fn asset_edited(code: &str, changes: &[String]) -> String {
    format!("Mengubah aset {code}: {}", changes.join(", "))
}

pub fn asset_deleted(name: &str, code: &str) -> String {
    format!("Menghapus aset: {name} ({code})")
}

pub fn photo_deleted(code: &str) -> String {
    format!("Menghapus foto dari aset {code}")
}

pub fn qr_generated(code: &str) -> String {
    format!("Generate QR Code untuk aset {code}")
}

pub fn qr_regenerated(code: &str) -> String {
    format!("Regenerate QR Code untuk aset {code}")
}

pub fn catalog_added(kind: CatalogKind, name: &str) -> String {
    format!("Menambahkan {}: {name}", kind.noun())
}

pub fn catalog_renamed(kind: CatalogKind, old: &str, new: &str) -> String {
    format!("Mengubah {} dari \"{old}\" menjadi \"{new}\"", kind.noun())
}

pub fn catalog_deleted(kind: CatalogKind, name: &str) -> String {
    format!("Menghapus {}: {name}", kind.noun())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_descriptions() {
        assert_eq!(
            asset_added("Projector X", "AST-20250101-0001"),
            "Menambahkan aset: Projector X (AST-20250101-0001)"
        );
        assert_eq!(
            asset_edited(
                "AST-20250101-0001",
                &["kondisi: 'Baik' → 'Rusak'".to_string(), "foto baru ditambahkan".to_string()]
            ),
            "Mengubah aset AST-20250101-0001: kondisi: 'Baik' → 'Rusak', foto baru ditambahkan"
        );
    }

    #[test]
    fn catalog_descriptions_use_kind_noun() {
        assert_eq!(
            catalog_added(CatalogKind::Location, "Lab Kimia"),
            "Menambahkan lokasi: Lab Kimia"
        );
        assert_eq!(
            catalog_renamed(CatalogKind::Category, "Elektronik", "Elektronika"),
            "Mengubah kategori dari \"Elektronik\" menjadi \"Elektronika\""
        );
        assert_eq!(
            catalog_deleted(CatalogKind::Category, "Mebel"),
            "Menghapus kategori: Mebel"
        );
    }
}
