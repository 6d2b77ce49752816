//! Field-by-field change summary for asset edits.

/// Accumulates the human-readable list of fields an edit changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    entries: Vec<String>,
}

impl ChangeSet {
    /// Creates an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `label: 'old' → 'new'` when the values differ.
    pub fn scalar(&mut self, label: &str, old: &str, new: &str) -> &mut Self {
        if old != new {
            self.entries.push(format!("{label}: '{old}' → '{new}'"));
        }
        self
    }

    /// Record a reference change, shown by the names of both sides.
    ///
    /// Identity decides whether anything changed; a missing side renders as `-`.
    pub fn reference<T: PartialEq>(
        &mut self,
        label: &str,
        old: (Option<T>, Option<&str>),
        new: (Option<T>, Option<&str>),
    ) -> &mut Self {
        if old.0 != new.0 {
            self.entries.push(format!(
                "{label}: '{}' → '{}'",
                old.1.unwrap_or("-"),
                new.1.unwrap_or("-")
            ));
        }
        self
    }

    /// Record a bare note when `changed` holds.
    pub fn flag(&mut self, changed: bool, note: &str) -> &mut Self {
        if changed {
            self.entries.push(note.to_string());
        }
        self
    }

    /// Whether nothing changed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded entries in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_values_produce_no_entries() {
        let mut changes = ChangeSet::new();
        changes
            .scalar("nama", "Proyektor", "Proyektor")
            .reference("kategori", (Some(1), Some("Elektronik")), (Some(1), Some("Elektronik")))
            .flag(false, "foto baru ditambahkan");
        assert!(changes.is_empty());
    }

    #[test]
    fn changed_fields_are_listed_in_order() {
        let mut changes = ChangeSet::new();
        changes
            .scalar("nama", "Proyektor", "Proyektor Epson")
            .reference("lokasi", (None, None), (Some(3), Some("Lab 2")))
            .flag(true, "deskripsi diperbarui");
        assert_eq!(
            changes.entries(),
            &[
                "nama: 'Proyektor' → 'Proyektor Epson'".to_string(),
                "lokasi: '-' → 'Lab 2'".to_string(),
                "deskripsi diperbarui".to_string(),
            ]
        );
    }

    #[test]
    fn reference_compares_identity_not_name() {
        let mut changes = ChangeSet::new();
        changes.reference("kategori", (Some(1), Some("Lab")), (Some(2), Some("Lab")));
        assert_eq!(changes.entries(), &["kategori: 'Lab' → 'Lab'".to_string()]);
    }
}
