//! Audit action tags.

use std::fmt;
use std::str::FromStr;

use assethub_core::AppError;
use serde::{Deserialize, Serialize};

/// The closed set of actions recorded in the audit log.
///
/// Stored as `TEXT` using the upper snake case tag (`ADD_CATEGORY`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// Asset registered.
    Add,
    /// Asset fields changed or a photo was attached.
    Edit,
    /// Asset deleted.
    Delete,
    /// Category added.
    AddCategory,
    /// Category renamed.
    EditCategory,
    /// Category deleted.
    DeleteCategory,
    /// Location added.
    AddLocation,
    /// Location renamed.
    EditLocation,
    /// Location deleted.
    DeleteLocation,
    /// Single photo removed from an asset.
    DeletePhoto,
    /// QR code generated for an asset that had none.
    GenerateQr,
    /// QR codes of an asset replaced with a fresh one.
    RegenerateQr,
}

impl AuditAction {
    /// Every action, in declaration order.
    pub const ALL: [AuditAction; 12] = [
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::AddCategory,
        Self::EditCategory,
        Self::DeleteCategory,
        Self::AddLocation,
        Self::EditLocation,
        Self::DeleteLocation,
        Self::DeletePhoto,
        Self::GenerateQr,
        Self::RegenerateQr,
    ];

    /// Return the stored tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Edit => "EDIT",
            Self::Delete => "DELETE",
            Self::AddCategory => "ADD_CATEGORY",
            Self::EditCategory => "EDIT_CATEGORY",
            Self::DeleteCategory => "DELETE_CATEGORY",
            Self::AddLocation => "ADD_LOCATION",
            Self::EditLocation => "EDIT_LOCATION",
            Self::DeleteLocation => "DELETE_LOCATION",
            Self::DeletePhoto => "DELETE_PHOTO",
            Self::GenerateQr => "GENERATE_QR",
            Self::RegenerateQr => "REGENERATE_QR",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == tag)
            .ok_or_else(|| AppError::validation(format!("Invalid audit action: '{s}'")))
    }
}

impl sqlx::Type<sqlx::Postgres> for AuditAction {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for AuditAction {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for AuditAction {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let tag = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(tag.parse::<AuditAction>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_upper_snake_case() {
        assert_eq!(AuditAction::RegenerateQr.as_str(), "REGENERATE_QR");
        assert_eq!(
            serde_json::to_string(&AuditAction::DeleteCategory).unwrap(),
            "\"DELETE_CATEGORY\""
        );
    }

    #[test]
    fn parses_every_tag() {
        for action in AuditAction::ALL {
            assert_eq!(action.as_str().parse::<AuditAction>().unwrap(), action);
        }
        assert_eq!("delete_photo".parse::<AuditAction>().unwrap(), AuditAction::DeletePhoto);
        assert!("RENAME".parse::<AuditAction>().is_err());
    }
}
