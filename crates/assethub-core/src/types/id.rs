//! Newtype wrappers around `i64` for all domain entity identifiers.
//!
//! Identifiers are assigned by the store (`BIGSERIAL` in PostgreSQL, a
//! per-table sequence in memory). Using distinct types prevents passing a
//! `CategoryId` where an `AssetId` is expected. When the `sqlx` feature is
//! enabled, each ID type also implements `sqlx::Type`, `sqlx::Encode`, and
//! `sqlx::Decode` for PostgreSQL.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Return the inner integer value.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        #[cfg(feature = "sqlx")]
        impl sqlx::Type<sqlx::Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'q> sqlx::Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <i64 as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <i64 as sqlx::Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user (audit actor).
    UserId
);

define_id!(
    /// Unique identifier for an asset.
    AssetId
);

define_id!(
    /// Unique identifier for a category.
    CategoryId
);

define_id!(
    /// Unique identifier for a location.
    LocationId
);

define_id!(
    /// Unique identifier for an asset photo.
    PhotoId
);

define_id!(
    /// Unique identifier for a generated QR code.
    QrCodeId
);

define_id!(
    /// Unique identifier for an audit log entry.
    AuditEntryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_segments() {
        assert_eq!("42".parse::<AssetId>().unwrap(), AssetId(42));
        assert_eq!(" 7 ".parse::<CategoryId>().unwrap(), CategoryId(7));
        assert!("abc".parse::<LocationId>().is_err());
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&PhotoId(9)).unwrap();
        assert_eq!(json, "9");
        let back: PhotoId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PhotoId(9));
    }

    #[test]
    fn display_is_the_raw_number() {
        assert_eq!(AuditEntryId(1001).to_string(), "1001");
    }
}
