//! Human-readable asset codes of the form `AST-YYYYMMDD-NNNN`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Prefix shared by every asset code.
pub const ASSET_CODE_PREFIX: &str = "AST";

/// A parsed asset code: the UTC registration day plus a per-day sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCode {
    /// The UTC calendar day the code is partitioned by.
    pub date: NaiveDate,
    /// One-based sequence within the day.
    pub sequence: u32,
}

impl AssetCode {
    /// Create a code for the given day and sequence.
    pub fn new(date: NaiveDate, sequence: u32) -> Self {
        Self { date, sequence }
    }

    /// Parse a code string. Returns `None` if the format does not match.
    pub fn parse(code: &str) -> Option<Self> {
        let mut parts = code.split('-');
        if parts.next()? != ASSET_CODE_PREFIX {
            return None;
        }
        let date_part = parts.next()?;
        let seq_part = parts.next()?;
        if parts.next().is_some() || date_part.len() != 8 || seq_part.len() < 4 {
            return None;
        }
        if !seq_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let date = NaiveDate::parse_from_str(date_part, "%Y%m%d").ok()?;
        let sequence = seq_part.parse().ok()?;
        Some(Self { date, sequence })
    }
}

impl fmt::Display for AssetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ASSET_CODE_PREFIX}-{}-{:04}",
            self.date.format("%Y%m%d"),
            self.sequence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padded_sequence() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(AssetCode::new(date, 1).to_string(), "AST-20250307-0001");
        assert_eq!(AssetCode::new(date, 123).to_string(), "AST-20250307-0123");
    }

    #[test]
    fn sequence_overflowing_four_digits_is_kept_whole() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(AssetCode::new(date, 10000).to_string(), "AST-20250307-10000");
    }

    #[test]
    fn parse_round_trips_valid_codes() {
        let code = AssetCode::parse("AST-20241231-0042").unwrap();
        assert_eq!(code.date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(code.sequence, 42);
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        assert!(AssetCode::parse("ASX-20241231-0042").is_none());
        assert!(AssetCode::parse("AST-2024123-0042").is_none());
        assert!(AssetCode::parse("AST-20241331-0042").is_none());
        assert!(AssetCode::parse("AST-20241231-42").is_none());
        assert!(AssetCode::parse("AST-20241231-0042-1").is_none());
    }
}
