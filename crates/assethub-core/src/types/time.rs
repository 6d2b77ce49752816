//! UTC calendar helpers.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

/// Start (inclusive) and end (exclusive) of a UTC calendar day.
pub fn utc_day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = day
        .checked_add_days(Days::new(1))
        .map(|next| next.and_time(NaiveTime::MIN).and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_span_one_utc_day() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let (start, end) = utc_day_bounds(day);
        assert_eq!(start.to_rfc3339(), "2025-01-31T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-02-01T00:00:00+00:00");
    }
}
