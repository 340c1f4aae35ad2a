//! Timestamps of tracker entries

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};

/// Stored `createdAt` form: RFC 3339 in UTC with milliseconds
#[must_use]
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current [`timestamp`]
#[must_use]
pub fn now() -> String {
    timestamp(Utc::now())
}

/// Local `YYYY-MM-DD` of a stored timestamp; `""` when unparsable
#[must_use]
pub fn format_date(stored: &str) -> String {
    let stored = stored.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(stored) {
        return at.with_timezone(&Local).format("%Y-%m-%d").to_string();
    }
    NaiveDate::parse_from_str(stored, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unparsable_is_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("yesterday"), "");
        assert_eq!(format_date("2024-13-40"), "");
    }

    #[test]
    fn date_only_is_kept() {
        assert_eq!(format_date("2024-05-01"), "2024-05-01");
    }

    #[test]
    fn timestamp_matches_local_day() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let stored = timestamp(at);
        assert_eq!(stored, "2024-05-01T12:00:00.000Z");

        let expected = at.with_timezone(&Local).format("%Y-%m-%d").to_string();
        assert_eq!(format_date(&stored), expected);
    }
}
