//! Calendar date parsing and formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format used when echoing dates back to clients, e.g. `Mon Jan 01 1990`
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", DISPLAY_FORMAT, "%B %d, %Y", "%b %d, %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a client supplied date
///
/// Returns `None` for empty or unrecognised input.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.with_timezone(&Utc).date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// Human-readable calendar string for a date
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Current calendar date (UTC)
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("1990-01-01"), Some(ymd(1990, 1, 1)));
        assert_eq!(parse_date("  2024-02-29 "), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn parses_timestamps() {
        assert_eq!(parse_date("2024-03-05T10:15:00Z"), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_date("2024-03-05T23:30:00-02:00"), Some(ymd(2024, 3, 6)));
        assert_eq!(parse_date("2024-03-05T10:15:00"), Some(ymd(2024, 3, 5)));
    }

    #[test]
    fn parses_its_own_display_format() {
        let date = ymd(1990, 1, 1);
        assert_eq!(format_date(date), "Mon Jan 01 1990");
        assert_eq!(parse_date(&format_date(date)), Some(date));
        assert_eq!(parse_date("January 15, 2023"), Some(ymd(2023, 1, 15)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("2023-02-29"), None);
    }
}
