use crate::errors::DomainError;
use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Human-readable calendar date, e.g. `Sun Jan 15 2023`.
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse a caller-supplied calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (only the date part is kept)
/// and the display format produced by [`format_date`]. Years must lie in
/// 0..=9999: dates are stored as `YYYY-MM-DD` text and compared as text.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let value = raw.trim();

    let parsed = NaiveDate::parse_from_str(value, ISO_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(value, DISPLAY_FORMAT).ok());

    match parsed {
        Some(date) if (0..=9999).contains(&date.year()) => Ok(date),
        _ => Err(DomainError::InvalidDate(value.to_string())),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Current local calendar date, evaluated on every call.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_date("2023-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    }

    #[test]
    fn keeps_date_part_of_timestamps() {
        let date = parse_date("2023-01-15T22:10:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    }

    #[test]
    fn accepts_its_own_display_format() {
        let date = parse_date("Sun Jan 15 2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_date("not-a-date"),
            Err(DomainError::InvalidDate("not-a-date".to_string()))
        );
        assert!(parse_date("2023-02-30").is_err());
    }

    #[test]
    fn rejects_years_outside_four_digits() {
        assert_eq!(
            parse_date("+10000-01-01"),
            Err(DomainError::InvalidDate("+10000-01-01".to_string()))
        );
        assert!(parse_date("-0001-06-01").is_err());
        assert!(parse_date("9999-12-31").is_ok());
        assert!(parse_date("0000-01-01").is_ok());
    }

    #[test]
    fn formats_without_time_component() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        assert_eq!(format_date(date), "Thu Jan 05 2023");
    }
}
