/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

use chrono::NaiveDate;

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2026-08-06" -> "06.08.2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format a NaiveDate the way the register tables show it
pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Today's date, used for export filenames and SLA arithmetic.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-06"), "06.08.2026");
        assert_eq!(format_date("2026-08-06T10:00:00Z"), "06.08.2026");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_naive_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(format_naive_date(date), "06.08.2026");
    }
}
