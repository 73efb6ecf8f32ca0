/// Utilities for date and time formatting
///
/// Stored timestamps are RFC 3339 in UTC; the site shows them in Japan time.
use chrono::{DateTime, FixedOffset, NaiveDate};

const JST_OFFSET_SECS: i32 = 9 * 3600;

fn to_jst(datetime_str: &str) -> Option<DateTime<FixedOffset>> {
    let jst = FixedOffset::east_opt(JST_OFFSET_SECS)?;
    DateTime::parse_from_rfc3339(datetime_str)
        .ok()
        .map(|dt| dt.with_timezone(&jst))
}

/// Format ISO date or datetime string to YYYY年MM月DD日
/// Example: "2024-03-15T14:02:26.123Z" -> "2024年03月15日"
pub fn format_date(date_str: &str) -> String {
    if let Some(dt) = to_jst(date_str) {
        return dt.format("%Y年%m月%d日").to_string();
    }
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%Y年%m月%d日").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format ISO datetime string to YYYY年MM月DD日 HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "2024年03月15日 23:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match to_jst(datetime_str) {
        Some(dt) => dt.format("%Y年%m月%d日 %H:%M").to_string(),
        None => format_date(datetime_str),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "2024年03月15日");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "2024年03月15日");
        assert_eq!(format_date("2024-12-31T23:59:59+09:00"), "2024年12月31日");
    }

    #[test]
    fn test_late_utc_evening_is_next_day_in_japan() {
        assert_eq!(format_date("2024-03-15T16:30:00Z"), "2024年03月16日");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "2024年03月15日 23:02"
        );
        assert_eq!(format_datetime("2024-03-15"), "2024年03月15日");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
