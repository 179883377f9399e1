//! Read-time and date display helpers shared by the dashboard, the editor
//! and the HTML export.

use chrono::{DateTime, NaiveDate};

/// Reading speed used for read-time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Placeholder shown when an article has no usable creation date
pub const UNKNOWN_DATE: &str = "Recently";

/// Number of whitespace-separated words in `content`
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Estimated reading minutes for `words`, rounded up and never below one
pub fn read_time_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Human readable read time, e.g. "3 min read"
pub fn read_time(content: &str) -> String {
    format!("{} min read", read_time_minutes(word_count(content)))
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    // Django emits microseconds without an offset when USE_TZ is off
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Format a creation timestamp as "Month Day, Year".
///
/// Missing or unparsable input yields [`UNKNOWN_DATE`].
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_date)
        .map(format_naive_date)
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_time_rounds_up() {
        assert_eq!(read_time_minutes(1), 1);
        assert_eq!(read_time_minutes(200), 1);
        assert_eq!(read_time_minutes(201), 2);
        assert_eq!(read_time_minutes(1000), 5);
        assert_eq!(read_time_minutes(1001), 6);
    }

    #[test]
    fn test_read_time_empty_content() {
        assert_eq!(read_time_minutes(0), 1);
        assert_eq!(read_time(""), "1 min read");
        assert_eq!(read_time("   \n\t "), "1 min read");
    }

    #[test]
    fn test_read_time_matches_word_count_rule() {
        for words in [0usize, 1, 199, 200, 399, 400, 401, 12_345] {
            let content = vec!["word"; words].join(" ");
            let expected = if words == 0 { 1 } else { words.div_ceil(200) };
            assert_eq!(read_time(&content), format!("{} min read", expected));
        }
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  one two\n\nthree\tfour  "), 4);
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(
            format_date(Some("2024-10-24T15:30:00.123456Z")),
            "October 24, 2024"
        );
        assert_eq!(format_date(Some("2024-01-05T08:00:00+02:00")), "January 5, 2024");
    }

    #[test]
    fn test_format_date_naive_forms() {
        assert_eq!(format_date(Some("2024-03-09")), "March 9, 2024");
        assert_eq!(
            format_date(Some("2024-03-09T10:11:12.000001")),
            "March 9, 2024"
        );
    }

    #[test]
    fn test_format_date_placeholder() {
        assert_eq!(format_date(None), "Recently");
        assert_eq!(format_date(Some("")), "Recently");
        assert_eq!(format_date(Some("yesterday")), "Recently");
    }
}
