//! Date helper functions

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

/// Parse a post date in the formats accepted by the front-matter
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    // Try RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    None
}

/// Get relative time (like "2 hours ago" or "in 3 days")
pub fn relative_date(date: &DateTime<Local>, now: &DateTime<Local>) -> String {
    let duration = now.signed_duration_since(*date);

    if duration < TimeDelta::zero() {
        format!("in {}", humanize(-duration))
    } else {
        format!("{} ago", humanize(duration))
    }
}

fn humanize(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 45 {
        "a few seconds".to_string()
    } else if minutes <= 1 {
        "a minute".to_string()
    } else if minutes < 60 {
        format!("{} minutes", minutes)
    } else if hours == 1 {
        "an hour".to_string()
    } else if hours < 24 {
        format!("{} hours", hours)
    } else if days == 1 {
        "a day".to_string()
    } else if days < 30 {
        format!("{} days", days)
    } else if days < 360 {
        let months = days / 30;
        if months == 1 {
            "a month".to_string()
        } else {
            format!("{} months", months)
        }
    } else {
        // 360..365 days rounds up to a year rather than "12 months"
        let years = (days / 365).max(1);
        if years == 1 {
            "a year".to_string()
        } else {
            format!("{} years", years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_formats() {
        for input in [
            "2024-01-15",
            "2024/01/15",
            "2024-01-15 10:30",
            "2024-01-15 10:30:00",
            "2024-01-15T10:30:00",
            " 2024-01-15 ",
        ] {
            let dt = parse_date_string(input).unwrap_or_else(|| panic!("{input}"));
            assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-01-15");
        }
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_date_string("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(dt.timestamp(), 1705314600);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_date_string("last tuesday").is_none());
        assert!(parse_date_string("2024-13-45").is_none());
        assert!(parse_date_string("").is_none());
    }

    #[test]
    fn test_relative_past() {
        let now = now();
        let cases = [
            (TimeDelta::seconds(10), "a few seconds ago"),
            (TimeDelta::seconds(70), "a minute ago"),
            (TimeDelta::minutes(5), "5 minutes ago"),
            (TimeDelta::minutes(61), "an hour ago"),
            (TimeDelta::hours(5), "5 hours ago"),
            (TimeDelta::hours(30), "a day ago"),
            (TimeDelta::days(3), "3 days ago"),
            (TimeDelta::days(40), "a month ago"),
            (TimeDelta::days(100), "3 months ago"),
            (TimeDelta::days(335), "11 months ago"),
            (TimeDelta::days(362), "a year ago"),
            (TimeDelta::days(400), "a year ago"),
            (TimeDelta::days(365 * 4 + 10), "4 years ago"),
        ];
        for (delta, expected) in cases {
            assert_eq!(relative_date(&(now - delta), &now), expected);
        }
    }

    #[test]
    fn test_relative_future() {
        let now = now();
        assert_eq!(relative_date(&(now + TimeDelta::days(2)), &now), "in 2 days");
        assert_eq!(relative_date(&(now + TimeDelta::hours(1)), &now), "in an hour");
    }

    #[test]
    fn test_far_past_mentions_years() {
        let date = parse_date_string("1999-01-01").unwrap();
        let text = relative_date(&date, &Local::now());
        assert!(text.contains("years"), "{text}");
        assert!(text.ends_with("ago"));
    }
}
