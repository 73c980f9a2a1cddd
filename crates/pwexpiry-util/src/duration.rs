//! Human-readable durations ("90d", "2mo", "12h")

use std::time::Duration;

pub const SECS_PER_MINUTE: u64 = 60;
pub const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
pub const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;
pub const SECS_PER_WEEK: u64 = 7 * SECS_PER_DAY;
/// Months are a fixed 30 days
pub const SECS_PER_MONTH: u64 = 30 * SECS_PER_DAY;
/// Years are a fixed 365 days
pub const SECS_PER_YEAR: u64 = 365 * SECS_PER_DAY;

/// Whole days as a `Duration`
pub fn days(n: u64) -> Duration {
    Duration::from_secs(n * SECS_PER_DAY)
}

/// Whole (30-day) months as a `Duration`
pub fn months(n: u64) -> Duration {
    Duration::from_secs(n * SECS_PER_MONTH)
}

/// Parse a duration such as `45s`, `30m`, `12h`, `90d`, `2w`, `3mo` or `1y`.
///
/// A bare number is taken as seconds.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Duration cannot be empty".into());
    }

    let split = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);

    if number.is_empty() {
        return Err("Expected a number followed by a unit, e.g. 90d".into());
    }

    let value: u64 = number
        .parse()
        .map_err(|_| format!("Invalid number: {}", number))?;

    let multiplier = match unit.trim().to_lowercase().as_str() {
        "" | "s" | "sec" | "secs" | "seconds" => 1,
        "m" | "min" | "mins" | "minutes" => SECS_PER_MINUTE,
        "h" | "hour" | "hours" => SECS_PER_HOUR,
        "d" | "day" | "days" => SECS_PER_DAY,
        "w" | "week" | "weeks" => SECS_PER_WEEK,
        "mo" | "month" | "months" => SECS_PER_MONTH,
        "y" | "year" | "years" => SECS_PER_YEAR,
        other => return Err(format!("Unknown duration unit: {}", other)),
    };

    value
        .checked_mul(multiplier)
        .map(Duration::from_secs)
        .ok_or_else(|| "Duration is too large".to_string())
}

/// Format a duration using the largest unit that divides it exactly.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs == 0 {
        return "0s".into();
    }

    for (unit_secs, suffix) in [
        (SECS_PER_DAY, "d"),
        (SECS_PER_HOUR, "h"),
        (SECS_PER_MINUTE, "m"),
    ] {
        if secs % unit_secs == 0 {
            return format!("{}{}", secs / unit_secs, suffix);
        }
    }

    format!("{}s", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("45").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_duration("45s").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_duration("30m").unwrap(), Duration::from_secs(1800));
        assert_eq!(parse_duration("12h").unwrap(), Duration::from_secs(12 * 3600));
        assert_eq!(parse_duration("90d").unwrap(), days(90));
        assert_eq!(parse_duration("2w").unwrap(), days(14));
        assert_eq!(parse_duration("2mo").unwrap(), months(2));
        assert_eq!(parse_duration("1y").unwrap(), days(365));
        assert_eq!(parse_duration(" 3 months ").unwrap(), months(3));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("d").is_err());
        assert!(parse_duration("10 fortnights").is_err());
        assert!(parse_duration("-5d").is_err());
        assert!(parse_duration("99999999999999999999d").is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(days(90)), "90d");
        assert_eq!(format_duration(months(2)), "60d");
        assert_eq!(format_duration(Duration::from_secs(7200)), "2h");
        assert_eq!(format_duration(Duration::from_secs(90)), "90s");
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }
}
