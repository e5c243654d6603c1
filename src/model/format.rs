//! Display formatting for counts and ages

use chrono::{DateTime, Utc};

/// Views and subscriber counts: `1.2M`, `3.4K`, `999`
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}

/// Like counts never switch to millions: `1250.0K` rather than `1.3M`
pub fn format_count(count: u64) -> String {
    if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Relative age of `timestamp` as seen from `now`.
///
/// Anything older than a day is counted in whole days rounded up, then bucketed
/// into weeks, months (30 days) and years (365 days).
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - timestamp).abs();

    if diff.num_minutes() < 1 {
        return "just now".to_string();
    }
    if diff.num_hours() < 1 {
        return plural(diff.num_minutes(), "minute");
    }
    if diff.num_days() < 1 {
        return plural(diff.num_hours(), "hour");
    }

    let seconds = diff.num_seconds();
    let days = (seconds + 86_399) / 86_400;

    if days < 7 {
        plural(days, "day")
    } else if days < 30 {
        plural(days / 7, "week")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1_000), "1.0K");
        assert_eq!(format_views(86_400), "86.4K");
        assert_eq!(format_views(1_245_000), "1.2M");
        assert_eq!(format_views(2_870_000), "2.9M");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(87), "87");
        assert_eq!(format_count(48_200), "48.2K");
        assert_eq!(format_count(1_250_000), "1250.0K");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();

        assert_eq!(time_ago(now, now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(time_ago(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(time_ago(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(time_ago(now - Duration::days(1), now), "1 day ago");
        assert_eq!(time_ago(now - Duration::hours(30), now), "2 days ago");
        assert_eq!(time_ago(now - Duration::days(6), now), "6 days ago");
        assert_eq!(time_ago(now - Duration::days(7), now), "1 week ago");
        assert_eq!(time_ago(now - Duration::days(20), now), "2 weeks ago");
        assert_eq!(time_ago(now - Duration::days(75), now), "2 months ago");
        assert_eq!(time_ago(now - Duration::days(400), now), "1 year ago");
        assert_eq!(time_ago(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn test_time_ago_future_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        assert_eq!(time_ago(now + Duration::days(3), now), "3 days ago");
    }
}
