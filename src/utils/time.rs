//! Time utilities

use chrono::{DateTime, Duration, Utc};

/// Format a duration as a human-readable string
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();

    if total_seconds < 0 {
        return "0s".to_string();
    }

    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();

    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}

/// Countdown text for a contest card
pub fn countdown_label(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if now < start {
        format!("Starts in {}", format_duration(start - now))
    } else if now < end {
        format!("Ends in {}", format_duration(end - now))
    } else {
        "Ended".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(30)), "30s");
        assert_eq!(format_duration(Duration::seconds(90)), "1m 30s");
        assert_eq!(format_duration(Duration::seconds(3661)), "1h 1m 1s");
        assert_eq!(format_duration(Duration::seconds(86400)), "1d");
        assert_eq!(format_duration(Duration::seconds(-5)), "0s");
    }

    #[test]
    fn test_countdown_label() {
        let now = Utc::now();
        let start = now + Duration::hours(2);
        let end = start + Duration::hours(3);

        assert_eq!(countdown_label(start, end, now), "Starts in 2h");
        assert_eq!(countdown_label(start, end, start + Duration::minutes(30)), "Ends in 2h 30m");
        assert_eq!(countdown_label(start, end, end), "Ended");
    }
}
