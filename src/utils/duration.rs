//! ISO 8601 durations as returned in `contentDetails.duration`

use std::time::Duration;

/// Parse an ISO 8601 duration such as `PT1H2M3S` or `P1DT30M`.
///
/// Only the designators YouTube emits are understood (W, D, H, M, S with
/// integer values). Returns `None` for anything else.
pub fn parse_iso8601_duration(value: &str) -> Option<Duration> {
    let rest = value.strip_prefix('P')?;
    if rest.is_empty() || rest == "T" {
        return None;
    }

    let mut seconds: u64 = 0;
    let mut digits = String::new();
    let mut in_time = false;
    let mut saw_component = false;

    for c in rest.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'T' if !in_time && digits.is_empty() => in_time = true,
            _ => {
                let amount: u64 = digits.parse().ok()?;
                digits.clear();
                let unit = match (c, in_time) {
                    ('W', false) => 7 * 86_400,
                    ('D', false) => 86_400,
                    ('H', true) => 3_600,
                    ('M', true) => 60,
                    ('S', true) => 1,
                    _ => return None,
                };
                seconds = seconds.checked_add(amount.checked_mul(unit)?)?;
                saw_component = true;
            }
        }
    }

    if !digits.is_empty() || !saw_component {
        return None;
    }
    Some(Duration::from_secs(seconds))
}

/// Format a duration as a clock string (`3:07`, `1:02:03`)
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso8601_duration() {
        assert_eq!(
            parse_iso8601_duration("PT3M33S"),
            Some(Duration::from_secs(213))
        );
        assert_eq!(
            parse_iso8601_duration("PT1H2M3S"),
            Some(Duration::from_secs(3723))
        );
        assert_eq!(parse_iso8601_duration("PT45S"), Some(Duration::from_secs(45)));
        assert_eq!(
            parse_iso8601_duration("P1DT30M"),
            Some(Duration::from_secs(86_400 + 1_800))
        );
        assert_eq!(
            parse_iso8601_duration("P1W"),
            Some(Duration::from_secs(604_800))
        );
        // Live streams report P0D
        assert_eq!(parse_iso8601_duration("P0D"), Some(Duration::ZERO));
    }

    #[test]
    fn test_parse_iso8601_duration_invalid() {
        assert_eq!(parse_iso8601_duration(""), None);
        assert_eq!(parse_iso8601_duration("P"), None);
        assert_eq!(parse_iso8601_duration("PT"), None);
        assert_eq!(parse_iso8601_duration("3M33S"), None);
        assert_eq!(parse_iso8601_duration("PT3X"), None);
        assert_eq!(parse_iso8601_duration("PT33"), None);
        // Minutes before T mean months, which we do not support
        assert_eq!(parse_iso8601_duration("P3M"), None);
        assert_eq!(parse_iso8601_duration("PTT1S"), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(0)), "0:00");
        assert_eq!(format_duration(Duration::from_secs(213)), "3:33");
        assert_eq!(format_duration(Duration::from_secs(3723)), "1:02:03");
        assert_eq!(format_duration(Duration::from_secs(36_000)), "10:00:00");
    }
}
