//! Operating-hours parsing: closing time extraction and 12h → 24h conversion.
//!
//! Upstream strings look like `"8:00 AM - 10:30 PM"`. Nothing here rejects
//! malformed input; odd strings convert to odd times and still take part in
//! comparisons.

use std::fmt;

/// Closing time assumed when the hours string is not `open - close`.
pub const DEFAULT_CLOSING_TIME: &str = "00:00";

/// Second half of an `open - close` string, trimmed.
pub fn closing_time(operating_hours: &str) -> &str {
    let parts: Vec<&str> = operating_hours.split(" - ").collect();
    if parts.len() == 2 {
        parts[1].trim()
    } else {
        DEFAULT_CLOSING_TIME
    }
}

/// Convert `"h:mm AM|PM"` to `"HH:mm"`.
///
/// `12 AM` becomes `00`, `12 PM` stays `12`, other PM hours gain 12 and AM
/// hours pass through untouched (`"9:00 AM"` → `"9:00"`). Strings without a
/// meridiem are returned as written.
pub fn to_24_hour(time: &str) -> String {
    let mut tokens = time.split(' ');
    let time_part = tokens.next().unwrap_or_default();
    let modifier = tokens.next();

    let (hours, minutes) = match time_part.split_once(':') {
        Some((h, m)) => (h, m),
        None => (time_part, ""),
    };

    let hours = match modifier {
        Some("PM") if hours != "12" => hours
            .parse::<u32>()
            .ok()
            .and_then(|h| h.checked_add(12))
            .map_or_else(|| hours.to_string(), |h| h.to_string()),
        Some("AM") if hours == "12" => "00".to_string(),
        _ => hours.to_string(),
    };

    format!("{}:{}", hours, minutes)
}

/// A 24-hour clock reading used to order closing times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Read a converted `"HH:mm"` string. Digits that do not parse count as 0.
    pub fn from_24_hour(time: &str) -> Self {
        let (h, m) = time.split_once(':').unwrap_or((time, ""));
        ClockTime {
            hour: h.trim().parse().unwrap_or(0),
            minute: m.trim().parse().unwrap_or(0),
        }
    }

    /// Closing time of an `open - close` string.
    pub fn closing(operating_hours: &str) -> Self {
        Self::from_24_hour(&to_24_hour(closing_time(operating_hours)))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_time_split() {
        assert_eq!(closing_time("8:00 AM - 10:30 PM"), "10:30 PM");
        assert_eq!(closing_time("8:00 AM -  9:00 PM "), "9:00 PM");
    }

    #[test]
    fn test_closing_time_malformed_defaults() {
        assert_eq!(closing_time("Open 24 hours"), DEFAULT_CLOSING_TIME);
        assert_eq!(closing_time(""), DEFAULT_CLOSING_TIME);
        assert_eq!(closing_time("8 AM - 2 PM - 5 PM"), DEFAULT_CLOSING_TIME);
        assert_eq!(closing_time("8:00 AM-10:00 PM"), DEFAULT_CLOSING_TIME);
    }

    #[test]
    fn test_to_24_hour() {
        assert_eq!(to_24_hour("12:00 AM"), "00:00");
        assert_eq!(to_24_hour("12:00 PM"), "12:00");
        assert_eq!(to_24_hour("3:00 PM"), "15:00");
        assert_eq!(to_24_hour("11:30 PM"), "23:30");
        assert_eq!(to_24_hour("9:00 AM"), "9:00");
        assert_eq!(to_24_hour("00:00"), "00:00");
    }

    #[test]
    fn test_to_24_hour_malformed_passes_through() {
        assert_eq!(to_24_hour("9 PM"), "21:");
        assert_eq!(to_24_hour("late PM"), "late:");
        assert_eq!(to_24_hour("10:00 pm"), "10:00");
    }

    #[test]
    fn test_to_24_hour_huge_pm_hour_kept() {
        assert_eq!(to_24_hour("4294967290:00 PM"), "4294967290:00");
        assert_eq!(to_24_hour("4294967283:00 PM"), "4294967295:00");
        assert_eq!(
            ClockTime::closing("8:00 AM - 4294967290:00 PM"),
            ClockTime { hour: 4294967290, minute: 0 }
        );
    }

    #[test]
    fn test_clock_time_ordering() {
        let nine = ClockTime::from_24_hour("9:00");
        let late = ClockTime::from_24_hour("23:30");
        assert!(nine < late);
        assert_eq!(ClockTime::from_24_hour("09:00"), nine);
        assert_eq!(ClockTime::from_24_hour("garbage"), ClockTime::default());
    }

    #[test]
    fn test_closing_clock_time() {
        assert_eq!(
            ClockTime::closing("7:00 AM - 11:30 PM"),
            ClockTime { hour: 23, minute: 30 }
        );
        assert_eq!(ClockTime::closing("24 hours"), ClockTime::default());
        assert_eq!(ClockTime::closing("10:00 AM - 12:00 AM").to_string(), "00:00");
    }
}
