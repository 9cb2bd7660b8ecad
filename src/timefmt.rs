//! Wall-clock conversions.
//!
//! The partitioner works on plain millisecond offsets; front-ends
//! usually collect and display times as "HH:MM". This module converts
//! between the two, with midnight as the epoch.

use thiserror::Error;

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Failure parsing an "HH:MM" string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// The input is not of the form `HH:MM` with numeric fields.
    #[error("'{input}' is not a valid HH:MM time")]
    Malformed { input: String },

    /// The hour field is outside 0..=23.
    #[error("hour {hour} is out of range (0..=23)")]
    HourOutOfRange { hour: u32 },

    /// The minute field is outside 0..=59.
    #[error("minute {minute} is out of range (0..=59)")]
    MinuteOutOfRange { minute: u32 },
}

/// Parses an "HH:MM" string into milliseconds from midnight.
///
/// # Errors
/// [`TimeParseError`] for malformed input or out-of-range fields.
///
/// # Example
///
/// ```
/// use gate_plan::timefmt::parse_hhmm;
///
/// assert_eq!(parse_hhmm("09:30").unwrap(), 34_200_000);
/// assert!(parse_hhmm("25:00").is_err());
/// ```
pub fn parse_hhmm(input: &str) -> Result<i64, TimeParseError> {
    let malformed = || TimeParseError::Malformed {
        input: input.to_string(),
    };

    let (hour_part, minute_part) = input.split_once(':').ok_or_else(malformed)?;
    let hour: u32 = hour_part.trim().parse().map_err(|_| malformed())?;
    let minute: u32 = minute_part.trim().parse().map_err(|_| malformed())?;

    if hour > 23 {
        return Err(TimeParseError::HourOutOfRange { hour });
    }
    if minute > 59 {
        return Err(TimeParseError::MinuteOutOfRange { minute });
    }

    Ok(i64::from(hour) * MS_PER_HOUR + i64::from(minute) * MS_PER_MINUTE)
}

/// Formats milliseconds from midnight as a zero-padded "HH:MM" string.
///
/// Sub-minute remainders are truncated; times past 24h wrap around the
/// day, matching how a departures board displays an after-midnight slot.
pub fn format_hhmm(time_ms: i64) -> String {
    let minutes = time_ms.div_euclid(MS_PER_MINUTE).rem_euclid(24 * 60);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
