use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::daynight::{daynight_hours, DayNightSplit};
use crate::error::{Error, Result};

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a wall-clock time given as `HH:MM` or `HH:MM:SS[.fff]`
pub(crate) fn parse_time_of_day(token: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(token, fmt).ok())
}

/// Parse a compact shift string into its start and end instants.
///
/// Accepted forms are `"2024-01-01T08:00T16:00"` and `"2024-01-01 08:00 16:00"`.
/// When the end time is earlier than the start time the shift is taken to
/// finish on the following day.
///
/// # Arguments
/// * `range` - Date and two times separated by `T` or whitespace
///
/// # Returns
/// * `(start, end)` instants
///
/// # Example
/// ```
/// use greek_utils::time::time_range;
///
/// let (start, end) = time_range("2024-12-31T22:30T06:30").unwrap();
/// assert_eq!(start.to_string(), "2024-12-31 22:30:00");
/// assert_eq!(end.to_string(), "2025-01-01 06:30:00");
/// ```
pub fn time_range(range: &str) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let malformed = || Error::MalformedRange(range.to_string());
    let trimmed = range.trim();

    let tokens: Vec<&str> = if trimmed.contains('T') {
        trimmed.split('T').collect()
    } else if trimmed.contains(char::is_whitespace) {
        trimmed.split_whitespace().collect()
    } else {
        return Err(malformed());
    };

    let [date, from, to] = tokens.as_slice() else {
        return Err(malformed());
    };

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| malformed())?;
    let time_from = parse_time_of_day(from).ok_or_else(malformed)?;
    let time_to = parse_time_of_day(to).ok_or_else(malformed)?;

    let end_date = if time_to < time_from {
        date.checked_add_signed(Duration::days(1)).ok_or_else(malformed)?
    } else {
        date
    };

    let start = date.and_time(time_from);
    let end = end_date.and_time(time_to);
    log::debug!("parsed time range {:?} as {} - {}", range, start, end);
    Ok((start, end))
}

/// Parse a compact shift string and split it into day and night hours.
pub fn day_night_hours_from_range(range: &str) -> Result<DayNightSplit> {
    let (from, to) = time_range(range)?;
    daynight_hours(from, to)
}

/// Checks if two time ranges overlap
pub fn do_overlap(
    from1: NaiveDateTime,
    to1: NaiveDateTime,
    from2: NaiveDateTime,
    to2: NaiveDateTime,
) -> bool {
    from1 < to2 && from2 < to1
}

/// Parse an ISO date-time (`T` or space separated); a bare date means midnight.
pub fn iso2dtime(iso: &str) -> Result<NaiveDateTime> {
    let iso = iso.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(iso, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(iso, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| Error::MalformedDate(iso.to_string()))
}
