//! Day/night classification of working hours.
//!
//! A shift is split into hours that fall inside the day window
//! (`06:00`-`22:00` by default) and hours that fall outside it. The split is
//! computed against four anchors taken from the calendar date of the shift
//! start:
//!
//! ```text
//!       day_start      day_end   next_day_start   next_day_end
//!  0    6              22        6                22
//!  -----|---------------|--------|----------------|--
//!    *-*|               |        |                    EarlyNight
//!    *--|----------*    |        |                    EarlyNightIntoDay
//!       |  *--------*   |        |                    Day
//!       |            *--|------* |                    DayIntoNight
//!       |             *-|--------|--*                 DayThroughNight
//!       |               |   *---*|                    LateNight
//!       |               |   *----|-------*            LateNightIntoDay
//! ```
//!
//! A shift that starts before or exactly at `day_start` and ends after
//! `day_end`, or one that runs past `next_day_end`, is rejected.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::hours::{delta_tenths, tenths_to_hours};
use crate::error::{Error, Result};

const fn hm(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(t) => t,
        None => panic!("invalid time of day"),
    }
}

/// Default start of the day window.
pub const DEFAULT_DAY_START: NaiveTime = hm(6, 0);

/// Default end of the day window.
pub const DEFAULT_DAY_END: NaiveTime = hm(22, 0);

/// Hours of a shift split into day and night portions.
///
/// Both parts are non-negative and rounded to one decimal independently, so
/// [`total_hours`](Self::total_hours) can differ from a single rounding of
/// the whole span by up to 0.1.
///
/// # Examples
///
/// ```
/// use greek_utils::time::day_night_hours_from_range;
///
/// let hours = day_night_hours_from_range("2024-01-01T21:00T07:00").unwrap();
/// assert_eq!(hours.day_hours(), 2.0);
/// assert_eq!(hours.night_hours(), 8.0);
/// assert_eq!(hours.total_hours(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayNightSplit {
    day_hours: f64,
    night_hours: f64,
}

impl DayNightSplit {
    fn from_tenths(day: i64, night: i64) -> Self {
        Self {
            day_hours: tenths_to_hours(day),
            night_hours: tenths_to_hours(night),
        }
    }

    pub fn day_hours(&self) -> f64 {
        self.day_hours
    }

    pub fn night_hours(&self) -> f64 {
        self.night_hours
    }

    pub fn total_hours(&self) -> f64 {
        self.day_hours + self.night_hours
    }
}

/// The `[start, end)` window of wall-clock time counted as day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl Default for DayWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_DAY_START,
            end: DEFAULT_DAY_END,
        }
    }
}

impl DayWindow {
    /// Creates a day window; `start` must be strictly before `end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(Error::Config(format!(
                "day window start {} must be before end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    fn anchors(&self, date: NaiveDate) -> Option<Anchors> {
        let day_start = date.and_time(self.start);
        let day_end = date.and_time(self.end);
        Some(Anchors {
            day_start,
            day_end,
            next_day_start: day_start.checked_add_signed(Duration::days(1))?,
            next_day_end: day_end.checked_add_signed(Duration::days(1))?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Anchors {
    day_start: NaiveDateTime,
    day_end: NaiveDateTime,
    next_day_start: NaiveDateTime,
    next_day_end: NaiveDateTime,
}

/// Position of a shift relative to the anchors of its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    EarlyNight,
    EarlyNightIntoDay,
    Day,
    DayIntoNight,
    DayThroughNight,
    LateNight,
    LateNightIntoDay,
}

impl Span {
    fn classify(a: &Anchors, from: NaiveDateTime, to: NaiveDateTime) -> Option<Span> {
        if to <= from {
            return None;
        }

        if from < a.day_start && to <= a.day_start {
            Some(Span::EarlyNight)
        } else if from < a.day_start && to <= a.day_end {
            Some(Span::EarlyNightIntoDay)
        } else if a.day_start <= from && to <= a.day_end {
            Some(Span::Day)
        } else if a.day_start < from && from < a.day_end && to <= a.next_day_start {
            Some(Span::DayIntoNight)
        } else if a.day_start < from && from < a.day_end && to <= a.next_day_end {
            Some(Span::DayThroughNight)
        } else if a.day_end <= from && from < a.next_day_start && to <= a.next_day_start {
            Some(Span::LateNight)
        } else if a.day_end <= from && from < a.next_day_start && to <= a.next_day_end {
            Some(Span::LateNightIntoDay)
        } else {
            None
        }
    }

    /// `(day, night)` tenths of an hour, each leg rounded on its own.
    fn tenths(self, a: &Anchors, from: NaiveDateTime, to: NaiveDateTime) -> (i64, i64) {
        let t = delta_tenths;
        match self {
            Span::EarlyNight | Span::LateNight => (0, t(from, to)),
            Span::EarlyNightIntoDay => (t(a.day_start, to), t(from, a.day_start)),
            Span::Day => (t(from, to), 0),
            Span::DayIntoNight => (t(from, a.day_end), t(a.day_end, to)),
            Span::DayThroughNight => (
                t(from, a.day_end) + t(a.next_day_start, to),
                t(a.day_end, a.next_day_start),
            ),
            Span::LateNightIntoDay => (t(a.next_day_start, to), t(from, a.next_day_start)),
        }
    }
}

/// Splits the span between two instants into day and night hours using the
/// default `06:00`-`22:00` day window.
///
/// # Errors
///
/// [`Error::InvalidRange`] if `to` is not after `from`, or the span cannot be
/// classified against the day window of `from`'s date.
pub fn daynight_hours(from: NaiveDateTime, to: NaiveDateTime) -> Result<DayNightSplit> {
    daynight_hours_in(&DayWindow::default(), from, to)
}

/// Same as [`daynight_hours`] with an explicit day window.
pub fn daynight_hours_in(
    window: &DayWindow,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Result<DayNightSplit> {
    let anchors = window
        .anchors(from.date())
        .ok_or(Error::InvalidRange { from, to })?;
    let span = Span::classify(&anchors, from, to).ok_or(Error::InvalidRange { from, to })?;
    log::debug!("{} - {} classified as {:?}", from, to, span);

    let (day, night) = span.tenths(&anchors, from, to);
    Ok(DayNightSplit::from_tenths(day, night))
}
