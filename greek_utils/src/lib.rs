//! greek-utils - date, number and text helpers for Greek business applications
//!
//! - [`time`]: day/night hour splits of shifts, compact shift strings
//! - [`calendar`]: weekday counts per month, Orthodox Easter, Greek holidays
//! - [`format`]: Greek date and number strings
//! - [`text`]: accent and case insensitive Greek comparison
//! - [`validators`]: AFM and AMKA checksums
//! - [`query`]: operator based record filtering
//! - [`config`]: TOML settings for the day window and work week
//!
//! ```
//! use greek_utils::{day_night_hours_from_range, month_specific_days_gr};
//!
//! let shift = day_night_hours_from_range("2024-01-01 18:00 08:00").unwrap();
//! assert_eq!((shift.day_hours(), shift.night_hours()), (6.0, 8.0));
//!
//! assert_eq!(month_specific_days_gr(2024, 6, None).unwrap(), 20);
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod query;
pub mod text;
pub mod time;
pub mod validators;

pub use calendar::{
    greek_holidays, month_business_days, month_monday2friday_days, month_specific_days,
    month_specific_days_gr, month_total_days, orthodox_easter, HolidayTable, WeekdaySet,
};
pub use config::Settings;
pub use error::{Error, Result};
pub use format::{
    date2gr, float2gr, float2gr_empty_zero, gr2date, gr2float, gr2iso, is_greek_date, iso2gr,
    iso2yearmonth,
};
pub use query::{compare_values, find, Criterion, Operator};
pub use text::{are_texts_equal, grup};
pub use time::{
    day_night_hours_from_range, daynight_hours, delta_hours, do_overlap, round_half, time_range,
    DayNightSplit, DayWindow,
};
pub use validators::{is_valid_afm, is_valid_amka};
