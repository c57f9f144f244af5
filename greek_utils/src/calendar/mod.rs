//! Calendar utilities: weekday counting and Greek holidays.
//!
//! # Modules
//!
//! - [`weekdays`]: Greek weekday names and per-month weekday counts
//! - [`holidays`]: Orthodox Easter and the Greek holiday table
//!
//! # Example
//!
//! ```
//! use greek_utils::calendar::{greek_holidays, month_specific_days_gr, EASTER_SUNDAY};
//!
//! // Wednesday through Monday, wrapping past Sunday
//! assert_eq!(month_specific_days_gr(2026, 1, Some("ΤΕΤΑΡΤΗ-ΔΕΥΤΕΡΑ")).unwrap(), 27);
//!
//! let holidays = greek_holidays(2024).unwrap();
//! assert_eq!(holidays.get(EASTER_SUNDAY).unwrap().to_string(), "2024-05-05");
//! ```

pub mod holidays;
pub mod weekdays;

pub use holidays::{
    greek_holidays, month_business_days, orthodox_easter, Holiday, HolidayTable, ANNUNCIATION,
    CHRISTMAS, CLEAN_MONDAY, DORMITION, EASTER_MONDAY, EASTER_SUNDAY, EPIPHANY, GOOD_FRIDAY,
    HOLY_SPIRIT_MONDAY, LABOUR_DAY, NEW_YEAR, OHI_DAY, SYNAXIS,
};
pub use weekdays::{
    greek_name, month_monday2friday_days, month_specific_days, month_specific_days_gr,
    month_total_days, WeekdaySet, DEFAULT_WEEKDAYS, GREEK_WEEKDAYS,
};
