//! Orthodox Easter and the Greek public holiday calendar.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::weekdays::{month_days, WeekdaySet};
use crate::error::{Error, Result};

pub const NEW_YEAR: &str = "Πρωτοχρονιά";
pub const EPIPHANY: &str = "Θεοφάνεια";
pub const CLEAN_MONDAY: &str = "Καθαρά Δευτέρα";
pub const ANNUNCIATION: &str = "Ευαγγελισμός της Θεοτόκου";
pub const GOOD_FRIDAY: &str = "Μεγάλη Παρασκευή";
pub const EASTER_SUNDAY: &str = "Κυριακή του Πάσχα";
pub const EASTER_MONDAY: &str = "Δευτέρα του Πάσχα";
pub const LABOUR_DAY: &str = "Πρωτομαγιά";
pub const HOLY_SPIRIT_MONDAY: &str = "Αγίου Πνεύματος";
pub const DORMITION: &str = "Κοίμηση της Θεοτόκου";
pub const OHI_DAY: &str = "Επέτειος του Όχι";
pub const CHRISTMAS: &str = "Χριστούγεννα";
pub const SYNAXIS: &str = "Σύναξη της Θεοτόκου";

/// Holidays on a fixed calendar day: (name, month, day).
const FIXED_HOLIDAYS: [(&str, u32, u32); 8] = [
    (NEW_YEAR, 1, 1),
    (EPIPHANY, 1, 6),
    (ANNUNCIATION, 3, 25),
    (LABOUR_DAY, 5, 1),
    (DORMITION, 8, 15),
    (OHI_DAY, 10, 28),
    (CHRISTMAS, 12, 25),
    (SYNAXIS, 12, 26),
];

/// Holidays relative to Easter Sunday: (name, offset in days).
const EASTER_HOLIDAYS: [(&str, i64); 5] = [
    (CLEAN_MONDAY, -48),
    (GOOD_FRIDAY, -2),
    (EASTER_SUNDAY, 0),
    (EASTER_MONDAY, 1),
    (HOLY_SPIRIT_MONDAY, 50),
];

/// Julian to Gregorian calendar offset, constant from 1900 to 2099.
const JULIAN_GREGORIAN_OFFSET: i64 = 13;

fn invalid_year(year: i32) -> Error {
    Error::InvalidDate(format!("year {} is outside the supported calendar", year))
}

/// Orthodox Easter Sunday for `year`, on the Gregorian calendar.
///
/// Uses the Meeus Julian algorithm and shifts the result by 13 days, which
/// only holds for years 1900 to 2099. Years outside that band still produce
/// a date but it is not a correct Easter.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use greek_utils::calendar::orthodox_easter;
///
/// assert_eq!(orthodox_easter(2024).unwrap(), NaiveDate::from_ymd_opt(2024, 5, 5).unwrap());
/// ```
pub fn orthodox_easter(year: i32) -> Result<NaiveDate> {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .and_then(|julian| julian.checked_add_signed(Duration::days(JULIAN_GREGORIAN_OFFSET)))
        .ok_or_else(|| invalid_year(year))
}

/// A named holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub name: &'static str,
    pub date: NaiveDate,
}

/// The Greek holidays of one year, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayTable {
    year: i32,
    holidays: Vec<Holiday>,
}

impl HolidayTable {
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Date of the holiday called `name`.
    pub fn get(&self, name: &str) -> Option<NaiveDate> {
        self.holidays.iter().find(|h| h.name == name).map(|h| h.date)
    }

    /// Name of the holiday falling on `date`, if any.
    pub fn on(&self, date: NaiveDate) -> Option<&'static str> {
        self.holidays.iter().find(|h| h.date == date).map(|h| h.name)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.on(date).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Name to date mapping.
    pub fn to_map(&self) -> BTreeMap<&'static str, NaiveDate> {
        self.holidays.iter().map(|h| (h.name, h.date)).collect()
    }
}

impl<'a> IntoIterator for &'a HolidayTable {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.iter()
    }
}

/// Fixed and Easter-related Greek holidays of `year`.
///
/// Eight holidays fall on fixed dates; Clean Monday, Good Friday, Easter
/// Sunday, Easter Monday and Holy Spirit Monday follow [`orthodox_easter`].
///
/// # Errors
///
/// [`Error::InvalidDate`] only when a holiday of `year` falls outside the
/// range chrono can represent. Every year from 1900 to 2099 succeeds.
pub fn greek_holidays(year: i32) -> Result<HolidayTable> {
    let easter = orthodox_easter(year)?;

    let mut holidays = Vec::with_capacity(FIXED_HOLIDAYS.len() + EASTER_HOLIDAYS.len());
    for (name, month, day) in FIXED_HOLIDAYS {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid_year(year))?;
        holidays.push(Holiday { name, date });
    }
    for (name, offset) in EASTER_HOLIDAYS {
        let date = easter
            .checked_add_signed(Duration::days(offset))
            .ok_or_else(|| invalid_year(year))?;
        holidays.push(Holiday { name, date });
    }
    holidays.sort_by_key(|h| h.date);

    Ok(HolidayTable { year, holidays })
}

/// Monday to Friday days of a month that are not Greek holidays.
pub fn month_business_days(year: i32, month: u32) -> Result<u32> {
    let holidays = greek_holidays(year)?;
    let count = month_days(year, month)?
        .filter(|d| WeekdaySet::MONDAY_TO_FRIDAY.contains(d.weekday()))
        .filter(|d| !holidays.is_holiday(*d))
        .count();
    Ok(count as u32)
}
