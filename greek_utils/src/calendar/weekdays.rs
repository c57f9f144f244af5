//! Counting specific weekdays in a month.
//!
//! Weekday lists are written in Greek, using the names in
//! [`GREEK_WEEKDAYS`]:
//!
//! * `"ΠΑΡΑΣΚΕΥΗ"` - a single day
//! * `"ΔΕΥΤΕΡΑ,ΤΕΤΑΡΤΗ,ΠΑΡΑΣΚΕΥΗ"` - a list
//! * `"ΔΕΥΤΕΡΑ-ΠΑΡΑΣΚΕΥΗ"` - an inclusive range, wrapping past Sunday when
//!   the start comes after the end (`"ΠΑΡΑΣΚΕΥΗ-ΔΕΥΤΕΡΑ"` is Friday to Monday)
//!
//! Names are compared after [`grup`] so `"Δευτέρα"` is accepted as well.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::grup;

/// Greek weekday names, Monday first.
pub const GREEK_WEEKDAYS: [(&str, Weekday); 7] = [
    ("ΔΕΥΤΕΡΑ", Weekday::Mon),
    ("ΤΡΙΤΗ", Weekday::Tue),
    ("ΤΕΤΑΡΤΗ", Weekday::Wed),
    ("ΠΕΜΠΤΗ", Weekday::Thu),
    ("ΠΑΡΑΣΚΕΥΗ", Weekday::Fri),
    ("ΣΑΒΒΑΤΟ", Weekday::Sat),
    ("ΚΥΡΙΑΚΗ", Weekday::Sun),
];

/// Monday to Friday.
pub const DEFAULT_WEEKDAYS: &str = "ΔΕΥΤΕΡΑ-ΠΑΡΑΣΚΕΥΗ";

/// Greek name of a weekday.
pub fn greek_name(day: Weekday) -> &'static str {
    GREEK_WEEKDAYS[day.num_days_from_monday() as usize].0
}

fn lookup(name: &str) -> Result<Weekday> {
    let name = name.trim();
    let key = grup(name);
    GREEK_WEEKDAYS
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, day)| *day)
        .ok_or_else(|| Error::UnknownWeekday(name.to_string()))
}

fn weekday_at(index: u32) -> Weekday {
    GREEK_WEEKDAYS[(index % 7) as usize].1
}

/// A set of weekdays, indexed Monday = 0 to Sunday = 6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const EMPTY: WeekdaySet = WeekdaySet(0);
    pub const MONDAY_TO_FRIDAY: WeekdaySet = WeekdaySet(0b001_1111);

    /// Build a set from weekday indices (0 = Monday ... 6 = Sunday).
    pub fn from_indices<I: IntoIterator<Item = u32>>(indices: I) -> Result<Self> {
        indices
            .into_iter()
            .map(|i| {
                if i < 7 {
                    Ok(weekday_at(i))
                } else {
                    Err(Error::UnknownWeekday(format!("index {}", i)))
                }
            })
            .collect()
    }

    /// Parse a Greek weekday list (single name, list or range).
    pub fn parse_greek(days: &str) -> Result<Self> {
        let set = if let Some((start, end)) = days.split_once('-') {
            let start = lookup(start)?.num_days_from_monday();
            let mut end = lookup(end)?.num_days_from_monday();
            if start > end {
                end += 7;
            }
            (start..=end).map(weekday_at).collect()
        } else if days.contains(',') {
            days.split(',').map(lookup).collect::<Result<WeekdaySet>>()?
        } else {
            std::iter::once(lookup(days)?).collect()
        };
        log::debug!("weekday list {:?} parsed as {}", days, set);
        Ok(set)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.num_days_from_monday();
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_monday()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        (0..7).map(weekday_at).filter(move |d| self.contains(*d))
    }

    /// Indices of the members (0 = Monday).
    pub fn indices(&self) -> Vec<u32> {
        self.iter().map(|d| d.num_days_from_monday()).collect()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        let mut set = WeekdaySet::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl FromStr for WeekdaySet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        WeekdaySet::parse_greek(s)
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(greek_name).collect();
        write!(f, "{{{}}}", names.join(","))
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::InvalidDate(format!("{:04}-{:02}-01", year, month)))
}

/// All dates of a month, in order.
pub(crate) fn month_days(year: i32, month: u32) -> Result<impl Iterator<Item = NaiveDate>> {
    let first = first_of_month(year, month)?;
    Ok(first.iter_days().take_while(move |d| d.month() == month))
}

/// Returns the number of days in a month for a given year.
pub fn month_total_days(year: i32, month: u32) -> Result<u32> {
    Ok(month_days(year, month)?.count() as u32)
}

/// Number of days in `(year, month)` whose weekday is in `weekdays`.
///
/// # Errors
/// [`Error::InvalidMonth`] when `month` is outside 1..=12.
///
/// # Example
/// ```
/// use greek_utils::calendar::{month_specific_days, WeekdaySet};
///
/// let thu_fri = WeekdaySet::from_indices([3, 4]).unwrap();
/// assert_eq!(month_specific_days(2026, 1, &thu_fri).unwrap(), 10);
/// ```
pub fn month_specific_days(year: i32, month: u32, weekdays: &WeekdaySet) -> Result<u32> {
    let count = month_days(year, month)?
        .filter(|d| weekdays.contains(d.weekday()))
        .count();
    Ok(count as u32)
}

/// Same as [`month_specific_days`] with Greek weekday names.
///
/// `None` counts Monday to Friday ([`DEFAULT_WEEKDAYS`]).
///
/// # Errors
/// [`Error::UnknownWeekday`] for a name outside the vocabulary,
/// [`Error::InvalidMonth`] when `month` is outside 1..=12.
pub fn month_specific_days_gr(year: i32, month: u32, days: Option<&str>) -> Result<u32> {
    let weekdays = WeekdaySet::parse_greek(days.unwrap_or(DEFAULT_WEEKDAYS))?;
    month_specific_days(year, month, &weekdays)
}

/// Monday to Friday days in a month.
pub fn month_monday2friday_days(year: i32, month: u32) -> Result<u32> {
    month_specific_days(year, month, &WeekdaySet::MONDAY_TO_FRIDAY)
}
