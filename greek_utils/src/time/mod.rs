pub mod daynight;
pub mod hours;
pub mod range;

pub use daynight::{
    daynight_hours, daynight_hours_in, DayNightSplit, DayWindow, DEFAULT_DAY_END,
    DEFAULT_DAY_START,
};
pub use hours::{delta_hours, round_half};
pub use range::{day_night_hours_from_range, do_overlap, iso2dtime, time_range};

pub(crate) use range::parse_time_of_day;
