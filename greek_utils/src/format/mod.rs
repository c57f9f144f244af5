//! Greek date and number formatting.
//!
//! - [`dates`]: ISO `YYYY-MM-DD` and Greek `DD/MM/YYYY` date strings
//! - [`numbers`]: Greek number strings with `.` thousands and `,` decimals

pub mod dates;
pub mod numbers;

pub use dates::{date2gr, gr2date, gr2iso, is_greek_date, iso2gr, iso2yearmonth};
pub use numbers::{float2gr, float2gr_empty_zero, gr2float};
