use chrono::NaiveDateTime;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Absolute distance between two instants in tenths of an hour.
///
/// The hour quotient is rounded to one decimal on its exact binary value,
/// so 15m gives 2, 27m gives 5 and 3m gives 1.
pub(crate) fn delta_tenths(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let hours = (to - from).num_seconds().abs() as f64 / SECONDS_PER_HOUR;
    format!("{:.1}", hours)
        .replace('.', "")
        .parse()
        .unwrap_or_else(|_| (hours * 10.0).round() as i64)
}

#[inline]
pub(crate) fn tenths_to_hours(tenths: i64) -> f64 {
    tenths as f64 / 10.0
}

/// Hours between two instants, rounded to one decimal.
///
/// The order of the arguments does not matter.
///
/// # Example
/// ```
/// use chrono::NaiveDateTime;
/// use greek_utils::time::delta_hours;
///
/// let from = NaiveDateTime::parse_from_str("2024-06-15 10:30", "%Y-%m-%d %H:%M").unwrap();
/// let to = NaiveDateTime::parse_from_str("2024-06-15 13:15", "%Y-%m-%d %H:%M").unwrap();
/// assert_eq!(delta_hours(from, to), 2.8);
/// ```
pub fn delta_hours(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    tenths_to_hours(delta_tenths(from, to))
}

/// Hours rounded to the nearest half hour (ties to even).
pub fn round_half(hours: f64) -> f64 {
    (hours * 2.0).round_ties_even() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn test_delta_hours() {
        let cases = [
            ("2024-06-15T08:00", "2024-06-15T12:00", 4.0),
            ("2024-06-15T12:00", "2024-06-15T08:00", 4.0),
            ("2024-06-15T22:00", "2024-06-16T02:00", 4.0),
            ("2024-06-15T10:30", "2024-06-15T13:15", 2.8),
            ("2024-06-15T23:45", "2024-06-16T00:15", 0.5),
        ];
        for (from, to, expected) in cases {
            assert_eq!(delta_hours(dt(from), dt(to)), expected, "{from} -> {to}");
        }
    }

    #[test]
    fn test_delta_tenths_on_half_tenths() {
        let cases = [
            ("08:03", 1),
            ("08:09", 1),
            ("08:15", 2),
            ("08:21", 3),
            ("08:27", 5),
            ("08:33", 6),
            ("08:45", 8),
            ("08:51", 8),
            ("08:57", 9),
        ];
        for (to, expected) in cases {
            let to = format!("2024-01-01T{to}");
            assert_eq!(delta_tenths(dt("2024-01-01T08:00"), dt(&to)), expected, "{to}");
        }
    }

    #[test]
    fn test_delta_hours_beyond_one_day() {
        assert_eq!(delta_hours(dt("2024-01-01T08:00"), dt("2024-01-02T10:00")), 26.0);
    }

    #[test]
    fn test_round_half() {
        let cases = [(2.3, 2.5), (2.1, 2.0), (3.75, 4.0), (4.25, 4.0), (5.0, 5.0)];
        for (value, expected) in cases {
            assert_eq!(round_half(value), expected, "{value}");
        }
    }
}
