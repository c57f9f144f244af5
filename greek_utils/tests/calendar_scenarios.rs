//! Month planning scenarios: weekday counts, holidays and Greek formatting.

use chrono::{Datelike, NaiveDate, Weekday};
use greek_utils::calendar::{
    greek_holidays, month_business_days, month_monday2friday_days, month_specific_days,
    month_specific_days_gr, orthodox_easter, WeekdaySet, CHRISTMAS, CLEAN_MONDAY, EASTER_MONDAY,
    GOOD_FRIDAY, HOLY_SPIRIT_MONDAY, SYNAXIS,
};
use greek_utils::format::{date2gr, float2gr, gr2date, gr2float, iso2gr};
use greek_utils::Error;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==================== Weekday counts ====================

#[test]
fn test_wrapping_weekday_range() {
    assert_eq!(month_specific_days_gr(2026, 1, Some("ΤΕΤΑΡΤΗ-ΔΕΥΤΕΡΑ")).unwrap(), 27);
}

#[test]
fn test_weekday_notations_agree() {
    let weekend = WeekdaySet::from_indices([5, 6]).unwrap();
    assert_eq!(month_specific_days(2024, 2, &weekend).unwrap(), 8);
    assert_eq!(month_specific_days_gr(2024, 2, Some("ΣΑΒΒΑΤΟ-ΚΥΡΙΑΚΗ")).unwrap(), 8);
    assert_eq!(month_specific_days_gr(2024, 2, Some("Σάββατο,Κυριακή")).unwrap(), 8);

    let parsed: WeekdaySet = "σαββατο-κυριακη".parse().unwrap();
    assert_eq!(parsed, weekend);
    assert!(parsed.contains(Weekday::Sun));
    assert!(!parsed.contains(Weekday::Fri));
}

#[test]
fn test_default_days_are_the_work_week() {
    for month in 1..=12 {
        assert_eq!(
            month_specific_days_gr(2025, month, None).unwrap(),
            month_monday2friday_days(2025, month).unwrap(),
            "month {month}"
        );
    }
}

#[test]
fn test_weekday_errors() {
    let monday = WeekdaySet::from_indices([0]).unwrap();
    assert!(matches!(
        month_specific_days(2024, 13, &monday),
        Err(Error::InvalidMonth(13))
    ));
    assert!(matches!(
        month_specific_days_gr(2024, 6, Some("INVALID_DAY")),
        Err(Error::UnknownWeekday(_))
    ));
    assert!(matches!(
        WeekdaySet::from_indices([7]),
        Err(Error::UnknownWeekday(_))
    ));
}

// ==================== Holidays ====================

#[test]
fn test_easter_2024() {
    let easter = orthodox_easter(2024).unwrap();
    assert_eq!(easter, ymd(2024, 5, 5));
    assert_eq!(easter.weekday(), Weekday::Sun);
}

#[test]
fn test_movable_holidays_2025() {
    let table = greek_holidays(2025).unwrap();
    assert_eq!(table.get(CLEAN_MONDAY), Some(ymd(2025, 3, 3)));
    assert_eq!(table.get(GOOD_FRIDAY), Some(ymd(2025, 4, 18)));
    assert_eq!(table.get(EASTER_MONDAY), Some(ymd(2025, 4, 21)));
    assert_eq!(table.get(HOLY_SPIRIT_MONDAY), Some(ymd(2025, 6, 9)));
    assert_eq!(table.on(ymd(2025, 12, 25)), Some(CHRISTMAS));
    assert_eq!(table.on(ymd(2025, 12, 26)), Some(SYNAXIS));
}

#[test]
fn test_business_days_skip_holidays() {
    let cases = [
        (2025, 4, 22, 20),
        (2025, 6, 21, 20),
        (2025, 12, 23, 21),
    ];
    for (year, month, weekdays, business) in cases {
        assert_eq!(month_monday2friday_days(year, month).unwrap(), weekdays);
        assert_eq!(month_business_days(year, month).unwrap(), business, "{year}-{month}");
    }
}

#[test]
fn test_holiday_table_serializes_in_date_order() {
    let table = greek_holidays(2024).unwrap();
    let json = serde_json::to_value(&table).unwrap();
    let holidays = json["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 13);
    assert_eq!(holidays[0]["date"], "2024-01-01");
    assert_eq!(holidays[12]["date"], "2024-12-26");
}

// ==================== Formatting ====================

#[test]
fn test_holiday_dates_in_greek_form() {
    let table = greek_holidays(2024).unwrap();
    let easter_monday = table.get(EASTER_MONDAY).unwrap();
    assert_eq!(date2gr(easter_monday), "06/05/2024");
    assert_eq!(gr2date("06/05/2024").unwrap(), easter_monday);
    assert_eq!(iso2gr(&easter_monday.to_string()).unwrap(), "06/05/2024");
}

#[test]
fn test_monthly_hours_in_greek_form() {
    let total = 20.0 * 8.0 + 2.5;
    let formatted = float2gr(total * 12.0, 2);
    assert_eq!(formatted, "1.950,00");
    assert_eq!(gr2float(&formatted).unwrap(), 1950.0);
}
