//! Checksum validation of Greek identifiers.
//!
//! * AFM (ΑΦΜ) - 9 digit tax registration number with a mod-11 check digit
//! * AMKA (ΑΜΚΑ) - 11 digit social security number: birth date `DDMMYY`,
//!   serial, and a Luhn check digit

use chrono::NaiveDate;

fn digits(s: &str, len: usize) -> Option<Vec<u32>> {
    if s.len() != len {
        return None;
    }
    s.chars().map(|c| c.to_digit(10)).collect()
}

/// Validate a Greek tax registration number (AFM).
pub fn is_valid_afm(afm: &str) -> bool {
    let Some(d) = digits(afm, 9) else {
        return false;
    };
    if d.iter().all(|&x| x == 0) {
        return false;
    }

    let sum: u32 = d[..8]
        .iter()
        .enumerate()
        .map(|(i, &x)| x << (8 - i))
        .sum();
    sum % 11 % 10 == d[8]
}

fn luhn(d: &[u32]) -> bool {
    let sum: u32 = d
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &x)| {
            if i % 2 == 1 {
                let doubled = x * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                x
            }
        })
        .sum();
    sum % 10 == 0
}

/// Validate a Greek social security number (AMKA).
///
/// The first six digits must be a real `DDMMYY` date. The century is not
/// encoded, so any year that makes the date valid is accepted (29/02 passes
/// for `00`, `04`, ...).
pub fn is_valid_amka(amka: &str) -> bool {
    let Some(d) = digits(amka, 11) else {
        return false;
    };

    let day = d[0] * 10 + d[1];
    let month = d[2] * 10 + d[3];
    let yy = (d[4] * 10 + d[5]) as i32;
    // 2000 + yy is a leap year whenever any century reading of yy is
    if NaiveDate::from_ymd_opt(2000 + yy, month, day).is_none() {
        return false;
    }

    luhn(&d)
}
