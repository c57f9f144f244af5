use chrono::NaiveDate;

use crate::error::{Error, Result};

const GREEK_DATE_FORMAT: &str = "%d/%m/%Y";

fn split3<'a>(s: &'a str, sep: char) -> Result<[&'a str; 3]> {
    let parts: Vec<&str> = s.trim().split(sep).collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(Error::MalformedDate(s.to_string())),
    }
}

/// Convert an ISO date string (`YYYY-MM-DD`) to Greek form (`DD/MM/YYYY`).
///
/// The parts are moved around as text; no calendar validation is done.
pub fn iso2gr(iso: &str) -> Result<String> {
    let [year, month, day] = split3(iso, '-')?;
    Ok(format!("{}/{}/{}", day, month, year))
}

/// Convert a Greek date string (`DD/MM/YYYY`) to ISO form (`YYYY-MM-DD`).
pub fn gr2iso(gr: &str) -> Result<String> {
    let [day, month, year] = split3(gr, '/')?;
    Ok(format!("{}-{}-{}", year, month, day))
}

/// Format a date as `DD/MM/YYYY`.
pub fn date2gr(date: NaiveDate) -> String {
    date.format(GREEK_DATE_FORMAT).to_string()
}

/// Parse a `DD/MM/YYYY` date.
pub fn gr2date(gr: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(gr.trim(), GREEK_DATE_FORMAT)
        .map_err(|_| Error::MalformedDate(gr.to_string()))
}

/// `2023-01-15` => `2023-01`
pub fn iso2yearmonth(iso: &str) -> Result<&str> {
    iso.get(..7)
        .filter(|ym| ym.as_bytes().get(4) == Some(&b'-'))
        .ok_or_else(|| Error::MalformedDate(iso.to_string()))
}

/// True when `s` starts with a `DD/MM/YYYY` shaped date.
pub fn is_greek_date(s: &str) -> bool {
    const SHAPE: &[u8] = b"dd/dd/dddd";
    let bytes = s.as_bytes();
    bytes.len() >= SHAPE.len()
        && SHAPE.iter().zip(bytes).all(|(shape, b)| match shape {
            b'd' => b.is_ascii_digit(),
            _ => b == shape,
        })
}
