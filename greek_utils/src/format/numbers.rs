use crate::error::{Error, Result};

/// Convert a Greek-formatted number (`1.234.567,89`) to `f64`.
pub fn gr2float(gr: &str) -> Result<f64> {
    let standard = gr.trim().replace('.', "").replace(',', ".");
    standard
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber(gr.to_string()))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format a number the Greek way (`1.234.567,89`) with `decimals` places.
///
/// # Example
/// ```
/// use greek_utils::format::float2gr;
///
/// assert_eq!(float2gr(-1234.56, 2), "-1.234,56");
/// ```
pub fn float2gr(number: f64, decimals: usize) -> String {
    if !number.is_finite() {
        return number.to_string();
    }
    let standard = format!("{:.*}", decimals, number.abs());
    let (int_part, frac_part) = match standard.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (standard.as_str(), None),
    };

    let mut out = String::new();
    if number.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// Same as [`float2gr`], but zero formats as an empty string.
pub fn float2gr_empty_zero(number: f64, decimals: usize) -> String {
    if number == 0.0 {
        return String::new();
    }
    float2gr(number, decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gr2float() {
        let cases = [
            ("1.234,56", 1234.56),
            ("-1.234,56", -1234.56),
            ("1.234,564", 1234.564),
            ("12.345.678,90", 12345678.90),
            ("0,99", 0.99),
        ];
        for (input, expected) in cases {
            assert_eq!(gr2float(input).unwrap(), expected, "{input}");
        }
        assert!(matches!(gr2float("1,2,3"), Err(Error::InvalidNumber(_))));
    }

    #[test]
    fn test_float2gr() {
        let cases = [
            (1234.56, "1.234,56"),
            (-1234.56, "-1.234,56"),
            (12345678.90, "12.345.678,90"),
            (0.99, "0,99"),
            (0.0, "0,00"),
            (999.0, "999,00"),
            (100000.0, "100.000,00"),
        ];
        for (number, expected) in cases {
            assert_eq!(float2gr(number, 2), expected, "{number}");
        }
        assert_eq!(float2gr(1234.4, 0), "1.234");
    }

    #[test]
    fn test_float2gr_empty_zero() {
        assert_eq!(float2gr_empty_zero(0.0, 2), "");
        assert_eq!(float2gr_empty_zero(1500.0, 2), "1.500,00");
    }
}
