//! Number formatting in the style of a default C++ output stream
//!
//! A default stream prints doubles like `printf("%g")`: a fixed number of
//! significant digits, trailing zeros removed, and exponent notation when
//! the decimal exponent is below -4 or at least the precision.

/// Format `value` with `significant_digits` significant digits, `%g` style
///
/// ```rust
/// use sorted_report::format_general;
///
/// assert_eq!(format_general(4.75, 6), "4.75");
/// assert_eq!(format_general(5.583333333333333, 6), "5.58333");
/// assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
/// assert_eq!(format_general(0.00001, 6), "1e-05");
/// ```
pub fn format_general(value: f64, significant_digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = significant_digits.max(1);
    // The exponent is taken after rounding, so 999999.5 becomes 1e+06
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Drop trailing zeros of a fractional part, and the point if nothing remains
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Space-separated list of values, or `(none)` when empty
pub(crate) fn format_list(values: &[f64], significant_digits: usize) -> String {
    if values.is_empty() {
        return "(none)".to_string();
    }
    values
        .iter()
        .map(|&v| format_general(v, significant_digits))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_and_short_fractions() {
        assert_eq!(format_general(3.0, 6), "3");
        assert_eq!(format_general(-42.0, 6), "-42");
        assert_eq!(format_general(107.0, 6), "107");
        assert_eq!(format_general(4.75, 6), "4.75");
        assert_eq!(format_general(0.5, 6), "0.5");
        assert_eq!(format_general(123456.0, 6), "123456");
    }

    #[test]
    fn test_rounds_to_significant_digits() {
        assert_eq!(format_general(2.362907813126304, 6), "2.36291");
        assert_eq!(format_general(13.935731788817115, 6), "13.9357");
        assert_eq!(format_general(0.4357317888171153, 6), "0.435732");
        assert_eq!(format_general(123456.7, 6), "123457");
        assert_eq!(format_general(1.0 / 3.0, 3), "0.333");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(format_general(1_000_000.0, 6), "1e+06");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(999999.5, 6), "1e+06");
        assert_eq!(format_general(0.00001, 6), "1e-05");
        assert_eq!(format_general(-2.5e-7, 6), "-2.5e-07");
        assert_eq!(format_general(1.5e123, 6), "1.5e+123");
    }

    #[test]
    fn test_small_values_stay_fixed_down_to_1e_minus_4() {
        assert_eq!(format_general(0.0001, 6), "0.0001");
        assert_eq!(format_general(0.000123456, 6), "0.000123456");
    }

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(-0.0, 6), "-0");
        assert_eq!(format_general(f64::NAN, 6), "nan");
        assert_eq!(format_general(f64::INFINITY, 6), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, 6), "-inf");
    }

    #[test]
    fn test_zero_precision_behaves_like_one() {
        assert_eq!(format_general(47.0, 0), "5e+01");
        assert_eq!(format_general(4.7, 0), "5");
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[], 6), "(none)");
        assert_eq!(format_list(&[3.0, 12.5], 6), "3 12.5");
    }
}
