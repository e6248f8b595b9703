//! Display formatting for metric cells.
//!
//! Every numeric cell renders with exactly two decimals. Rounding is
//! half-away-from-zero on the value's decimal text, so "1.005" renders
//! "1.01" even though the nearest f64 sits just below 1.005. Values that do
//! not parse as a finite number render as "NaN" (quirk of the original
//! client, kept).

use crate::models::MetricValue;

/// Format one metric cell for the results table.
pub fn format_metric(value: &MetricValue) -> String {
    let text = value.as_text();
    let text = text.trim();

    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => {
            round_decimal_text(text).unwrap_or_else(|| format!("{:.2}", v))
        }
        _ => "NaN".to_string(),
    }
}

/// Round a plain decimal literal to two places, half-away-from-zero.
///
/// Returns `None` for forms that are not plain decimals (exponents); the
/// caller falls back to f64 formatting for those.
fn round_decimal_text(text: &str) -> Option<String> {
    if text.contains(['e', 'E']) {
        return None;
    }

    let (sign, rest) = match text.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };
    let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, ""));
    if int_part.chars().any(|c| !c.is_ascii_digit())
        || frac_part.chars().any(|c| !c.is_ascii_digit())
    {
        return None;
    }

    // One digit vector covering integer digits plus two kept fraction
    // digits, so the rounding carry can ripple all the way up.
    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    if digits.is_empty() {
        digits.push(0);
    }
    let frac: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    digits.push(*frac.first().unwrap_or(&0));
    digits.push(*frac.get(1).unwrap_or(&0));

    if frac.get(2).is_some_and(|&d| d >= 5) {
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                break;
            }
        }
        if digits.iter().all(|&d| d == 0) {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let int_str: String = digits[..split].iter().map(|d| (d + b'0') as char).collect();
    let frac_str: String = digits[split..].iter().map(|d| (d + b'0') as char).collect();
    let int_str = int_str.trim_start_matches('0');
    let int_str = if int_str.is_empty() { "0" } else { int_str };

    Some(format!("{}{}.{}", sign, int_str, frac_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(text: &str) -> String {
        format_metric(&MetricValue::Text(text.to_string()))
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(fmt("1.005"), "1.01");
        assert_eq!(fmt("95.123"), "95.12");
        assert_eq!(fmt("-1.005"), "-1.01");
    }

    #[test]
    fn pads_short_fractions() {
        assert_eq!(fmt("0"), "0.00");
        assert_eq!(fmt("2"), "2.00");
        assert_eq!(fmt("0.5"), "0.50");
        assert_eq!(fmt("10"), "10.00");
    }

    #[test]
    fn carry_ripples_through_integer_digits() {
        assert_eq!(fmt("9.995"), "10.00");
        assert_eq!(fmt("99.999"), "100.00");
        assert_eq!(fmt("0.999"), "1.00");
    }

    #[test]
    fn non_numeric_renders_nan() {
        assert_eq!(fmt(""), "NaN");
        assert_eq!(fmt("n/a"), "NaN");
        assert_eq!(fmt("12.3.4"), "NaN");
        assert_eq!(fmt("inf"), "NaN");
    }

    #[test]
    fn json_numbers_format_like_their_text() {
        assert_eq!(format_metric(&MetricValue::Number(1.005)), "1.01");
        assert_eq!(format_metric(&MetricValue::Number(20.0)), "20.00");
        assert_eq!(format_metric(&MetricValue::Number(f64::NAN)), "NaN");
    }

    #[test]
    fn exponent_forms_fall_back_to_float_formatting() {
        assert_eq!(fmt("1e2"), "100.00");
        assert_eq!(fmt("1.5e-2"), "0.01");
    }
}
