use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Decimal places used for every result unless configured otherwise
pub const DEFAULT_PRECISION: usize = 2;

/// Format a converted value followed by its unit label, e.g. "212.00 Fahrenheit"
pub fn format_result(value: f64, unit: &str) -> String {
    format_result_with(value, unit, DEFAULT_PRECISION)
}

pub fn format_result_with(value: f64, unit: &str, precision: usize) -> String {
    format!("{} {}", format_amount(value, precision), unit)
}

/// Round half away from zero on the shortest decimal form of `value`,
/// so 0.125 becomes "0.13" rather than the binary-tie "0.12".
pub fn format_amount(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let scale = precision as u32;
            let mut rounded =
                decimal.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(scale);
            rounded.to_string()
        }
        // Beyond Decimal's 96-bit range
        Err(_) => format!("{:.*}", precision, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(212.0, "Fahrenheit"), "212.00 Fahrenheit");
        assert_eq!(format_result(1.609_34, "Kilometers"), "1.61 Kilometers");
        assert_eq!(format_result(0.5, ""), "0.50 ");
    }

    #[test]
    fn test_format_precision() {
        assert_eq!(format_result_with(3.14159, "Meters", 4), "3.1416 Meters");
        assert_eq!(format_result_with(2.6, "Grams", 0), "3 Grams");
        assert_eq!(format_amount(50.0, 2), "50.00");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_amount(0.125, 2), "0.13");
        assert_eq!(format_amount(1.005, 2), "1.01");
        assert_eq!(format_amount(-0.125, 2), "-0.13");
        assert_eq!(format_amount(2.5, 0), "3");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_amount(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_amount(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(format_amount(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_values_outside_decimal_range() {
        let huge = format_amount(1e300, 2);
        assert!(huge.starts_with("1000"));
        assert!(huge.ends_with(".00"));
    }
}
