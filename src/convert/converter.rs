use crate::convert::formatter::format_result;
use crate::units::{from_kilograms, from_meters, to_kilograms, to_meters, Category};

/// Convert `value` from one unit to another within `category` and format the
/// result with two decimals followed by the destination unit label.
///
/// Unknown categories and units never fail; they pass the input through.
pub fn convert(value: f64, from: &str, to: &str, category: &str) -> String {
    let result = convert_value(value, from, to, Category::from_label(category));
    format_result(result, to)
}

/// Numeric core of [`convert`]
///
/// Temperature uses direct pairwise formulas. Length and weight go through a
/// pivot unit (meters, kilograms); when the destination unit is unknown the
/// original input value is returned rather than the pivot value.
pub fn convert_value(value: f64, from: &str, to: &str, category: Category) -> f64 {
    match category {
        Category::Temperature => match (from, to) {
            ("Celsius", "Fahrenheit") => value * 9.0 / 5.0 + 32.0,
            ("Fahrenheit", "Celsius") => (value - 32.0) * 5.0 / 9.0,
            _ => value,
        },
        Category::Length => from_meters(to_meters(value, from), to).unwrap_or(value),
        Category::Weight => from_kilograms(to_kilograms(value, from), to).unwrap_or(value),
        Category::None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_pairs() {
        assert_eq!(convert(100.0, "Celsius", "Fahrenheit", "Temperature"), "212.00 Fahrenheit");
        assert_eq!(convert(32.0, "Fahrenheit", "Celsius", "Temperature"), "0.00 Celsius");
        assert_eq!(convert(-40.0, "Celsius", "Fahrenheit", "Temperature"), "-40.00 Fahrenheit");
    }

    #[test]
    fn test_temperature_same_unit_is_identity() {
        assert_eq!(convert(21.5, "Celsius", "Celsius", "Temperature"), "21.50 Celsius");
        assert_eq!(convert(70.0, "Fahrenheit", "Fahrenheit", "Temperature"), "70.00 Fahrenheit");
    }

    #[test]
    fn test_length_through_meters() {
        assert_eq!(convert(1.0, "Miles", "Kilometers", "Length"), "1.61 Kilometers");
        assert_eq!(convert(1.0, "Meters", "Feet", "Length"), "3.28 Feet");
        assert_eq!(convert(12.0, "Inches", "Feet", "Length"), "1.00 Feet");
        assert_eq!(convert(2.5, "Kilometers", "Meters", "Length"), "2500.00 Meters");
    }

    #[test]
    fn test_weight_through_kilograms() {
        assert_eq!(convert(1000.0, "Grams", "Kilograms", "Weight"), "1.00 Kilograms");
        assert_eq!(convert(1.0, "Kilograms", "Pounds", "Weight"), "2.20 Pounds");
        assert_eq!(convert(1.0, "Pounds", "Grams", "Weight"), "453.59 Grams");
    }

    #[test]
    fn test_unknown_category_passes_through() {
        assert_eq!(convert(42.0, "Celsius", "Fahrenheit", "None"), "42.00 Fahrenheit");
        assert_eq!(convert(42.0, "Liters", "Cups", "Volume"), "42.00 Cups");
    }

    #[test]
    fn test_category_label_must_match_exactly() {
        assert_eq!(convert(100.0, "Celsius", "Fahrenheit", "temperature"), "100.00 Fahrenheit");
        assert_eq!(convert(100.0, "Celsius", "Fahrenheit", " TEMPERATURE "), "100.00 Fahrenheit");
        assert_eq!(convert(1.0, "Kilometers", "Meters", "length"), "1.00 Meters");
    }

    #[test]
    fn test_half_up_rounding() {
        assert_eq!(convert(1.005, "Kilograms", "Kilograms", "Weight"), "1.01 Kilograms");
        assert_eq!(convert(0.125, "Meters", "Meters", "Length"), "0.13 Meters");
    }

    #[test]
    fn test_overflow_prints_infinity() {
        assert_eq!(convert(1e308, "Miles", "Meters", "Length"), "Infinity Meters");
    }

    #[test]
    fn test_unknown_destination_returns_input() {
        // pivot value (1000 m) is discarded in favour of the raw input
        assert_eq!(convert_value(1.0, "Kilometers", "Furlongs", Category::Length), 1.0);
        assert_eq!(convert_value(3.0, "Pounds", "Stone", Category::Weight), 3.0);
    }

    #[test]
    fn test_unknown_source_is_treated_as_pivot() {
        assert_eq!(convert(5.0, "Furlongs", "Meters", "Length"), "5.00 Meters");
        assert_eq!(convert(2.0, "Stone", "Grams", "Weight"), "2000.00 Grams");
    }
}
