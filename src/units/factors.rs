// Pivot factors: how many of each unit make one pivot unit
// (meters for length, kilograms for weight)

pub const FEET_PER_METER: f64 = 3.28084;
pub const INCHES_PER_METER: f64 = 39.3701;
pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.34;

pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Express a length in meters; unknown units pass through unchanged
pub fn to_meters(value: f64, unit: &str) -> f64 {
    match unit {
        "Meters" => value,
        "Feet" => value / FEET_PER_METER,
        "Inches" => value / INCHES_PER_METER,
        "Kilometers" => value * METERS_PER_KILOMETER,
        "Miles" => value * METERS_PER_MILE,
        _ => value,
    }
}

/// Express meters in `unit`, or `None` when the unit is not a length
pub fn from_meters(meters: f64, unit: &str) -> Option<f64> {
    match unit {
        "Meters" => Some(meters),
        "Feet" => Some(meters * FEET_PER_METER),
        "Inches" => Some(meters * INCHES_PER_METER),
        "Kilometers" => Some(meters / METERS_PER_KILOMETER),
        "Miles" => Some(meters / METERS_PER_MILE),
        _ => None,
    }
}

/// Express a weight in kilograms; unknown units pass through unchanged
pub fn to_kilograms(value: f64, unit: &str) -> f64 {
    match unit {
        "Kilograms" => value,
        "Pounds" => value / POUNDS_PER_KILOGRAM,
        "Grams" => value / GRAMS_PER_KILOGRAM,
        _ => value,
    }
}

pub fn from_kilograms(kilograms: f64, unit: &str) -> Option<f64> {
    match unit {
        "Kilograms" => Some(kilograms),
        "Pounds" => Some(kilograms * POUNDS_PER_KILOGRAM),
        "Grams" => Some(kilograms * GRAMS_PER_KILOGRAM),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_pivot() {
        assert!((to_meters(1.0, "Kilometers") - 1000.0).abs() < 1e-9);
        assert!((to_meters(3.28084, "Feet") - 1.0).abs() < 1e-9);
        assert_eq!(to_meters(7.0, "Furlongs"), 7.0);
        assert_eq!(from_meters(1.0, "Furlongs"), None);
        let inches = from_meters(1.0, "Inches").unwrap();
        assert!((inches - 39.3701).abs() < 1e-9);
    }

    #[test]
    fn test_weight_pivot() {
        assert!((to_kilograms(500.0, "Grams") - 0.5).abs() < 1e-12);
        assert_eq!(to_kilograms(4.0, "Stone"), 4.0);
        let pounds = from_kilograms(1.0, "Pounds").unwrap();
        assert!((pounds - 2.20462).abs() < 1e-12);
        assert_eq!(from_kilograms(1.0, "Ounces"), None);
    }
}
