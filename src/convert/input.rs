use crate::convert::converter::convert_value;
use crate::convert::error::ParseError;
use crate::convert::formatter::{format_result_with, DEFAULT_PRECISION};
use crate::convert::price::calculate_price_with;
use crate::units::Category;
use log::debug;

/// Shown in place of a result when the raw input is not a number
pub const INVALID_INPUT: &str = "Invalid input";

/// Read a number from raw user text, ignoring surrounding whitespace
pub fn parse_value(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ParseError::NotANumber(trimmed.to_string()))
}

/// Parse `raw` and convert it, or return [`INVALID_INPUT`]
pub fn convert_input(raw: &str, from: &str, to: &str, category: &str) -> String {
    convert_input_with(raw, from, to, category, DEFAULT_PRECISION)
}

pub fn convert_input_with(
    raw: &str,
    from: &str,
    to: &str,
    category: &str,
    precision: usize,
) -> String {
    match parse_value(raw) {
        Ok(value) => format_result_with(
            convert_value(value, from, to, Category::from_label(category)),
            to,
            precision,
        ),
        Err(e) => {
            debug!("Rejected conversion input: {}", e);
            INVALID_INPUT.to_string()
        }
    }
}

/// Parse both price fields and compute the price, or return [`INVALID_INPUT`]
pub fn price_input(raw_unit_price: &str, raw_amount: &str) -> String {
    price_input_with(raw_unit_price, raw_amount, DEFAULT_PRECISION)
        .unwrap_or_else(|| INVALID_INPUT.to_string())
}

/// Formatted price, or `None` when either field is not a number
pub fn price_input_with(raw_unit_price: &str, raw_amount: &str, precision: usize) -> Option<String> {
    match (parse_value(raw_unit_price), parse_value(raw_amount)) {
        (Ok(unit_price), Ok(amount)) => Some(calculate_price_with(unit_price, amount, precision)),
        (Err(e), _) | (_, Err(e)) => {
            debug!("Rejected price input: {}", e);
            None
        }
    }
}
