use crate::convert::formatter::{format_amount, DEFAULT_PRECISION};

/// Grams per kilogram, and millilitres per litre
const UNITS_PER_PRICED_UNIT: f64 = 1000.0;

/// Price of `amount` grams (or millilitres) given the price of one
/// kilogram (or litre)
pub fn price_for_amount(unit_price: f64, amount: f64) -> f64 {
    (amount / UNITS_PER_PRICED_UNIT) * unit_price
}

/// Formatted price with two decimals, e.g. `calculate_price(100.0, 500.0) == "50.00"`
pub fn calculate_price(unit_price: f64, amount: f64) -> String {
    calculate_price_with(unit_price, amount, DEFAULT_PRECISION)
}

pub fn calculate_price_with(unit_price: f64, amount: f64, precision: usize) -> String {
    format_amount(price_for_amount(unit_price, amount), precision)
}
