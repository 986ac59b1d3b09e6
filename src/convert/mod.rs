// Conversion between units of a category, unit-price calculation, and the
// raw-text boundary that turns parse failures into the "Invalid input" sentinel

pub mod converter;
pub mod error;
pub mod formatter;
pub mod input;
pub mod price;
pub mod quick;
pub mod request;


pub use converter::{convert, convert_value};
pub use error::ParseError;
pub use formatter::{format_amount, format_result, format_result_with, DEFAULT_PRECISION};
pub use input::{
    convert_input, convert_input_with, parse_value, price_input, price_input_with, INVALID_INPUT,
};
pub use price::{calculate_price, calculate_price_with, price_for_amount};
pub use quick::{looks_like_quick_expression, parse_quick, QuickError, QuickExpression};
pub use request::{resolve_conversion, Conversion, PriceQuote};
