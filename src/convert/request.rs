use crate::convert::input::{convert_input_with, price_input_with, INVALID_INPUT};
use crate::units::{category_for_unit, Category, UnknownCategory};
use log::warn;
use serde_json::{json, Value};

/// A conversion as requested from the command line, after resolving the
/// category and normalising unit labels
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub value: String,
    pub from: String,
    pub to: String,
    pub category: Category,
    pub result: String,
}

impl Conversion {
    pub fn to_json(&self) -> Value {
        json!({
            "input": {
                "value": self.value,
                "from": self.from,
                "to": self.to,
                "category": self.category,
            },
            "result": self.result,
        })
    }
}

/// Resolve and run a conversion from raw command-line arguments.
///
/// An explicit category must name one of the known categories. Without one
/// the category is inferred from the source unit, falling back to `None`
/// (pass-through). Known units are accepted in any capitalisation; unknown
/// ones are kept as typed.
pub fn resolve_conversion(
    raw_value: &str,
    from: &str,
    to: &str,
    category: Option<&str>,
    precision: usize,
) -> Result<Conversion, UnknownCategory> {
    let category = match category {
        Some(name) => name.parse::<Category>()?,
        None => category_for_unit(from).unwrap_or_else(|| {
            warn!("Could not infer a category from '{}'; value passes through", from);
            Category::None
        }),
    };

    let from = category.canonical_unit(from).unwrap_or(from);
    let to = category.canonical_unit(to).unwrap_or(to);

    Ok(Conversion {
        value: raw_value.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        category,
        result: convert_input_with(raw_value, from, to, category.label(), precision),
    })
}

/// A price calculation as requested from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub unit_price: String,
    pub amount: String,
    pub price: Option<String>,
}

impl PriceQuote {
    pub fn new(raw_unit_price: &str, raw_amount: &str, precision: usize) -> Self {
        Self {
            unit_price: raw_unit_price.to_string(),
            amount: raw_amount.to_string(),
            price: price_input_with(raw_unit_price, raw_amount, precision),
        }
    }

    /// "₹50.00", or the invalid-input sentinel without a currency symbol
    pub fn display(&self, currency: &str) -> String {
        match &self.price {
            Some(price) => format!("{}{}", currency, price),
            None => INVALID_INPUT.to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "input": { "unitPrice": self.unit_price, "amount": self.amount },
            "result": self.price.as_deref().unwrap_or(INVALID_INPUT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_inferred_from_source_unit() {
        let conversion = resolve_conversion("100", "Celsius", "Fahrenheit", None, 2).unwrap();
        assert_eq!(conversion.category, Category::Temperature);
        assert_eq!(conversion.result, "212.00 Fahrenheit");
    }

    #[test]
    fn test_units_are_normalised() {
        let conversion = resolve_conversion("1", "miles", "KILOMETERS", None, 2).unwrap();
        assert_eq!(conversion.from, "Miles");
        assert_eq!(conversion.to, "Kilometers");
        assert_eq!(conversion.result, "1.61 Kilometers");

        let conversion =
            resolve_conversion("1000", "grams", "kilograms", Some("weight"), 1).unwrap();
        assert_eq!(conversion.category, Category::Weight);
        assert_eq!(conversion.result, "1.0 Kilograms");
    }

    #[test]
    fn test_unknown_units_pass_through() {
        let conversion = resolve_conversion("7", "Furlongs", "Chains", None, 2).unwrap();
        assert_eq!(conversion.category, Category::None);
        assert_eq!(conversion.from, "Furlongs");
        assert_eq!(conversion.result, "7.00 Chains");
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        assert_eq!(
            resolve_conversion("1", "Meters", "Feet", Some("Volume"), 2),
            Err(UnknownCategory("Volume".to_string()))
        );
    }

    #[test]
    fn test_invalid_value_keeps_sentinel() {
        let conversion = resolve_conversion("abc", "Meters", "Feet", None, 2).unwrap();
        assert_eq!(conversion.result, INVALID_INPUT);
    }

    #[test]
    fn test_conversion_json_shape() {
        let conversion = resolve_conversion("100", "celsius", "fahrenheit", None, 2).unwrap();
        assert_eq!(
            conversion.to_json(),
            json!({
                "input": {
                    "value": "100",
                    "from": "Celsius",
                    "to": "Fahrenheit",
                    "category": "Temperature",
                },
                "result": "212.00 Fahrenheit",
            })
        );
    }

    #[test]
    fn test_price_quote() {
        let quote = PriceQuote::new("100", "500", 2);
        assert_eq!(quote.display("₹"), "₹50.00");
        assert_eq!(
            quote.to_json(),
            json!({ "input": { "unitPrice": "100", "amount": "500" }, "result": "50.00" })
        );

        let invalid = PriceQuote::new("100", "", 2);
        assert_eq!(invalid.display("₹"), INVALID_INPUT);
        assert_eq!(invalid.to_json()["result"], INVALID_INPUT);
    }
}
