use crate::convert::converter::convert_value;
use crate::units::{category_for_unit, Category};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches: number (optional sign, decimal, exponent) + unit + "to"/"in" + unit
    /// Examples: "100 Celsius to Fahrenheit", "-2.5 miles in feet", "1e3 Grams to Kilograms"
    static ref QUICK_PATTERN: Regex = Regex::new(
        r"(?i)^\s*([+-]?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\s+([a-z]+)\s+(?:to|in)\s+([a-z]+)\s*$"
    ).unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuickError {
    #[error("Expected '<value> <unit> to <unit>', got '{0}'")]
    Malformed(String),
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Cannot convert {from} ({from_category}) to {to} ({to_category})")]
    CategoryMismatch {
        from: String,
        from_category: Category,
        to: String,
        to_category: Category,
    },
}

/// A one-line conversion request with its category inferred from the units
#[derive(Debug, Clone, PartialEq)]
pub struct QuickExpression {
    pub value: f64,
    pub from: &'static str,
    pub to: &'static str,
    pub category: Category,
}

impl QuickExpression {
    pub fn evaluate(&self) -> f64 {
        convert_value(self.value, self.from, self.to, self.category)
    }
}

/// Check if a string has the shape of a quick expression
pub fn looks_like_quick_expression(s: &str) -> bool {
    QUICK_PATTERN.is_match(s)
}

/// Parse "100 Celsius to Fahrenheit" into a typed request
pub fn parse_quick(input: &str) -> Result<QuickExpression, QuickError> {
    let caps = QUICK_PATTERN
        .captures(input)
        .ok_or_else(|| QuickError::Malformed(input.trim().to_string()))?;

    let value = caps[1]
        .parse::<f64>()
        .map_err(|_| QuickError::Malformed(input.trim().to_string()))?;

    let (from_category, from) = resolve_unit(&caps[2])?;
    let (to_category, to) = resolve_unit(&caps[3])?;

    if from_category != to_category {
        return Err(QuickError::CategoryMismatch {
            from: from.to_string(),
            from_category,
            to: to.to_string(),
            to_category,
        });
    }

    Ok(QuickExpression {
        value,
        from,
        to,
        category: from_category,
    })
}

fn resolve_unit(raw: &str) -> Result<(Category, &'static str), QuickError> {
    category_for_unit(raw)
        .and_then(|c| c.canonical_unit(raw).map(|u| (c, u)))
        .ok_or_else(|| QuickError::UnknownUnit(raw.to_string()))
}
