use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The class of physical quantity being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Category {
    #[default]
    None,
    Temperature,
    Length,
    Weight,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

const TEMPERATURE_UNITS: &[&str] = &["Celsius", "Fahrenheit"];
const LENGTH_UNITS: &[&str] = &["Meters", "Feet", "Inches", "Kilometers", "Miles"];
const WEIGHT_UNITS: &[&str] = &["Kilograms", "Pounds", "Grams"];

impl Category {
    /// Categories in the order they are offered for selection
    pub const ALL: [Category; 4] = [
        Category::None,
        Category::Temperature,
        Category::Length,
        Category::Weight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::None => "None",
            Category::Temperature => "Temperature",
            Category::Length => "Length",
            Category::Weight => "Weight",
        }
    }

    /// Exact label lookup; anything else (including other casings) is `None`
    pub fn from_label(label: &str) -> Self {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == label)
            .unwrap_or(Category::None)
    }

    /// Valid unit labels for this category (empty for `None`)
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Category::None => &[],
            Category::Temperature => TEMPERATURE_UNITS,
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
        }
    }

    pub fn is_valid_unit(&self, unit: &str) -> bool {
        self.units().contains(&unit)
    }

    /// Resolve a unit label case-insensitively to its canonical spelling
    pub fn canonical_unit(&self, unit: &str) -> Option<&'static str> {
        let unit = unit.trim();
        self.units()
            .iter()
            .copied()
            .find(|u| u.eq_ignore_ascii_case(unit))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Find the category that owns a unit label, ignoring case
pub fn category_for_unit(unit: &str) -> Option<Category> {
    Category::ALL
        .iter()
        .copied()
        .find(|c| c.canonical_unit(unit).is_some())
}
