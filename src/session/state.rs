use crate::config::DisplayConfig;
use crate::convert::{convert_input_with, price_input_with, INVALID_INPUT};
use crate::session::error::SessionError;
use crate::units::Category;
use log::debug;

/// In-memory state of one converter screen: the selected category and
/// units, the raw value typed by the user, and the last results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    category: Category,
    from_unit: String,
    to_unit: String,
    input_value: String,
    result: String,
    unit_price: String,
    amount: String,
    price_result: String,
    display: DisplayConfig,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose results use the given precision and currency
    pub fn with_display(display: DisplayConfig) -> Self {
        Self {
            display,
            ..Self::default()
        }
    }

    pub fn with_category(category: Category) -> Self {
        let mut session = Self::new();
        session.select_category(category);
        session
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn unit_price(&self) -> &str {
        &self.unit_price
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn price_result(&self) -> &str {
        &self.price_result
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Units offered for the current category
    pub fn unit_options(&self) -> &'static [&'static str] {
        self.category.units()
    }

    /// Changing category (even to the same one) clears both units and the result.
    /// The typed value is kept.
    pub fn select_category(&mut self, category: Category) {
        debug!("Category {} -> {}", self.category, category);
        self.category = category;
        self.from_unit.clear();
        self.to_unit.clear();
        self.result.clear();
    }

    pub fn select_from(&mut self, unit: &str) -> Result<(), SessionError> {
        self.from_unit = self.checked_unit(unit)?.to_string();
        Ok(())
    }

    pub fn select_to(&mut self, unit: &str) -> Result<(), SessionError> {
        self.to_unit = self.checked_unit(unit)?.to_string();
        Ok(())
    }

    pub fn set_input(&mut self, text: &str) {
        self.input_value = text.to_string();
    }

    pub fn set_unit_price(&mut self, text: &str) {
        self.unit_price = text.to_string();
    }

    pub fn set_amount(&mut self, text: &str) {
        self.amount = text.to_string();
    }

    pub fn is_convert_enabled(&self) -> bool {
        self.category != Category::None
            && !self.input_value.trim().is_empty()
            && !self.from_unit.trim().is_empty()
            && !self.to_unit.trim().is_empty()
    }

    /// Run the conversion for the current selection and remember the result
    pub fn convert(&mut self) -> Result<&str, SessionError> {
        if !self.is_convert_enabled() {
            return Err(SessionError::ConvertDisabled);
        }
        self.result = convert_input_with(
            &self.input_value,
            &self.from_unit,
            &self.to_unit,
            self.category.label(),
            self.display.precision,
        );
        Ok(&self.result)
    }

    /// Price of the entered amount, prefixed with the currency symbol.
    /// Always available; invalid fields yield the sentinel.
    pub fn calculate_price(&mut self) -> &str {
        self.price_result =
            match price_input_with(&self.unit_price, &self.amount, self.display.precision) {
                Some(price) => format!("{}{}", self.display.currency, price),
                None => INVALID_INPUT.to_string(),
            };
        &self.price_result
    }

    fn checked_unit(&self, unit: &str) -> Result<&'static str, SessionError> {
        if self.category == Category::None {
            return Err(SessionError::NoCategory);
        }
        self.category
            .canonical_unit(unit)
            .ok_or_else(|| SessionError::UnitNotInCategory {
                unit: unit.trim().to_string(),
                category: self.category,
            })
    }
}
