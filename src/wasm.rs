// WebAssembly bindings for the converter
use crate::convert;
use crate::units::Category;
use wasm_bindgen::prelude::*;

/// Convert `value` between two units of `category`; see [`convert::convert`]
#[wasm_bindgen]
pub fn convert(value: f64, from: &str, to: &str, category: &str) -> String {
    convert::convert(value, from, to, category)
}

/// Price of `amount` g/ml at `unit_price` per kg/l
#[wasm_bindgen(js_name = calculatePrice)]
pub fn calculate_price(unit_price: f64, amount: f64) -> String {
    convert::calculate_price(unit_price, amount)
}

/// Raw-text variants: non-numeric input yields "Invalid input"
#[wasm_bindgen(js_name = convertInput)]
pub fn convert_input(raw: &str, from: &str, to: &str, category: &str) -> String {
    convert::convert_input(raw, from, to, category)
}

#[wasm_bindgen(js_name = priceInput)]
pub fn price_input(raw_unit_price: &str, raw_amount: &str) -> String {
    convert::price_input(raw_unit_price, raw_amount)
}

/// Units offered for a category, as a JSON array string
#[wasm_bindgen(js_name = unitsFor)]
pub fn units_for(category: &str) -> Result<String, JsValue> {
    serde_json::to_string(Category::from_label(category).units())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
}
