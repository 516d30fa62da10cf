//! Read-only order state handed to eligibility checkers and handlers.
//!
//! Orders are owned elsewhere; this crate only reads the snapshot it is given.
//! Monetary amounts are integers in the currency's minor unit.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::foundation::OrderId;

/// Snapshot of an order under checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub code: String,
    pub currency_code: String,
    pub sub_total: i64,
    pub sub_total_with_tax: i64,
    pub shipping_with_tax: i64,
    pub total_with_tax: i64,
    pub total_quantity: u32,
    #[serde(default)]
    pub shipping_country_code: Option<String>,
    #[serde(default)]
    pub custom_fields: Map<String, JsonValue>,
}

impl Order {
    /// Creates an empty order in the given currency.
    pub fn new(code: impl Into<String>, currency_code: impl Into<String>) -> Self {
        Self {
            id: OrderId::new(),
            code: code.into(),
            currency_code: currency_code.into(),
            sub_total: 0,
            sub_total_with_tax: 0,
            shipping_with_tax: 0,
            total_with_tax: 0,
            total_quantity: 0,
            shipping_country_code: None,
            custom_fields: Map::new(),
        }
    }

    /// Builder: set the tax-inclusive total.
    pub fn with_total_with_tax(mut self, total_with_tax: i64) -> Self {
        self.total_with_tax = total_with_tax;
        self
    }

    /// Builder: set the shipping destination.
    pub fn with_shipping_country(mut self, country_code: impl Into<String>) -> Self {
        self.shipping_country_code = Some(country_code.into());
        self
    }
}
