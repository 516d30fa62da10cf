//! Client-facing eligibility summary.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::PaymentMethod;
use crate::domain::foundation::PaymentMethodId;
use crate::domain::operation::EligibilityOutcome;

/// Whether a payment method may be offered for one order.
///
/// Never exposes the handler or checker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodQuote {
    pub id: PaymentMethodId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub is_eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_message: Option<String>,
    pub custom_fields: Map<String, JsonValue>,
}

impl PaymentMethodQuote {
    pub fn new(method: &PaymentMethod, outcome: &EligibilityOutcome) -> Self {
        Self {
            id: *method.id(),
            code: method.code().to_string(),
            name: method.name().to_string(),
            description: method.description().to_string(),
            is_eligible: outcome.is_eligible(),
            eligibility_message: outcome.message().map(str::to_string),
            custom_fields: method.custom_fields().clone(),
        }
    }
}
