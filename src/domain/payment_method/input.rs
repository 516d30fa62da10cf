//! Client input shapes for creating and updating payment methods.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::domain::foundation::PaymentMethodId;
use crate::domain::operation::ConfigurableOperationInput;

/// Input for creating a payment method.
///
/// `handler` is optional at the type level so that a request omitting it is
/// rejected as a validation failure rather than a decoding error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentMethodInput {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub enabled: bool,
    #[serde(default)]
    pub handler: Option<ConfigurableOperationInput>,
    #[serde(default)]
    pub checker: Option<ConfigurableOperationInput>,
    #[serde(default)]
    pub custom_fields: Map<String, JsonValue>,
}

impl CreatePaymentMethodInput {
    /// An enabled method with the given handler and no checker.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        handler: ConfigurableOperationInput,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: String::new(),
            enabled: true,
            handler: Some(handler),
            checker: None,
            custom_fields: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_checker(mut self, checker: ConfigurableOperationInput) -> Self {
        self.checker = Some(checker);
        self
    }

    pub fn with_custom_field(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.custom_fields.insert(key.into(), value);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Patch input for updating a payment method.
///
/// Only fields present in the input are applied. `checker` distinguishes
/// absent (`None`, keep) from explicit null (`Some(None)`, clear).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePaymentMethodInput {
    pub id: PaymentMethodId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<ConfigurableOperationInput>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub checker: Option<Option<ConfigurableOperationInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, JsonValue>>,
}

impl UpdatePaymentMethodInput {
    /// A patch that touches nothing.
    pub fn new(id: PaymentMethodId) -> Self {
        Self {
            id,
            code: None,
            name: None,
            description: None,
            enabled: None,
            handler: None,
            checker: None,
            custom_fields: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_handler(mut self, handler: ConfigurableOperationInput) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn with_checker(mut self, checker: ConfigurableOperationInput) -> Self {
        self.checker = Some(Some(checker));
        self
    }

    /// Explicitly remove the checker.
    pub fn clear_checker(mut self) -> Self {
        self.checker = Some(None);
        self
    }

    pub fn with_custom_field(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.custom_fields
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }
}

// A present field, including an explicit `null`, deserializes to `Some(..)`;
// an absent one falls back to the `default` of `None`.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
