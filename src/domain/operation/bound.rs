//! Bound operations: a definition code plus validated argument values.

use serde::{Deserialize, Serialize};

/// A single `(name, serializedValue)` argument pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigArg {
    pub name: String,
    pub value: String,
}

impl ConfigArg {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Raw, unvalidated operation input as supplied by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurableOperationInput {
    pub code: String,
    #[serde(default)]
    pub arguments: Vec<ConfigArg>,
}

impl ConfigurableOperationInput {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            arguments: Vec::new(),
        }
    }

    /// Builder: append an argument.
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.push(ConfigArg::new(name, value));
        self
    }
}

/// An operation bound to a payment method.
///
/// Only the registry produces these, after validating every argument against
/// the definition's slots; the values are stored in canonical serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurableOperation {
    code: String,
    args: Vec<ConfigArg>,
}

impl ConfigurableOperation {
    pub(crate) fn new(code: impl Into<String>, args: Vec<ConfigArg>) -> Self {
        Self {
            code: code.into(),
            args,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn args(&self) -> &[ConfigArg] {
        &self.args
    }

    /// Serialized value of a named argument, if bound.
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| arg.value.as_str())
    }
}
