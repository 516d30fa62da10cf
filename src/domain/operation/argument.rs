//! Typed argument slots and their coercion rules.
//!
//! Argument values travel as strings (the shape persisted alongside a payment
//! method); each slot declares a type tag that the raw string must coerce to.
//! List slots hold a JSON array whose elements coerce individually.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Type tag of an argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    String,
    Int,
    Float,
    Boolean,
    Datetime,
    #[serde(rename = "ID")]
    Id,
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArgumentType::String => "string",
            ArgumentType::Int => "int",
            ArgumentType::Float => "float",
            ArgumentType::Boolean => "boolean",
            ArgumentType::Datetime => "datetime",
            ArgumentType::Id => "ID",
        };
        write!(f, "{}", s)
    }
}

/// A named, typed argument slot declared by an operation definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentDef {
    name: String,
    #[serde(rename = "type")]
    arg_type: ArgumentType,
    required: bool,
    list: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<String>,
}

impl ArgumentDef {
    /// Declares a required, single-valued slot.
    pub fn new(name: impl Into<String>, arg_type: ArgumentType) -> Self {
        Self {
            name: name.into(),
            arg_type,
            required: true,
            list: false,
            default_value: None,
        }
    }

    /// Builder: the slot may be omitted.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Builder: the slot holds a JSON array of values.
    pub fn as_list(mut self) -> Self {
        self.list = true;
        self
    }

    /// Builder: value used when the slot is omitted.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arg_type(&self) -> ArgumentType {
        self.arg_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_list(&self) -> bool {
        self.list
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Coerces a raw serialized value into this slot's type.
    ///
    /// The error is a human-readable reason, suitable for a validation message.
    pub fn coerce(&self, raw: &str) -> Result<ArgumentValue, String> {
        if !self.list {
            return ArgumentValue::parse(self.arg_type, raw);
        }

        let items: Vec<JsonValue> = serde_json::from_str(raw)
            .map_err(|_| format!("expected a JSON array of {}, got '{}'", self.arg_type, raw))?;
        items
            .iter()
            .map(|item| ArgumentValue::from_json(self.arg_type, item))
            .collect::<Result<Vec<_>, _>>()
            .map(ArgumentValue::List)
    }
}

/// A coerced argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Id(String),
    List(Vec<ArgumentValue>),
}

impl ArgumentValue {
    /// Parses a single scalar value of the given type.
    pub fn parse(arg_type: ArgumentType, raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        match arg_type {
            ArgumentType::String => Ok(ArgumentValue::String(raw.to_string())),
            ArgumentType::Int => trimmed
                .parse::<i64>()
                .map(ArgumentValue::Int)
                .map_err(|_| format!("expected an integer, got '{}'", raw)),
            ArgumentType::Float => match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(ArgumentValue::Float(value)),
                _ => Err(format!("expected a finite number, got '{}'", raw)),
            },
            ArgumentType::Boolean => match trimmed {
                "true" => Ok(ArgumentValue::Boolean(true)),
                "false" => Ok(ArgumentValue::Boolean(false)),
                _ => Err(format!("expected 'true' or 'false', got '{}'", raw)),
            },
            ArgumentType::Datetime => DateTime::parse_from_rfc3339(trimmed)
                .map(|dt| ArgumentValue::DateTime(dt.with_timezone(&Utc)))
                .map_err(|_| format!("expected an RFC 3339 datetime, got '{}'", raw)),
            ArgumentType::Id => {
                if trimmed.is_empty() {
                    Err("expected a non-empty ID".to_string())
                } else {
                    Ok(ArgumentValue::Id(trimmed.to_string()))
                }
            }
        }
    }

    fn from_json(arg_type: ArgumentType, item: &JsonValue) -> Result<Self, String> {
        match item {
            JsonValue::String(s) => Self::parse(arg_type, s),
            JsonValue::Number(_) | JsonValue::Bool(_) => Self::parse(arg_type, &item.to_string()),
            other => Err(format!("unsupported list element {}", other)),
        }
    }

    /// Canonical serialized form, as stored on a bound operation.
    pub fn to_serialized(&self) -> String {
        match self {
            ArgumentValue::String(s) | ArgumentValue::Id(s) => s.clone(),
            ArgumentValue::Int(n) => n.to_string(),
            ArgumentValue::Float(n) => n.to_string(),
            ArgumentValue::Boolean(b) => b.to_string(),
            ArgumentValue::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ArgumentValue::List(_) => self.to_json().to_string(),
        }
    }

    fn to_json(&self) -> JsonValue {
        match self {
            ArgumentValue::String(s) | ArgumentValue::Id(s) => JsonValue::String(s.clone()),
            ArgumentValue::Int(n) => JsonValue::from(*n),
            ArgumentValue::Float(n) => serde_json::Number::from_f64(*n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            ArgumentValue::Boolean(b) => JsonValue::Bool(*b),
            ArgumentValue::DateTime(_) => JsonValue::String(self.to_serialized()),
            ArgumentValue::List(items) => {
                JsonValue::Array(items.iter().map(ArgumentValue::to_json).collect())
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgumentValue::String(s) | ArgumentValue::Id(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgumentValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ArgumentValue::Float(n) => Some(*n),
            ArgumentValue::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgumentValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            ArgumentValue::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ArgumentValue]> {
        match self {
            ArgumentValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Typed arguments handed to a handler or checker at invocation time.
///
/// Preserves the definition's slot order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedArgs {
    values: Vec<(String, ArgumentValue)>,
}

impl ParsedArgs {
    pub fn new(values: Vec<(String, ArgumentValue)>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
        self.values
            .iter()
            .find(|(slot, _)| slot == name)
            .map(|(_, value)| value)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ArgumentValue::as_str)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ArgumentValue::as_int)
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(ArgumentValue::as_float)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ArgumentValue::as_bool)
    }

    pub fn get_datetime(&self, name: &str) -> Option<&DateTime<Utc>> {
        self.get(name).and_then(ArgumentValue::as_datetime)
    }

    pub fn get_list(&self, name: &str) -> Option<&[ArgumentValue]> {
        self.get(name).and_then(ArgumentValue::as_list)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
