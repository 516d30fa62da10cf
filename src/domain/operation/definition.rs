//! Operation definitions: code, description and declared argument slots.

use serde::Serialize;

use super::{ArgumentDef, ArgumentValue, OperationError};

/// Static description of a configurable operation.
///
/// Identity is `(kind, code)`; the kind is implied by which registry list the
/// owning handler or checker sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationDefinition {
    code: String,
    description: String,
    args: Vec<ArgumentDef>,
}

impl OperationDefinition {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            args: Vec::new(),
        }
    }

    /// Builder: declare the next argument slot.
    pub fn with_arg(mut self, arg: ArgumentDef) -> Self {
        self.args.push(arg);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn args(&self) -> &[ArgumentDef] {
        &self.args
    }

    /// Matches supplied `(name, raw)` pairs against the declared slots.
    ///
    /// Undeclared names are ignored. An omitted slot takes its default, is
    /// skipped when optional, and is an error otherwise. When a name is
    /// supplied twice the first occurrence wins.
    pub(crate) fn bind(
        &self,
        supplied: &[(&str, &str)],
    ) -> Result<Vec<(String, ArgumentValue)>, OperationError> {
        let mut bound = Vec::with_capacity(self.args.len());

        for slot in &self.args {
            let given = supplied
                .iter()
                .find(|(name, _)| *name == slot.name())
                .map(|(_, raw)| *raw);

            let raw = match given.or(slot.default_value()) {
                Some(raw) => raw,
                None if slot.is_required() => {
                    return Err(OperationError::MissingArgument {
                        operation: self.code.clone(),
                        argument: slot.name().to_string(),
                    })
                }
                None => continue,
            };

            let value = slot
                .coerce(raw)
                .map_err(|reason| OperationError::InvalidArgument {
                    operation: self.code.clone(),
                    argument: slot.name().to_string(),
                    reason,
                })?;
            bound.push((slot.name().to_string(), value));
        }

        Ok(bound)
    }

    /// Checks that every declared default coerces to its slot's type.
    pub(crate) fn validate_defaults(&self) -> Result<(), OperationError> {
        for slot in &self.args {
            if let Some(default) = slot.default_value() {
                slot.coerce(default)
                    .map_err(|reason| OperationError::InvalidDefault {
                        operation: self.code.clone(),
                        argument: slot.name().to_string(),
                        reason,
                    })?;
            }
        }
        Ok(())
    }
}
