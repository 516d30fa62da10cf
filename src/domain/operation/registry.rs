//! Process-wide registry of payment method handlers and eligibility checkers.
//!
//! Definitions are registered once through [`OperationRegistryBuilder`] at
//! startup. The built registry is immutable, so an `Arc<OperationRegistry>`
//! can be read from any task without locking.

use std::sync::Arc;

use super::{
    ConfigArg, ConfigurableOperation, ConfigurableOperationInput, OperationDefinition,
    OperationError, OperationKind, ParsedArgs, PaymentMethodEligibilityChecker,
    PaymentMethodHandler,
};

/// Immutable lookup table of registered operations, in registration order.
pub struct OperationRegistry {
    handlers: Vec<Arc<dyn PaymentMethodHandler>>,
    checkers: Vec<Arc<dyn PaymentMethodEligibilityChecker>>,
}

impl OperationRegistry {
    /// Starts an empty builder.
    pub fn builder() -> OperationRegistryBuilder {
        OperationRegistryBuilder::default()
    }

    /// All definitions of `kind`, in registration order.
    pub fn definitions(&self, kind: OperationKind) -> Vec<&OperationDefinition> {
        match kind {
            OperationKind::Handler => self.handlers.iter().map(|h| h.definition()).collect(),
            OperationKind::Checker => self.checkers.iter().map(|c| c.definition()).collect(),
        }
    }

    /// The definition registered under `(kind, code)`.
    pub fn definition(
        &self,
        kind: OperationKind,
        code: &str,
    ) -> Result<&OperationDefinition, OperationError> {
        self.definitions(kind)
            .into_iter()
            .find(|definition| definition.code() == code)
            .ok_or_else(|| OperationError::not_found(kind, code))
    }

    /// The handler implementation registered under `code`.
    pub fn handler(&self, code: &str) -> Result<Arc<dyn PaymentMethodHandler>, OperationError> {
        self.handlers
            .iter()
            .find(|handler| handler.definition().code() == code)
            .cloned()
            .ok_or_else(|| OperationError::not_found(OperationKind::Handler, code))
    }

    /// The checker implementation registered under `code`.
    pub fn checker(
        &self,
        code: &str,
    ) -> Result<Arc<dyn PaymentMethodEligibilityChecker>, OperationError> {
        self.checkers
            .iter()
            .find(|checker| checker.definition().code() == code)
            .cloned()
            .ok_or_else(|| OperationError::not_found(OperationKind::Checker, code))
    }

    /// Validates raw client input and binds it to the matching definition.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no definition of `kind` has `input.code`
    /// - `MissingArgument` / `InvalidArgument` if a slot fails validation
    pub fn parse_input(
        &self,
        kind: OperationKind,
        input: &ConfigurableOperationInput,
    ) -> Result<ConfigurableOperation, OperationError> {
        let definition = self.definition(kind, &input.code)?;
        let supplied: Vec<(&str, &str)> = input
            .arguments
            .iter()
            .map(|arg| (arg.name.as_str(), arg.value.as_str()))
            .collect();

        let args = definition
            .bind(&supplied)?
            .into_iter()
            .map(|(name, value)| ConfigArg::new(name, value.to_serialized()))
            .collect();

        Ok(ConfigurableOperation::new(definition.code(), args))
    }

    /// Re-reads the stored arguments of a bound operation as typed values.
    ///
    /// Fails if the definition has since disappeared or changed shape in a
    /// way the stored values no longer satisfy.
    pub fn parse_args(
        &self,
        kind: OperationKind,
        operation: &ConfigurableOperation,
    ) -> Result<ParsedArgs, OperationError> {
        let definition = self.definition(kind, operation.code())?;
        let supplied: Vec<(&str, &str)> = operation
            .args()
            .iter()
            .map(|arg| (arg.name.as_str(), arg.value.as_str()))
            .collect();

        Ok(ParsedArgs::new(definition.bind(&supplied)?))
    }
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codes = |kind| {
            self.definitions(kind)
                .into_iter()
                .map(|d| d.code().to_string())
                .collect::<Vec<_>>()
        };
        f.debug_struct("OperationRegistry")
            .field("handlers", &codes(OperationKind::Handler))
            .field("checkers", &codes(OperationKind::Checker))
            .finish()
    }
}

/// Collects handlers and checkers before the registry is frozen.
#[derive(Default)]
pub struct OperationRegistryBuilder {
    handlers: Vec<Arc<dyn PaymentMethodHandler>>,
    checkers: Vec<Arc<dyn PaymentMethodEligibilityChecker>>,
}

impl OperationRegistryBuilder {
    /// Registers a payment handler.
    ///
    /// # Errors
    ///
    /// - `DuplicateDefinition` if a handler with the same code exists
    /// - `InvalidDefault` if a declared default fails its slot's coercion
    pub fn register_handler<H>(mut self, handler: H) -> Result<Self, OperationError>
    where
        H: PaymentMethodHandler + 'static,
    {
        let definition = handler.definition();
        definition.validate_defaults()?;
        if self
            .handlers
            .iter()
            .any(|h| h.definition().code() == definition.code())
        {
            return Err(OperationError::DuplicateDefinition {
                kind: OperationKind::Handler,
                code: definition.code().to_string(),
            });
        }
        self.handlers.push(Arc::new(handler));
        Ok(self)
    }

    /// Registers an eligibility checker.
    ///
    /// # Errors
    ///
    /// Same as [`register_handler`](Self::register_handler).
    pub fn register_checker<C>(mut self, checker: C) -> Result<Self, OperationError>
    where
        C: PaymentMethodEligibilityChecker + 'static,
    {
        let definition = checker.definition();
        definition.validate_defaults()?;
        if self
            .checkers
            .iter()
            .any(|c| c.definition().code() == definition.code())
        {
            return Err(OperationError::DuplicateDefinition {
                kind: OperationKind::Checker,
                code: definition.code().to_string(),
            });
        }
        self.checkers.push(Arc::new(checker));
        Ok(self)
    }

    /// Freezes the registry.
    pub fn build(self) -> OperationRegistry {
        OperationRegistry {
            handlers: self.handlers,
            checkers: self.checkers,
        }
    }
}
