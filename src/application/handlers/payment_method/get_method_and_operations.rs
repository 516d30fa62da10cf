//! GetMethodAndOperationsHandler - Resolves a payment method's operations.

use std::fmt;
use std::sync::Arc;

use crate::domain::foundation::RequestContext;
use crate::domain::operation::{
    OperationKind, OperationRegistry, ParsedArgs, PaymentMethodEligibilityChecker,
    PaymentMethodHandler,
};
use crate::domain::payment_method::{PaymentMethod, PaymentMethodError};
use crate::ports::PaymentMethodRepository;

/// A payment method with its handler and checker ready to invoke.
#[derive(Clone)]
pub struct ResolvedPaymentMethod {
    pub method: PaymentMethod,
    pub handler: Arc<dyn PaymentMethodHandler>,
    pub handler_args: ParsedArgs,
    pub checker: Option<Arc<dyn PaymentMethodEligibilityChecker>>,
    pub checker_args: Option<ParsedArgs>,
}

impl fmt::Debug for ResolvedPaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedPaymentMethod")
            .field("method", &self.method.code())
            .field("handler", &self.handler.definition().code())
            .field("checker", &self.checker.as_ref().map(|c| c.definition().code()))
            .finish()
    }
}

/// Looks up a payment method by code for a payment executor.
pub struct GetMethodAndOperationsHandler {
    repository: Arc<dyn PaymentMethodRepository>,
    registry: Arc<OperationRegistry>,
}

impl GetMethodAndOperationsHandler {
    pub fn new(repository: Arc<dyn PaymentMethodRepository>, registry: Arc<OperationRegistry>) -> Self {
        Self {
            repository,
            registry,
        }
    }

    /// # Errors
    ///
    /// - `CodeNotFound` if the request's channel has no method with `code`
    /// - `Operation` if the stored handler or checker is no longer registered
    pub async fn handle(
        &self,
        ctx: &RequestContext,
        code: &str,
    ) -> Result<ResolvedPaymentMethod, PaymentMethodError> {
        let method = self
            .repository
            .find_by_code_in_channel(code, ctx.channel_id())
            .await?
            .ok_or_else(|| PaymentMethodError::code_not_found(code))?;

        let handler = self.registry.handler(method.handler().code())?;
        let handler_args = self
            .registry
            .parse_args(OperationKind::Handler, method.handler())?;

        let (checker, checker_args) = match method.checker() {
            Some(bound) => (
                Some(self.registry.checker(bound.code())?),
                Some(self.registry.parse_args(OperationKind::Checker, bound)?),
            ),
            None => (None, None),
        };

        Ok(ResolvedPaymentMethod {
            method,
            handler,
            handler_args,
            checker,
            checker_args,
        })
    }
}
