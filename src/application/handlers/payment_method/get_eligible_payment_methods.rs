//! GetEligiblePaymentMethodsHandler - Query handler for checkout eligibility.

use std::sync::Arc;

use crate::domain::foundation::RequestContext;
use crate::domain::operation::{EligibilityOutcome, OperationKind, OperationRegistry};
use crate::domain::order::Order;
use crate::domain::payment_method::{PaymentMethod, PaymentMethodError, PaymentMethodQuote};
use crate::ports::PaymentMethodRepository;

/// Evaluates every enabled payment method of the request's channel against
/// an order.
pub struct GetEligiblePaymentMethodsHandler {
    repository: Arc<dyn PaymentMethodRepository>,
    registry: Arc<OperationRegistry>,
}

impl GetEligiblePaymentMethodsHandler {
    pub fn new(repository: Arc<dyn PaymentMethodRepository>, registry: Arc<OperationRegistry>) -> Self {
        Self {
            repository,
            registry,
        }
    }

    /// One quote per enabled method, in repository order.
    ///
    /// Checkers run one after another. The first checker error aborts the
    /// whole evaluation.
    pub async fn handle(
        &self,
        ctx: &RequestContext,
        order: &Order,
    ) -> Result<Vec<PaymentMethodQuote>, PaymentMethodError> {
        let methods = self.repository.find_enabled_in_channel(ctx.channel_id()).await?;

        let mut quotes = Vec::with_capacity(methods.len());
        for method in &methods {
            let outcome = self.evaluate(ctx, order, method).await?;
            quotes.push(PaymentMethodQuote::new(method, &outcome));
        }

        tracing::debug!(
            order_code = %order.code,
            channel = ctx.channel().code(),
            evaluated = quotes.len(),
            eligible = quotes.iter().filter(|q| q.is_eligible).count(),
            "Evaluated payment method eligibility"
        );

        Ok(quotes)
    }

    async fn evaluate(
        &self,
        ctx: &RequestContext,
        order: &Order,
        method: &PaymentMethod,
    ) -> Result<EligibilityOutcome, PaymentMethodError> {
        let Some(bound) = method.checker() else {
            return Ok(EligibilityOutcome::Eligible);
        };

        let checker = self.registry.checker(bound.code())?;
        let args = self.registry.parse_args(OperationKind::Checker, bound)?;

        checker
            .check(ctx, order, &args, method)
            .await
            .map_err(|error| PaymentMethodError::CheckerFailed {
                checker: bound.code().to_string(),
                message: error.message,
            })
    }
}
