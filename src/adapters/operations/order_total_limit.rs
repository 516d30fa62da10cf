//! Checker that hides a payment method above an order total.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, RequestContext};
use crate::domain::operation::{
    ArgumentDef, ArgumentType, EligibilityOutcome, OperationDefinition, ParsedArgs,
    PaymentMethodEligibilityChecker,
};
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;

pub const ORDER_TOTAL_LIMIT_CODE: &str = "order-total-limit";

const DEFAULT_MESSAGE: &str = "Order total exceeds limit";

/// Ineligible when the order's total with tax is above `max_total`.
pub struct OrderTotalLimitChecker {
    definition: OperationDefinition,
}

impl OrderTotalLimitChecker {
    pub fn new() -> Self {
        Self {
            definition: OperationDefinition::new(
                ORDER_TOTAL_LIMIT_CODE,
                "Only offer the method up to a maximum order total",
            )
            .with_arg(ArgumentDef::new("max_total", ArgumentType::Int))
            .with_arg(
                ArgumentDef::new("message", ArgumentType::String)
                    .optional()
                    .with_default(DEFAULT_MESSAGE),
            ),
        }
    }
}

impl Default for OrderTotalLimitChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentMethodEligibilityChecker for OrderTotalLimitChecker {
    fn definition(&self) -> &OperationDefinition {
        &self.definition
    }

    async fn check(
        &self,
        _ctx: &RequestContext,
        order: &Order,
        args: &ParsedArgs,
        _method: &PaymentMethod,
    ) -> Result<EligibilityOutcome, DomainError> {
        let max_total = args.get_int("max_total").ok_or_else(|| {
            DomainError::new(ErrorCode::ValidationFailed, "max_total is not bound")
                .with_detail("field", "max_total")
        })?;

        if order.total_with_tax <= max_total {
            return Ok(EligibilityOutcome::Eligible);
        }

        let message = args.get_str("message").unwrap_or(DEFAULT_MESSAGE);
        Ok(EligibilityOutcome::from(message))
    }
}
