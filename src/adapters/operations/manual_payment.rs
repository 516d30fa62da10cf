//! Handler for payments settled outside the system (cash, bank transfer).

use async_trait::async_trait;
use serde_json::Map;

use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::operation::{
    ArgumentDef, ArgumentType, OperationDefinition, ParsedArgs, PaymentMethodHandler,
    PaymentOutcome, PaymentState,
};
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;

pub const MANUAL_PAYMENT_CODE: &str = "manual-payment";

/// Records a payment without contacting a provider.
///
/// The payment is `Authorized` and waits for an admin to settle it, unless
/// `automatic_settle` is set.
pub struct ManualPaymentHandler {
    definition: OperationDefinition,
}

impl ManualPaymentHandler {
    pub fn new() -> Self {
        Self {
            definition: OperationDefinition::new(
                MANUAL_PAYMENT_CODE,
                "Payment collected outside the store, e.g. cash on delivery",
            )
            .with_arg(
                ArgumentDef::new("automatic_settle", ArgumentType::Boolean)
                    .optional()
                    .with_default("false"),
            ),
        }
    }
}

impl Default for ManualPaymentHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentMethodHandler for ManualPaymentHandler {
    fn definition(&self) -> &OperationDefinition {
        &self.definition
    }

    async fn create_payment(
        &self,
        _ctx: &RequestContext,
        order: &Order,
        amount: i64,
        args: &ParsedArgs,
        method: &PaymentMethod,
    ) -> Result<PaymentOutcome, DomainError> {
        let state = if args.get_bool("automatic_settle").unwrap_or(false) {
            PaymentState::Settled
        } else {
            PaymentState::Authorized
        };

        tracing::info!(
            order_code = %order.code,
            method_code = method.code(),
            amount,
            ?state,
            "Manual payment recorded"
        );

        Ok(PaymentOutcome {
            state,
            amount,
            transaction_id: None,
            error_message: None,
            metadata: Map::new(),
        })
    }
}
