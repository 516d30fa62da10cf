//! Payment handler capability.
//!
//! Handlers are resolved here and invoked by an external payment executor;
//! this crate only defines the contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::{OperationDefinition, ParsedArgs};
use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;

/// State a payment reaches after the handler has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Authorized,
    Settled,
    Declined,
}

/// What a handler reports back to the payment executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    pub state: PaymentState,
    pub amount: i64,
    pub transaction_id: Option<String>,
    pub error_message: Option<String>,
    #[serde(default)]
    pub metadata: Map<String, JsonValue>,
}

/// Pluggable logic that performs the payment action for a payment method.
#[async_trait]
pub trait PaymentMethodHandler: Send + Sync {
    /// Code, description and argument slots of this handler.
    fn definition(&self) -> &OperationDefinition;

    /// Start a payment of `amount` (minor units) for `order`.
    async fn create_payment(
        &self,
        ctx: &RequestContext,
        order: &Order,
        amount: i64,
        args: &ParsedArgs,
        method: &PaymentMethod,
    ) -> Result<PaymentOutcome, DomainError>;
}
