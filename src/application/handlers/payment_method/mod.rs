//! Payment method command and query handlers.
//!
//! Commands (channel-scoped lifecycle):
//! - `CreatePaymentMethodHandler`
//! - `UpdatePaymentMethodHandler`
//! - `DeletePaymentMethodHandler`
//!
//! Queries:
//! - `GetPaymentMethodHandler` / `ListPaymentMethodsHandler` - Admin reads
//! - `GetEligiblePaymentMethodsHandler` - Eligibility quotes for an order
//! - `GetMethodAndOperationsHandler` - Resolves a method's handler and checker
//! - `ListOperationDefinitionsHandler` - Registered handler and checker definitions

mod create_payment_method;
mod delete_payment_method;
mod get_eligible_payment_methods;
mod get_method_and_operations;
mod get_payment_method;
mod list_operation_definitions;
mod list_payment_methods;
mod update_payment_method;

#[cfg(test)]
mod test_support;

pub use create_payment_method::CreatePaymentMethodHandler;
pub use delete_payment_method::DeletePaymentMethodHandler;
pub use get_eligible_payment_methods::GetEligiblePaymentMethodsHandler;
pub use get_method_and_operations::{GetMethodAndOperationsHandler, ResolvedPaymentMethod};
pub use get_payment_method::GetPaymentMethodHandler;
pub use list_operation_definitions::{ListOperationDefinitionsHandler, OperationDefinitionView};
pub use list_payment_methods::{ListPaymentMethodsHandler, ListPaymentMethodsQuery};
pub use update_payment_method::UpdatePaymentMethodHandler;

use crate::domain::foundation::{EventEnvelope, RequestContext};
use crate::ports::EventPublisher;

/// Publishes a lifecycle event without failing the caller.
///
/// The mutation has already been persisted when this runs; a publish error
/// is logged and dropped.
async fn publish_lifecycle_event(
    publisher: &dyn EventPublisher,
    ctx: &RequestContext,
    envelope: EventEnvelope,
) {
    let envelope = ctx.stamp(envelope);
    let event_type = envelope.event_type.clone();
    let aggregate_id = envelope.aggregate_id.clone();

    if let Err(error) = publisher.publish(envelope).await {
        tracing::warn!(
            event_type = %event_type,
            aggregate_id = %aggregate_id,
            error = %error,
            "Failed to publish payment method event"
        );
    }
}
