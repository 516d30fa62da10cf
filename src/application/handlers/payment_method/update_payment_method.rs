//! UpdatePaymentMethodHandler - Command handler for patching payment methods.

use std::sync::Arc;

use crate::domain::foundation::{RequestContext, SerializableDomainEvent};
use crate::domain::operation::{OperationKind, OperationRegistry};
use crate::domain::payment_method::{
    PaymentMethod, PaymentMethodError, PaymentMethodUpdated, UpdatePaymentMethodInput,
};
use crate::ports::{EventPublisher, PaymentMethodRepository};

use super::publish_lifecycle_event;

/// Handler for updating payment methods.
pub struct UpdatePaymentMethodHandler {
    repository: Arc<dyn PaymentMethodRepository>,
    registry: Arc<OperationRegistry>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdatePaymentMethodHandler {
    pub fn new(
        repository: Arc<dyn PaymentMethodRepository>,
        registry: Arc<OperationRegistry>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            registry,
            event_publisher,
        }
    }

    /// Applies the fields present in `input`.
    ///
    /// A `checker` of `Some(None)` removes the checker; an absent one keeps it.
    /// Nothing is persisted unless every present field is valid.
    ///
    /// The method is loaded by id alone, not through the requesting channel,
    /// so any channel's admin can patch it. Only deletion is channel-scoped.
    pub async fn handle(
        &self,
        ctx: &RequestContext,
        input: UpdatePaymentMethodInput,
    ) -> Result<PaymentMethod, PaymentMethodError> {
        let mut method = self
            .repository
            .find_by_id(&input.id)
            .await?
            .ok_or_else(|| PaymentMethodError::not_found(input.id))?;

        let handler = input
            .handler
            .as_ref()
            .map(|handler| self.registry.parse_input(OperationKind::Handler, handler))
            .transpose()
            .map_err(|e| PaymentMethodError::invalid_operation("handler", e))?;
        let checker = match &input.checker {
            None => None,
            Some(None) => Some(None),
            Some(Some(checker)) => Some(Some(
                self.registry
                    .parse_input(OperationKind::Checker, checker)
                    .map_err(|e| PaymentMethodError::invalid_operation("checker", e))?,
            )),
        };

        method.apply_patch(&input)?;
        if let Some(handler) = handler {
            method.set_handler(handler);
        }
        if let Some(checker) = checker {
            method.set_checker(checker);
        }

        self.repository.save(&method).await?;

        tracing::info!(
            payment_method_id = %method.id(),
            code = method.code(),
            "Payment method updated"
        );

        let event = PaymentMethodUpdated::new(*method.id(), input);
        publish_lifecycle_event(self.event_publisher.as_ref(), ctx, event.to_envelope()).await;

        Ok(method)
    }
}
