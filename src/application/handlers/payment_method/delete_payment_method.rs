//! DeletePaymentMethodHandler - Command handler for channel-aware deletion.

use std::sync::Arc;

use crate::domain::foundation::{PaymentMethodId, RequestContext, SerializableDomainEvent};
use crate::domain::payment_method::{
    decide_deletion, DeletionDecision, DeletionMode, DeletionResponse, PaymentMethodDeleted,
    PaymentMethodError,
};
use crate::ports::{message_keys, ChannelService, EventPublisher, PaymentMethodRepository};

use super::publish_lifecycle_event;

/// Handler for deleting payment methods.
///
/// From the default channel the method is removed outright, unless other
/// channels still use it and `force` is not set. From any other channel only
/// that channel's membership is dropped.
pub struct DeletePaymentMethodHandler {
    repository: Arc<dyn PaymentMethodRepository>,
    channel_service: Arc<dyn ChannelService>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DeletePaymentMethodHandler {
    pub fn new(
        repository: Arc<dyn PaymentMethodRepository>,
        channel_service: Arc<dyn ChannelService>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            channel_service,
            event_publisher,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` if no method with this id is in the requesting channel
    ///
    /// A storage failure while removing is reported as `NOT_DELETED`, not as
    /// an error.
    pub async fn handle(
        &self,
        ctx: &RequestContext,
        id: PaymentMethodId,
        force: bool,
    ) -> Result<DeletionResponse, PaymentMethodError> {
        let mut method = self
            .repository
            .find_by_id_in_channel(&id, ctx.channel_id())
            .await?
            .ok_or_else(|| PaymentMethodError::not_found(id))?;
        let default_channel = self.channel_service.default_channel().await?;

        let decision = decide_deletion(
            method.channels(),
            ctx.channel_id(),
            default_channel.id(),
            force,
        );

        match decision {
            DeletionDecision::Refuse { blocking_channels } => {
                let codes: Vec<&str> = blocking_channels.iter().map(|c| c.code()).collect();
                tracing::debug!(
                    payment_method_id = %id,
                    channels = ?codes,
                    "Refused to delete shared payment method"
                );
                let message = ctx.translate(
                    message_keys::PAYMENT_METHOD_USED_IN_CHANNELS,
                    &[("channelCodes", codes.join(", "))],
                );
                Ok(DeletionResponse::not_deleted(message))
            }
            DeletionDecision::Remove => {
                if let Err(error) = self.repository.remove(&id).await {
                    tracing::warn!(
                        payment_method_id = %id,
                        error = %error,
                        "Failed to remove payment method"
                    );
                    return Ok(DeletionResponse::not_deleted(error.message));
                }

                tracing::info!(payment_method_id = %id, code = method.code(), "Payment method removed");
                let event =
                    PaymentMethodDeleted::new(id, method.code(), DeletionMode::Removed, *ctx.channel_id());
                publish_lifecycle_event(self.event_publisher.as_ref(), ctx, event.to_envelope())
                    .await;
                Ok(DeletionResponse::deleted())
            }
            DeletionDecision::Detach { channel_id } => {
                method.remove_from_channel(&channel_id);
                self.repository.save(&method).await?;

                tracing::info!(
                    payment_method_id = %id,
                    channel = ctx.channel().code(),
                    "Payment method detached from channel"
                );
                let event =
                    PaymentMethodDeleted::new(id, method.code(), DeletionMode::Detached, channel_id);
                publish_lifecycle_event(self.event_publisher.as_ref(), ctx, event.to_envelope())
                    .await;
                Ok(DeletionResponse::deleted())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{create_input, Fixture};
    use super::*;
    use crate::domain::payment_method::{DeletionResult, PaymentMethod};

    fn handler(fx: &Fixture) -> DeletePaymentMethodHandler {
        DeletePaymentMethodHandler::new(fx.repo.clone(), fx.channels.clone(), fx.bus.clone())
    }

    /// A method visible in the default, uk and us channels.
    async fn shared_method(fx: &Fixture) -> PaymentMethod {
        let mut method = fx.seed(&fx.uk, create_input("cod")).await;
        method.assign_to_channel(fx.us.clone());
        fx.repo.save(&method).await.unwrap();
        method
    }

    #[tokio::test]
    async fn default_channel_removes_unshared_method() {
        let fx = Fixture::new();
        let method = fx.seed(&fx.default_channel, create_input("cod")).await;

        let response = handler(&fx)
            .handle(&fx.ctx(&fx.default_channel), *method.id(), false)
            .await
            .unwrap();

        assert_eq!(response, DeletionResponse::deleted());
        assert!(fx.repo.find_by_id(method.id()).await.unwrap().is_none());
        let events = fx.bus.events_of_type("payment_method.deleted.v1").await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload["mode"], "removed");
    }

    #[tokio::test]
    async fn default_channel_refuses_shared_method() {
        let fx = Fixture::new();
        let method = shared_method(&fx).await;

        let response = handler(&fx)
            .handle(&fx.ctx(&fx.default_channel), *method.id(), false)
            .await
            .unwrap();

        assert_eq!(response.result, DeletionResult::NotDeleted);
        let message = response.message.unwrap();
        assert!(message.contains("uk, us"), "unexpected message: {}", message);
        assert!(fx.repo.find_by_id(method.id()).await.unwrap().is_some());
        assert_eq!(fx.bus.event_count().await, 0);
    }

    #[tokio::test]
    async fn default_channel_force_removes_shared_method() {
        let fx = Fixture::new();
        let method = shared_method(&fx).await;

        let response = handler(&fx)
            .handle(&fx.ctx(&fx.default_channel), *method.id(), true)
            .await
            .unwrap();

        assert_eq!(response.result, DeletionResult::Deleted);
        assert!(fx.repo.find_by_id(method.id()).await.unwrap().is_none());
        assert!(fx.bus.has_event("payment_method.deleted.v1").await);
    }

    #[tokio::test]
    async fn other_channel_detaches_only_itself() {
        let fx = Fixture::new();
        let method = shared_method(&fx).await;

        let response = handler(&fx)
            .handle(&fx.ctx(&fx.uk), *method.id(), false)
            .await
            .unwrap();

        assert_eq!(response.result, DeletionResult::Deleted);
        let stored = fx.repo.find_by_id(method.id()).await.unwrap().unwrap();
        assert!(!stored.is_in_channel(fx.uk.id()));
        assert!(stored.is_in_channel(fx.us.id()));
        assert!(stored.is_in_channel(fx.default_channel.id()));
        let events = fx.bus.events_of_type("payment_method.deleted.v1").await;
        assert_eq!(events[0].payload["mode"], "detached");
    }

    #[tokio::test]
    async fn non_member_channel_gets_not_found() {
        let fx = Fixture::new();
        let method = fx.seed(&fx.uk, create_input("cod")).await;

        let err = handler(&fx)
            .handle(&fx.ctx(&fx.us), *method.id(), false)
            .await
            .unwrap_err();

        assert_eq!(err, PaymentMethodError::NotFound(*method.id()));
        let stored = fx.repo.find_by_id(method.id()).await.unwrap().unwrap();
        assert_eq!(stored.channels(), method.channels());
        assert_eq!(fx.bus.event_count().await, 0);
    }

    #[tokio::test]
    async fn storage_failure_is_reported_not_raised() {
        let fx = Fixture::new();
        let method = fx.seed(&fx.default_channel, create_input("cod")).await;
        fx.repo.set_fail_removals(true);

        let response = handler(&fx)
            .handle(&fx.ctx(&fx.default_channel), *method.id(), false)
            .await
            .unwrap();

        assert_eq!(response.result, DeletionResult::NotDeleted);
        assert_eq!(
            response.message.as_deref(),
            Some("Payment method is still referenced by existing payments")
        );
        assert_eq!(fx.bus.event_count().await, 0);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let fx = Fixture::new();
        let id = PaymentMethodId::new();

        let err = handler(&fx)
            .handle(&fx.ctx(&fx.default_channel), id, false)
            .await
            .unwrap_err();

        assert_eq!(err, PaymentMethodError::NotFound(id));
    }
}
