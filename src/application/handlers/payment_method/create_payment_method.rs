//! CreatePaymentMethodHandler - Command handler for creating payment methods.

use std::sync::Arc;

use crate::domain::foundation::{PaymentMethodId, RequestContext, SerializableDomainEvent};
use crate::domain::operation::{OperationKind, OperationRegistry};
use crate::domain::payment_method::{
    CreatePaymentMethodInput, PaymentMethod, PaymentMethodCreated, PaymentMethodError,
};
use crate::ports::{ChannelService, EventPublisher, PaymentMethodRepository};

use super::publish_lifecycle_event;

/// Handler for creating payment methods.
pub struct CreatePaymentMethodHandler {
    repository: Arc<dyn PaymentMethodRepository>,
    channel_service: Arc<dyn ChannelService>,
    registry: Arc<OperationRegistry>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreatePaymentMethodHandler {
    pub fn new(
        repository: Arc<dyn PaymentMethodRepository>,
        channel_service: Arc<dyn ChannelService>,
        registry: Arc<OperationRegistry>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            channel_service,
            registry,
            event_publisher,
        }
    }

    /// Creates a payment method in the request's channel.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the handler is missing or a field is blank
    /// - `InvalidOperation` if the handler or checker input does not bind
    /// - `DuplicateCode` if the code is taken in a shared channel
    pub async fn handle(
        &self,
        ctx: &RequestContext,
        input: CreatePaymentMethodInput,
    ) -> Result<PaymentMethod, PaymentMethodError> {
        // 1. Bind operations
        let handler_input = input.handler.as_ref().ok_or_else(|| {
            PaymentMethodError::validation("handler", "A payment method handler is required")
        })?;
        let handler = self
            .registry
            .parse_input(OperationKind::Handler, handler_input)
            .map_err(|e| PaymentMethodError::invalid_operation("handler", e))?;
        let checker = input
            .checker
            .as_ref()
            .map(|checker| self.registry.parse_input(OperationKind::Checker, checker))
            .transpose()
            .map_err(|e| PaymentMethodError::invalid_operation("checker", e))?;

        // 2. Build aggregate
        let mut method =
            PaymentMethod::new(PaymentMethodId::new(), &input.code, &input.name, handler)?;
        method.set_description(&input.description);
        method.set_enabled(input.enabled);
        method.set_checker(checker);
        method.merge_custom_fields(input.custom_fields.clone());

        // 3. Assign to channels and persist
        self.channel_service
            .assign_to_current_channel(&mut method, ctx)
            .await?;
        self.repository.save(&method).await?;

        tracing::info!(
            payment_method_id = %method.id(),
            code = method.code(),
            channel = ctx.channel().code(),
            "Payment method created"
        );

        // 4. Announce
        let event = PaymentMethodCreated::new(*method.id(), input);
        publish_lifecycle_event(self.event_publisher.as_ref(), ctx, event.to_envelope()).await;

        Ok(method)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{create_input, manual_payment, total_limit, Fixture};
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::operation::{ConfigurableOperationInput, OperationError};
    use serde_json::json;

    #[tokio::test]
    async fn binds_handler_and_assigns_request_channel() {
        let fx = Fixture::new();
        let input = CreatePaymentMethodInput::new(
            "cash-on-delivery",
            "Cash on delivery",
            manual_payment().with_argument("automatic_settle", "true"),
        );

        let method = fx.create_handler().handle(&fx.ctx(&fx.uk), input).await.unwrap();

        assert_eq!(method.handler().code(), "manual-payment");
        assert_eq!(method.handler().arg("automatic_settle"), Some("true"));
        assert!(method.checker().is_none());
        assert!(method.is_in_channel(fx.uk.id()));
        assert!(method.is_in_channel(fx.default_channel.id()));
        assert!(fx.repo.find_by_id(method.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn binds_checker_with_defaults() {
        let fx = Fixture::new();
        let input = create_input("cod").with_checker(total_limit(5000));

        let method = fx.create_handler().handle(&fx.ctx(&fx.uk), input).await.unwrap();

        let checker = method.checker().unwrap();
        assert_eq!(checker.code(), "order-total-limit");
        assert_eq!(checker.arg("max_total"), Some("5000"));
        assert_eq!(checker.arg("message"), Some("Order total exceeds limit"));
    }

    #[tokio::test]
    async fn copies_scalar_fields() {
        let fx = Fixture::new();
        let input = create_input("cod")
            .with_description("Pay the driver")
            .with_custom_field("icon", json!("cash.svg"))
            .disabled();

        let method = fx.create_handler().handle(&fx.ctx(&fx.uk), input).await.unwrap();

        assert_eq!(method.description(), "Pay the driver");
        assert!(!method.is_enabled());
        assert_eq!(method.custom_fields()["icon"], json!("cash.svg"));
    }

    #[tokio::test]
    async fn publishes_created_event_with_input() {
        let fx = Fixture::new();
        let input = create_input("cod");

        let method = fx
            .create_handler()
            .handle(&fx.ctx(&fx.uk), input.clone())
            .await
            .unwrap();

        let events = fx.bus.published_events().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "payment_method.created.v1");
        assert_eq!(events[0].aggregate_id, method.id().to_string());
        assert_eq!(
            events[0].metadata.correlation_id.as_deref(),
            Some("test-correlation")
        );
        assert_eq!(
            events[0].metadata.channel_id,
            Some(fx.uk.id().to_string())
        );
        let payload: PaymentMethodCreated = events[0].payload_as().unwrap();
        assert_eq!(payload.input, input);
    }

    #[tokio::test]
    async fn rejects_missing_handler() {
        let fx = Fixture::new();
        let mut input = create_input("cod");
        input.handler = None;

        let err = fx.create_handler().handle(&fx.ctx(&fx.uk), input).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(fx.repo.is_empty().await);
        assert_eq!(fx.bus.event_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_unknown_handler_code() {
        let fx = Fixture::new();
        let input = CreatePaymentMethodInput::new(
            "cod",
            "Cash",
            ConfigurableOperationInput::new("carrier-pigeon"),
        );

        let err = fx.create_handler().handle(&fx.ctx(&fx.uk), input).await.unwrap_err();

        assert!(matches!(
            err,
            PaymentMethodError::InvalidOperation {
                ref field,
                source: OperationError::NotFound { .. },
            } if field == "handler"
        ));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn rejects_checker_missing_required_argument() {
        let fx = Fixture::new();
        let input = create_input("cod")
            .with_checker(ConfigurableOperationInput::new("order-total-limit"));

        let err = fx.create_handler().handle(&fx.ctx(&fx.uk), input).await.unwrap_err();

        assert!(matches!(
            err,
            PaymentMethodError::InvalidOperation {
                source: OperationError::MissingArgument { .. },
                ..
            }
        ));
        assert!(fx.repo.is_empty().await);
    }

    #[tokio::test]
    async fn rejects_duplicate_code_in_channel() {
        let fx = Fixture::new();
        fx.seed(&fx.uk, create_input("cod")).await;

        let err = fx
            .create_handler()
            .handle(&fx.ctx(&fx.uk), create_input("cod"))
            .await
            .unwrap_err();

        assert_eq!(err, PaymentMethodError::DuplicateCode("cod".to_string()));
        assert_eq!(fx.bus.event_count().await, 0);
    }

    #[tokio::test]
    async fn publish_failure_does_not_fail_create() {
        let fx = Fixture::new();
        fx.bus.set_failing(true);

        let method = fx
            .create_handler()
            .handle(&fx.ctx(&fx.uk), create_input("cod"))
            .await
            .unwrap();

        assert!(fx.repo.find_by_id(method.id()).await.unwrap().is_some());
    }
}
