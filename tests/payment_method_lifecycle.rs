//! Integration tests for the payment method lifecycle.
//!
//! These tests wire the in-memory adapters with the built-in operations and
//! walk a payment method through:
//! 1. Creation in a storefront channel
//! 2. Checkout eligibility and operation resolution
//! 3. Updates that swap and clear the checker
//! 4. Channel-aware deletion

use std::sync::Arc;

use payment_methods::adapters::{
    default_registry, InMemoryChannelService, InMemoryEventBus, InMemoryPaymentMethodRepository,
    TemplateTranslator,
};
use payment_methods::application::{
    CreatePaymentMethodHandler, DeletePaymentMethodHandler, GetEligiblePaymentMethodsHandler,
    GetMethodAndOperationsHandler, ListOperationDefinitionsHandler, UpdatePaymentMethodHandler,
};
use payment_methods::domain::foundation::{Channel, ChannelId, RequestContext};
use payment_methods::domain::operation::{ConfigurableOperationInput, OperationRegistry};
use payment_methods::domain::order::Order;
use payment_methods::domain::payment_method::{
    CreatePaymentMethodInput, DeletionResult, UpdatePaymentMethodInput,
};
use payment_methods::ports::PaymentMethodRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct App {
    repository: Arc<InMemoryPaymentMethodRepository>,
    events: Arc<InMemoryEventBus>,
    registry: Arc<OperationRegistry>,
    channels: Arc<InMemoryChannelService>,
    default_channel: Channel,
}

impl App {
    fn new() -> Self {
        let default_channel = Channel::new(ChannelId::new(), "__default_channel__").unwrap();
        Self {
            repository: Arc::new(InMemoryPaymentMethodRepository::new()),
            events: Arc::new(InMemoryEventBus::new()),
            registry: Arc::new(default_registry().unwrap()),
            channels: Arc::new(InMemoryChannelService::new(default_channel.clone())),
            default_channel,
        }
    }

    fn ctx(&self, channel: &Channel) -> RequestContext {
        RequestContext::new(channel.clone(), Arc::new(TemplateTranslator::english()))
    }

    fn create(&self) -> CreatePaymentMethodHandler {
        CreatePaymentMethodHandler::new(
            self.repository.clone(),
            self.channels.clone(),
            self.registry.clone(),
            self.events.clone(),
        )
    }

    fn update(&self) -> UpdatePaymentMethodHandler {
        UpdatePaymentMethodHandler::new(
            self.repository.clone(),
            self.registry.clone(),
            self.events.clone(),
        )
    }

    fn delete(&self) -> DeletePaymentMethodHandler {
        DeletePaymentMethodHandler::new(
            self.repository.clone(),
            self.channels.clone(),
            self.events.clone(),
        )
    }

    fn eligibility(&self) -> GetEligiblePaymentMethodsHandler {
        GetEligiblePaymentMethodsHandler::new(self.repository.clone(), self.registry.clone())
    }

    fn resolver(&self) -> GetMethodAndOperationsHandler {
        GetMethodAndOperationsHandler::new(self.repository.clone(), self.registry.clone())
    }
}

fn channel(code: &str) -> Channel {
    Channel::new(ChannelId::new(), code).unwrap()
}

fn cash_on_delivery() -> CreatePaymentMethodInput {
    CreatePaymentMethodInput::new(
        "cash-on-delivery",
        "Cash on delivery",
        ConfigurableOperationInput::new("manual-payment"),
    )
}

fn order(total: i64) -> Order {
    Order::new("ORD-1", "GBP").with_total_with_tax(total)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn cash_on_delivery_is_offered_without_a_checker() {
    let app = App::new();
    let uk = channel("uk");
    let ctx = app.ctx(&uk);

    app.create().handle(&ctx, cash_on_delivery()).await.unwrap();

    let quotes = app.eligibility().handle(&ctx, &order(12_000)).await.unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].code, "cash-on-delivery");
    assert!(quotes[0].is_eligible);
    assert_eq!(quotes[0].eligibility_message, None);

    let resolved = app.resolver().handle(&ctx, "cash-on-delivery").await.unwrap();
    assert_eq!(resolved.handler.definition().code(), "manual-payment");
    assert!(resolved.checker.is_none());
}

#[tokio::test]
async fn order_total_limit_blocks_large_orders_until_cleared() {
    let app = App::new();
    let uk = channel("uk");
    let ctx = app.ctx(&uk);
    let input = cash_on_delivery().with_checker(
        ConfigurableOperationInput::new("order-total-limit").with_argument("max_total", "10000"),
    );
    let method = app.create().handle(&ctx, input).await.unwrap();

    let quotes = app.eligibility().handle(&ctx, &order(25_000)).await.unwrap();
    assert!(!quotes[0].is_eligible);
    assert_eq!(
        quotes[0].eligibility_message.as_deref(),
        Some("Order total exceeds limit")
    );

    let quotes = app.eligibility().handle(&ctx, &order(9_000)).await.unwrap();
    assert!(quotes[0].is_eligible);

    app.update()
        .handle(&ctx, UpdatePaymentMethodInput::new(*method.id()).clear_checker())
        .await
        .unwrap();

    let quotes = app.eligibility().handle(&ctx, &order(25_000)).await.unwrap();
    assert!(quotes[0].is_eligible);
}

#[tokio::test]
async fn disabled_methods_are_not_quoted() {
    let app = App::new();
    let uk = channel("uk");
    let ctx = app.ctx(&uk);
    let method = app.create().handle(&ctx, cash_on_delivery()).await.unwrap();

    app.update()
        .handle(&ctx, UpdatePaymentMethodInput::new(*method.id()).with_enabled(false))
        .await
        .unwrap();

    let quotes = app.eligibility().handle(&ctx, &order(100)).await.unwrap();
    assert!(quotes.is_empty());
}

#[tokio::test]
async fn deletion_follows_channel_topology() {
    let app = App::new();
    let uk = channel("uk");
    let method = app
        .create()
        .handle(&app.ctx(&uk), cash_on_delivery())
        .await
        .unwrap();

    let refused = app
        .delete()
        .handle(&app.ctx(&app.default_channel), *method.id(), false)
        .await
        .unwrap();
    assert_eq!(refused.result, DeletionResult::NotDeleted);
    assert!(refused.message.unwrap().contains("uk"));

    let detached = app
        .delete()
        .handle(&app.ctx(&uk), *method.id(), false)
        .await
        .unwrap();
    assert_eq!(detached.result, DeletionResult::Deleted);
    assert!(app
        .eligibility()
        .handle(&app.ctx(&uk), &order(100))
        .await
        .unwrap()
        .is_empty());

    let removed = app
        .delete()
        .handle(&app.ctx(&app.default_channel), *method.id(), false)
        .await
        .unwrap();
    assert_eq!(removed.result, DeletionResult::Deleted);
    assert!(app.repository.find_by_id(method.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn lifecycle_emits_events_in_order() {
    let app = App::new();
    let uk = channel("uk");
    let ctx = app.ctx(&uk);
    let method = app.create().handle(&ctx, cash_on_delivery()).await.unwrap();
    app.update()
        .handle(&ctx, UpdatePaymentMethodInput::new(*method.id()).with_name("COD"))
        .await
        .unwrap();
    app.delete().handle(&ctx, *method.id(), false).await.unwrap();

    let types: Vec<String> = app
        .events
        .events_for_aggregate(&method.id().to_string())
        .await
        .into_iter()
        .map(|e| e.event_type)
        .collect();
    assert_eq!(
        types,
        vec![
            "payment_method.created.v1",
            "payment_method.updated.v1",
            "payment_method.deleted.v1",
        ]
    );
}

#[tokio::test]
async fn definitions_list_built_in_operations() {
    let app = App::new();
    let handler = ListOperationDefinitionsHandler::new(app.registry.clone());
    let ctx = app.ctx(&app.default_channel);

    let handlers: Vec<String> = handler.handlers(&ctx).into_iter().map(|d| d.code).collect();
    let checkers: Vec<String> = handler.checkers(&ctx).into_iter().map(|d| d.code).collect();

    assert_eq!(handlers, vec!["manual-payment"]);
    assert_eq!(checkers, vec!["order-total-limit"]);
}
