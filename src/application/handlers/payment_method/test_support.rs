//! Shared fixtures for payment method handler tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::operations::{ManualPaymentHandler, OrderTotalLimitChecker};
use crate::adapters::{
    InMemoryChannelService, InMemoryEventBus, InMemoryPaymentMethodRepository, TemplateTranslator,
};
use crate::domain::foundation::{Channel, ChannelId, DomainError, ErrorCode, RequestContext};
use crate::domain::operation::{
    ArgumentDef, ArgumentType, ConfigurableOperationInput, EligibilityOutcome,
    OperationDefinition, OperationRegistry, ParsedArgs, PaymentMethodEligibilityChecker,
};
use crate::domain::order::Order;
use crate::domain::payment_method::{CreatePaymentMethodInput, PaymentMethod};

/// Checker answering with a fixed outcome.
pub(super) struct FixedChecker {
    definition: OperationDefinition,
    outcome: EligibilityOutcome,
}

impl FixedChecker {
    /// Registers under `code` with no arguments.
    pub(super) fn new(code: &str, outcome: EligibilityOutcome) -> Self {
        Self {
            definition: OperationDefinition::new(code, "Fixed outcome"),
            outcome,
        }
    }
}

#[async_trait]
impl PaymentMethodEligibilityChecker for FixedChecker {
    fn definition(&self) -> &OperationDefinition {
        &self.definition
    }

    async fn check(
        &self,
        _ctx: &RequestContext,
        _order: &Order,
        _args: &ParsedArgs,
        _method: &PaymentMethod,
    ) -> Result<EligibilityOutcome, DomainError> {
        Ok(self.outcome.clone())
    }
}

/// Checker that always errors.
pub(super) struct FailingChecker {
    definition: OperationDefinition,
}

impl FailingChecker {
    /// Registers under `failing` with an optional `reason` argument.
    pub(super) fn new() -> Self {
        Self {
            definition: OperationDefinition::new("failing", "Always fails")
                .with_arg(ArgumentDef::new("reason", ArgumentType::String).optional()),
        }
    }
}

#[async_trait]
impl PaymentMethodEligibilityChecker for FailingChecker {
    fn definition(&self) -> &OperationDefinition {
        &self.definition
    }

    async fn check(
        &self,
        _ctx: &RequestContext,
        _order: &Order,
        _args: &ParsedArgs,
        _method: &PaymentMethod,
    ) -> Result<EligibilityOutcome, DomainError> {
        Err(DomainError::new(ErrorCode::InternalError, "Rates service unavailable"))
    }
}

/// Built-in operations plus the `always`, `never` and `failing` checkers.
pub(super) fn registry() -> Arc<OperationRegistry> {
    let registry = OperationRegistry::builder()
        .register_handler(ManualPaymentHandler::new())
        .and_then(|b| b.register_checker(OrderTotalLimitChecker::new()))
        .and_then(|b| b.register_checker(FixedChecker::new("always", EligibilityOutcome::Eligible)))
        .and_then(|b| b.register_checker(FixedChecker::new("never", EligibilityOutcome::Ineligible)))
        .and_then(|b| b.register_checker(FailingChecker::new()))
        .unwrap()
        .build();
    Arc::new(registry)
}

pub(super) fn manual_payment() -> ConfigurableOperationInput {
    ConfigurableOperationInput::new("manual-payment")
}

pub(super) fn total_limit(max_total: i64) -> ConfigurableOperationInput {
    ConfigurableOperationInput::new("order-total-limit")
        .with_argument("max_total", max_total.to_string())
}

pub(super) fn create_input(code: &str) -> CreatePaymentMethodInput {
    CreatePaymentMethodInput::new(code, code, manual_payment())
}

/// In-memory adapters plus a default channel and two storefront channels.
pub(super) struct Fixture {
    pub(super) repo: Arc<InMemoryPaymentMethodRepository>,
    pub(super) channels: Arc<InMemoryChannelService>,
    pub(super) bus: Arc<InMemoryEventBus>,
    pub(super) registry: Arc<OperationRegistry>,
    pub(super) default_channel: Channel,
    pub(super) uk: Channel,
    pub(super) us: Channel,
}

impl Fixture {
    pub(super) fn new() -> Self {
        let default_channel = Channel::new(ChannelId::new(), "__default_channel__").unwrap();
        Self {
            repo: Arc::new(InMemoryPaymentMethodRepository::new()),
            channels: Arc::new(InMemoryChannelService::new(default_channel.clone())),
            bus: Arc::new(InMemoryEventBus::new()),
            registry: registry(),
            default_channel,
            uk: Channel::new(ChannelId::new(), "uk").unwrap(),
            us: Channel::new(ChannelId::new(), "us").unwrap(),
        }
    }

    pub(super) fn ctx(&self, channel: &Channel) -> RequestContext {
        RequestContext::new(channel.clone(), Arc::new(TemplateTranslator::english()))
            .with_correlation_id("test-correlation")
    }

    pub(super) fn create_handler(&self) -> super::CreatePaymentMethodHandler {
        super::CreatePaymentMethodHandler::new(
            self.repo.clone(),
            self.channels.clone(),
            self.registry.clone(),
            self.bus.clone(),
        )
    }

    /// Creates a method from `channel` and clears the captured events.
    pub(super) async fn seed(
        &self,
        channel: &Channel,
        input: CreatePaymentMethodInput,
    ) -> PaymentMethod {
        let method = self
            .create_handler()
            .handle(&self.ctx(channel), input)
            .await
            .unwrap();
        self.bus.clear().await;
        method
    }
}
