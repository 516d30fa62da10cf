//! Payment methods service entry point.
//!
//! Loads configuration, installs logging and wires the in-memory adapters
//! with the built-in operations, then seeds a demo payment method and prints
//! the eligibility quotes for a sample order.

use std::error::Error;
use std::sync::Arc;

use payment_methods::adapters::{
    default_registry, InMemoryChannelService, InMemoryEventBus, InMemoryPaymentMethodRepository,
    TemplateTranslator,
};
use payment_methods::application::{CreatePaymentMethodHandler, GetEligiblePaymentMethodsHandler};
use payment_methods::config::AppConfig;
use payment_methods::domain::foundation::{Channel, ChannelId, RequestContext};
use payment_methods::domain::operation::ConfigurableOperationInput;
use payment_methods::domain::order::Order;
use payment_methods::domain::payment_method::CreatePaymentMethodInput;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init()?;

    let registry = Arc::new(default_registry()?);
    tracing::info!(?registry, "Operation registry built");

    let default_channel = Channel::new(ChannelId::new(), &config.channels.default_channel_code)?;
    let repository = Arc::new(InMemoryPaymentMethodRepository::new());
    let channels = Arc::new(InMemoryChannelService::new(default_channel.clone()));
    let events = Arc::new(InMemoryEventBus::new());

    let create = CreatePaymentMethodHandler::new(
        repository.clone(),
        channels,
        registry.clone(),
        events.clone(),
    );
    let eligibility = GetEligiblePaymentMethodsHandler::new(repository, registry);

    let ctx = RequestContext::new(default_channel, Arc::new(TemplateTranslator::english()));

    let input = CreatePaymentMethodInput::new(
        "cash-on-delivery",
        "Cash on delivery",
        ConfigurableOperationInput::new("manual-payment"),
    )
    .with_checker(
        ConfigurableOperationInput::new("order-total-limit").with_argument("max_total", "10000"),
    );
    create.handle(&ctx, input).await?;

    for total in [4_500, 25_000] {
        let order = Order::new(format!("DEMO-{}", total), "USD").with_total_with_tax(total);
        let quotes = eligibility.handle(&ctx, &order).await?;
        println!("{}", serde_json::to_string_pretty(&quotes)?);
    }

    tracing::info!(events = events.event_count().await, "Done");
    Ok(())
}
