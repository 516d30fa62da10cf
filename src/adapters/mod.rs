//! Adapters - Implementations of port interfaces.
//!
//! - `events` - In-memory event bus
//! - `memory` - In-memory payment method repository and channel service
//! - `i18n` - Template message translator
//! - `operations` - Built-in payment handlers and eligibility checkers

pub mod events;
pub mod i18n;
pub mod memory;
pub mod operations;

pub use events::InMemoryEventBus;
pub use i18n::TemplateTranslator;
pub use memory::{InMemoryChannelService, InMemoryPaymentMethodRepository};
pub use operations::default_registry;
