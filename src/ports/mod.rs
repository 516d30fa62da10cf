//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentMethodRepository` - Payment method persistence
//! - `ChannelService` - Default channel lookup and channel assignment
//! - `EventPublisher` - Domain event publishing
//! - `MessageTranslator` - Localised user-facing messages

mod channel_service;
mod event_publisher;
mod message_translator;
mod payment_method_repository;

pub use channel_service::ChannelService;
pub use event_publisher::EventPublisher;
pub use message_translator::{message_keys, MessageTranslator};
pub use payment_method_repository::{ListOptions, PaymentMethodList, PaymentMethodRepository};
