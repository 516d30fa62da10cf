//! In-memory persistence and channel adapters.
//!
//! - `InMemoryPaymentMethodRepository` - Payment method storage
//! - `InMemoryChannelService` - Fixed default channel and assignment

mod channel_service;
mod payment_method_repository;

pub use channel_service::InMemoryChannelService;
pub use payment_method_repository::InMemoryPaymentMethodRepository;
