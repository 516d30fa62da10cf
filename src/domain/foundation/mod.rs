//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, request context, events and error
//! types that form the vocabulary of the payment method domain.

mod channel;
mod context;
mod errors;
mod events;
mod ids;
mod timestamp;

pub use channel::Channel;
pub use context::RequestContext;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{ChannelId, OrderId, PaymentMethodId, UserId};
pub use timestamp::Timestamp;
