//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, channels, request context, errors, events)
//! - `operation` - Configurable operations: handlers, checkers and their registry
//! - `order` - Read-only order snapshot consumed by operations
//! - `payment_method` - Payment method aggregate, deletion policy and events

pub mod foundation;
pub mod operation;
pub mod order;
pub mod payment_method;
