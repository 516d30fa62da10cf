//! Payment method domain module.
//!
//! A payment method binds a handler and an optional eligibility checker to a
//! set of channels.
//!
//! # Module Structure
//!
//! - `aggregate` - PaymentMethod entity and channel membership
//! - `input` - Create and update inputs
//! - `deletion` - Channel-aware deletion policy
//! - `quote` - Eligibility summary shown to customers
//! - `events` - Lifecycle events
//! - `errors` - Payment method errors

mod aggregate;
mod deletion;
mod errors;
mod events;
mod input;
mod quote;

pub use aggregate::PaymentMethod;
pub use deletion::{decide_deletion, DeletionDecision, DeletionResponse, DeletionResult};
pub use errors::PaymentMethodError;
pub use events::{DeletionMode, PaymentMethodCreated, PaymentMethodDeleted, PaymentMethodUpdated};
pub use input::{CreatePaymentMethodInput, UpdatePaymentMethodInput};
pub use quote::PaymentMethodQuote;
