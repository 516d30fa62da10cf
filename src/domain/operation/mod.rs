//! Configurable operations domain module.
//!
//! Payment handlers and eligibility checkers are pluggable, named operations
//! with typed argument slots. They are registered in an [`OperationRegistry`]
//! at startup, bound to payment methods as [`ConfigurableOperation`]s, and
//! resolved by code whenever they need to run.
//!
//! # Module Structure
//!
//! - `kind` - Handler vs Checker
//! - `argument` - Argument slots, type tags and coercion
//! - `definition` - Operation definitions and argument binding
//! - `bound` - Bound operations and raw client input
//! - `handler` / `checker` - Capability traits implemented by plugins
//! - `registry` - Registration, lookup and input parsing

mod argument;
mod bound;
mod checker;
mod definition;
mod errors;
mod handler;
mod kind;
mod registry;

pub use argument::{ArgumentDef, ArgumentType, ArgumentValue, ParsedArgs};
pub use bound::{ConfigArg, ConfigurableOperation, ConfigurableOperationInput};
pub use checker::{EligibilityOutcome, PaymentMethodEligibilityChecker};
pub use definition::OperationDefinition;
pub use errors::OperationError;
pub use handler::{PaymentMethodHandler, PaymentOutcome, PaymentState};
pub use kind::OperationKind;
pub use registry::{OperationRegistry, OperationRegistryBuilder};
