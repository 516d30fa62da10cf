//! The two families of configurable operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which family a configurable operation belongs to.
///
/// Codes are unique per kind, so a handler and a checker may share a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Executes payments for a payment method.
    Handler,
    /// Decides whether a payment method may be offered for an order.
    Checker,
}

impl OperationKind {
    /// Field name under which the bound operation lives on a payment method.
    pub fn field_name(&self) -> &'static str {
        match self {
            OperationKind::Handler => "handler",
            OperationKind::Checker => "checker",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperationKind::Handler => "payment method handler",
            OperationKind::Checker => "payment method eligibility checker",
        };
        write!(f, "{}", s)
    }
}
