//! Eligibility checker capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{OperationDefinition, ParsedArgs};
use crate::domain::foundation::{DomainError, RequestContext};
use crate::domain::order::Order;
use crate::domain::payment_method::PaymentMethod;

/// Result of an eligibility check.
///
/// Checkers answer yes, no, or no-with-a-reason; the reason is shown to the
/// customer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum EligibilityOutcome {
    Eligible,
    Ineligible,
    IneligibleWithMessage(String),
}

impl EligibilityOutcome {
    pub fn is_eligible(&self) -> bool {
        matches!(self, EligibilityOutcome::Eligible)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            EligibilityOutcome::IneligibleWithMessage(message) => Some(message),
            _ => None,
        }
    }
}

impl From<bool> for EligibilityOutcome {
    fn from(eligible: bool) -> Self {
        if eligible {
            EligibilityOutcome::Eligible
        } else {
            EligibilityOutcome::Ineligible
        }
    }
}

impl From<String> for EligibilityOutcome {
    fn from(message: String) -> Self {
        EligibilityOutcome::IneligibleWithMessage(message)
    }
}

impl From<&str> for EligibilityOutcome {
    fn from(message: &str) -> Self {
        EligibilityOutcome::IneligibleWithMessage(message.to_string())
    }
}

/// Pluggable logic deciding whether a payment method may be offered.
///
/// Implementations are registered once at startup and invoked with the
/// arguments bound on the owning payment method.
#[async_trait]
pub trait PaymentMethodEligibilityChecker: Send + Sync {
    /// Code, description and argument slots of this checker.
    fn definition(&self) -> &OperationDefinition;

    /// Decide eligibility of `method` for `order`.
    ///
    /// # Errors
    ///
    /// Any error aborts the whole eligibility evaluation it is part of.
    async fn check(
        &self,
        ctx: &RequestContext,
        order: &Order,
        args: &ParsedArgs,
        method: &PaymentMethod,
    ) -> Result<EligibilityOutcome, DomainError>;
}
