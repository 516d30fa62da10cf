//! Payment method domain events.
//!
//! - `PaymentMethodCreated` - New payment method created
//! - `PaymentMethodUpdated` - Payment method patched
//! - `PaymentMethodDeleted` - Payment method removed or detached from a channel

use serde::{Deserialize, Serialize};

use super::{CreatePaymentMethodInput, UpdatePaymentMethodInput};
use crate::domain::foundation::{domain_event, ChannelId, EventId, PaymentMethodId, Timestamp};

// ════════════════════════════════════════════════════════════════════════════
// PaymentMethodCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a payment method is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodCreated {
    pub event_id: EventId,
    pub payment_method_id: PaymentMethodId,

    /// The input the method was created from.
    pub input: CreatePaymentMethodInput,

    pub created_at: Timestamp,
}

domain_event!(
    PaymentMethodCreated,
    event_type = "payment_method.created.v1",
    schema_version = 1,
    aggregate_id = payment_method_id,
    aggregate_type = "PaymentMethod",
    occurred_at = created_at,
    event_id = event_id
);

impl PaymentMethodCreated {
    pub fn new(payment_method_id: PaymentMethodId, input: CreatePaymentMethodInput) -> Self {
        Self {
            event_id: EventId::new(),
            payment_method_id,
            input,
            created_at: Timestamp::now(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PaymentMethodUpdated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a payment method is updated.
///
/// Carries the raw patch, so consumers can tell which fields were touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodUpdated {
    pub event_id: EventId,
    pub payment_method_id: PaymentMethodId,
    pub input: UpdatePaymentMethodInput,
    pub updated_at: Timestamp,
}

domain_event!(
    PaymentMethodUpdated,
    event_type = "payment_method.updated.v1",
    schema_version = 1,
    aggregate_id = payment_method_id,
    aggregate_type = "PaymentMethod",
    occurred_at = updated_at,
    event_id = event_id
);

impl PaymentMethodUpdated {
    pub fn new(payment_method_id: PaymentMethodId, input: UpdatePaymentMethodInput) -> Self {
        Self {
            event_id: EventId::new(),
            payment_method_id,
            input,
            updated_at: Timestamp::now(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PaymentMethodDeleted
// ════════════════════════════════════════════════════════════════════════════

/// How a deletion was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionMode {
    /// The payment method no longer exists.
    Removed,
    /// Only the requesting channel's membership was dropped.
    Detached,
}

/// Published when a payment method is removed, or detached from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodDeleted {
    pub event_id: EventId,
    pub payment_method_id: PaymentMethodId,
    pub code: String,
    pub mode: DeletionMode,

    /// Channel the delete was requested from.
    pub channel_id: ChannelId,

    pub deleted_at: Timestamp,
}

domain_event!(
    PaymentMethodDeleted,
    event_type = "payment_method.deleted.v1",
    schema_version = 1,
    aggregate_id = payment_method_id,
    aggregate_type = "PaymentMethod",
    occurred_at = deleted_at,
    event_id = event_id
);

impl PaymentMethodDeleted {
    pub fn new(
        payment_method_id: PaymentMethodId,
        code: impl Into<String>,
        mode: DeletionMode,
        channel_id: ChannelId,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            payment_method_id,
            code: code.into(),
            mode,
            channel_id,
            deleted_at: Timestamp::now(),
        }
    }
}
