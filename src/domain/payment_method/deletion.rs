//! Channel-aware deletion policy.
//!
//! | requesting channel | other memberships | force | decision |
//! |--------------------|-------------------|-------|----------|
//! | default            | none              | any   | Remove   |
//! | default            | some              | false | Refuse   |
//! | default            | some              | true  | Remove   |
//! | non-default        | any               | any   | Detach   |

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Channel, ChannelId};

/// Outcome reported to the caller of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeletionResult {
    Deleted,
    NotDeleted,
}

/// Result of a delete request, with an explanation when nothing was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionResponse {
    pub result: DeletionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DeletionResponse {
    pub fn deleted() -> Self {
        Self {
            result: DeletionResult::Deleted,
            message: None,
        }
    }

    pub fn not_deleted(message: impl Into<String>) -> Self {
        Self {
            result: DeletionResult::NotDeleted,
            message: Some(message.into()),
        }
    }
}

/// What a delete request should do to a payment method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionDecision {
    /// Physically remove the payment method.
    Remove,
    /// Keep everything; the method is still used by these channels.
    Refuse { blocking_channels: Vec<Channel> },
    /// Drop only the requesting channel's membership.
    Detach { channel_id: ChannelId },
}

/// Decides how to delete a method with the given memberships.
pub fn decide_deletion(
    memberships: &[Channel],
    requesting: &ChannelId,
    default_channel: &ChannelId,
    force: bool,
) -> DeletionDecision {
    if requesting != default_channel {
        return DeletionDecision::Detach {
            channel_id: *requesting,
        };
    }

    let blocking_channels: Vec<Channel> = memberships
        .iter()
        .filter(|channel| channel.id() != default_channel)
        .cloned()
        .collect();

    if blocking_channels.is_empty() || force {
        DeletionDecision::Remove
    } else {
        DeletionDecision::Refuse { blocking_channels }
    }
}
