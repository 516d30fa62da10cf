//! Channel reference value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ChannelId, ValidationError};

/// A tenant scope an entity may be visible in.
///
/// Carries the code alongside the id so that refusal messages can name
/// channels without another lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    id: ChannelId,
    code: String,
}

impl Channel {
    /// Creates a channel reference, rejecting an empty code.
    pub fn new(id: ChannelId, code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ValidationError::empty_field("channel.code"));
        }
        Ok(Self { id, code })
    }

    pub fn id(&self) -> &ChannelId {
        &self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_rejects_blank_code() {
        assert!(Channel::new(ChannelId::new(), "  ").is_err());
    }

    #[test]
    fn channel_keeps_id_and_code() {
        let id = ChannelId::new();
        let channel = Channel::new(id, "eu-store").unwrap();
        assert_eq!(channel.id(), &id);
        assert_eq!(channel.code(), "eu-store");
    }
}
