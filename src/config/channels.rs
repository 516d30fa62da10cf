//! Channel configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Channel configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChannelsConfig {
    /// Code of the root channel that owns every payment method
    #[serde(default = "default_channel_code")]
    pub default_channel_code: String,
}

impl ChannelsConfig {
    /// Validate channel configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_channel_code.trim().is_empty() {
            return Err(ValidationError::MissingRequired("channels.default_channel_code"));
        }
        Ok(())
    }
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        Self {
            default_channel_code: default_channel_code(),
        }
    }
}

fn default_channel_code() -> String {
    "__default_channel__".to_string()
}
