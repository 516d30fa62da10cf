//! PaymentMethod aggregate entity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::UpdatePaymentMethodInput;
use crate::domain::foundation::{Channel, ChannelId, PaymentMethodId, Timestamp, ValidationError};
use crate::domain::operation::ConfigurableOperation;

/// A configured way of paying, visible in one or more channels.
///
/// # Invariants
///
/// - `code` and `name` are non-empty
/// - a handler is always bound
/// - each channel appears at most once in `channels`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    id: PaymentMethodId,
    code: String,
    name: String,
    description: String,
    enabled: bool,
    handler: ConfigurableOperation,
    checker: Option<ConfigurableOperation>,
    channels: Vec<Channel>,
    custom_fields: Map<String, JsonValue>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl PaymentMethod {
    /// Creates an enabled payment method with no checker and no channels.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if `code` or `name` is blank.
    pub fn new(
        id: PaymentMethodId,
        code: impl Into<String>,
        name: impl Into<String>,
        handler: ConfigurableOperation,
    ) -> Result<Self, ValidationError> {
        let code = Self::validate_text("code", code.into())?;
        let name = Self::validate_text("name", name.into())?;
        let now = Timestamp::now();

        Ok(Self {
            id,
            code,
            name,
            description: String::new(),
            enabled: true,
            handler,
            checker: None,
            channels: Vec::new(),
            custom_fields: Map::new(),
            created_at: now,
            updated_at: now,
        })
    }

    fn validate_text(field: &str, value: String) -> Result<String, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        Ok(value)
    }

    // ════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════

    pub fn id(&self) -> &PaymentMethodId {
        &self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn handler(&self) -> &ConfigurableOperation {
        &self.handler
    }

    pub fn checker(&self) -> Option<&ConfigurableOperation> {
        self.checker.as_ref()
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn custom_fields(&self) -> &Map<String, JsonValue> {
        &self.custom_fields
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ════════════════════════════════════════════════════════════════════
    // Mutations
    // ════════════════════════════════════════════════════════════════════

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.touch();
    }

    pub fn set_handler(&mut self, handler: ConfigurableOperation) {
        self.handler = handler;
        self.touch();
    }

    /// Replaces the checker; `None` removes it.
    pub fn set_checker(&mut self, checker: Option<ConfigurableOperation>) {
        self.checker = checker;
        self.touch();
    }

    /// Merges custom fields key by key; keys not in `fields` are kept.
    pub fn merge_custom_fields(&mut self, fields: Map<String, JsonValue>) {
        self.custom_fields.extend(fields);
        self.touch();
    }

    /// Applies the scalar part of an update patch.
    ///
    /// `handler` and `checker` are left alone; they need the registry.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if a present `code` or `name` is blank. Nothing is
    /// applied in that case.
    pub fn apply_patch(&mut self, patch: &UpdatePaymentMethodInput) -> Result<(), ValidationError> {
        let code = patch
            .code
            .clone()
            .map(|code| Self::validate_text("code", code))
            .transpose()?;
        let name = patch
            .name
            .clone()
            .map(|name| Self::validate_text("name", name))
            .transpose()?;

        if let Some(code) = code {
            self.code = code;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(fields) = &patch.custom_fields {
            self.custom_fields.extend(fields.clone());
        }
        self.touch();
        Ok(())
    }

    // ════════════════════════════════════════════════════════════════════
    // Channel membership
    // ════════════════════════════════════════════════════════════════════

    /// Adds the method to a channel. Returns `false` if already a member.
    pub fn assign_to_channel(&mut self, channel: Channel) -> bool {
        if self.is_in_channel(channel.id()) {
            return false;
        }
        self.channels.push(channel);
        self.touch();
        true
    }

    /// Removes the method from a channel. Returns `false` if not a member.
    pub fn remove_from_channel(&mut self, channel_id: &ChannelId) -> bool {
        let before = self.channels.len();
        self.channels.retain(|channel| channel.id() != channel_id);
        let removed = self.channels.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    pub fn is_in_channel(&self, channel_id: &ChannelId) -> bool {
        self.channels.iter().any(|channel| channel.id() == channel_id)
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
