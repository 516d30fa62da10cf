//! Template-based message translator.

use std::collections::HashMap;

use crate::ports::{message_keys, MessageTranslator};

/// Renders messages from an in-process template catalogue.
///
/// Templates use `{name}` placeholders. A key with no template renders as
/// the key itself.
#[derive(Debug, Clone, Default)]
pub struct TemplateTranslator {
    templates: HashMap<String, String>,
}

impl TemplateTranslator {
    /// An empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English catalogue.
    pub fn english() -> Self {
        Self::new()
            .with_template(
                message_keys::PAYMENT_METHOD_USED_IN_CHANNELS,
                "The selected PaymentMethod is assigned to the following Channels: \
                 {channelCodes}. Set \"force: true\" to delete from all Channels.",
            )
    }

    /// Builder: add or replace a template.
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(key.into(), template.into());
        self
    }
}

impl MessageTranslator for TemplateTranslator {
    fn translate(&self, key: &str, args: &[(&str, String)]) -> String {
        let Some(template) = self.templates.get(key) else {
            return key.to_string();
        };
        args.iter().fold(template.clone(), |rendered, (name, value)| {
            rendered.replace(&format!("{{{}}}", name), value)
        })
    }
}
