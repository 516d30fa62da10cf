//! MessageTranslator port - localised user-facing messages.

/// Renders a message key with named arguments into display text.
///
/// Arguments are substituted into `{name}` placeholders. Unknown keys render
/// as the key itself so a missing catalogue entry never fails a request.
pub trait MessageTranslator: Send + Sync {
    fn translate(&self, key: &str, args: &[(&str, String)]) -> String;
}

/// Message keys used by this crate.
pub mod message_keys {
    /// A payment method cannot be deleted while other channels use it.
    /// Arguments: `channelCodes`.
    pub const PAYMENT_METHOD_USED_IN_CHANNELS: &str = "message.payment-method-used-in-channels";
}
