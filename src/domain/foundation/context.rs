//! Request context that flows through every handler.
//!
//! Carries the channel the request runs in, request-scoped identity and the
//! translation function used for user-facing messages. Handlers accept a
//! single `RequestContext` instead of separate channel/user/correlation
//! parameters, and propagate it onto emitted events.

use std::fmt;
use std::sync::Arc;

use super::{Channel, ChannelId, EventEnvelope, UserId};
use crate::ports::MessageTranslator;

/// Context for a single logical request.
#[derive(Clone)]
pub struct RequestContext {
    channel: Channel,
    user_id: Option<UserId>,
    correlation_id: Option<String>,
    trace_id: Option<String>,
    translator: Arc<dyn MessageTranslator>,
}

impl RequestContext {
    /// Creates a context for a request running in `channel`.
    pub fn new(channel: Channel, translator: Arc<dyn MessageTranslator>) -> Self {
        Self {
            channel,
            user_id: None,
            correlation_id: None,
            trace_id: None,
            translator,
        }
    }

    /// Builder: Add the acting user.
    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add trace ID for distributed tracing.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn channel_id(&self) -> &ChannelId {
        self.channel.id()
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Formats a translated message for the current request.
    pub fn translate(&self, key: &str, args: &[(&str, String)]) -> String {
        self.translator.translate(key, args)
    }

    /// Copies request metadata onto an outgoing event envelope.
    pub fn stamp(&self, envelope: EventEnvelope) -> EventEnvelope {
        let mut envelope = envelope.with_channel_id(self.channel.id().to_string());
        if let Some(id) = &self.correlation_id {
            envelope = envelope.with_correlation_id(id.clone());
        }
        if let Some(user) = &self.user_id {
            envelope = envelope.with_user_id(user.to_string());
        }
        if let Some(trace) = &self.trace_id {
            envelope = envelope.with_trace_id(trace.clone());
        }
        envelope
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("channel", &self.channel)
            .field("user_id", &self.user_id)
            .field("correlation_id", &self.correlation_id)
            .field("trace_id", &self.trace_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTranslator;

    impl MessageTranslator for EchoTranslator {
        fn translate(&self, key: &str, args: &[(&str, String)]) -> String {
            let rendered: Vec<String> = args.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            format!("{}[{}]", key, rendered.join(","))
        }
    }

    fn ctx() -> RequestContext {
        let channel = Channel::new(ChannelId::new(), "uk-store").unwrap();
        RequestContext::new(channel, Arc::new(EchoTranslator))
    }

    #[test]
    fn translate_delegates_to_translator() {
        let message = ctx().translate("greeting", &[("name", "Ada".to_string())]);
        assert_eq!(message, "greeting[name=Ada]");
    }

    #[test]
    fn stamp_copies_request_metadata() {
        let ctx = ctx()
            .with_user_id(UserId::new("admin").unwrap())
            .with_correlation_id("corr-1");

        let envelope = ctx.stamp(EventEnvelope::new("a.b", "1", "A", json!({})));

        assert_eq!(envelope.metadata.correlation_id.as_deref(), Some("corr-1"));
        assert_eq!(envelope.metadata.user_id.as_deref(), Some("admin"));
        assert_eq!(
            envelope.metadata.channel_id,
            Some(ctx.channel_id().to_string())
        );
    }

    #[test]
    fn debug_output_omits_translator() {
        let rendered = format!("{:?}", ctx());
        assert!(rendered.contains("uk-store"));
        assert!(!rendered.contains("EchoTranslator"));
    }
}
