//! In-memory channel service.

use async_trait::async_trait;

use crate::domain::foundation::{Channel, DomainError, RequestContext};
use crate::domain::payment_method::PaymentMethod;
use crate::ports::ChannelService;

/// Channel service backed by a fixed default channel.
#[derive(Debug, Clone)]
pub struct InMemoryChannelService {
    default_channel: Channel,
}

impl InMemoryChannelService {
    pub fn new(default_channel: Channel) -> Self {
        Self { default_channel }
    }
}

#[async_trait]
impl ChannelService for InMemoryChannelService {
    async fn default_channel(&self) -> Result<Channel, DomainError> {
        Ok(self.default_channel.clone())
    }

    async fn assign_to_current_channel(
        &self,
        method: &mut PaymentMethod,
        ctx: &RequestContext,
    ) -> Result<(), DomainError> {
        method.assign_to_channel(self.default_channel.clone());
        method.assign_to_channel(ctx.channel().clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::i18n::TemplateTranslator;
    use crate::domain::foundation::{ChannelId, PaymentMethodId};
    use crate::domain::operation::ConfigurableOperation;
    use std::sync::Arc;

    fn method() -> PaymentMethod {
        PaymentMethod::new(
            PaymentMethodId::new(),
            "cod",
            "Cash",
            ConfigurableOperation::new("manual-payment", vec![]),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn assigns_default_and_request_channel() {
        let default = Channel::new(ChannelId::new(), "__default_channel__").unwrap();
        let uk = Channel::new(ChannelId::new(), "uk").unwrap();
        let service = InMemoryChannelService::new(default.clone());
        let ctx = RequestContext::new(uk.clone(), Arc::new(TemplateTranslator::english()));
        let mut method = method();

        service.assign_to_current_channel(&mut method, &ctx).await.unwrap();

        assert_eq!(method.channels(), &[default, uk]);
    }

    #[tokio::test]
    async fn assigning_from_default_channel_adds_it_once() {
        let default = Channel::new(ChannelId::new(), "__default_channel__").unwrap();
        let service = InMemoryChannelService::new(default.clone());
        let ctx = RequestContext::new(default.clone(), Arc::new(TemplateTranslator::english()));
        let mut method = method();

        service.assign_to_current_channel(&mut method, &ctx).await.unwrap();

        assert_eq!(method.channels(), &[default]);
    }
}
