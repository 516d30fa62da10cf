//! ChannelService port - channel lookup and membership assignment.

use async_trait::async_trait;

use crate::domain::foundation::{Channel, DomainError, RequestContext};
use crate::domain::payment_method::PaymentMethod;

/// Resolves channels and assigns channel-aware entities to them.
#[async_trait]
pub trait ChannelService: Send + Sync {
    /// The root channel that owns every channel-aware entity.
    async fn default_channel(&self) -> Result<Channel, DomainError>;

    /// Adds `method` to the request's channel and to the default channel.
    ///
    /// Idempotent: existing memberships are kept as they are.
    async fn assign_to_current_channel(
        &self,
        method: &mut PaymentMethod,
        ctx: &RequestContext,
    ) -> Result<(), DomainError>;
}
