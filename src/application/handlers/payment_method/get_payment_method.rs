//! GetPaymentMethodHandler - Query handler for a single payment method.

use std::sync::Arc;

use crate::domain::foundation::{PaymentMethodId, RequestContext};
use crate::domain::payment_method::{PaymentMethod, PaymentMethodError};
use crate::ports::PaymentMethodRepository;

/// Fetches a payment method visible in the request's channel.
pub struct GetPaymentMethodHandler {
    repository: Arc<dyn PaymentMethodRepository>,
}

impl GetPaymentMethodHandler {
    pub fn new(repository: Arc<dyn PaymentMethodRepository>) -> Self {
        Self { repository }
    }

    /// Returns `None` when the method does not exist or is not assigned to
    /// the request's channel.
    pub async fn handle(
        &self,
        ctx: &RequestContext,
        id: PaymentMethodId,
    ) -> Result<Option<PaymentMethod>, PaymentMethodError> {
        Ok(self
            .repository
            .find_by_id_in_channel(&id, ctx.channel_id())
            .await?)
    }
}
