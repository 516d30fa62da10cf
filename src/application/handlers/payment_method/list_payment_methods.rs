//! ListPaymentMethodsHandler - Query handler for admin listings.

use std::sync::Arc;

use crate::domain::foundation::RequestContext;
use crate::domain::payment_method::PaymentMethodError;
use crate::ports::{ListOptions, PaymentMethodList, PaymentMethodRepository};

/// Query for listing the payment methods of the request's channel.
#[derive(Debug, Clone, Default)]
pub struct ListPaymentMethodsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub enabled_only: bool,
}

impl ListPaymentMethodsQuery {
    fn to_list_options(&self) -> ListOptions {
        let options = match (self.page, self.per_page) {
            (Some(page), Some(per_page)) => ListOptions::paginated(page, per_page),
            _ => ListOptions::default(),
        };
        if self.enabled_only {
            options.enabled_only()
        } else {
            options
        }
    }
}

/// Handler for listing payment methods.
pub struct ListPaymentMethodsHandler {
    repository: Arc<dyn PaymentMethodRepository>,
}

impl ListPaymentMethodsHandler {
    pub fn new(repository: Arc<dyn PaymentMethodRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        ctx: &RequestContext,
        query: ListPaymentMethodsQuery,
    ) -> Result<PaymentMethodList, PaymentMethodError> {
        let options = query.to_list_options();
        Ok(self
            .repository
            .find_all_in_channel(ctx.channel_id(), &options)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{create_input, Fixture};
    use super::*;

    #[tokio::test]
    async fn lists_only_request_channel() {
        let fx = Fixture::new();
        fx.seed(&fx.uk, create_input("cod")).await;
        fx.seed(&fx.us, create_input("card")).await;
        let handler = ListPaymentMethodsHandler::new(fx.repo.clone());

        let list = handler
            .handle(&fx.ctx(&fx.uk), ListPaymentMethodsQuery::default())
            .await
            .unwrap();

        assert_eq!(list.total, 1);
        assert_eq!(list.items[0].code(), "cod");
    }

    #[tokio::test]
    async fn default_channel_sees_everything() {
        let fx = Fixture::new();
        fx.seed(&fx.uk, create_input("cod")).await;
        fx.seed(&fx.us, create_input("card")).await;
        let handler = ListPaymentMethodsHandler::new(fx.repo.clone());

        let list = handler
            .handle(&fx.ctx(&fx.default_channel), ListPaymentMethodsQuery::default())
            .await
            .unwrap();

        assert_eq!(list.total, 2);
    }

    #[tokio::test]
    async fn paginates_and_filters() {
        let fx = Fixture::new();
        fx.seed(&fx.uk, create_input("a")).await;
        fx.seed(&fx.uk, create_input("b").disabled()).await;
        fx.seed(&fx.uk, create_input("c")).await;
        let handler = ListPaymentMethodsHandler::new(fx.repo.clone());

        let query = ListPaymentMethodsQuery {
            page: Some(1),
            per_page: Some(1),
            enabled_only: true,
        };
        let list = handler.handle(&fx.ctx(&fx.uk), query).await.unwrap();

        assert_eq!(list.total, 2);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].code(), "a");
        assert!(list.has_more);
    }
}
