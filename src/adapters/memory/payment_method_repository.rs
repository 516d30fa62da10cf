//! In-memory payment method repository.
//!
//! Keeps methods in insertion order. Enforces code uniqueness across shared
//! channels on `save` and can be told to fail removals, which lets the
//! lifecycle tests exercise the storage-failure path of delete.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ChannelId, DomainError, ErrorCode, PaymentMethodId};
use crate::domain::payment_method::PaymentMethod;
use crate::ports::{ListOptions, PaymentMethodList, PaymentMethodRepository};

/// In-memory implementation of the `PaymentMethodRepository` port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentMethodRepository {
    methods: Arc<RwLock<Vec<PaymentMethod>>>,
    fail_removals: Arc<AtomicBool>,
}

impl InMemoryPaymentMethodRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `remove` fail with a database error until reset.
    pub fn set_fail_removals(&self, fail: bool) {
        self.fail_removals.store(fail, Ordering::SeqCst);
    }

    /// Number of stored methods.
    pub async fn len(&self) -> usize {
        self.methods.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.methods.read().await.is_empty()
    }

    fn shares_channel(a: &PaymentMethod, b: &PaymentMethod) -> bool {
        a.channels().iter().any(|channel| b.is_in_channel(channel.id()))
    }
}

#[async_trait]
impl PaymentMethodRepository for InMemoryPaymentMethodRepository {
    async fn find_by_id(&self, id: &PaymentMethodId) -> Result<Option<PaymentMethod>, DomainError> {
        Ok(self
            .methods
            .read()
            .await
            .iter()
            .find(|method| method.id() == id)
            .cloned())
    }

    async fn find_by_id_in_channel(
        &self,
        id: &PaymentMethodId,
        channel_id: &ChannelId,
    ) -> Result<Option<PaymentMethod>, DomainError> {
        Ok(self
            .methods
            .read()
            .await
            .iter()
            .find(|method| method.id() == id && method.is_in_channel(channel_id))
            .cloned())
    }

    async fn find_all_in_channel(
        &self,
        channel_id: &ChannelId,
        options: &ListOptions,
    ) -> Result<PaymentMethodList, DomainError> {
        let methods = self.methods.read().await;
        let matching: Vec<&PaymentMethod> = methods
            .iter()
            .filter(|method| method.is_in_channel(channel_id))
            .filter(|method| !options.enabled_only || method.is_enabled())
            .collect();

        let total = matching.len();
        let offset = options.offset.unwrap_or(0) as usize;
        let limit = options.limit.map(|l| l as usize).unwrap_or(total);
        let items: Vec<PaymentMethod> = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        let has_more = offset + items.len() < total;

        Ok(PaymentMethodList {
            items,
            total: total as u64,
            has_more,
        })
    }

    async fn find_enabled_in_channel(
        &self,
        channel_id: &ChannelId,
    ) -> Result<Vec<PaymentMethod>, DomainError> {
        Ok(self
            .methods
            .read()
            .await
            .iter()
            .filter(|method| method.is_enabled() && method.is_in_channel(channel_id))
            .cloned()
            .collect())
    }

    async fn find_by_code_in_channel(
        &self,
        code: &str,
        channel_id: &ChannelId,
    ) -> Result<Option<PaymentMethod>, DomainError> {
        Ok(self
            .methods
            .read()
            .await
            .iter()
            .find(|method| method.code() == code && method.is_in_channel(channel_id))
            .cloned())
    }

    async fn save(&self, method: &PaymentMethod) -> Result<(), DomainError> {
        let mut methods = self.methods.write().await;

        let clash = methods.iter().any(|existing| {
            existing.id() != method.id()
                && existing.code() == method.code()
                && Self::shares_channel(existing, method)
        });
        if clash {
            return Err(DomainError::new(
                ErrorCode::DuplicateCode,
                format!("Payment method code '{}' is already in use", method.code()),
            )
            .with_detail("code", method.code()));
        }

        match methods.iter_mut().find(|existing| existing.id() == method.id()) {
            Some(existing) => *existing = method.clone(),
            None => methods.push(method.clone()),
        }
        Ok(())
    }

    async fn remove(&self, id: &PaymentMethodId) -> Result<(), DomainError> {
        if self.fail_removals.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Payment method is still referenced by existing payments",
            ));
        }

        let mut methods = self.methods.write().await;
        let before = methods.len();
        methods.retain(|method| method.id() != id);
        if methods.len() == before {
            return Err(DomainError::new(
                ErrorCode::PaymentMethodNotFound,
                format!("Payment method not found: {}", id),
            ));
        }
        Ok(())
    }
}
