//! Payment method repository port.
//!
//! Defines the contract for persisting and retrieving PaymentMethod
//! aggregates together with their channel memberships.
//!
//! # Design
//!
//! - **Channel-scoped reads**: checkout and admin listings only see methods
//!   assigned to the requesting channel
//! - **Code uniqueness**: two methods sharing a channel may not share a code;
//!   `save` enforces this

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChannelId, DomainError, PaymentMethodId};
use crate::domain::payment_method::PaymentMethod;

/// Repository port for PaymentMethod persistence.
#[async_trait]
pub trait PaymentMethodRepository: Send + Sync {
    /// Find a payment method by id, regardless of channel.
    async fn find_by_id(&self, id: &PaymentMethodId) -> Result<Option<PaymentMethod>, DomainError>;

    /// Find a payment method by id if it is assigned to `channel_id`.
    async fn find_by_id_in_channel(
        &self,
        id: &PaymentMethodId,
        channel_id: &ChannelId,
    ) -> Result<Option<PaymentMethod>, DomainError>;

    /// List the methods assigned to `channel_id`.
    ///
    /// Returns methods in creation order.
    async fn find_all_in_channel(
        &self,
        channel_id: &ChannelId,
        options: &ListOptions,
    ) -> Result<PaymentMethodList, DomainError>;

    /// All enabled methods assigned to `channel_id`, in creation order.
    async fn find_enabled_in_channel(
        &self,
        channel_id: &ChannelId,
    ) -> Result<Vec<PaymentMethod>, DomainError>;

    /// Find the method with `code` in `channel_id`, enabled or not.
    async fn find_by_code_in_channel(
        &self,
        code: &str,
        channel_id: &ChannelId,
    ) -> Result<Option<PaymentMethod>, DomainError>;

    /// Insert or replace a payment method and its channel memberships.
    ///
    /// # Errors
    ///
    /// - `DuplicateCode` if another method in a shared channel has the same code
    /// - `DatabaseError` on persistence failure
    async fn save(&self, method: &PaymentMethod) -> Result<(), DomainError>;

    /// Physically remove a payment method.
    ///
    /// # Errors
    ///
    /// - `PaymentMethodNotFound` if it does not exist
    /// - `DatabaseError` on persistence failure
    async fn remove(&self, id: &PaymentMethodId) -> Result<(), DomainError>;
}

/// Options for listing payment methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Maximum number of results to return.
    pub limit: Option<u32>,

    /// Number of results to skip.
    pub offset: Option<u32>,

    /// Only return enabled methods.
    #[serde(default)]
    pub enabled_only: bool,
}

impl ListOptions {
    /// Create options for a paginated query. Pages start at 1.
    pub fn paginated(page: u32, per_page: u32) -> Self {
        Self {
            limit: Some(per_page),
            offset: Some(page.saturating_sub(1) * per_page),
            enabled_only: false,
        }
    }

    pub fn enabled_only(mut self) -> Self {
        self.enabled_only = true;
        self
    }
}

/// Paginated list of payment methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodList {
    /// Methods in this page.
    pub items: Vec<PaymentMethod>,

    /// Total number of matching methods.
    pub total: u64,

    /// Whether there are more results.
    pub has_more: bool,
}
