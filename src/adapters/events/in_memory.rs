//! In-memory event bus.
//!
//! Captures every published envelope in order. Used by the binary and by
//! tests that assert on emitted events.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus that records published events.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
///
/// bus.publish(envelope).await?;
///
/// assert_eq!(bus.event_count().await, 1);
/// assert!(bus.has_event("payment_method.created.v1").await);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventBus {
    published: Arc<RwLock<Vec<EventEnvelope>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent publish fail until reset.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    // === Test Helpers ===

    /// Returns all published events, oldest first.
    pub async fn published_events(&self) -> Vec<EventEnvelope> {
        self.published.read().await.clone()
    }

    /// Returns events of a specific type.
    pub async fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published
            .read()
            .await
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub async fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published
            .read()
            .await
            .iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .cloned()
            .collect()
    }

    /// Clears all published events (for test isolation).
    pub async fn clear(&self) {
        self.published.write().await.clear();
    }

    /// Returns count of published events.
    pub async fn event_count(&self) -> usize {
        self.published.read().await.len()
    }

    /// Checks if a specific event type was published.
    pub async fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .await
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Event bus unavailable, dropped {}", event.event_type),
            ));
        }

        tracing::debug!(
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            "Captured domain event"
        );
        self.published.write().await.push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, aggregate_id, "PaymentMethod", json!({}))
    }

    #[tokio::test]
    async fn publish_captures_events_in_order() {
        let bus = InMemoryEventBus::new();

        bus.publish(envelope("payment_method.created.v1", "a")).await.unwrap();
        bus.publish(envelope("payment_method.updated.v1", "a")).await.unwrap();

        let events = bus.published_events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, "payment_method.created.v1");
        assert_eq!(events[1].event_type, "payment_method.updated.v1");
    }

    #[tokio::test]
    async fn filters_by_type_and_aggregate() {
        let bus = InMemoryEventBus::new();
        bus.publish_all(vec![
            envelope("payment_method.created.v1", "a"),
            envelope("payment_method.created.v1", "b"),
            envelope("payment_method.deleted.v1", "a"),
        ])
        .await
        .unwrap();

        assert_eq!(bus.events_of_type("payment_method.created.v1").await.len(), 2);
        assert_eq!(bus.events_for_aggregate("a").await.len(), 2);
        assert!(bus.has_event("payment_method.deleted.v1").await);
        assert!(!bus.has_event("payment_method.updated.v1").await);
    }

    #[tokio::test]
    async fn failing_bus_rejects_and_records_nothing() {
        let bus = InMemoryEventBus::new();
        bus.set_failing(true);

        assert!(bus.publish(envelope("payment_method.created.v1", "a")).await.is_err());
        assert_eq!(bus.event_count().await, 0);

        bus.set_failing(false);
        bus.publish(envelope("payment_method.created.v1", "a")).await.unwrap();
        assert_eq!(bus.event_count().await, 1);
    }

    #[tokio::test]
    async fn clear_removes_events() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("payment_method.created.v1", "a")).await.unwrap();
        bus.clear().await;
        assert_eq!(bus.event_count().await, 0);
    }
}
