//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus that captures published events

mod in_memory;

pub use in_memory::InMemoryEventBus;
