//! Payment Methods - Channel-scoped payment method management
//!
//! This crate manages configurable payment methods for a multi-channel
//! commerce system: pluggable payment handlers and eligibility checkers with
//! typed arguments, channel-aware lifecycle rules, and checkout eligibility.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
