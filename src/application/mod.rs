//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, update, delete) mutate and announce; query
//! handlers (eligibility, resolution, listings) only read.

pub mod handlers;

pub use handlers::{
    CreatePaymentMethodHandler, DeletePaymentMethodHandler, GetEligiblePaymentMethodsHandler,
    GetMethodAndOperationsHandler, GetPaymentMethodHandler, ListOperationDefinitionsHandler,
    ListPaymentMethodsHandler, ListPaymentMethodsQuery, OperationDefinitionView,
    ResolvedPaymentMethod, UpdatePaymentMethodHandler,
};
