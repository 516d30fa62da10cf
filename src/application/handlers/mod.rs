//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod payment_method;

pub use payment_method::{
    CreatePaymentMethodHandler, DeletePaymentMethodHandler, GetEligiblePaymentMethodsHandler,
    GetMethodAndOperationsHandler, GetPaymentMethodHandler, ListOperationDefinitionsHandler,
    ListPaymentMethodsHandler, ListPaymentMethodsQuery, OperationDefinitionView,
    ResolvedPaymentMethod, UpdatePaymentMethodHandler,
};
