//! Payment method error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | CodeNotFound | 404 |
//! | Operation (not found) | 404 |
//! | ValidationFailed | 400 |
//! | InvalidOperation | 400 |
//! | DuplicateCode | 409 |
//! | CheckerFailed | 500 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, PaymentMethodId, ValidationError};
use crate::domain::operation::OperationError;

/// Payment method errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethodError {
    /// No payment method with this id.
    NotFound(PaymentMethodId),

    /// No payment method with this code in the requesting channel.
    CodeNotFound { code: String },

    /// A scalar field failed validation.
    ValidationFailed { field: String, message: String },

    /// The `handler` or `checker` input could not be bound.
    InvalidOperation { field: String, source: OperationError },

    /// A stored operation could not be resolved or re-parsed.
    Operation(OperationError),

    /// Another payment method in a shared channel already uses this code.
    DuplicateCode(String),

    /// An eligibility checker returned an error.
    CheckerFailed { checker: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl PaymentMethodError {
    pub fn not_found(id: PaymentMethodId) -> Self {
        PaymentMethodError::NotFound(id)
    }

    pub fn code_not_found(code: impl Into<String>) -> Self {
        PaymentMethodError::CodeNotFound { code: code.into() }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentMethodError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_operation(field: impl Into<String>, source: OperationError) -> Self {
        PaymentMethodError::InvalidOperation {
            field: field.into(),
            source,
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PaymentMethodError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PaymentMethodError::NotFound(_) => ErrorCode::PaymentMethodNotFound,
            PaymentMethodError::CodeNotFound { .. } => ErrorCode::PaymentMethodNotFound,
            PaymentMethodError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PaymentMethodError::InvalidOperation { .. } => ErrorCode::ValidationFailed,
            PaymentMethodError::Operation(err) => err.code(),
            PaymentMethodError::DuplicateCode(_) => ErrorCode::DuplicateCode,
            PaymentMethodError::CheckerFailed { .. } => ErrorCode::CheckerFailed,
            PaymentMethodError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PaymentMethodError::NotFound(id) => format!("Payment method not found: {}", id),
            PaymentMethodError::CodeNotFound { code } => {
                format!("No payment method with code '{}' in this channel", code)
            }
            PaymentMethodError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PaymentMethodError::InvalidOperation { field, source } => {
                format!("Validation failed for '{}': {}", field, source)
            }
            PaymentMethodError::Operation(err) => err.to_string(),
            PaymentMethodError::DuplicateCode(code) => {
                format!("Payment method code '{}' is already in use", code)
            }
            PaymentMethodError::CheckerFailed { checker, message } => {
                format!("Eligibility checker '{}' failed: {}", checker, message)
            }
            PaymentMethodError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PaymentMethodError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PaymentMethodError {}

impl From<DomainError> for PaymentMethodError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DuplicateCode => PaymentMethodError::DuplicateCode(
                err.details.get("code").cloned().unwrap_or_default(),
            ),
            ErrorCode::ValidationFailed => PaymentMethodError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => PaymentMethodError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for PaymentMethodError {
    fn from(err: ValidationError) -> Self {
        PaymentMethodError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<OperationError> for PaymentMethodError {
    fn from(err: OperationError) -> Self {
        PaymentMethodError::Operation(err)
    }
}

impl From<PaymentMethodError> for DomainError {
    fn from(err: PaymentMethodError) -> Self {
        let error = DomainError::new(err.code(), err.message());
        match err {
            PaymentMethodError::NotFound(id) => error.with_detail("id", id.to_string()),
            PaymentMethodError::CodeNotFound { code } | PaymentMethodError::DuplicateCode(code) => {
                error.with_detail("code", code)
            }
            PaymentMethodError::ValidationFailed { field, .. }
            | PaymentMethodError::InvalidOperation { field, .. } => error.with_detail("field", field),
            _ => error,
        }
    }
}
