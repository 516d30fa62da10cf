//! Built-in payment method operations.
//!
//! - `ManualPaymentHandler` - `manual-payment` handler
//! - `OrderTotalLimitChecker` - `order-total-limit` eligibility checker

mod manual_payment;
mod order_total_limit;

pub use manual_payment::{ManualPaymentHandler, MANUAL_PAYMENT_CODE};
pub use order_total_limit::{OrderTotalLimitChecker, ORDER_TOTAL_LIMIT_CODE};

use crate::domain::operation::{OperationError, OperationRegistry};

/// Registry holding every built-in operation.
pub fn default_registry() -> Result<OperationRegistry, OperationError> {
    Ok(OperationRegistry::builder()
        .register_handler(ManualPaymentHandler::new())?
        .register_checker(OrderTotalLimitChecker::new())?
        .build())
}
