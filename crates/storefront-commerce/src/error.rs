//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Invalid quantity (must be at least 1).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Negative unit price.
    #[error("Negative unit price: {0}")]
    NegativePrice(i64),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Checkout submitted without required data.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Checkout submitted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Order amounts do not satisfy the totals invariant.
    #[error("Inconsistent order totals for {0}")]
    InconsistentTotals(String),

    /// Unknown wire value for an enum field.
    #[error("Unknown {field} value: {value}")]
    UnknownValue { field: &'static str, value: String },

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::ValidationError(e.to_string())
    }
}
