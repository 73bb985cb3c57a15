//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// The product has no variant in the requested size.
    #[error("Variant not found: product {product_id} has no size {size:?}")]
    VariantNotFound { product_id: String, size: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,
}
