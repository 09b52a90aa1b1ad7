//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found by id or slug.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// A product failed validation at catalog load.
    #[error("invalid product {slug}: {reason}")]
    InvalidProduct { slug: String, reason: String },

    /// Invalid quantity for a cart operation.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Coupon code did not match any known coupon.
    #[error("invalid coupon code: {0}")]
    InvalidCoupon(String),

    /// Shipping method id did not match any offered method.
    #[error("unknown shipping method: {0}")]
    UnknownShippingMethod(String),

    /// An order was placed before selecting a shipping method.
    #[error("no shipping method selected")]
    ShippingNotSelected,

    /// The payment gateway refused the charge.
    #[error("payment declined: {0}")]
    PaymentDeclined(String),

    /// Currency mismatch between money values.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a money calculation.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<poly_storage::StorageError> for CommerceError {
    fn from(e: poly_storage::StorageError) -> Self {
        CommerceError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
