//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The product cannot be bought right now.
    #[error("Product unavailable: {0}")]
    ProductUnavailable(String),

    /// Size or colour missing, or not offered for the product.
    #[error("{0}")]
    InvalidSelection(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Promo code rejected at construction.
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Required form fields left blank.
    #[error("Missing information: {0}")]
    MissingInformation(String),

    /// Malformed email address.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Outbound API call failed.
    #[error("API error: {0}")]
    ApiError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<shfeet_cache::CacheError> for CommerceError {
    fn from(e: shfeet_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<shfeet_data::FetchError> for CommerceError {
    fn from(e: shfeet_data::FetchError) -> Self {
        CommerceError::ApiError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
