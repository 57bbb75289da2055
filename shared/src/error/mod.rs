//! Unified error type for the checkout stack
//!
//! [`CheckoutError`] is returned only by the opt-in input validators; the
//! fee and payment calculators absorb malformed input and never fail.
//!
//! # Example
//!
//! ```
//! use shared::error::CheckoutError;
//!
//! let err = CheckoutError::invalid_settings("weight tiers must be ascending");
//! assert!(err.to_string().contains("weight tiers"));
//! ```

use thiserror::Error;

/// Errors reported by checkout input validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Shipping configuration failed validation
    #[error("invalid shipping settings: {message}")]
    InvalidSettings { message: String },

    /// A cart item failed validation
    #[error("invalid cart item '{item_id}': {message}")]
    InvalidItem { item_id: String, message: String },

    /// The payment method list failed validation
    #[error("invalid payment methods: {message}")]
    InvalidMethods { message: String },
}

impl CheckoutError {
    // ========== Convenient constructors ==========

    /// Create an InvalidSettings error
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }

    /// Create an InvalidItem error
    pub fn invalid_item(item_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidItem {
            item_id: item_id.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidMethods error
    pub fn invalid_methods(message: impl Into<String>) -> Self {
        Self::InvalidMethods {
            message: message.into(),
        }
    }
}

/// Result type for checkout validation
pub type CheckoutResult<T> = Result<T, CheckoutError>;
