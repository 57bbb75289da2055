//! Shipping Fee Module
//!
//! This module resolves shipping cost for a cart against the merchant's
//! shipping settings. Matching against address rules lives in `matcher`,
//! fee computation in `quote`, and the checkout option list in `options`.

pub mod matcher;
mod options;
mod quote;

pub use matcher::*;
pub use options::*;
pub use quote::*;
