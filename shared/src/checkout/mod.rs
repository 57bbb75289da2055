//! Checkout Domain Types
//!
//! This module provides the value objects consumed by the fulfillment
//! cost engine:
//! - Settings: per-storefront shipping configuration
//! - Types: cart items, addresses, catalog snapshots, shipping options,
//!   and the computed payment breakdown

mod lenient;
pub mod settings;
pub mod types;

// Re-exports
pub use settings::{AreaRule, CityRule, ShippingSettings, WeightTier};
pub use types::*;
