//! Shared types for the Shopfront checkout stack
//!
//! Value objects exchanged between the storefront configuration store,
//! the checkout UI, and the fulfillment cost engine: shipping settings,
//! cart and address snapshots, computed payment breakdowns, and the
//! common error type.

pub mod checkout;
pub mod error;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Checkout re-exports (for convenient access)
pub use checkout::settings::{AreaRule, CityRule, ShippingSettings, WeightTier};
pub use checkout::types::{
    CartItem, CatalogEntry, CatalogSnapshot, CustomShippingOption, PaymentBreakdown,
    ProductShippingConfig, ProductType, ShippingAddress, ShippingConfigType, ShippingOption,
    ShippingOptionKind,
};
pub use error::CheckoutError;
