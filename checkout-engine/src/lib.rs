//! Order fulfillment cost and payment allocation engine
//!
//! Pure calculators behind the Shopfront checkout: shipping fee
//! resolution (area/city rules, weight tiers, per-product overrides,
//! free-shipping thresholds), the checkout option picker, the
//! upfront-versus-delivery payment split for cash-on-delivery stores,
//! and upfront gateway selection.
//!
//! Every entry point is a pure function over the value objects in
//! [`shared`], with no I/O and no shared state. Calculators absorb
//! malformed input instead of failing, so a broken configuration row or
//! cart line degrades to a zero fee, never a blocked checkout. The
//! opt-in [`validation`] helpers are the place to reject bad data
//! before it reaches the calculators.

pub mod catalog;
pub mod engine;
pub mod money;
pub mod payment;
pub mod shipping;
pub mod validation;

// Re-exports
pub use catalog::{EffectiveProductFields, resolve_effective_product_fields};
pub use engine::{CheckoutEngine, CheckoutSummary};
pub use payment::{calculate_payment_breakdown, upfront_payment_method};
pub use shipping::{
    BaseFeeSource, FreeShippingReason, ShippingBreakdown, ShippingQuote,
    available_shipping_options, compute_order_shipping,
};
