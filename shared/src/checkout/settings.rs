//! Per-storefront shipping configuration
//!
//! Read from store configuration storage. A storefront can disable
//! shipping entirely, price deliveries by area or city, add weight-tier
//! surcharges, and grant free shipping above an order value or cart
//! weight. Numeric fields tolerate malformed stored values (see the
//! lenient module); a broken configuration row must never block checkout.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Flat fee for one named delivery area
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AreaRule {
    /// Area name, matched case-insensitively against the address
    #[serde(default)]
    pub area: String,
    /// Shipping fee for this area
    #[serde(default, deserialize_with = "lenient::number")]
    pub fee: f64,
    /// Display label shown at checkout (auto-generated when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Flat fee for one named city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CityRule {
    /// City name, matched case-insensitively against the address
    #[serde(default)]
    pub city: String,
    /// Shipping fee for this city
    #[serde(default, deserialize_with = "lenient::number")]
    pub fee: f64,
    /// Display label shown at checkout (auto-generated when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One weight surcharge tier
///
/// The tier's fee applies to total cart weights up to and including
/// `max_weight_grams`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WeightTier {
    /// Inclusive upper bound of this tier, in grams
    #[serde(default, deserialize_with = "lenient::number")]
    pub max_weight_grams: f64,
    /// Surcharge for this tier
    #[serde(default, deserialize_with = "lenient::number")]
    pub fee: f64,
    /// Display label (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Per-storefront shipping configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShippingSettings {
    /// Whether shipping charges apply at all
    #[serde(default)]
    pub enabled: bool,
    /// Country this storefront delivers within
    #[serde(default)]
    pub country: String,
    /// Fallback fee when no area or city rule matches the address
    #[serde(default, deserialize_with = "lenient::number")]
    pub rest_of_country_fee: f64,
    /// Display label for the fallback option (auto-generated when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_of_country_label: Option<String>,
    /// Per-city flat fees
    #[serde(default)]
    pub city_rules: Vec<CityRule>,
    /// Per-area flat fees; areas take precedence over cities
    #[serde(default)]
    pub area_rules: Vec<AreaRule>,
    /// Weight surcharge tiers, evaluated in ascending max_weight_grams order
    #[serde(default)]
    pub weight_tiers: Vec<WeightTier>,
    /// Order subtotal at or above which shipping is free
    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub free_shipping_threshold: Option<f64>,
    /// Total cart weight at or above which shipping is free, in grams
    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub free_shipping_min_weight_grams: Option<f64>,
    /// Whether to render a shipping option picker at checkout
    #[serde(default)]
    pub show_options_at_checkout: bool,
}
