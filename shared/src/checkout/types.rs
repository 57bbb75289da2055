//! Shared types for cart, catalog and payment allocation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::lenient;

// ============================================================================
// Product Shipping Override
// ============================================================================

/// How a product charges for shipping
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingConfigType {
    /// Store-level rules only, no per-product contribution
    #[default]
    Default,
    /// Flat fee per unit
    Fixed,
    /// Fee proportional to unit weight
    WeightSurcharge,
    /// Product ships free and makes the whole order free
    Free,
    /// Product presents its own option list at checkout
    CustomOptions,
}

/// Custom shipping choice attached to a product (presentation only,
/// never enters the fee calculation)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomShippingOption {
    #[serde(default)]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub fee: f64,
}

/// Per-product shipping override
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductShippingConfig {
    /// Which charging mode this product uses
    #[serde(default)]
    pub config_type: ShippingConfigType,
    /// Flat fee per unit, used when config_type is Fixed
    #[serde(default, deserialize_with = "lenient::number")]
    pub fixed_fee: f64,
    /// Fee per gram, used when config_type is WeightSurcharge
    #[serde(default, deserialize_with = "lenient::number")]
    pub weight_surcharge: f64,
    /// Grants free shipping to the entire order
    #[serde(default)]
    pub free_shipping_enabled: bool,
    /// Product-specific option list, used when config_type is CustomOptions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_options: Option<Vec<CustomShippingOption>>,
}

// ============================================================================
// Cart Types
// ============================================================================

/// Whether a product is delivered physically or digitally
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[default]
    Physical,
    Digital,
}

/// One cart line at checkout
///
/// `product_type` and `collect_shipping_upfront` are denormalized copies
/// taken when the item was added; the catalog snapshot, when supplied,
/// is authoritative and shadows them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartItem {
    /// Cart line ID
    pub id: String,
    /// Product ID (catalog snapshot key)
    pub product_id: String,
    /// Quantity, at least 1
    pub quantity: i32,
    /// Price per unit
    pub price: f64,
    /// Weight per unit, in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_grams: Option<f64>,
    /// Cached product type (catalog wins when it disagrees)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    /// Cached upfront-shipping flag (catalog wins when it disagrees)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collect_shipping_upfront: Option<bool>,
    /// Cached gateway id for the upfront shipping charge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upfront_shipping_payment_method: Option<String>,
    /// Per-product shipping override, copied from the product row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_config: Option<ProductShippingConfig>,
}

/// Delivery address as typed into the checkout form
///
/// All fields optional; matching against shipping rules is trimmed and
/// case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShippingAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Free-text street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal: Option<String>,
}

// ============================================================================
// Catalog Snapshot
// ============================================================================

/// Authoritative per-product fields fetched by the caller before
/// payment allocation; shadows the cart's denormalized copies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collect_shipping_upfront: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upfront_shipping_payment_method: Option<String>,
}

/// Read-only catalog snapshot keyed by product ID
pub type CatalogSnapshot = HashMap<String, CatalogEntry>;

// ============================================================================
// Shipping Options
// ============================================================================

/// Which address field a shipping option targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingOptionKind {
    Area,
    City,
    RestOfCountry,
}

/// One shipping choice rendered in the checkout picker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingOption {
    /// Stable option id (`area_{i}`, `city_{i}`, `rest_of_country`)
    pub id: String,
    /// Which address field selecting this option fills in
    pub kind: ShippingOptionKind,
    /// Raw area or city name (empty for rest-of-country)
    pub name: String,
    /// Human label shown in the picker
    pub label: String,
    /// Fee for this option
    pub fee: f64,
}

impl ShippingOption {
    /// Write this option's choice into the checkout form state.
    ///
    /// Picking an area clears any typed city and vice versa, so the fee
    /// resolver sees exactly one location signal; rest-of-country clears
    /// both. The fee itself is still resolved from the updated address.
    pub fn apply_to(&self, address: &mut ShippingAddress) {
        match self.kind {
            ShippingOptionKind::Area => {
                address.area = Some(self.name.clone());
                address.city = None;
            }
            ShippingOptionKind::City => {
                address.city = Some(self.name.clone());
                address.area = None;
            }
            ShippingOptionKind::RestOfCountry => {
                address.city = None;
                address.area = None;
            }
        }
    }
}

// ============================================================================
// Payment Allocation
// ============================================================================

/// How the order total splits between checkout and delivery
///
/// Recomputed on every cart or address change; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PaymentBreakdown {
    /// Amount the customer pays at checkout
    pub upfront_amount: f64,
    /// Amount collected on delivery
    pub delivery_amount: f64,
    /// Portion of the shipping fee charged at checkout
    pub upfront_shipping_fee: f64,
    /// Portion of the shipping fee collected on delivery
    pub delivery_shipping_fee: f64,
    /// Line total of digital items (always paid upfront)
    pub digital_products_total: f64,
    /// Line total of physical (cash-on-delivery) items
    pub cod_products_total: f64,
    /// Line total of COD items that opt into upfront shipping
    pub cod_products_with_upfront_shipping: f64,
    /// Line total of COD items that do not
    pub cod_products_without_upfront_shipping: f64,
    /// True when anything is due at checkout
    pub has_upfront_payment: bool,
    /// True when anything is due on delivery
    pub has_delivery_payment: bool,
}
