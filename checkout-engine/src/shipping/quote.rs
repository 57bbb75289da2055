//! Order Shipping Quote
//!
//! Computes the shipping cost for a cart: base fee from the address
//! matcher, weight tier fee, per-product fees, then free-shipping
//! overrides. Returns a full breakdown for display and audit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{CartItem, ShippingAddress, ShippingConfigType, ShippingSettings, WeightTier};

use crate::money::{self, to_decimal, to_f64};
use crate::shipping::matcher::{self, BaseFeeSource};

/// Which override made the order ship free
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreeShippingReason {
    /// An item's shipping config grants free shipping
    ProductFlag,
    /// Order subtotal reached the configured threshold
    SubtotalThreshold,
    /// Cart weight reached the configured minimum
    WeightMinimum,
}

/// Line-by-line audit of a shipping quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShippingBreakdown {
    /// Location-based fee picked by the address matcher
    pub base_fee: f64,
    /// Which rule produced `base_fee` (absent when shipping is disabled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee_source: Option<BaseFeeSource>,
    /// Weight tier fee for the total cart weight
    pub weight_fee: f64,
    /// Sum of per-product fixed fees and weight surcharges
    pub product_specific_fees: f64,
    /// Base fee + weight fee + product fees
    pub total_before_discount: f64,
    /// Amount waived by a free-shipping override
    pub discount: f64,
    /// Why the order ships free, when it does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_shipping_reason: Option<FreeShippingReason>,
}

/// Result of quoting shipping for a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShippingQuote {
    /// Final shipping cost after overrides
    pub shipping_cost: f64,
    /// True when an override waived the full fee
    pub is_free_shipping: bool,
    pub breakdown: ShippingBreakdown,
}

impl ShippingQuote {
    /// Zero-cost quote used when shipping is disabled or unconfigured
    pub fn free() -> Self {
        Self {
            is_free_shipping: true,
            ..Self::default()
        }
    }
}

/// Fee of the first tier whose bound covers the weight (inclusive).
/// A weight past every tier uses the highest tier's fee.
fn weight_tier_fee(tiers: &[WeightTier], total_weight: Decimal) -> Decimal {
    if tiers.is_empty() || total_weight <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let mut sorted: Vec<&WeightTier> = tiers.iter().collect();
    sorted.sort_by(|a, b| a.max_weight_grams.total_cmp(&b.max_weight_grams));
    for tier in &sorted {
        if total_weight <= to_decimal(tier.max_weight_grams) {
            return to_decimal(tier.fee);
        }
    }
    sorted
        .last()
        .map(|tier| to_decimal(tier.fee))
        .unwrap_or(Decimal::ZERO)
}

/// Per-product contributions: fixed fees and weight surcharges
fn product_fees(items: &[CartItem]) -> Decimal {
    items
        .iter()
        .map(|item| {
            let Some(config) = item.shipping_config.as_ref() else {
                return Decimal::ZERO;
            };
            let qty = Decimal::from(item.quantity);
            match config.config_type {
                ShippingConfigType::Fixed => to_decimal(config.fixed_fee).saturating_mul(qty),
                ShippingConfigType::WeightSurcharge => {
                    to_decimal(item.weight_grams.unwrap_or(0.0))
                        .saturating_mul(qty)
                        .saturating_mul(to_decimal(config.weight_surcharge))
                }
                ShippingConfigType::Default
                | ShippingConfigType::Free
                | ShippingConfigType::CustomOptions => Decimal::ZERO,
            }
        })
        .fold(Decimal::ZERO, |acc, fee| acc.saturating_add(fee))
}

/// True when any item's shipping config grants free shipping
fn has_free_shipping_product(items: &[CartItem]) -> bool {
    items.iter().any(|item| {
        item.shipping_config.as_ref().is_some_and(|config| {
            config.config_type == ShippingConfigType::Free || config.free_shipping_enabled
        })
    })
}

/// First free-shipping override that applies: product flag, then
/// subtotal threshold, then weight minimum. An explicit zero threshold
/// counts as set.
fn free_shipping_reason(
    settings: &ShippingSettings,
    items: &[CartItem],
    subtotal: Decimal,
    total_weight: Decimal,
) -> Option<FreeShippingReason> {
    if has_free_shipping_product(items) {
        return Some(FreeShippingReason::ProductFlag);
    }
    if let Some(threshold) = settings.free_shipping_threshold
        && subtotal >= to_decimal(threshold)
    {
        return Some(FreeShippingReason::SubtotalThreshold);
    }
    if let Some(min_weight) = settings.free_shipping_min_weight_grams
        && total_weight >= to_decimal(min_weight)
    {
        return Some(FreeShippingReason::WeightMinimum);
    }
    None
}

/// Quote shipping for a cart against the storefront settings.
///
/// A missing or disabled configuration quotes free shipping rather than
/// failing. Never panics: malformed fee values coerce to zero and
/// oversized totals saturate at `Decimal`'s bounds. An address matching
/// no rule falls through to the rest-of-country fee.
pub fn compute_order_shipping(
    settings: Option<&ShippingSettings>,
    items: &[CartItem],
    address: &ShippingAddress,
    subtotal: f64,
) -> ShippingQuote {
    let Some(settings) = settings.filter(|s| s.enabled) else {
        return ShippingQuote::free();
    };

    let total_weight = money::cart_weight_decimal(items);
    let base = matcher::resolve_base_fee(settings, address);
    let base_fee = to_decimal(base.fee);
    let weight_fee = weight_tier_fee(&settings.weight_tiers, total_weight);
    let product_specific_fees = product_fees(items);
    let total_before_discount = base_fee
        .saturating_add(weight_fee)
        .saturating_add(product_specific_fees);

    let reason = free_shipping_reason(settings, items, to_decimal(subtotal), total_weight);
    let discount = if reason.is_some() {
        total_before_discount
    } else {
        Decimal::ZERO
    };
    let shipping_cost = total_before_discount.saturating_sub(discount).max(Decimal::ZERO);

    ShippingQuote {
        shipping_cost: to_f64(shipping_cost),
        is_free_shipping: reason.is_some(),
        breakdown: ShippingBreakdown {
            base_fee: to_f64(base_fee),
            base_fee_source: Some(base.source),
            weight_fee: to_f64(weight_fee),
            product_specific_fees: to_f64(product_specific_fees),
            total_before_discount: to_f64(total_before_discount),
            discount: to_f64(discount),
            free_shipping_reason: reason,
        },
    }
}

// ==================== Tests ====================
