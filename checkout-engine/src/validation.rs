//! Configuration and cart validation
//!
//! The fee and payment calculators absorb malformed input and never
//! fail, so broken data silently prices as zero. These opt-in checks
//! let the dashboard and order intake reject such data before it is
//! stored. Limits are generous sanity caps, not business rules.

use std::collections::HashSet;

use shared::error::CheckoutResult;
use shared::{CartItem, CheckoutError, ShippingSettings};

// ── Numeric limits ──────────────────────────────────────────────────

/// Upper bound for any single fee, price, or threshold
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Upper bound for a line quantity
pub const MAX_QUANTITY: i32 = 9_999;

/// Upper bound for any weight value, in grams (one metric tonne)
pub const MAX_WEIGHT_GRAMS: f64 = 1_000_000.0;

// ── Shipping settings ───────────────────────────────────────────────

/// Validate that a settings amount is a finite non-negative number
/// within the cap.
fn validate_settings_amount(value: f64, field: &str) -> CheckoutResult<()> {
    if !value.is_finite() {
        return Err(CheckoutError::invalid_settings(format!(
            "{field} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(CheckoutError::invalid_settings(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    if value > MAX_AMOUNT {
        return Err(CheckoutError::invalid_settings(format!(
            "{field} is too large (got {value}, max {MAX_AMOUNT})"
        )));
    }
    Ok(())
}

/// Validate a shipping configuration before storing it.
///
/// Rules must have non-blank names, fees must be sane amounts, and
/// weight tiers must be stored strictly ascending so each tier has a
/// distinct, unambiguous range.
pub fn validate_shipping_settings(settings: &ShippingSettings) -> CheckoutResult<()> {
    validate_settings_amount(settings.rest_of_country_fee, "rest_of_country_fee")?;

    for (index, rule) in settings.area_rules.iter().enumerate() {
        if rule.area.trim().is_empty() {
            return Err(CheckoutError::invalid_settings(format!(
                "area_rules[{index}].area must not be blank"
            )));
        }
        validate_settings_amount(rule.fee, &format!("area_rules[{index}].fee"))?;
    }

    for (index, rule) in settings.city_rules.iter().enumerate() {
        if rule.city.trim().is_empty() {
            return Err(CheckoutError::invalid_settings(format!(
                "city_rules[{index}].city must not be blank"
            )));
        }
        validate_settings_amount(rule.fee, &format!("city_rules[{index}].fee"))?;
    }

    let mut previous_bound: Option<f64> = None;
    for (index, tier) in settings.weight_tiers.iter().enumerate() {
        let field = format!("weight_tiers[{index}].max_weight_grams");
        if !tier.max_weight_grams.is_finite() || tier.max_weight_grams <= 0.0 {
            return Err(CheckoutError::invalid_settings(format!(
                "{field} must be a positive number"
            )));
        }
        if tier.max_weight_grams > MAX_WEIGHT_GRAMS {
            return Err(CheckoutError::invalid_settings(format!(
                "{field} is too large (got {}, max {MAX_WEIGHT_GRAMS})",
                tier.max_weight_grams
            )));
        }
        validate_settings_amount(tier.fee, &format!("weight_tiers[{index}].fee"))?;
        if let Some(previous) = previous_bound
            && tier.max_weight_grams <= previous
        {
            return Err(CheckoutError::invalid_settings(
                "weight_tiers must be strictly ascending by max_weight_grams",
            ));
        }
        previous_bound = Some(tier.max_weight_grams);
    }

    if let Some(threshold) = settings.free_shipping_threshold {
        validate_settings_amount(threshold, "free_shipping_threshold")?;
    }
    if let Some(min_weight) = settings.free_shipping_min_weight_grams {
        if !min_weight.is_finite() || min_weight < 0.0 || min_weight > MAX_WEIGHT_GRAMS {
            return Err(CheckoutError::invalid_settings(format!(
                "free_shipping_min_weight_grams must be between 0 and {MAX_WEIGHT_GRAMS}"
            )));
        }
    }

    Ok(())
}

// ── Cart items ──────────────────────────────────────────────────────

/// Validate a cart item amount, tagging the error with the line id.
fn validate_item_amount(item_id: &str, value: f64, field: &str) -> CheckoutResult<()> {
    if !value.is_finite() || value < 0.0 || value > MAX_AMOUNT {
        return Err(CheckoutError::invalid_item(
            item_id,
            format!("{field} must be between 0 and {MAX_AMOUNT}"),
        ));
    }
    Ok(())
}

/// Validate one cart line before quoting or ordering.
pub fn validate_cart_item(item: &CartItem) -> CheckoutResult<()> {
    if item.product_id.trim().is_empty() {
        return Err(CheckoutError::invalid_item(
            &item.id,
            "product_id must not be blank",
        ));
    }
    if item.quantity < 1 || item.quantity > MAX_QUANTITY {
        return Err(CheckoutError::invalid_item(
            &item.id,
            format!(
                "quantity must be between 1 and {MAX_QUANTITY} (got {})",
                item.quantity
            ),
        ));
    }
    validate_item_amount(&item.id, item.price, "price")?;

    if let Some(weight) = item.weight_grams
        && (!weight.is_finite() || weight < 0.0 || weight > MAX_WEIGHT_GRAMS)
    {
        return Err(CheckoutError::invalid_item(
            &item.id,
            format!("weight_grams must be between 0 and {MAX_WEIGHT_GRAMS}"),
        ));
    }

    if let Some(config) = &item.shipping_config {
        validate_item_amount(&item.id, config.fixed_fee, "shipping_config.fixed_fee")?;
        validate_item_amount(
            &item.id,
            config.weight_surcharge,
            "shipping_config.weight_surcharge",
        )?;
    }

    Ok(())
}

/// Validate every line of a cart, stopping at the first bad one.
pub fn validate_cart(items: &[CartItem]) -> CheckoutResult<()> {
    for item in items {
        validate_cart_item(item)?;
    }
    Ok(())
}

// ── Payment methods ─────────────────────────────────────────────────

/// Validate the store's enabled gateway list: non-blank ids, no
/// duplicates.
pub fn validate_payment_methods(methods: &[String]) -> CheckoutResult<()> {
    let mut seen = HashSet::new();
    for method in methods {
        if method.trim().is_empty() {
            return Err(CheckoutError::invalid_methods(
                "payment method ids must not be blank",
            ));
        }
        if !seen.insert(method.as_str()) {
            return Err(CheckoutError::invalid_methods(format!(
                "duplicate payment method '{method}'"
            )));
        }
    }
    Ok(())
}

// ==================== Tests ====================
