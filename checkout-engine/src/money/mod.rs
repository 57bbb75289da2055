//! Money calculation utilities using rust_decimal for precision
//!
//! All fee and allocation arithmetic runs on `Decimal` internally and
//! converts back to `f64` at the API boundary, rounded to 2 decimal
//! places. Cart weights go through the same conversion but are never
//! rounded, since tier bounds compare at full precision. Products and
//! sums saturate at `Decimal`'s bounds instead of overflowing.

use rust_decimal::prelude::*;
use shared::checkout::types::CartItem;

/// Rounding precision for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Stored fees and prices are not trusted: NaN or infinite values log
/// an error and resolve to zero so the calculation can proceed.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for the API boundary, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: a Decimal rounded to 2dp is always within f64 range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Line total for one cart item (price × quantity)
#[inline]
pub fn line_total(item: &CartItem) -> Decimal {
    to_decimal(item.price).saturating_mul(Decimal::from(item.quantity))
}

/// Sum of all line totals, rounded to 2 decimal places
pub fn cart_subtotal(items: &[CartItem]) -> f64 {
    let total = items
        .iter()
        .map(line_total)
        .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line));
    to_f64(total)
}

/// Total cart weight as a Decimal, for tier comparisons
pub(crate) fn cart_weight_decimal(items: &[CartItem]) -> Decimal {
    items
        .iter()
        .map(|item| {
            let quantity = Decimal::from(item.quantity);
            to_decimal(item.weight_grams.unwrap_or(0.0)).saturating_mul(quantity)
        })
        .fold(Decimal::ZERO, |acc, grams| acc.saturating_add(grams))
}

/// Total cart weight in grams (unit weight × quantity, missing weights
/// count as zero)
///
/// Not rounded: tier boundaries are inclusive and a fraction of a gram
/// above a bound must land in the next tier.
pub fn total_cart_weight(items: &[CartItem]) -> f64 {
    cart_weight_decimal(items).to_f64().unwrap_or(0.0)
}

/// Currency symbol for a known ISO code
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.trim().to_uppercase().as_str() {
        "BDT" => Some("৳"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "INR" => Some("₹"),
        _ => None,
    }
}

/// Render an amount with its currency for display labels
///
/// `"৳80"`, `"৳80.5"`, or `"MYR 80"` for codes without a known symbol.
/// Trailing zeros are dropped after rounding to 2 decimal places.
pub fn format_money(currency_code: &str, amount: f64) -> String {
    let rendered = to_decimal(amount)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    match currency_symbol(currency_code) {
        Some(symbol) => format!("{symbol}{rendered}"),
        None => format!("{currency_code} {rendered}"),
    }
}
