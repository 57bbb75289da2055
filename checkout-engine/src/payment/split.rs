//! Upfront / Delivery Split
//!
//! Decides how much of an order is paid at checkout and how much is
//! collected on delivery. Digital goods are paid upfront in full.
//! Physical product prices are always collected on delivery; only the
//! shipping fee can move upfront, and it moves as a whole.

use rust_decimal::Decimal;
use shared::{CartItem, CatalogSnapshot, PaymentBreakdown};

use crate::catalog;
use crate::money::{line_total, to_decimal, to_f64};

/// Split an order total between upfront and on-delivery collection.
///
/// The shipping fee is all-or-nothing: one physical item opting into
/// upfront shipping pulls the entire fee into the upfront amount, even
/// when other physical items did not opt in. It is never prorated.
pub fn calculate_payment_breakdown(
    items: &[CartItem],
    shipping_cost: f64,
    catalog: Option<&CatalogSnapshot>,
) -> PaymentBreakdown {
    let mut digital_total = Decimal::ZERO;
    let mut cod_total = Decimal::ZERO;
    let mut cod_with_upfront = Decimal::ZERO;
    let mut cod_without_upfront = Decimal::ZERO;
    let mut has_upfront_shipping_item = false;

    for item in items {
        let fields = catalog::effective_fields(item, catalog);
        let line = line_total(item);
        if fields.is_digital() {
            digital_total = digital_total.saturating_add(line);
        } else {
            cod_total = cod_total.saturating_add(line);
            if fields.collect_shipping_upfront {
                // Tracked as a flag: a zero-priced line still opts in
                has_upfront_shipping_item = true;
                cod_with_upfront = cod_with_upfront.saturating_add(line);
            } else {
                cod_without_upfront = cod_without_upfront.saturating_add(line);
            }
        }
    }

    let shipping = to_decimal(shipping_cost);
    let (upfront_shipping, delivery_shipping) = if has_upfront_shipping_item {
        (shipping, Decimal::ZERO)
    } else {
        (Decimal::ZERO, shipping)
    };

    // Flags compare the rounded amounts
    let upfront_amount = to_f64(digital_total.saturating_add(upfront_shipping));
    let delivery_amount = to_f64(cod_total.saturating_add(delivery_shipping));

    PaymentBreakdown {
        upfront_amount,
        delivery_amount,
        upfront_shipping_fee: to_f64(upfront_shipping),
        delivery_shipping_fee: to_f64(delivery_shipping),
        digital_products_total: to_f64(digital_total),
        cod_products_total: to_f64(cod_total),
        cod_products_with_upfront_shipping: to_f64(cod_with_upfront),
        cod_products_without_upfront_shipping: to_f64(cod_without_upfront),
        has_upfront_payment: upfront_amount > 0.0,
        has_delivery_payment: delivery_amount > 0.0,
    }
}

// ==================== Tests ====================
