//! Checkout Engine
//!
//! Facade bundling the storefront configuration, catalog snapshot, and
//! currency so the checkout flow can recompute everything with one call
//! per cart or address change.

use serde::{Deserialize, Serialize};
use shared::{
    CartItem, CatalogSnapshot, PaymentBreakdown, ShippingAddress, ShippingOption, ShippingSettings,
};

use crate::money;
use crate::payment::{calculate_payment_breakdown, upfront_payment_method};
use crate::shipping::{ShippingQuote, available_shipping_options, compute_order_shipping};

/// Checkout Engine - quotes shipping and allocates payment for a cart
#[derive(Clone, Default)]
pub struct CheckoutEngine {
    settings: Option<ShippingSettings>,
    catalog: Option<CatalogSnapshot>,
    currency_code: String,
}

impl std::fmt::Debug for CheckoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutEngine")
            .field("shipping_enabled", &self.settings.as_ref().map(|s| s.enabled))
            .field(
                "catalog_products",
                &self.catalog.as_ref().map_or(0, |c| c.len()),
            )
            .field("currency_code", &self.currency_code)
            .finish()
    }
}

/// Everything the checkout screen needs, recomputed per cart change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// Cart subtotal (products only, before shipping)
    pub subtotal: f64,
    pub shipping: ShippingQuote,
    pub payment: PaymentBreakdown,
    /// Gateway for the upfront charge; `None` when nothing is due upfront
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upfront_method: Option<String>,
}

impl CheckoutEngine {
    pub fn new(
        settings: Option<ShippingSettings>,
        catalog: Option<CatalogSnapshot>,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            catalog,
            currency_code: currency_code.into(),
        }
    }

    /// Quote shipping for the cart as currently addressed
    pub fn quote_shipping(&self, items: &[CartItem], address: &ShippingAddress) -> ShippingQuote {
        let subtotal = money::cart_subtotal(items);
        compute_order_shipping(self.settings.as_ref(), items, address, subtotal)
    }

    /// Shipping choices to render in the checkout picker
    pub fn shipping_options(&self) -> Vec<ShippingOption> {
        available_shipping_options(self.settings.as_ref(), &self.currency_code)
    }

    /// Split an order between upfront and on-delivery collection
    pub fn payment_breakdown(&self, items: &[CartItem], shipping_cost: f64) -> PaymentBreakdown {
        calculate_payment_breakdown(items, shipping_cost, self.catalog.as_ref())
    }

    /// Gateway for the upfront charge
    pub fn upfront_method(
        &self,
        items: &[CartItem],
        customer_selected: Option<&str>,
        available_methods: &[String],
    ) -> Option<String> {
        upfront_payment_method(items, self.catalog.as_ref(), customer_selected, available_methods)
    }

    /// Run the full pipeline for one cart state.
    ///
    /// # Arguments
    /// * `items` - Current cart lines
    /// * `address` - Delivery address as typed so far
    /// * `customer_selected` - Gateway the customer picked, if any
    /// * `available_methods` - Gateways enabled for this store
    pub fn compute(
        &self,
        items: &[CartItem],
        address: &ShippingAddress,
        customer_selected: Option<&str>,
        available_methods: &[String],
    ) -> CheckoutSummary {
        let subtotal = money::cart_subtotal(items);
        let shipping = compute_order_shipping(self.settings.as_ref(), items, address, subtotal);
        let payment =
            calculate_payment_breakdown(items, shipping.shipping_cost, self.catalog.as_ref());
        // No upfront charge, no upfront gateway to show
        let upfront_method = if payment.has_upfront_payment {
            self.upfront_method(items, customer_selected, available_methods)
        } else {
            None
        };

        CheckoutSummary {
            subtotal,
            shipping,
            payment,
            upfront_method,
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CityRule, ProductType};

    fn make_settings() -> ShippingSettings {
        ShippingSettings {
            enabled: true,
            country: "Bangladesh".to_string(),
            rest_of_country_fee: 120.0,
            city_rules: vec![CityRule {
                city: "Dhaka".to_string(),
                fee: 60.0,
                label: None,
            }],
            show_options_at_checkout: true,
            ..Default::default()
        }
    }

    fn make_engine() -> CheckoutEngine {
        CheckoutEngine::new(Some(make_settings()), None, "BDT")
    }

    fn physical_item(price: f64) -> CartItem {
        CartItem {
            id: "line-phys".to_string(),
            product_id: "prod-phys".to_string(),
            quantity: 1,
            price,
            ..Default::default()
        }
    }

    fn digital_item(price: f64) -> CartItem {
        CartItem {
            id: "line-digi".to_string(),
            product_id: "prod-digi".to_string(),
            quantity: 1,
            price,
            product_type: Some(ProductType::Digital),
            ..Default::default()
        }
    }

    fn dhaka() -> ShippingAddress {
        ShippingAddress {
            city: Some("Dhaka".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_checkout_flow() {
        let engine = make_engine();
        let mut cod = physical_item(1000.0);
        cod.collect_shipping_upfront = Some(true);
        cod.upfront_shipping_payment_method = Some("nagad".to_string());
        let items = vec![digital_item(500.0), cod];
        let available = vec!["bkash".to_string(), "nagad".to_string()];

        let summary = engine.compute(&items, &dhaka(), None, &available);

        assert_eq!(summary.subtotal, 1500.0);
        assert_eq!(summary.shipping.shipping_cost, 60.0);
        assert_eq!(summary.payment.upfront_amount, 560.0);
        assert_eq!(summary.payment.delivery_amount, 1000.0);
        assert_eq!(summary.upfront_method.as_deref(), Some("nagad"));
    }

    #[test]
    fn test_disabled_shipping_still_summarizes() {
        let mut settings = make_settings();
        settings.enabled = false;
        let engine = CheckoutEngine::new(Some(settings), None, "BDT");
        let items = vec![physical_item(300.0)];

        let summary = engine.compute(&items, &dhaka(), None, &[]);

        assert!(summary.shipping.is_free_shipping);
        assert_eq!(summary.payment.delivery_amount, 300.0);
        assert_eq!(summary.upfront_method, None);
    }

    #[test]
    fn test_upfront_method_omitted_when_nothing_due_upfront() {
        let engine = make_engine();
        let items = vec![physical_item(300.0)];
        let available = vec!["bkash".to_string()];

        let summary = engine.compute(&items, &dhaka(), Some("bkash"), &available);

        assert!(!summary.payment.has_upfront_payment);
        assert_eq!(summary.upfront_method, None);
    }

    #[test]
    fn test_options_use_engine_currency() {
        let engine = make_engine();
        let options = engine.shipping_options();
        assert_eq!(options[0].label, "Dhaka (৳60)");
    }

    #[test]
    fn test_summary_round_trips_through_json() {
        let engine = make_engine();
        let items = vec![digital_item(500.0)];
        let summary = engine.compute(&items, &dhaka(), Some("bkash"), &["bkash".to_string()]);

        let json = serde_json::to_string(&summary).unwrap();
        let back: CheckoutSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_recompute_is_stable() {
        let engine = make_engine();
        let items = vec![digital_item(500.0), physical_item(250.0)];
        let first = engine.compute(&items, &dhaka(), None, &["bkash".to_string()]);
        let second = engine.compute(&items, &dhaka(), None, &["bkash".to_string()]);
        assert_eq!(first, second);
    }
}
