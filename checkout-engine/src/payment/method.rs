//! Upfront Payment Method Resolver
//!
//! Picks the gateway that collects the upfront part of an order.
//! Customer choice drives carts containing digital products; otherwise
//! the first physical item that opts into upfront shipping and names a
//! gateway decides, then a valid customer choice, then the first
//! available gateway. A product-mandated gateway is overridden by
//! customer choice only when digital products are also in the cart.

use shared::{CartItem, CatalogSnapshot};

use crate::catalog;

/// Non-blank trimmed method string, `None` otherwise
fn chosen(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Exact membership in the store's enabled gateway list
fn is_available(method: &str, available_methods: &[String]) -> bool {
    available_methods.iter().any(|m| m == method)
}

/// Resolve the gateway for the upfront charge, or `None` when the store
/// has no gateways enabled and nothing else applies.
pub fn upfront_payment_method(
    items: &[CartItem],
    catalog: Option<&CatalogSnapshot>,
    customer_selected: Option<&str>,
    available_methods: &[String],
) -> Option<String> {
    let fields: Vec<_> = items
        .iter()
        .map(|item| catalog::effective_fields(item, catalog))
        .collect();

    let customer_choice =
        chosen(customer_selected).filter(|method| is_available(method, available_methods));

    let has_digital = fields.iter().any(|f| f.is_digital());
    if has_digital && let Some(method) = customer_choice {
        return Some(method.to_string());
    }

    // First physical item that opts into upfront shipping and names a
    // gateway; later items never get a vote
    let product_method = fields
        .iter()
        .find(|f| {
            !f.is_digital()
                && f.collect_shipping_upfront
                && f.upfront_shipping_payment_method.is_some()
        })
        .and_then(|f| f.upfront_shipping_payment_method.as_deref());
    if let Some(method) = product_method
        && is_available(method, available_methods)
    {
        return Some(method.to_string());
    }

    if let Some(method) = customer_choice {
        return Some(method.to_string());
    }

    available_methods.first().cloned()
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CatalogEntry, ProductType};
    use std::collections::HashMap;

    fn methods(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn make_item(id: &str) -> CartItem {
        CartItem {
            id: id.to_string(),
            product_id: format!("prod-{id}"),
            quantity: 1,
            price: 100.0,
            ..Default::default()
        }
    }

    fn digital(mut item: CartItem) -> CartItem {
        item.product_type = Some(ProductType::Digital);
        item
    }

    fn upfront_via(mut item: CartItem, method: &str) -> CartItem {
        item.collect_shipping_upfront = Some(true);
        item.upfront_shipping_payment_method = Some(method.to_string());
        item
    }

    #[test]
    fn test_digital_cart_prefers_customer_choice() {
        let items = vec![digital(make_item("a")), upfront_via(make_item("b"), "nagad")];
        let available = methods(&["bkash", "nagad"]);
        let method = upfront_payment_method(&items, None, Some("bkash"), &available);
        assert_eq!(method.as_deref(), Some("bkash"));
    }

    #[test]
    fn test_product_method_wins_without_digital_items() {
        let items = vec![upfront_via(make_item("b"), "nagad")];
        let available = methods(&["bkash", "nagad"]);
        let method = upfront_payment_method(&items, None, Some("bkash"), &available);
        assert_eq!(method.as_deref(), Some("nagad"));
    }

    #[test]
    fn test_first_opted_in_item_decides() {
        let items = vec![
            upfront_via(make_item("a"), "nagad"),
            upfront_via(make_item("b"), "rocket"),
        ];
        let available = methods(&["nagad", "rocket"]);
        let method = upfront_payment_method(&items, None, None, &available);
        assert_eq!(method.as_deref(), Some("nagad"));
    }

    #[test]
    fn test_unavailable_product_method_falls_back_to_customer_choice() {
        let items = vec![upfront_via(make_item("a"), "rocket")];
        let available = methods(&["bkash", "nagad"]);
        let method = upfront_payment_method(&items, None, Some("nagad"), &available);
        assert_eq!(method.as_deref(), Some("nagad"));
    }

    #[test]
    fn test_unavailable_product_method_falls_back_to_first_available() {
        let items = vec![upfront_via(make_item("a"), "rocket")];
        let available = methods(&["bkash", "nagad"]);
        let method = upfront_payment_method(&items, None, None, &available);
        assert_eq!(method.as_deref(), Some("bkash"));
    }

    #[test]
    fn test_invalid_customer_choice_is_ignored() {
        let items = vec![digital(make_item("a"))];
        let available = methods(&["bkash", "nagad"]);
        let method = upfront_payment_method(&items, None, Some("paypal"), &available);
        assert_eq!(method.as_deref(), Some("bkash"));
    }

    #[test]
    fn test_valid_customer_choice_without_other_signals() {
        let items = vec![make_item("a")];
        let available = methods(&["bkash", "nagad"]);
        let method = upfront_payment_method(&items, None, Some("nagad"), &available);
        assert_eq!(method.as_deref(), Some("nagad"));
    }

    #[test]
    fn test_defaults_to_first_available_method() {
        let items = vec![make_item("a")];
        let available = methods(&["bkash", "nagad"]);
        let method = upfront_payment_method(&items, None, None, &available);
        assert_eq!(method.as_deref(), Some("bkash"));
    }

    #[test]
    fn test_no_available_methods_yields_none() {
        let items = vec![upfront_via(make_item("a"), "nagad")];
        let method = upfront_payment_method(&items, None, Some("bkash"), &[]);
        assert_eq!(method, None);
    }

    #[test]
    fn test_blank_product_method_counts_as_unset() {
        let mut item = make_item("a");
        item.collect_shipping_upfront = Some(true);
        item.upfront_shipping_payment_method = Some("   ".to_string());
        let available = methods(&["bkash"]);
        let method = upfront_payment_method(&[item], None, None, &available);
        assert_eq!(method.as_deref(), Some("bkash"));
    }

    #[test]
    fn test_opted_in_item_without_method_is_skipped() {
        let mut silent = make_item("a");
        silent.collect_shipping_upfront = Some(true);
        let items = vec![silent, upfront_via(make_item("b"), "nagad")];
        let available = methods(&["bkash", "nagad"]);
        let method = upfront_payment_method(&items, None, None, &available);
        assert_eq!(method.as_deref(), Some("nagad"));
    }

    #[test]
    fn test_catalog_method_overrides_cart_method() {
        let item = upfront_via(make_item("a"), "rocket");
        let mut catalog = HashMap::new();
        catalog.insert(
            "prod-a".to_string(),
            CatalogEntry {
                upfront_shipping_payment_method: Some("nagad".to_string()),
                ..Default::default()
            },
        );
        let available = methods(&["nagad", "rocket"]);
        let method = upfront_payment_method(&[item], Some(&catalog), None, &available);
        assert_eq!(method.as_deref(), Some("nagad"));
    }
}
