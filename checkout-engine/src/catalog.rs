//! Effective product field resolution
//!
//! Cart lines carry denormalized product fields captured when the item
//! was added to the cart; callers may also pass a freshly fetched
//! catalog snapshot, which is authoritative. Resolution goes per field:
//! catalog entry, then the cart's cached copy, then the default
//! (physical, no upfront shipping). The payment split and the upfront
//! method resolver both go through this one function so they can never
//! disagree about what a product is.

use shared::checkout::types::{CartItem, CatalogEntry, CatalogSnapshot, ProductType};

/// Product fields after catalog-over-cart resolution
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveProductFields {
    pub product_type: ProductType,
    pub collect_shipping_upfront: bool,
    /// Gateway id for the upfront shipping charge; `None` when unset or blank
    pub upfront_shipping_payment_method: Option<String>,
}

impl EffectiveProductFields {
    pub fn is_digital(&self) -> bool {
        self.product_type == ProductType::Digital
    }
}

/// Blank strings count as unset, matching how the dashboard stores
/// "no method chosen"
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Look up an item's catalog entry, logging when the supplied snapshot
/// does not know the product
pub fn catalog_entry<'a>(
    item: &CartItem,
    catalog: Option<&'a CatalogSnapshot>,
) -> Option<&'a CatalogEntry> {
    let catalog = catalog?;
    let entry = catalog.get(&item.product_id);
    if entry.is_none() {
        tracing::warn!(
            product_id = %item.product_id,
            "product missing from catalog snapshot, falling back to cart copy"
        );
    }
    entry
}

/// Resolve the effective fields for one cart item against an optional
/// catalog entry
pub fn resolve_effective_product_fields(
    item: &CartItem,
    entry: Option<&CatalogEntry>,
) -> EffectiveProductFields {
    let product_type = entry
        .and_then(|e| e.product_type)
        .or(item.product_type)
        .unwrap_or_default();

    let collect_shipping_upfront = entry
        .and_then(|e| e.collect_shipping_upfront)
        .or(item.collect_shipping_upfront)
        .unwrap_or(false);

    let upfront_shipping_payment_method = entry
        .and_then(|e| non_blank(e.upfront_shipping_payment_method.as_deref()))
        .or_else(|| non_blank(item.upfront_shipping_payment_method.as_deref()));

    EffectiveProductFields {
        product_type,
        collect_shipping_upfront,
        upfront_shipping_payment_method,
    }
}

/// Resolve an item directly against a full snapshot
pub fn effective_fields(
    item: &CartItem,
    catalog: Option<&CatalogSnapshot>,
) -> EffectiveProductFields {
    resolve_effective_product_fields(item, catalog_entry(item, catalog))
}

// ==================== Tests ====================
