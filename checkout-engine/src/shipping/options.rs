//! Checkout Shipping Options
//!
//! Builds the list of shipping choices rendered in the checkout picker,
//! in a fixed order: area rules, then city rules, then exactly one
//! rest-of-country option, always last.

use shared::{ShippingOption, ShippingOptionKind, ShippingSettings};

use crate::money::format_money;

/// Rule label when present and non-blank, otherwise "{name} (fee)"
fn option_label(label: Option<&str>, name: &str, fee: f64, currency_code: &str) -> String {
    match label.map(str::trim).filter(|l| !l.is_empty()) {
        Some(label) => label.to_string(),
        None => format!("{} ({})", name, format_money(currency_code, fee)),
    }
}

/// List the shipping options to present at checkout.
///
/// Empty unless shipping is enabled and the storefront opted into
/// showing a picker. Rules with a blank name never produce an option,
/// the same way they never match an address. Option ids carry the
/// source rule's index (`area_0`, `city_1`, `rest_of_country`) and are
/// stable across calls for the same settings.
pub fn available_shipping_options(
    settings: Option<&ShippingSettings>,
    currency_code: &str,
) -> Vec<ShippingOption> {
    let Some(settings) = settings.filter(|s| s.enabled && s.show_options_at_checkout) else {
        return Vec::new();
    };

    let mut options =
        Vec::with_capacity(settings.area_rules.len() + settings.city_rules.len() + 1);

    for (index, rule) in settings.area_rules.iter().enumerate() {
        if rule.area.trim().is_empty() {
            tracing::warn!("hiding area rule with blank area name from checkout options");
            continue;
        }
        options.push(ShippingOption {
            id: format!("area_{index}"),
            kind: ShippingOptionKind::Area,
            name: rule.area.clone(),
            label: option_label(rule.label.as_deref(), &rule.area, rule.fee, currency_code),
            fee: rule.fee,
        });
    }

    for (index, rule) in settings.city_rules.iter().enumerate() {
        if rule.city.trim().is_empty() {
            tracing::warn!("hiding city rule with blank city name from checkout options");
            continue;
        }
        options.push(ShippingOption {
            id: format!("city_{index}"),
            kind: ShippingOptionKind::City,
            name: rule.city.clone(),
            label: option_label(rule.label.as_deref(), &rule.city, rule.fee, currency_code),
            fee: rule.fee,
        });
    }

    let country = settings.country.trim();
    let rest_display = if country.is_empty() {
        "Rest of country".to_string()
    } else {
        format!("Rest of {country}")
    };
    options.push(ShippingOption {
        id: "rest_of_country".to_string(),
        kind: ShippingOptionKind::RestOfCountry,
        name: String::new(),
        label: option_label(
            settings.rest_of_country_label.as_deref(),
            &rest_display,
            settings.rest_of_country_fee,
            currency_code,
        ),
        fee: settings.rest_of_country_fee,
    });

    options
}

// ==================== Tests ====================
