//! Shipping Address Matcher
//!
//! Logic for matching a delivery address against the storefront's area
//! and city rules to pick the base shipping fee.

use serde::{Deserialize, Serialize};
use shared::{AreaRule, CityRule, ShippingAddress, ShippingSettings};

/// Which rule produced the base shipping fee
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaseFeeSource {
    /// Exact match on the address area
    AreaRule,
    /// Exact match on the address city
    CityRule,
    /// City name found inside the area or street text
    CityInAddress,
    /// No rule matched, country-wide fallback fee
    RestOfCountry,
}

/// A resolved base fee and the rule kind it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseFeeMatch {
    pub fee: f64,
    pub source: BaseFeeSource,
}

/// Comparison key for rule and address strings (trimmed, lowercased)
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalized address field, `None` when absent or blank
fn address_field(value: Option<&str>) -> Option<String> {
    value.map(normalize).filter(|v| !v.is_empty())
}

/// Find the first area rule whose area equals the delivery area.
/// Rules with a blank area name never match.
pub fn match_area_rule<'a>(
    rules: &'a [AreaRule],
    address: &ShippingAddress,
) -> Option<&'a AreaRule> {
    let area = address_field(address.area.as_deref())?;
    rules.iter().find(|rule| {
        let name = normalize(&rule.area);
        if name.is_empty() {
            tracing::warn!("skipping area rule with blank area name");
            return false;
        }
        name == area
    })
}

/// Find the first city rule whose city equals the delivery city.
/// Rules with a blank city name never match.
pub fn match_city_rule<'a>(
    rules: &'a [CityRule],
    address: &ShippingAddress,
) -> Option<&'a CityRule> {
    let city = address_field(address.city.as_deref())?;
    rules.iter().find(|rule| {
        let name = normalize(&rule.city);
        if name.is_empty() {
            tracing::warn!("skipping city rule with blank city name");
            return false;
        }
        name == city
    })
}

/// Find the first city rule whose city name appears as a substring of
/// the delivery area or the free-text street address.
pub fn match_city_in_address<'a>(
    rules: &'a [CityRule],
    address: &ShippingAddress,
) -> Option<&'a CityRule> {
    let area = address_field(address.area.as_deref());
    let street = address_field(address.address.as_deref());
    if area.is_none() && street.is_none() {
        return None;
    }
    rules.iter().find(|rule| {
        let name = normalize(&rule.city);
        if name.is_empty() {
            return false;
        }
        area.as_deref().is_some_and(|a| a.contains(&name))
            || street.as_deref().is_some_and(|s| s.contains(&name))
    })
}

/// Resolve the base fee for a delivery address, first match wins:
/// area rule, then city rule, then a city name found elsewhere in the
/// address, then the rest-of-country fee.
pub fn resolve_base_fee(settings: &ShippingSettings, address: &ShippingAddress) -> BaseFeeMatch {
    if let Some(rule) = match_area_rule(&settings.area_rules, address) {
        return BaseFeeMatch {
            fee: rule.fee,
            source: BaseFeeSource::AreaRule,
        };
    }
    if let Some(rule) = match_city_rule(&settings.city_rules, address) {
        return BaseFeeMatch {
            fee: rule.fee,
            source: BaseFeeSource::CityRule,
        };
    }
    if let Some(rule) = match_city_in_address(&settings.city_rules, address) {
        return BaseFeeMatch {
            fee: rule.fee,
            source: BaseFeeSource::CityInAddress,
        };
    }
    BaseFeeMatch {
        fee: settings.rest_of_country_fee,
        source: BaseFeeSource::RestOfCountry,
    }
}
