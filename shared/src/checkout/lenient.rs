//! Lenient numeric deserialization for stored configuration
//!
//! Shipping settings rows are edited from the dashboard and have passed
//! through several storage formats, so numeric fields may arrive as JSON
//! numbers, numeric strings, null, or garbage. Checkout must never fail
//! to load a configuration row: anything unparseable deserializes as
//! zero (or `None` for optional fields) and is logged.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Raw forms a stored numeric field may take
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Num(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawNumber {
    /// `None` means the stored value is unusable
    fn parse(self) -> Option<f64> {
        match self {
            RawNumber::Num(n) if n.is_finite() => Some(n),
            RawNumber::Num(n) => {
                tracing::warn!("non-finite numeric value {n} in stored settings, ignoring");
                None
            }
            RawNumber::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => {
                    tracing::warn!("unparseable numeric value {s:?} in stored settings, ignoring");
                    None
                }
            },
            RawNumber::Other(_) => {
                tracing::warn!("non-numeric value in stored settings, ignoring");
                None
            }
        }
    }
}

/// Deserialize a required numeric field, coercing invalid input to 0.
pub(crate) fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.unwrap_or(0.0))
}

/// Deserialize an optional numeric field; null, absence, and invalid
/// present values all map to `None`, so a corrupt threshold reads as
/// unset rather than zero.
pub(crate) fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(raw.and_then(RawNumber::parse))
}
