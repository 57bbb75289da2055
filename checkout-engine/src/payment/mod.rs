//! Payment Allocation Module
//!
//! Splits an order between upfront checkout payment and
//! cash-on-delivery, and resolves which gateway collects the upfront
//! part. Both calculators resolve product fields through the catalog
//! module, so a stale cart copy can never steer the split.

mod method;
mod split;

pub use method::*;
pub use split::*;
