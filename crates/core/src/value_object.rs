//! Value objects: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two prices of
//! 429.99 are the same price no matter which item carries them.

use serde::{Deserialize, Serialize};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one:
///
/// ```ignore
/// let discounted = Price::from_cents(desk.price().cents() - 4000);
/// catalog.update_price(&desk_key, discounted)?;
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Unit price in minor currency units (cents).
///
/// Negative amounts are representable; the catalog stores whatever it is given.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}
