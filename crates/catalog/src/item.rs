use serde::Serialize;

use stockroom_core::{Entity, ItemKey, Price};

/// Bounds every catalog key satisfies.
///
/// Keys are hashed by the primary store, ordered by listings and the category
/// index, and rendered in `NotFound` errors.
pub trait CatalogKey:
    Clone + Eq + core::hash::Hash + Ord + core::fmt::Debug + core::fmt::Display
{
}

impl<T> CatalogKey for T where
    T: Clone + Eq + core::hash::Hash + Ord + core::fmt::Debug + core::fmt::Display
{
}

/// A catalog item.
///
/// The key is fixed at creation; every other field is mutated in place by the
/// owning [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item<K = ItemKey> {
    key: K,
    name: String,
    price: Price,
    quantity: u64,
    category: String,
}

impl<K> Item<K> {
    pub(crate) fn new(key: K, name: String, price: Price, quantity: u64, category: String) -> Self {
        Self {
            key,
            name,
            price,
            quantity,
            category,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    /// Replaces the category, returning the previous label.
    pub(crate) fn replace_category(&mut self, category: String) -> String {
        core::mem::replace(&mut self.category, category)
    }

    /// Adds a signed delta to the quantity, clamping at zero.
    pub(crate) fn adjust_quantity(&mut self, delta: i64) {
        self.quantity = clamp_quantity(self.quantity, delta);
    }
}

/// `base + delta`, saturating at zero and at `u64::MAX`.
pub(crate) fn clamp_quantity(base: u64, delta: i64) -> u64 {
    base.saturating_add_signed(delta)
}

impl<K: CatalogKey> Entity for Item<K> {
    type Id = K;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

impl<K: core::fmt::Display> core::fmt::Display for Item<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {}, Price: {}, Quantity: {}, Category: {}",
            self.key, self.name, self.price, self.quantity, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofa() -> Item {
        Item::new(
            ItemKey::new(1),
            "Three-seater Sofa".to_string(),
            Price::from_cents(189_999),
            10,
            "Lounge".to_string(),
        )
    }

    #[test]
    fn display_matches_listing_format() {
        assert_eq!(
            sofa().to_string(),
            "1: Three-seater Sofa, Price: 1899.99, Quantity: 10, Category: Lounge"
        );
    }

    #[test]
    fn adjust_quantity_clamps_at_zero() {
        let mut item = sofa();
        item.adjust_quantity(-2);
        assert_eq!(item.quantity(), 8);
        item.adjust_quantity(-100);
        assert_eq!(item.quantity(), 0);
        item.adjust_quantity(5);
        assert_eq!(item.quantity(), 5);
    }

    #[test]
    fn clamp_saturates_at_upper_bound() {
        assert_eq!(clamp_quantity(u64::MAX - 1, 10), u64::MAX);
    }

    #[test]
    fn replace_category_returns_previous_label() {
        let mut item = sofa();
        let old = item.replace_category("Outdoor".to_string());
        assert_eq!(old, "Lounge");
        assert_eq!(item.category(), "Outdoor");
    }

    #[test]
    fn identity_is_the_key_alone() {
        let original = sofa();
        let mut restocked = sofa();
        restocked.adjust_quantity(4);
        restocked.set_price(Price::from_cents(149_999));

        assert_eq!(*original.id(), ItemKey::new(1));
        assert_ne!(original, restocked);
        assert!(original.same_identity(&restocked));
    }

    #[test]
    fn serializes_with_named_fields() {
        let json = serde_json::to_value(sofa()).unwrap();
        assert_eq!(json["key"], 1);
        assert_eq!(json["price"], 189_999);
        assert_eq!(json["category"], "Lounge");
    }
}
