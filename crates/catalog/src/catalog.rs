use std::collections::HashMap;

use stockroom_core::{DomainError, DomainResult, ItemKey, Price};

use crate::filter::ItemFilter;
use crate::index::CategoryIndex;
use crate::item::{CatalogKey, Item, clamp_quantity};

/// Result of [`Catalog::add_or_update`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Upsert {
    /// The key was new; the item holds the given fields verbatim.
    Created,
    /// The key existed; fields were overwritten and the quantity accumulated.
    Updated,
}

/// In-memory catalog: primary store plus category index.
///
/// The primary store owns every item. The category index only holds keys and is
/// updated in the same call as every mutation that touches a category, so the
/// two never diverge between calls.
///
/// Single-writer by construction (`&mut self`). Sharing a catalog across threads
/// needs one lock around the whole value, since both structures change together.
#[derive(Debug, Clone)]
pub struct Catalog<K = ItemKey> {
    items: HashMap<K, Item<K>>,
    index: CategoryIndex<K>,
}

impl<K> Default for Catalog<K> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            index: CategoryIndex::default(),
        }
    }
}

impl<K: CatalogKey> Catalog<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new item, or updates an existing one in place.
    ///
    /// For a new key `quantity` is the starting stock. For an existing key it is
    /// a delta added to the current stock, while name, price and category are
    /// overwritten. Either way the stored quantity never drops below zero.
    pub fn add_or_update(
        &mut self,
        key: K,
        name: impl Into<String>,
        price: Price,
        quantity: i64,
        category: impl Into<String>,
    ) -> Upsert {
        let name = name.into();
        let category = category.into();

        if let Some(item) = self.items.get_mut(&key) {
            item.set_name(name);
            item.set_price(price);
            item.adjust_quantity(quantity);
            let previous = item.replace_category(category);
            self.index.relabel(&key, &previous, item.category());

            tracing::debug!(
                key = %key,
                category = item.category(),
                quantity = item.quantity(),
                "catalog item updated"
            );
            return Upsert::Updated;
        }

        let item = Item::new(key.clone(), name, price, clamp_quantity(0, quantity), category);
        self.index.insert(item.category(), key.clone());
        tracing::debug!(
            key = %key,
            category = item.category(),
            quantity = item.quantity(),
            "catalog item created"
        );
        self.items.insert(key, item);
        Upsert::Created
    }

    /// Adds `delta` to an item's quantity, clamping the result at zero.
    pub fn update_quantity(&mut self, key: &K, delta: i64) -> DomainResult<&Item<K>> {
        let item = self.item_mut(key)?;
        item.adjust_quantity(delta);
        tracing::debug!(key = %key, delta, quantity = item.quantity(), "quantity adjusted");
        Ok(&*item)
    }

    /// Replaces an item's price. The price is not validated.
    pub fn update_price(&mut self, key: &K, price: Price) -> DomainResult<&Item<K>> {
        let item = self.item_mut(key)?;
        item.set_price(price);
        tracing::debug!(key = %key, price = %price, "price updated");
        Ok(&*item)
    }

    /// Removes an item. Returns `false` if the key was absent.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(item) = self.items.remove(key) else {
            tracing::debug!(key = %key, "remove: key not in catalog");
            return false;
        };
        self.index.remove(item.category(), key);
        tracing::debug!(key = %key, category = item.category(), "catalog item removed");
        true
    }

    pub fn get(&self, key: &K) -> Option<&Item<K>> {
        self.items.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, ascending by key.
    pub fn list_all(&self) -> Vec<&Item<K>> {
        let mut out: Vec<_> = self.items.values().collect();
        out.sort_unstable_by(|a, b| a.key().cmp(b.key()));
        out
    }

    /// Items matching every given criterion, ascending by key.
    ///
    /// A category criterion narrows the candidates through the index before any
    /// other predicate runs; an unknown category yields nothing.
    pub fn filter(&self, criteria: &ItemFilter) -> Vec<&Item<K>> {
        let predicate = criteria.predicate();

        if let Some(category) = criteria.category.as_deref() {
            let Some(keys) = self.index.keys_in(category) else {
                tracing::trace!(category, "filter: category not indexed");
                return Vec::new();
            };
            tracing::trace!(category, candidates = keys.len(), "filter: narrowed by category");
            // Index sets are ordered, so the result is already sorted by key.
            return keys
                .iter()
                .filter_map(|key| self.items.get(key))
                .filter(|item| predicate.matches(item))
                .collect();
        }

        tracing::trace!(candidates = self.items.len(), "filter: full scan");
        let mut out: Vec<_> = self
            .items
            .values()
            .filter(|item| predicate.matches(item))
            .collect();
        out.sort_unstable_by(|a, b| a.key().cmp(b.key()));
        out
    }

    /// Category labels with their item counts, ascending by label.
    pub fn categories(&self) -> Vec<(&str, usize)> {
        self.index.categories()
    }

    /// Verifies that the category index mirrors the primary store.
    ///
    /// Every stored key must sit in exactly the set for its current category,
    /// and no label may map to an empty set.
    pub fn check_invariants(&self) -> DomainResult<()> {
        let mut indexed = 0usize;
        for (label, keys) in self.index.iter() {
            if keys.is_empty() {
                return Err(DomainError::invariant(format!(
                    "category {label:?} maps to an empty key set"
                )));
            }
            for key in keys {
                match self.items.get(key) {
                    None => {
                        return Err(DomainError::invariant(format!(
                            "category {label:?} lists unknown key {key}"
                        )));
                    }
                    Some(item) if item.category() != label => {
                        return Err(DomainError::invariant(format!(
                            "key {key} indexed under {label:?} but stored as {:?}",
                            item.category()
                        )));
                    }
                    Some(_) => indexed += 1,
                }
            }
        }
        // Each indexed key matched its own category above, so equal counts
        // means every stored key is indexed exactly once.
        if indexed != self.items.len() {
            return Err(DomainError::invariant(format!(
                "{} items stored but {indexed} indexed",
                self.items.len()
            )));
        }
        Ok(())
    }

    fn item_mut(&mut self, key: &K) -> DomainResult<&mut Item<K>> {
        match self.items.get_mut(key) {
            Some(item) => Ok(item),
            None => {
                tracing::debug!(key = %key, "mutation skipped: key not in catalog");
                Err(DomainError::not_found(key))
            }
        }
    }
}
