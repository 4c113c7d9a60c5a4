//! Secondary index: category label → keys currently in that category.

use std::collections::{BTreeSet, HashMap};

use crate::item::CatalogKey;

/// Category index.
///
/// Holds keys only, never item data. A label is present only while at least
/// one key carries it; emptied sets are pruned on the spot.
#[derive(Debug, Clone)]
pub struct CategoryIndex<K> {
    by_category: HashMap<String, BTreeSet<K>>,
}

impl<K> Default for CategoryIndex<K> {
    fn default() -> Self {
        Self {
            by_category: HashMap::new(),
        }
    }
}

impl<K: CatalogKey> CategoryIndex<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` under `category`, creating the set if absent.
    pub fn insert(&mut self, category: &str, key: K) {
        match self.by_category.get_mut(category) {
            Some(keys) => {
                keys.insert(key);
            }
            None => {
                self.by_category
                    .insert(category.to_string(), BTreeSet::from([key]));
            }
        }
    }

    /// Drops `key` from `category`, pruning the label if its set empties.
    ///
    /// Returns whether the key was present.
    pub fn remove(&mut self, category: &str, key: &K) -> bool {
        let Some(keys) = self.by_category.get_mut(category) else {
            return false;
        };
        let removed = keys.remove(key);
        if keys.is_empty() {
            self.by_category.remove(category);
        }
        removed
    }

    /// Moves `key` from `old` to `new`. No-op when the labels are equal.
    pub fn relabel(&mut self, key: &K, old: &str, new: &str) {
        if old == new {
            return;
        }
        self.remove(old, key);
        self.insert(new, key.clone());
    }

    /// Keys under `category`, ascending.
    pub fn keys_in(&self, category: &str) -> Option<&BTreeSet<K>> {
        self.by_category.get(category)
    }

    /// Labels with their member counts, ascending by label.
    pub fn categories(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<_> = self
            .by_category
            .iter()
            .map(|(label, keys)| (label.as_str(), keys.len()))
            .collect();
        out.sort_unstable_by(|a, b| a.0.cmp(b.0));
        out
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<K>)> {
        self.by_category.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}
