//! Multi-criterion item filter.

use serde::{Deserialize, Serialize};

use stockroom_core::Price;

use crate::item::Item;

/// Filter criteria for catalog queries.
///
/// Every field is optional; the given ones are ANDed together. Bounds are
/// inclusive. An unconstrained filter matches every item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFilter {
    /// Exact category label. Narrows candidates through the category index.
    pub category: Option<String>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub min_quantity: Option<u64>,
    pub max_quantity: Option<u64>,
    /// Case-insensitive substring of the item name.
    pub name_keyword: Option<String>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn min_price(mut self, price: Price) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: Price) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn min_quantity(mut self, quantity: u64) -> Self {
        self.min_quantity = Some(quantity);
        self
    }

    pub fn max_quantity(mut self, quantity: u64) -> Self {
        self.max_quantity = Some(quantity);
        self
    }

    pub fn name_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.name_keyword = Some(keyword.into());
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `item` satisfies every given criterion.
    pub fn matches<K>(&self, item: &Item<K>) -> bool {
        self.predicate().matches(item)
    }

    /// Prepares the criteria for repeated evaluation over a candidate set.
    pub(crate) fn predicate(&self) -> Predicate<'_> {
        Predicate {
            filter: self,
            keyword: self.name_keyword.as_deref().map(str::to_lowercase),
        }
    }
}

/// Criteria with the keyword lowercased once up front.
pub(crate) struct Predicate<'a> {
    filter: &'a ItemFilter,
    keyword: Option<String>,
}

impl Predicate<'_> {
    pub(crate) fn matches<K>(&self, item: &Item<K>) -> bool {
        let f = self.filter;

        if f.category.as_deref().is_some_and(|c| c != item.category()) {
            return false;
        }
        if f.min_price.is_some_and(|p| item.price() < p) {
            return false;
        }
        if f.max_price.is_some_and(|p| item.price() > p) {
            return false;
        }
        if f.min_quantity.is_some_and(|q| item.quantity() < q) {
            return false;
        }
        if f.max_quantity.is_some_and(|q| item.quantity() > q) {
            return false;
        }
        match &self.keyword {
            Some(keyword) => item.name().to_lowercase().contains(keyword.as_str()),
            None => true,
        }
    }
}
