//! Data-driven catalog mutations.
//!
//! Lets callers describe a batch of changes as plain data (for example a JSON
//! script) and replay it through the typed [`Catalog`] operations.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, ItemKey, Price};

use crate::catalog::{Catalog, Upsert};
use crate::item::CatalogKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CatalogCommand<K = ItemKey> {
    AddOrUpdate {
        key: K,
        name: String,
        price: Price,
        quantity: i64,
        category: String,
    },
    UpdateQuantity {
        key: K,
        delta: i64,
    },
    UpdatePrice {
        key: K,
        price: Price,
    },
    Remove {
        key: K,
    },
}

impl<K> CatalogCommand<K> {
    pub fn key(&self) -> &K {
        match self {
            CatalogCommand::AddOrUpdate { key, .. }
            | CatalogCommand::UpdateQuantity { key, .. }
            | CatalogCommand::UpdatePrice { key, .. }
            | CatalogCommand::Remove { key } => key,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CatalogCommand::AddOrUpdate { .. } => "add_or_update",
            CatalogCommand::UpdateQuantity { .. } => "update_quantity",
            CatalogCommand::UpdatePrice { .. } => "update_price",
            CatalogCommand::Remove { .. } => "remove",
        }
    }
}

/// What executing a [`CatalogCommand`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Created,
    Updated,
    /// Quantity or price of an existing item changed.
    Adjusted,
    Removed,
    NothingRemoved,
}

impl<K: CatalogKey> Catalog<K> {
    /// Applies one command. Only quantity/price updates on absent keys fail.
    pub fn execute(&mut self, command: CatalogCommand<K>) -> DomainResult<CommandOutcome> {
        let outcome = match command {
            CatalogCommand::AddOrUpdate {
                key,
                name,
                price,
                quantity,
                category,
            } => match self.add_or_update(key, name, price, quantity, category) {
                Upsert::Created => CommandOutcome::Created,
                Upsert::Updated => CommandOutcome::Updated,
            },
            CatalogCommand::UpdateQuantity { key, delta } => {
                self.update_quantity(&key, delta)?;
                CommandOutcome::Adjusted
            }
            CatalogCommand::UpdatePrice { key, price } => {
                self.update_price(&key, price)?;
                CommandOutcome::Adjusted
            }
            CatalogCommand::Remove { key } => {
                if self.remove(&key) {
                    CommandOutcome::Removed
                } else {
                    CommandOutcome::NothingRemoved
                }
            }
        };
        Ok(outcome)
    }
}
