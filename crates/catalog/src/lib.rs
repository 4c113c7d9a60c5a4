//! Catalog domain module.
//!
//! An in-memory item catalog: a primary key → item store, a category → keys
//! index kept in lockstep with it, and a multi-criterion filter that narrows
//! through the index when a category is given. Pure data structure (no IO).

pub mod catalog;
pub mod command;
pub mod filter;
pub mod index;
pub mod item;

pub use catalog::{Catalog, Upsert};
pub use command::{CatalogCommand, CommandOutcome};
pub use filter::ItemFilter;
pub use index::CategoryIndex;
pub use item::{CatalogKey, Item};
