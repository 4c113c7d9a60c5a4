//! `stockroom-demo`: showroom walkthrough over the catalog.
//!
//! Replays a script of catalog commands, printing the listing after each step,
//! then a category summary and a couple of sample filters.

pub mod config;
pub mod report;
pub mod runner;
pub mod script;

pub use config::{Config, ConfigError, OutputFormat};
pub use runner::run;
pub use script::Step;
