//! Step scripts: captioned batches of catalog commands.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use stockroom_catalog::CatalogCommand;
use stockroom_core::{ItemKey, Price};

/// A captioned batch of commands. The listing is printed after each step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub caption: String,
    pub commands: Vec<CatalogCommand>,
}

impl Step {
    fn new(caption: &str, commands: Vec<CatalogCommand>) -> Self {
        Self {
            caption: caption.to_string(),
            commands,
        }
    }
}

/// Reads a JSON array of steps from `path`.
pub fn load(path: &Path) -> anyhow::Result<Vec<Step>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    let steps = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse script {}", path.display()))?;
    Ok(steps)
}

/// The furniture showroom walkthrough.
pub fn showroom() -> Vec<Step> {
    fn add(key: u64, name: &str, cents: i64, quantity: i64, category: &str) -> CatalogCommand {
        CatalogCommand::AddOrUpdate {
            key: ItemKey::new(key),
            name: name.to_string(),
            price: Price::from_cents(cents),
            quantity,
            category: category.to_string(),
        }
    }

    vec![
        Step::new(
            "Initial inventory",
            vec![
                add(1, "Three-seater Sofa", 189_999, 10, "Lounge"),
                add(2, "Two-seater Sofa", 99_999, 20, "Lounge"),
                add(3, "Desk Chair", 38_999, 25, "Chairs"),
                add(4, "Desk", 46_999, 20, "Tables"),
                add(5, "Bookshelf", 28_999, 15, "Case Goods"),
            ],
        ),
        Step::new(
            "After selling 2 three-seater sofas",
            vec![CatalogCommand::UpdateQuantity {
                key: ItemKey::new(1),
                delta: -2,
            }],
        ),
        Step::new(
            "After adding 5 desk chairs to inventory",
            vec![CatalogCommand::UpdateQuantity {
                key: ItemKey::new(3),
                delta: 5,
            }],
        ),
        Step::new(
            "After updating desk price",
            vec![CatalogCommand::UpdatePrice {
                key: ItemKey::new(4),
                price: Price::from_cents(42_999),
            }],
        ),
        Step::new(
            "After removing bookshelves",
            vec![CatalogCommand::Remove {
                key: ItemKey::new(5),
            }],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn showroom_round_trips_through_a_script_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&showroom()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load(file.path()).unwrap();
        assert_eq!(loaded, showroom());
    }

    #[test]
    fn load_reports_the_path_on_parse_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"caption\": 3}]").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse script"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read script"));
    }
}
