use std::io::Write;

use stockroom_catalog::{Catalog, ItemFilter};
use stockroom_core::{DomainError, Price};

use crate::config::{Config, OutputFormat};
use crate::report;
use crate::script::{self, Step};

/// Runs the configured script and writes every report to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let steps = match &config.script {
        Some(path) => {
            tracing::info!(script = %path.display(), "loading step script");
            script::load(path)?
        }
        None => script::showroom(),
    };

    let catalog = replay(&steps, config.output, out)?;

    report::write_categories(out, &catalog.categories())?;

    let samples = [
        (
            "Lounge items up to 1000.00",
            ItemFilter::new().category("Lounge").max_price(Price::from_cents(100_000)),
        ),
        (
            "Anything named like \"desk\" with at least 10 in stock",
            ItemFilter::new().name_keyword("desk").min_quantity(10),
        ),
    ];
    for (caption, filter) in &samples {
        report::write_listing(out, config.output, caption, &catalog.filter(filter))?;
    }

    Ok(())
}

/// Applies each step to a fresh catalog, writing the listing after each one.
///
/// Updates against unknown keys are logged and skipped; the step carries on.
pub fn replay(steps: &[Step], output: OutputFormat, out: &mut impl Write) -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::new();

    for step in steps {
        for command in &step.commands {
            let op = command.name();
            match catalog.execute(command.clone()) {
                Ok(outcome) => tracing::debug!(op, key = %command.key(), ?outcome, "command applied"),
                Err(DomainError::NotFound(key)) => {
                    tracing::warn!(op, key = %key, "item not found in catalog; command skipped");
                }
                Err(err) => return Err(err.into()),
            }
        }
        report::write_listing(out, output, &step.caption, &catalog.list_all())?;
    }

    tracing::info!(
        steps = steps.len(),
        items = catalog.len(),
        "script replayed"
    );
    Ok(catalog)
}
