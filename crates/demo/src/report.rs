//! Listing rendering.

use std::io::Write;

use stockroom_catalog::{CatalogKey, Item};

use crate::config::OutputFormat;

/// Writes a captioned listing.
pub fn write_listing<K>(
    out: &mut impl Write,
    format: OutputFormat,
    caption: &str,
    items: &[&Item<K>],
) -> anyhow::Result<()>
where
    K: CatalogKey + serde::Serialize,
{
    writeln!(out, "{caption}:")?;
    match format {
        OutputFormat::Text => {
            if items.is_empty() {
                writeln!(out, "(none)")?;
            }
            for item in items {
                writeln!(out, "{item}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, items)?;
            writeln!(out)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Writes one `label: count` line per category.
pub fn write_categories(out: &mut impl Write, categories: &[(&str, usize)]) -> anyhow::Result<()> {
    writeln!(out, "Categories:")?;
    for (label, count) in categories {
        writeln!(out, "{label}: {count}")?;
    }
    writeln!(out)?;
    Ok(())
}
