//! `gildedrose-cli` — runs the inventory simulation and prints the report.

pub mod config;

use std::io::Write;

use anyhow::Context;

use gildedrose_inventory::{GildedRose, Item, parse_inventory, simulate, standard_inventory};

pub use config::{CommandLine, Config, ReportFormat};

/// Load the configured inventory file, or the standard stock if none is set.
pub fn load_inventory(config: &Config) -> anyhow::Result<Vec<Item>> {
    let Some(path) = &config.inventory else {
        return Ok(standard_inventory());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory {}", path.display()))?;
    let items = parse_inventory(&text)
        .with_context(|| format!("failed to parse inventory {}", path.display()))?;

    tracing::info!(path = %path.display(), items = items.len(), "loaded inventory");
    Ok(items)
}

/// Simulate `config.days` days and write the report to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let items = load_inventory(config)?;
    let item_count = items.len();

    let mut shop = GildedRose::new(items);
    let snapshots = simulate(&mut shop, config.days);

    match config.format {
        ReportFormat::Text => {
            writeln!(out, "OMGHAI!")?;
            for snapshot in &snapshots {
                write!(out, "{snapshot}")?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &snapshots)
                .context("failed to write JSON report")?;
            writeln!(out)?;
        }
    }

    tracing::info!(days = config.days, items = item_count, "simulation finished");
    Ok(())
}
