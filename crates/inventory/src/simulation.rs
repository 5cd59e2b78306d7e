//! Multi-day runs over an inventory, recorded day by day.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::updater::GildedRose;

/// The inventory as it stood at the end of `day` (day 0 is the opening stock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub items: Vec<Item>,
}

impl core::fmt::Display for DaySnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "-------- day {} --------", self.day)?;
        writeln!(f, "name, sellIn, quality")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        writeln!(f)
    }
}

/// Snapshot the inventory, then tick `days` times, snapshotting after each.
///
/// Returns `days + 1` snapshots.
pub fn simulate(shop: &mut GildedRose, days: u32) -> Vec<DaySnapshot> {
    tracing::debug!(days, items = shop.items().len(), "starting simulation");

    let mut snapshots = Vec::new();
    snapshots.push(DaySnapshot {
        day: 0,
        items: shop.items().to_vec(),
    });
    for day in 1..=days {
        shop.update_quality();
        snapshots.push(DaySnapshot {
            day,
            items: shop.items().to_vec(),
        });
    }
    snapshots
}
