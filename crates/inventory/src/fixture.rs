//! Inventory sources: the standard shop stock and the line-per-item text format.

use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::selector::{AGED_BRIE, BACKSTAGE_PASSES, SULFURAS};

/// The stock the shop opens with.
pub fn standard_inventory() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        // Not a category of its own; degrades like any other item.
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Parse one item per line. Blank lines and `#` comments are skipped.
pub fn parse_inventory(text: &str) -> DomainResult<Vec<Item>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| {
            line.parse::<Item>().map_err(|e| {
                DomainError::validation(format!("line {}: {e}", idx + 1))
            })
        })
        .collect()
}
