//! Maps an item name to the policy that updates it.

use crate::item::Item;
use crate::policy::UpdatePolicy;

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Exact, case-sensitive match on the name. Anything unrecognized is `Normal`.
pub fn policy_for_name(name: &str) -> UpdatePolicy {
    match name {
        AGED_BRIE => UpdatePolicy::AgedBrie,
        SULFURAS => UpdatePolicy::Legendary,
        BACKSTAGE_PASSES => UpdatePolicy::BackstagePass,
        _ => UpdatePolicy::Normal,
    }
}

pub fn select_policy(item: &Item) -> UpdatePolicy {
    policy_for_name(item.name())
}
