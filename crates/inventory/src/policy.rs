//! Per-category daily update rules.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// How an item changes over one day.
///
/// Every variant runs the same three steps in order: adjust quality, age the
/// item by a day, then apply the post-expiry adjustment. Expiry is judged on
/// `sell_in` after that day's decrement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Loses quality every day, twice as fast once expired.
    Normal,
    /// Gains quality every day, twice as fast once expired.
    AgedBrie,
    /// Never sold and never degrades.
    Legendary,
    /// Gains value as the concert approaches, worthless after it.
    BackstagePass,
}

impl UpdatePolicy {
    /// Apply one day to `item`.
    pub fn update(self, item: &mut Item) {
        self.adjust_quality(item);
        self.age(item);
        if item.is_expired() {
            self.adjust_expired(item);
        }
    }

    fn adjust_quality(self, item: &mut Item) {
        match self {
            UpdatePolicy::Normal => item.decrease_quality(1),
            UpdatePolicy::AgedBrie => item.increase_quality(1),
            UpdatePolicy::Legendary => {}
            UpdatePolicy::BackstagePass => {
                // Thresholds use the pre-decrement sell_in; cap after each step.
                item.increase_quality(1);
                if item.sell_in() < 11 {
                    item.increase_quality(1);
                }
                if item.sell_in() < 6 {
                    item.increase_quality(1);
                }
            }
        }
    }

    fn age(self, item: &mut Item) {
        if self != UpdatePolicy::Legendary {
            item.age_one_day();
        }
    }

    fn adjust_expired(self, item: &mut Item) {
        match self {
            UpdatePolicy::Normal => item.decrease_quality(1),
            UpdatePolicy::AgedBrie => item.increase_quality(1),
            UpdatePolicy::Legendary => {}
            UpdatePolicy::BackstagePass => item.set_quality(0),
        }
    }
}

impl core::fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            UpdatePolicy::Normal => "normal",
            UpdatePolicy::AgedBrie => "aged_brie",
            UpdatePolicy::Legendary => "legendary",
            UpdatePolicy::BackstagePass => "backstage_pass",
        };
        f.write_str(s)
    }
}
