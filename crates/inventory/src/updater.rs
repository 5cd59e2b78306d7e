//! Daily tick over a whole inventory.

use crate::item::Item;
use crate::selector::select_policy;

/// Apply one day to every item, in order, in place.
///
/// Each item's update only reads that item, so the result for one item does
/// not depend on the others or on their position.
pub fn tick(items: &mut [Item]) {
    tracing::debug!(items = items.len(), "applying daily update");

    for item in items.iter_mut() {
        let policy = select_policy(item);
        let (sell_in_before, quality_before) = (item.sell_in(), item.quality());

        policy.update(item);

        tracing::trace!(
            name = item.name(),
            %policy,
            sell_in_before,
            quality_before,
            sell_in = item.sell_in(),
            quality = item.quality(),
            "item updated"
        );
    }
}

/// The shop's inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance the whole inventory by one day.
    pub fn update_quality(&mut self) {
        tick(&mut self.items);
    }
}

impl FromIterator<Item> for GildedRose {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{AGED_BRIE, BACKSTAGE_PASSES, SULFURAS};
    use gildedrose_core::{MAX_QUALITY, MIN_QUALITY};
    use proptest::prelude::*;

    fn snapshot(items: &[Item]) -> Vec<(i64, i64)> {
        items.iter().map(|i| (i.sell_in(), i.quality())).collect()
    }

    #[test]
    fn empty_inventory_is_a_no_op() {
        let mut shop = GildedRose::default();
        shop.update_quality();
        assert!(shop.items().is_empty());
    }

    #[test]
    fn tick_keeps_order_and_count() {
        let mut shop = GildedRose::new(vec![
            Item::new("foo", 5, 10),
            Item::new(AGED_BRIE, 2, 0),
            Item::new(SULFURAS, 0, 80),
            Item::new(BACKSTAGE_PASSES, 15, 20),
        ]);
        shop.update_quality();

        let names: Vec<&str> = shop.items().iter().map(Item::name).collect();
        assert_eq!(names, vec!["foo", AGED_BRIE, SULFURAS, BACKSTAGE_PASSES]);
        assert_eq!(
            snapshot(shop.items()),
            vec![(4, 9), (1, 1), (0, 80), (14, 21)]
        );
    }

    #[test]
    fn normal_item_degrades_to_zero_and_stays() {
        let mut shop = GildedRose::new(vec![Item::new("+5 Dexterity Vest", 1, 7)]);
        let mut qualities = Vec::new();
        for _ in 0..6 {
            shop.update_quality();
            qualities.push(shop.items()[0].quality());
        }
        // 1 -> 0: -1; then expired: -2 per day until the floor.
        assert_eq!(qualities, vec![6, 4, 2, 0, 0, 0]);
        assert_eq!(shop.items()[0].sell_in(), -5);
    }

    #[test]
    fn aged_brie_saturates_at_cap() {
        let mut shop = GildedRose::new(vec![Item::new(AGED_BRIE, 2, 0)]);
        for _ in 0..40 {
            shop.update_quality();
        }
        assert_eq!(shop.items()[0].quality(), 50);
        assert_eq!(shop.items()[0].sell_in(), -38);
    }

    #[test]
    fn backstage_pass_full_lifecycle() {
        let mut shop = GildedRose::new(vec![Item::new(BACKSTAGE_PASSES, 12, 10)]);
        let mut qualities = Vec::new();
        for _ in 0..14 {
            shop.update_quality();
            qualities.push(shop.items()[0].quality());
        }
        assert_eq!(
            qualities,
            vec![11, 12, 14, 16, 18, 20, 22, 25, 28, 31, 34, 37, 0, 0]
        );
    }

    #[test]
    fn from_iterator_builds_an_inventory() {
        let shop: GildedRose = (0..3).map(|i| Item::new("foo", i, i)).collect();
        assert_eq!(shop.items().len(), 3);
        assert_eq!(shop.into_items()[2], Item::new("foo", 2, 2));
    }

    fn any_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("+5 Dexterity Vest".to_string()),
            Just(AGED_BRIE.to_string()),
            Just(BACKSTAGE_PASSES.to_string()),
            Just("Conjured Mana Cake".to_string()),
            "[A-Za-z][A-Za-z0-9 ]{0,20}",
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: bounded items that start in range stay in range.
        #[test]
        fn quality_stays_in_range(
            name in any_name(),
            sell_in in -20i64..30,
            quality in MIN_QUALITY..=MAX_QUALITY,
            days in 0usize..60
        ) {
            let mut shop = GildedRose::new(vec![Item::new(name, sell_in, quality)]);
            for _ in 0..days {
                shop.update_quality();
                let q = shop.items()[0].quality();
                prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&q), "quality {} out of range", q);
            }
        }

        /// Property: the legendary item never changes, whatever it starts with.
        #[test]
        fn legendary_is_constant(sell_in in any::<i64>(), quality in any::<i64>(), days in 0usize..30) {
            let mut shop = GildedRose::new(vec![Item::new(SULFURAS, sell_in, quality)]);
            for _ in 0..days {
                shop.update_quality();
            }
            prop_assert_eq!(&shop.items()[0], &Item::new(SULFURAS, sell_in, quality));
        }

        /// Property: non-legendary items lose exactly one sell_in day per tick.
        #[test]
        fn sell_in_decrements_once_per_tick(
            name in any_name(),
            sell_in in -20i64..30,
            days in 0usize..30
        ) {
            let mut shop = GildedRose::new(vec![Item::new(name, sell_in, 10)]);
            for _ in 0..days {
                shop.update_quality();
            }
            prop_assert_eq!(shop.items()[0].sell_in(), sell_in - days as i64);
        }

        /// Property: ticking a batch equals ticking each item on its own.
        #[test]
        fn items_update_independently(
            items in prop::collection::vec(
                (any_name(), -15i64..20, -5i64..60).prop_map(|(n, s, q)| Item::new(n, s, q)),
                0..12
            ),
            days in 1usize..8
        ) {
            let mut batch = items.clone();
            for _ in 0..days {
                tick(&mut batch);
            }

            let separate: Vec<Item> = items
                .into_iter()
                .map(|item| {
                    let mut single = [item];
                    for _ in 0..days {
                        tick(&mut single);
                    }
                    let [item] = single;
                    item
                })
                .collect();

            prop_assert_eq!(batch, separate);
        }
    }
}
