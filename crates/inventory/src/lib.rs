//! Inventory domain module.
//!
//! This crate contains the daily update rules for the shop's stock,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod fixture;
pub mod item;
pub mod policy;
pub mod selector;
pub mod simulation;
pub mod updater;

pub use fixture::{parse_inventory, standard_inventory};
pub use item::Item;
pub use policy::UpdatePolicy;
pub use selector::{AGED_BRIE, BACKSTAGE_PASSES, SULFURAS, policy_for_name, select_policy};
pub use simulation::{DaySnapshot, simulate};
pub use updater::{GildedRose, tick};
