//! `gildedrose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod quality;

pub use error::{DomainError, DomainResult};
pub use quality::{MAX_QUALITY, MIN_QUALITY, lowered, raised};
