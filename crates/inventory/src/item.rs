use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, lowered, raised};

/// A stocked item: what it is, how many days are left to sell it, and how
/// desirable it currently is.
///
/// The name is fixed at creation. `sell_in` and `quality` only change through
/// an [`UpdatePolicy`](crate::UpdatePolicy) during a daily tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    sell_in: i64,
    quality: i64,
}

impl Item {
    /// Initial values are taken as given, even outside the usual quality range.
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    /// Whether the sell-by date has passed.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }

    pub(crate) fn increase_quality(&mut self, amount: i64) {
        self.quality = raised(self.quality, amount);
    }

    pub(crate) fn decrease_quality(&mut self, amount: i64) {
        self.quality = lowered(self.quality, amount);
    }

    /// Unclamped assignment. Only the backstage-pass expiry reset uses this.
    pub(crate) fn set_quality(&mut self, quality: i64) {
        self.quality = quality;
    }

    pub(crate) fn age_one_day(&mut self) {
        self.sell_in = self.sell_in.saturating_sub(1);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Parses the rendering produced by `Display`: `"<name>, <sell_in>, <quality>"`.
///
/// Names may contain commas, so the two numbers are taken from the right.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.rsplitn(3, ',');
        let quality = fields.next().map(str::trim);
        let sell_in = fields.next().map(str::trim);
        let name = fields.next().map(str::trim);

        let (Some(name), Some(sell_in), Some(quality)) = (name, sell_in, quality) else {
            return Err(DomainError::validation(format!(
                "expected \"<name>, <sell_in>, <quality>\", got {s:?}"
            )));
        };
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let sell_in = sell_in
            .parse()
            .map_err(|_| DomainError::invalid_number("sell_in", sell_in))?;
        let quality = quality
            .parse()
            .map_err(|_| DomainError::invalid_number("quality", quality))?;

        Ok(Self::new(name, sell_in, quality))
    }
}
