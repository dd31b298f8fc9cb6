//! Dietary flags carried by food items and selected in browse filters.

use serde::{Deserialize, Serialize};

/// Dietary attributes of a food item.
///
/// The same struct doubles as a filter selection: each `true` flag in the
/// selection is a requirement the item must meet. An empty (default)
/// selection imposes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dietary {
    #[serde(default)]
    pub veg: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub dairy_free: bool,
}

impl Dietary {
    /// Whether this item's flags satisfy every flag set in `required`.
    #[must_use]
    pub const fn satisfies(&self, required: &Self) -> bool {
        (!required.veg || self.veg)
            && (!required.vegan || self.vegan)
            && (!required.gluten_free || self.gluten_free)
            && (!required.dairy_free || self.dairy_free)
    }

    /// Whether no flag is set (a selection like this filters nothing).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.veg || self.vegan || self.gluten_free || self.dairy_free)
    }
}
