//! Catalog access and listing-view derivation.
//!
//! The catalog is an external, read-only collaborator: the core consumes
//! whatever a [`CatalogProvider`] returns at call time and never mutates it
//! or subscribes to changes. [`derive_view`] is the pure filter/sort engine
//! the browse and listings views recompute on every input change.

mod filter;
mod seed;

pub use filter::{FilterConfig, SortKey, derive_view};
pub use seed::SeedCatalog;

use foodsave_core::{FoodId, FoodItem, Restaurant, RestaurantId};

/// Read-only source of food items and restaurant metadata.
pub trait CatalogProvider: Send + Sync {
    /// All current listings, in the provider's own order.
    fn food_items(&self) -> Vec<FoodItem>;

    /// Look up a single listing by id.
    fn food_item(&self, id: &FoodId) -> Option<FoodItem>;

    /// All restaurants with listings.
    fn restaurants(&self) -> Vec<Restaurant>;

    /// Look up a single restaurant by id.
    fn restaurant(&self, id: &RestaurantId) -> Option<Restaurant>;
}
