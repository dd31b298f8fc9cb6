//! The session-owned cart and favorites store.
//!
//! One `CartStore` is constructed per session and injected into every view
//! that needs it; it is never ambient global state. Opening the store reads
//! the three storage keys once, synchronously, so the store is ready the
//! moment `open` returns. Every mutation serializes the affected collection
//! back to its key before returning.
//!
//! Storage failures never take the session down: in-memory state stays
//! authoritative and the failure is logged.

use std::collections::BTreeSet;
use std::sync::Arc;

use foodsave_core::{FoodId, FoodItem, RestaurantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::catalog::CatalogProvider;
use crate::config::StorageKeys;
use crate::storage::StorageBackend;

/// One entry in a user's in-progress selection.
///
/// Carries a denormalized snapshot of the catalog item taken at add-time
/// (copy-on-add), so the cart still displays correctly if the catalog entry
/// later disappears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub food_id: FoodId,
    /// Always >= 1 while the line exists.
    pub quantity: u32,
    /// Chosen pickup window, drawn from the snapshot's offered slots.
    pub pickup_slot: String,
    /// Add-time snapshot of the catalog item.
    pub food: FoodItem,
}

/// Session state for cart lines and the two favorite sets.
pub struct CartStore {
    catalog: Arc<dyn CatalogProvider>,
    backend: Box<dyn StorageBackend>,
    keys: StorageKeys,
    lines: Vec<CartLine>,
    favorites: BTreeSet<FoodId>,
    favorite_restaurants: BTreeSet<RestaurantId>,
}

impl CartStore {
    /// Open the store, rehydrating all three collections from `backend`.
    ///
    /// A missing key starts the collection empty; an unparseable payload is
    /// discarded with a warning (there is no schema version tag to migrate
    /// by). Neither is an error.
    #[must_use]
    pub fn open(
        catalog: Arc<dyn CatalogProvider>,
        backend: Box<dyn StorageBackend>,
        keys: StorageKeys,
    ) -> Self {
        let lines = rehydrate(backend.as_ref(), &keys.cart);
        let favorites = rehydrate(backend.as_ref(), &keys.favorites);
        let favorite_restaurants = rehydrate(backend.as_ref(), &keys.favorite_restaurants);

        Self {
            catalog,
            backend,
            keys,
            lines,
            favorites,
            favorite_restaurants,
        }
    }

    /// Open a store with in-memory storage and default keys.
    ///
    /// Nothing survives the session; useful for tests and logged-out flows.
    #[must_use]
    pub fn in_memory(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self::open(
            catalog,
            Box::new(crate::storage::MemoryBackend::new()),
            StorageKeys::default(),
        )
    }

    // =========================================================================
    // Cart mutations
    // =========================================================================

    /// Add `quantity` of a catalog item to the cart.
    ///
    /// Creates a line (snapshotting the item from the catalog at call time)
    /// or increments the existing one; the pickup slot is only written at
    /// creation. Silently no-ops when the catalog has no such id, since a
    /// line without an item would be meaningless.
    pub fn add_to_cart(&mut self, id: &FoodId, quantity: u32, pickup_slot: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.food_id == id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            let Some(food) = self.catalog.food_item(id) else {
                debug!(%id, "add_to_cart ignored: item not in catalog");
                return;
            };
            self.lines.push(CartLine {
                food_id: id.clone(),
                quantity: quantity.max(1),
                pickup_slot: pickup_slot.to_string(),
                food,
            });
        }
        self.persist_cart();
    }

    /// Overwrite a line's quantity; a quantity below 1 removes the line.
    pub fn update_quantity(&mut self, id: &FoodId, quantity: u32) {
        if quantity < 1 {
            self.remove_from_cart(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.food_id == id) {
            line.quantity = quantity;
        }
        self.persist_cart();
    }

    /// Remove a line unconditionally. Removing an absent line is a no-op.
    pub fn remove_from_cart(&mut self, id: &FoodId) {
        self.lines.retain(|l| &l.food_id != id);
        self.persist_cart();
    }

    /// Change a line's pickup slot without touching its quantity.
    /// No-op when the line is absent.
    pub fn update_pickup_slot(&mut self, id: &FoodId, pickup_slot: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.food_id == id) {
            line.pickup_slot = pickup_slot.to_string();
        }
        self.persist_cart();
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.persist_cart();
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Flip an item's favorite membership.
    pub fn toggle_favorite(&mut self, id: &FoodId) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.clone());
        }
        self.persist(&self.keys.favorites, &self.favorites);
    }

    /// Flip a restaurant's favorite membership.
    pub fn toggle_favorite_restaurant(&mut self, id: &RestaurantId) {
        if !self.favorite_restaurants.remove(id) {
            self.favorite_restaurants.insert(id.clone());
        }
        self.persist(
            &self.keys.favorite_restaurants,
            &self.favorite_restaurants,
        );
    }

    // =========================================================================
    // Reads (computed fresh on each access)
    // =========================================================================

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of snapshot discounted price x quantity over all lines.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.food.pricing.discounted * Decimal::from(l.quantity))
            .sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Whether the item is currently a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: &FoodId) -> bool {
        self.favorites.contains(id)
    }

    /// Whether the restaurant is currently a favorite.
    #[must_use]
    pub fn is_favorite_restaurant(&self, id: &RestaurantId) -> bool {
        self.favorite_restaurants.contains(id)
    }

    /// Snapshot of the favorite food ids (e.g. for a favorites-only filter).
    #[must_use]
    pub fn favorites(&self) -> &BTreeSet<FoodId> {
        &self.favorites
    }

    /// Snapshot of the favorite restaurant ids.
    #[must_use]
    pub fn favorite_restaurants(&self) -> &BTreeSet<RestaurantId> {
        &self.favorite_restaurants
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_cart(&self) {
        self.persist(&self.keys.cart, &self.lines);
    }

    /// Mirror one collection to its storage key. In-memory state stays
    /// authoritative when the write fails.
    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize collection; skipping persist");
                return;
            }
        };
        if let Err(e) = self.backend.write(key, &payload) {
            warn!(key, error = %e, "storage write failed; in-memory state kept");
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines.len())
            .field("favorites", &self.favorites.len())
            .field("favorite_restaurants", &self.favorite_restaurants.len())
            .finish_non_exhaustive()
    }
}

/// Read and parse one collection; anything short of a clean parse starts
/// the collection empty.
fn rehydrate<T: DeserializeOwned + Default>(backend: &dyn StorageBackend, key: &str) -> T {
    let payload = match backend.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!(key, error = %e, "storage read failed; starting empty");
            return T::default();
        }
    };
    match serde_json::from_str(&payload) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "discarding unparseable payload; starting empty");
            T::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::SeedCatalog;
    use crate::storage::MemoryBackend;

    fn store() -> CartStore {
        CartStore::in_memory(Arc::new(SeedCatalog::default()))
    }

    fn f(id: &str) -> FoodId {
        FoodId::new(id)
    }

    #[test]
    fn test_add_to_cart_merges_lines() {
        let mut store = store();
        store.add_to_cart(&f("f1"), 1, "5-6 PM");
        store.add_to_cart(&f("f1"), 2, "6-7 PM");
        assert_eq!(store.lines().len(), 1);
        let line = store.lines().first().unwrap();
        assert_eq!(line.quantity, 3);
        // Slot is only written at creation.
        assert_eq!(line.pickup_slot, "5-6 PM");
        assert_eq!(store.cart_count(), 3);
    }

    #[test]
    fn test_add_unknown_item_is_a_silent_noop() {
        let mut store = store();
        store.add_to_cart(&f("ghost"), 1, "5-6 PM");
        assert!(store.lines().is_empty());
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_the_line() {
        let mut store = store();
        store.add_to_cart(&f("f1"), 2, "5-6 PM");
        store.add_to_cart(&f("f3"), 1, "6-7 PM");
        store.update_quantity(&f("f1"), 0);
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.cart_count(), 1);
    }

    #[test]
    fn test_update_quantity_overwrites_in_place() {
        let mut store = store();
        store.add_to_cart(&f("f1"), 2, "5-6 PM");
        store.update_quantity(&f("f1"), 7);
        assert_eq!(store.lines().first().unwrap().quantity, 7);
    }

    #[test]
    fn test_remove_on_empty_cart_is_a_noop() {
        let mut store = store();
        store.remove_from_cart(&f("f1"));
        assert!(store.lines().is_empty());
    }

    #[test]
    fn test_update_pickup_slot_leaves_quantity_alone() {
        let mut store = store();
        store.add_to_cart(&f("f5"), 2, "5-6 PM");
        store.update_pickup_slot(&f("f5"), "7-8 PM");
        let line = store.lines().first().unwrap();
        assert_eq!(line.pickup_slot, "7-8 PM");
        assert_eq!(line.quantity, 2);
        // Absent line: nothing happens.
        store.update_pickup_slot(&f("ghost"), "7-8 PM");
        assert_eq!(store.lines().len(), 1);
    }

    #[test]
    fn test_clear_cart() {
        let mut store = store();
        store.add_to_cart(&f("f1"), 1, "5-6 PM");
        store.add_to_cart(&f("f3"), 2, "6-7 PM");
        store.clear_cart();
        assert!(store.lines().is_empty());
        assert_eq!(store.cart_total(), Decimal::ZERO);
    }

    #[test]
    fn test_cart_total_uses_snapshot_prices() {
        let mut store = store();
        store.add_to_cart(&f("f1"), 2, "5-6 PM"); // 40 each
        store.add_to_cart(&f("f8"), 1, "5-6 PM"); // 35
        assert_eq!(store.cart_total(), Decimal::from(115));
    }

    #[test]
    fn test_toggle_favorite_is_an_involution() {
        let mut store = store();
        assert!(!store.is_favorite(&f("f1")));
        store.toggle_favorite(&f("f1"));
        assert!(store.is_favorite(&f("f1")));
        store.toggle_favorite(&f("f1"));
        assert!(!store.is_favorite(&f("f1")));
    }

    #[test]
    fn test_toggle_favorite_restaurant() {
        let mut store = store();
        let r = RestaurantId::new("r2");
        store.toggle_favorite_restaurant(&r);
        assert!(store.is_favorite_restaurant(&r));
        assert_eq!(store.favorite_restaurants().len(), 1);
    }

    #[test]
    fn test_reload_restores_state_from_storage() {
        let catalog: Arc<dyn CatalogProvider> = Arc::new(SeedCatalog::default());
        let backend = Arc::new(MemoryBackend::new());

        let mut store = CartStore::open(
            Arc::clone(&catalog),
            Box::new(Arc::clone(&backend)),
            StorageKeys::default(),
        );
        store.add_to_cart(&f("f1"), 2, "5-6 PM");
        store.toggle_favorite(&f("f3"));
        store.toggle_favorite_restaurant(&RestaurantId::new("r1"));
        let total = store.cart_total();
        drop(store);

        let reopened = CartStore::open(catalog, Box::new(backend), StorageKeys::default());
        assert_eq!(reopened.cart_count(), 2);
        assert_eq!(reopened.cart_total(), total);
        assert!(reopened.is_favorite(&f("f3")));
        assert!(reopened.is_favorite_restaurant(&RestaurantId::new("r1")));
    }

    #[test]
    fn test_snapshot_survives_catalog_disappearance() {
        let catalog: Arc<dyn CatalogProvider> = Arc::new(SeedCatalog::default());
        let backend = Arc::new(MemoryBackend::new());
        let mut store = CartStore::open(
            catalog,
            Box::new(Arc::clone(&backend)),
            StorageKeys::default(),
        );
        store.add_to_cart(&f("f1"), 1, "5-6 PM");
        drop(store);

        // Reopen against an empty catalog: the line still renders from its
        // add-time snapshot.
        #[derive(Debug)]
        struct EmptyCatalog;
        impl CatalogProvider for EmptyCatalog {
            fn food_items(&self) -> Vec<FoodItem> {
                Vec::new()
            }
            fn food_item(&self, _: &FoodId) -> Option<FoodItem> {
                None
            }
            fn restaurants(&self) -> Vec<foodsave_core::Restaurant> {
                Vec::new()
            }
            fn restaurant(&self, _: &RestaurantId) -> Option<foodsave_core::Restaurant> {
                None
            }
        }

        let reopened = CartStore::open(
            Arc::new(EmptyCatalog),
            Box::new(backend),
            StorageKeys::default(),
        );
        let line = reopened.lines().first().unwrap();
        assert_eq!(line.food.name, "Sourdough Loaf");
        assert_eq!(reopened.cart_total(), Decimal::from(40));
    }

    #[test]
    fn test_corrupt_payload_starts_empty() {
        let backend = Arc::new(MemoryBackend::new());
        backend.write("foodsave_cart", "not json {").unwrap();
        backend.write("foodsave_favorites", "[\"f1\"]").unwrap();

        let store = CartStore::open(
            Arc::new(SeedCatalog::default()),
            Box::new(backend),
            StorageKeys::default(),
        );
        // Corrupt cart is discarded, parseable favorites survive.
        assert!(store.lines().is_empty());
        assert!(store.is_favorite(&f("f1")));
    }

    #[test]
    fn test_cart_line_round_trip() {
        let catalog = SeedCatalog::default();
        let line = CartLine {
            food_id: f("f1"),
            quantity: 2,
            pickup_slot: "5-6 PM".to_string(),
            food: catalog.food_item(&f("f1")).unwrap(),
        };
        let json = serde_json::to_string(&vec![line.clone()]).unwrap();
        let back: Vec<CartLine> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![line]);
    }
}
