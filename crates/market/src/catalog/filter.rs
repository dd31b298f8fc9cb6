//! The listing filter/sort engine.
//!
//! Pure derivation: `(items, config) -> ordered filtered view`. No state,
//! no side effects, no errors — an item that cannot satisfy a predicate
//! (e.g. it has no distance while a distance ceiling is active) simply
//! drops out of the view.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use foodsave_core::{Category, Dietary, FoodId, FoodItem};
use rust_decimal::Decimal;

/// Sort order for a derived listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Preserve the catalog's own order ("recommended").
    #[default]
    Recommended,
    /// Ascending by expiry timestamp.
    SoonestExpiry,
    /// Ascending by discounted price.
    PriceAscending,
    /// Descending by discounted price.
    PriceDescending,
    /// Ascending by distance; items without a distance sort last.
    NearestFirst,
    /// Descending by advertised discount percentage.
    HighestDiscount,
}

/// Filter and sort configuration owned by the calling view.
///
/// Every field defaults to "no constraint", so a default config derives the
/// input unchanged. Values are not validated: an impossible ceiling just
/// yields an empty view.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Case-insensitive substring matched against item name or restaurant
    /// name. Empty matches everything.
    pub search: String,
    /// Required category; `None` is the "all" sentinel.
    pub category: Option<Category>,
    /// Selected dietary flags, ANDed. The empty selection imposes nothing.
    pub dietary: Dietary,
    /// Inclusive ceiling on the discounted price.
    pub max_price: Option<Decimal>,
    /// Inclusive ceiling on the distance, in km.
    pub max_distance_km: Option<f64>,
    /// Sort applied after filtering.
    pub sort: SortKey,
    /// "Favorites only": when `Some`, the item id must be a member. The set
    /// is a snapshot read from the cart/favorites store, keeping this
    /// engine free of cross-component state.
    pub favorites: Option<BTreeSet<FoodId>>,
}

/// Derive the render-ready view of `items` under `config`.
///
/// Filtering is conjunctive, in a fixed order (favorites, search, category,
/// dietary, price, distance); the order does not change the result set.
/// Sorting is stable, so ties keep their relative input order. Calling twice
/// with equal inputs yields equal views.
#[must_use]
pub fn derive_view(items: &[FoodItem], config: &FilterConfig) -> Vec<FoodItem> {
    let search = config.search.trim().to_lowercase();

    let mut view: Vec<FoodItem> = items
        .iter()
        .filter(|item| matches(item, config, &search))
        .cloned()
        .collect();

    match config.sort {
        SortKey::Recommended => {}
        SortKey::SoonestExpiry => view.sort_by(|a, b| a.expires_at.cmp(&b.expires_at)),
        SortKey::PriceAscending => {
            view.sort_by(|a, b| a.pricing.discounted.cmp(&b.pricing.discounted));
        }
        SortKey::PriceDescending => {
            view.sort_by(|a, b| b.pricing.discounted.cmp(&a.pricing.discounted));
        }
        SortKey::NearestFirst => view.sort_by(|a, b| cmp_distance(a, b)),
        SortKey::HighestDiscount => {
            view.sort_by(|a, b| b.pricing.discount_percent.cmp(&a.pricing.discount_percent));
        }
    }

    view
}

fn matches(item: &FoodItem, config: &FilterConfig, search: &str) -> bool {
    if let Some(favorites) = &config.favorites
        && !favorites.contains(&item.id)
    {
        return false;
    }

    if !search.is_empty()
        && !item.name.to_lowercase().contains(search)
        && !item.restaurant_name.to_lowercase().contains(search)
    {
        return false;
    }

    if let Some(category) = config.category
        && item.category != category
    {
        return false;
    }

    if !item.dietary.satisfies(&config.dietary) {
        return false;
    }

    if let Some(max_price) = config.max_price
        && item.pricing.discounted > max_price
    {
        return false;
    }

    if let Some(max_distance) = config.max_distance_km {
        // An item without a distance cannot prove it is in range.
        match item.distance_km {
            Some(distance) if distance <= max_distance => {}
            _ => return false,
        }
    }

    true
}

/// Nearest-first ordering; unknown distances sort after every known one.
fn cmp_distance(a: &FoodItem, b: &FoodItem) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
