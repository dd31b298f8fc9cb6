//! The `FoodItem` and `Restaurant` records supplied by a catalog provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Dietary, FoodId, Pricing, RestaurantId};

/// A listed unit of surplus food available for reservation.
///
/// Read-only from the marketplace core's perspective: providers supply it,
/// the filter engine derives views over it, and the cart snapshots it at
/// add-time. Restaurant name is denormalized onto the item so listings render
/// without a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    pub category: Category,
    #[serde(flatten)]
    pub pricing: Pricing,
    /// Distance to the pickup point, in km. Absent when the restaurant has
    /// no location on file; such items fail any distance-bounded filter.
    #[serde(default)]
    pub distance_km: Option<f64>,
    /// Average consumer rating, 0-5.
    pub rating: f32,
    pub expires_at: DateTime<Utc>,
    pub quantity_available: u32,
    #[serde(default)]
    pub dietary: Dietary,
    pub restaurant_id: RestaurantId,
    pub restaurant_name: String,
    /// Pickup windows offered for this listing (e.g. `"5-6 PM"`).
    #[serde(default)]
    pub pickup_slots: Vec<String>,
}

/// A restaurant offering surplus listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    /// Average consumer rating, 0-5.
    pub rating: f32,
    #[serde(default)]
    pub distance_km: Option<f64>,
}
