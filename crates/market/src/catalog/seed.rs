//! Built-in demo catalog.
//!
//! An in-memory dataset equivalent in shape to the marketplace's mock data:
//! a handful of restaurants and listings across the four categories. Views
//! and tests run against it without any external data source.

use chrono::{DateTime, Duration, Utc};
use foodsave_core::{
    Category, Dietary, FoodId, FoodItem, Pricing, Restaurant, RestaurantId,
};
use rust_decimal::Decimal;

use super::CatalogProvider;

/// A fixed in-memory catalog.
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    items: Vec<FoodItem>,
    restaurants: Vec<Restaurant>,
}

impl SeedCatalog {
    /// Build the demo dataset. Expiry timestamps are offsets from `now` so
    /// listings are always "about to expire" relative to the session.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        let restaurants = seed_restaurants();
        let items = seed_items(now, &restaurants);
        Self { items, restaurants }
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl CatalogProvider for SeedCatalog {
    fn food_items(&self) -> Vec<FoodItem> {
        self.items.clone()
    }

    fn food_item(&self, id: &FoodId) -> Option<FoodItem> {
        self.items.iter().find(|i| &i.id == id).cloned()
    }

    fn restaurants(&self) -> Vec<Restaurant> {
        self.restaurants.clone()
    }

    fn restaurant(&self, id: &RestaurantId) -> Option<Restaurant> {
        self.restaurants.iter().find(|r| &r.id == id).cloned()
    }
}

fn restaurant(id: &str, name: &str, rating: f32, distance_km: f64) -> Restaurant {
    Restaurant {
        id: RestaurantId::new(id),
        name: name.to_string(),
        rating,
        distance_km: Some(distance_km),
    }
}

fn seed_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant("r1", "Green Leaf Bakery", 4.6, 1.2),
        restaurant("r2", "Spice Route Kitchen", 4.4, 2.8),
        restaurant("r3", "Harvest Table", 4.8, 0.9),
        restaurant("r4", "Amul Corner Dairy", 4.2, 4.5),
        restaurant("r5", "Daily Greens", 4.5, 3.1),
    ]
}

struct Listing {
    id: &'static str,
    name: &'static str,
    category: Category,
    original: i64,
    discounted: i64,
    expires_in_hours: i64,
    rating: f32,
    quantity: u32,
    dietary: Dietary,
    restaurant: &'static str,
    slots: &'static [&'static str],
}

fn seed_items(now: DateTime<Utc>, restaurants: &[Restaurant]) -> Vec<FoodItem> {
    const VEG: Dietary = Dietary {
        veg: true,
        vegan: false,
        gluten_free: false,
        dairy_free: false,
    };
    const VEGAN: Dietary = Dietary {
        veg: true,
        vegan: true,
        gluten_free: false,
        dairy_free: true,
    };
    const NONE: Dietary = Dietary {
        veg: false,
        vegan: false,
        gluten_free: false,
        dairy_free: false,
    };

    let listings = [
        Listing {
            id: "f1",
            name: "Sourdough Loaf",
            category: Category::Bakery,
            original: 120,
            discounted: 40,
            expires_in_hours: 5,
            rating: 4.6,
            quantity: 4,
            dietary: VEG,
            restaurant: "r1",
            slots: &["5-6 PM", "6-7 PM"],
        },
        Listing {
            id: "f2",
            name: "Assorted Croissants (6)",
            category: Category::Bakery,
            original: 240,
            discounted: 90,
            expires_in_hours: 4,
            rating: 4.7,
            quantity: 3,
            dietary: VEG,
            restaurant: "r1",
            slots: &["5-6 PM", "7-8 PM"],
        },
        Listing {
            id: "f3",
            name: "Paneer Tikka Bowl",
            category: Category::PreparedMeals,
            original: 280,
            discounted: 110,
            expires_in_hours: 3,
            rating: 4.4,
            quantity: 6,
            dietary: VEG,
            restaurant: "r2",
            slots: &["6-7 PM", "7-8 PM"],
        },
        Listing {
            id: "f4",
            name: "Chicken Biryani (Full)",
            category: Category::PreparedMeals,
            original: 320,
            discounted: 140,
            expires_in_hours: 2,
            rating: 4.5,
            quantity: 5,
            dietary: NONE,
            restaurant: "r2",
            slots: &["6-7 PM"],
        },
        Listing {
            id: "f5",
            name: "Buddha Bowl",
            category: Category::PreparedMeals,
            original: 300,
            discounted: 120,
            expires_in_hours: 6,
            rating: 4.8,
            quantity: 2,
            dietary: VEGAN,
            restaurant: "r3",
            slots: &["5-6 PM", "6-7 PM", "7-8 PM"],
        },
        Listing {
            id: "f6",
            name: "Seasonal Veggie Crate",
            category: Category::FreshProduce,
            original: 200,
            discounted: 80,
            expires_in_hours: 26,
            rating: 4.5,
            quantity: 8,
            dietary: VEGAN,
            restaurant: "r5",
            slots: &["4-5 PM", "5-6 PM"],
        },
        Listing {
            id: "f7",
            name: "Ripe Mango Box (1kg)",
            category: Category::FreshProduce,
            original: 180,
            discounted: 70,
            expires_in_hours: 20,
            rating: 4.3,
            quantity: 7,
            dietary: VEGAN,
            restaurant: "r5",
            slots: &["4-5 PM"],
        },
        Listing {
            id: "f8",
            name: "Fresh Curd Pot (500g)",
            category: Category::Dairy,
            original: 90,
            discounted: 35,
            expires_in_hours: 12,
            rating: 4.2,
            quantity: 10,
            dietary: VEG,
            restaurant: "r4",
            slots: &["5-6 PM", "6-7 PM"],
        },
        Listing {
            id: "f9",
            name: "Artisan Cheese Selection",
            category: Category::Dairy,
            original: 450,
            discounted: 180,
            expires_in_hours: 30,
            rating: 4.6,
            quantity: 2,
            dietary: VEG,
            restaurant: "r4",
            slots: &["6-7 PM"],
        },
        Listing {
            id: "f10",
            name: "Multigrain Bread Basket",
            category: Category::Bakery,
            original: 160,
            discounted: 55,
            expires_in_hours: 8,
            rating: 4.4,
            quantity: 5,
            dietary: VEGAN,
            restaurant: "r3",
            slots: &["7-8 PM"],
        },
    ];

    listings
        .into_iter()
        .map(|l| {
            let home = restaurants.iter().find(|r| r.id.as_str() == l.restaurant);
            FoodItem {
                id: FoodId::new(l.id),
                name: l.name.to_string(),
                category: l.category,
                pricing: Pricing::new(Decimal::from(l.original), Decimal::from(l.discounted)),
                distance_km: home.and_then(|r| r.distance_km),
                rating: l.rating,
                expires_at: now + Duration::hours(l.expires_in_hours),
                quantity_available: l.quantity,
                dietary: l.dietary,
                restaurant_id: RestaurantId::new(l.restaurant),
                restaurant_name: home.map(|r| r.name.clone()).unwrap_or_default(),
                pickup_slots: l.slots.iter().map(|s| (*s).to_string()).collect(),
            }
        })
        .collect()
}
