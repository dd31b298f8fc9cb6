//! Domain types for the FoodSave marketplace.

pub mod category;
pub mod dietary;
pub mod id;
pub mod item;
pub mod pricing;

pub use category::Category;
pub use dietary::Dietary;
pub use id::{FoodId, RestaurantId};
pub use item::{FoodItem, Restaurant};
pub use pricing::Pricing;
