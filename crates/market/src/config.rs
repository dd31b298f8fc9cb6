//! Market configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FOODSAVE_DATA_DIR` - Directory for the file storage backend
//!   (default: `data`)
//! - `FOODSAVE_CART_KEY` - Storage key for cart lines
//!   (default: `foodsave_cart`)
//! - `FOODSAVE_FAVORITES_KEY` - Storage key for favorite food ids
//!   (default: `foodsave_favorites`)
//! - `FOODSAVE_FAV_RESTAURANTS_KEY` - Storage key for favorite restaurant ids
//!   (default: `foodsave_fav_restaurants`)

use std::path::PathBuf;

/// Default storage keys, matching the original browser-storage payloads.
pub mod default_keys {
    /// Key for the serialized cart line collection.
    pub const CART: &str = "foodsave_cart";

    /// Key for the serialized favorite food-id set.
    pub const FAVORITES: &str = "foodsave_favorites";

    /// Key for the serialized favorite restaurant-id set.
    pub const FAVORITE_RESTAURANTS: &str = "foodsave_fav_restaurants";
}

/// The three independent storage keys the store persists under.
#[derive(Debug, Clone)]
pub struct StorageKeys {
    pub cart: String,
    pub favorites: String,
    pub favorite_restaurants: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            cart: default_keys::CART.to_string(),
            favorites: default_keys::FAVORITES.to_string(),
            favorite_restaurants: default_keys::FAVORITE_RESTAURANTS.to_string(),
        }
    }
}

/// Marketplace core configuration.
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Directory the file backend persists into.
    pub data_dir: PathBuf,
    /// Storage keys for the three persisted collections.
    pub keys: StorageKeys,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            keys: StorageKeys::default(),
        }
    }
}

impl MarketConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a default, so loading never fails.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            data_dir: PathBuf::from(get_env_or_default("FOODSAVE_DATA_DIR", "data")),
            keys: StorageKeys {
                cart: get_env_or_default("FOODSAVE_CART_KEY", default_keys::CART),
                favorites: get_env_or_default("FOODSAVE_FAVORITES_KEY", default_keys::FAVORITES),
                favorite_restaurants: get_env_or_default(
                    "FOODSAVE_FAV_RESTAURANTS_KEY",
                    default_keys::FAVORITE_RESTAURANTS,
                ),
            },
        }
    }

    /// Build the file backend this configuration points at.
    #[must_use]
    pub fn file_backend(&self) -> crate::storage::FileBackend {
        crate::storage::FileBackend::new(self.data_dir.clone())
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
