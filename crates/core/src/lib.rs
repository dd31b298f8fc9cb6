//! FoodSave Core - Shared domain types library.
//!
//! This crate provides the types shared by all FoodSave components:
//! - `market` - headless marketplace core (catalog, cart, favorites)
//! - any view layer built on top of it
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! catalog data. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, pricing, categories, dietary flags, and the
//!   `FoodItem`/`Restaurant` records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
