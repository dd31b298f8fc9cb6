//! FoodSave Market - headless marketplace core.
//!
//! Implements the two components every FoodSave view is built on:
//!
//! - [`catalog`] - the read-only catalog provider and the pure filter/sort
//!   engine that derives render-ready listing views
//! - [`cart`] - the session-owned cart and favorites store, mirrored to a
//!   durable key-value [`storage`] backend after every mutation
//!
//! The core exposes no transport of its own (no HTTP, no CLI); a view layer
//! constructs a [`cart::CartStore`] once at session start and calls it
//! directly. Execution is single-threaded and synchronous: storage is read
//! exactly once when the store is opened and written before each mutation
//! returns.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod storage;

pub use cart::{CartLine, CartStore};
pub use catalog::{CatalogProvider, FilterConfig, SeedCatalog, SortKey, derive_view};
pub use config::MarketConfig;
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};
