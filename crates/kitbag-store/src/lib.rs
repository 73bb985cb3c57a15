//! Client-side cart state store for Kitbag.
//!
//! [`CartStore`] owns the authoritative [`Cart`](kitbag_commerce::cart::Cart)
//! and keeps a JSON snapshot of it in one slot of a key-value backend, so
//! the cart survives a reload. Construct one per client and pass it to
//! whatever drives the UI; there is no global instance.
//!
//! # Example
//!
//! ```rust
//! use kitbag_cache::{Cache, MemoryStore};
//! use kitbag_commerce::prelude::*;
//! use kitbag_store::{CartStore, StoreConfig};
//!
//! let slot = MemoryStore::new();
//! let mut store = CartStore::new(Cache::new(slot.clone()), StoreConfig::default());
//!
//! let mut product = Product::new("Home Jersey", "home-jersey", Money::new(2000, Currency::USD));
//! product.add_variant("S", "HJ-S", None);
//!
//! store.add_to_cart(&product, "S", 2).unwrap();
//! assert_eq!(store.total().amount_cents, 4000);
//!
//! // A second store on the same slot sees the persisted cart.
//! let reloaded = CartStore::open(Cache::new(slot), StoreConfig::default()).unwrap();
//! assert_eq!(reloaded.item_count(), 2);
//! ```

mod config;
mod error;
mod store;

pub use config::{StoreConfig, DEFAULT_SLOT_KEY};
pub use error::CartError;
pub use store::CartStore;
