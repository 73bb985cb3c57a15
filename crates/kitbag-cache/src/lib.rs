//! Type-safe key-value slots for Kitbag.
//!
//! Provides a small JSON layer over any [`KvStore`] backend. Two backends
//! ship with the crate: [`MemoryStore`], a shared in-process map standing in
//! for browser local storage, and [`FileStore`], one file per key on disk.
//!
//! # Example
//!
//! ```rust
//! use kitbag_cache::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Prefs {
//!     currency: String,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! cache.set("prefs", &Prefs { currency: "USD".into() }).unwrap();
//! let prefs: Option<Prefs> = cache.get("prefs").unwrap();
//! assert_eq!(prefs.unwrap().currency, "USD");
//!
//! cache.delete("prefs").unwrap();
//! assert!(!cache.exists("prefs").unwrap());
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KvStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
