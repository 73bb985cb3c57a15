//! Storefront domain types for Kitbag.
//!
//! This crate holds the shapes the storefront client shares across its
//! layers:
//!
//! - **Catalog**: Products and their size/color variants
//! - **Cart**: Line items and the recomputing cart reducer
//! - **Orders**: Order, order items, addresses
//! - **Users**: Account records and registration payloads
//!
//! # Example
//!
//! ```rust
//! use kitbag_commerce::prelude::*;
//!
//! let mut product = Product::new("Home Jersey 24/25", "home-jersey-24-25", Money::new(2000, Currency::USD));
//! product.add_variant("S", "HJ-S", None);
//! product.add_variant("M", "HJ-M", Some(Money::new(2200, Currency::USD)));
//!
//! let cart = Cart::empty(Currency::USD);
//! let (cart, _outcome) = cart.with_added(&product, "M", 2).unwrap();
//! assert_eq!(cart.total().amount_cents, 4400);
//! assert_eq!(cart.item_count(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod users;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product, ProductFilters, ProductVariant, SortBy};

    // Cart
    pub use crate::cart::{AddOutcome, Cart, CartItem, CartSnapshot};

    // Orders
    pub use crate::orders::{Address, Order, OrderItem, OrderStatus};

    // Users
    pub use crate::users::{RegisterData, User};
}
