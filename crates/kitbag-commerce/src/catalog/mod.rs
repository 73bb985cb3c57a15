//! Product catalog module.
//!
//! Contains the product, variant and category shapes supplied by the
//! catalog provider, plus listing filters. The cart references products by
//! value and never mutates them.

mod category;
mod filters;
mod product;

pub use category::Category;
pub use filters::{ProductFilters, SortBy};
pub use product::{Product, ProductVariant};
