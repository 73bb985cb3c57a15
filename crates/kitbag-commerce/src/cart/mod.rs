//! Shopping cart module.
//!
//! Contains the cart, its line items, and the serialized snapshot form.

mod cart;
mod snapshot;

pub use cart::{AddOutcome, Cart, CartItem};
pub use snapshot::CartSnapshot;
