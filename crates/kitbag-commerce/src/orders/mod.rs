//! Orders module.
//!
//! Shared order and address shapes. Checkout itself lives outside the
//! client core; these types only describe what the order history shows.

mod address;
mod order;

pub use address::Address;
pub use order::{Order, OrderItem, OrderStatus};
