//! Serialized cart form written to the durable slot.

use crate::cart::{Cart, CartItem};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Persisted copy of a cart: `{ items, total, itemCount }`.
///
/// `total` and every price inside the items are plain numbers, as the
/// storefront reads them. The aggregates are written for readers that want
/// them without recomputing, but [`CartSnapshot::into_cart`] ignores them
/// and rebuilds from the items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    #[serde(with = "crate::money::decimal")]
    pub total: Money,
    pub item_count: i64,
}

impl CartSnapshot {
    /// Re-tag every amount with `currency`.
    pub fn in_currency(self, currency: Currency) -> Self {
        Self {
            items: self
                .items
                .into_iter()
                .map(|item| item.in_currency(currency))
                .collect(),
            total: self.total.in_currency(currency),
            item_count: self.item_count,
        }
    }

    /// Rebuild a cart in `currency` from the stored items.
    pub fn into_cart(self, currency: Currency) -> Result<Cart, CommerceError> {
        Cart::from_items(self.in_currency(currency).items, currency)
    }

    /// Check whether the stored aggregates match a cart.
    pub fn matches(&self, cart: &Cart) -> bool {
        self.total == cart.total() && self.item_count == cart.item_count()
    }
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            total: cart.total(),
            item_count: cart.item_count(),
        }
    }
}
