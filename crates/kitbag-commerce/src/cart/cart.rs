//! Cart and line item types.
//!
//! A [`Cart`] is immutable from the outside: every mutation builds a new
//! item list and passes it through [`Cart::from_items`], which recomputes
//! `total` and `item_count` from scratch. The aggregates are never patched
//! in place.

use crate::catalog::{Product, ProductVariant};
use crate::error::CommerceError;
use crate::ids::{CartItemId, VariantId};
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A line in the cart: one variant and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Line identifier, generated when the line is first added.
    pub id: CartItemId,
    /// Product snapshot taken at add time.
    pub product: Product,
    /// Variant snapshot taken at add time.
    pub variant: ProductVariant,
    /// Quantity. Stored as given; the cart does not clamp it.
    pub quantity: i64,
    /// When the line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Create a new line with a fresh id, stamped now.
    pub fn new(product: Product, variant: ProductVariant, quantity: i64) -> Self {
        Self {
            id: CartItemId::generate(),
            product,
            variant,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Resolved unit price (variant override, else product base price).
    pub fn unit_price(&self) -> Money {
        self.variant.resolve_price(self.product.base_price)
    }

    /// Unit price times quantity, or None on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price().try_multiply(self.quantity)
    }

    /// Re-tag the product and variant prices with `currency`.
    pub fn in_currency(mut self, currency: Currency) -> Self {
        self.product = self.product.in_currency(currency);
        self.variant = self.variant.in_currency(currency);
        self
    }
}

/// Result of a successful add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Inserted(CartItemId),
    /// An existing line for the same variant had its quantity increased.
    Merged(CartItemId),
}

impl AddOutcome {
    /// The id of the affected line.
    pub fn item_id(&self) -> &CartItemId {
        match self {
            AddOutcome::Inserted(id) | AddOutcome::Merged(id) => id,
        }
    }
}

/// A shopping cart with derived aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    total: Money,
    item_count: i64,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart in the given currency.
    pub fn empty(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(currency),
            item_count: 0,
            currency,
        }
    }

    /// Build a cart from an item list, computing the aggregates.
    ///
    /// Fails if a line is priced in another currency or a sum overflows.
    pub fn from_items(items: Vec<CartItem>, currency: Currency) -> Result<Self, CommerceError> {
        let (total, item_count) = compute_aggregates(&items, currency)?;
        Ok(Self {
            items,
            total,
            item_count,
            currency,
        })
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// The currency totals are computed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Get a line by ID.
    pub fn item(&self, item_id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == item_id)
    }

    /// Get the line holding a variant.
    pub fn item_for_variant(&self, variant_id: &VariantId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.variant.id == variant_id)
    }

    /// Return the cart with `quantity` of `product` in `size` added.
    ///
    /// If a line already holds the resolved variant its quantity is
    /// increased; otherwise a new line is appended.
    pub fn with_added(
        &self,
        product: &Product,
        size: &str,
        quantity: i64,
    ) -> Result<(Cart, AddOutcome), CommerceError> {
        let variant =
            product
                .variant_for_size(size)
                .ok_or_else(|| CommerceError::VariantNotFound {
                    product_id: product.id.to_string(),
                    size: size.to_string(),
                })?;

        let mut items = self.items.clone();
        let outcome = match items.iter_mut().find(|i| i.variant.id == variant.id) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CommerceError::Overflow)?;
                AddOutcome::Merged(existing.id.clone())
            }
            None => {
                let item = CartItem::new(product.clone(), variant.clone(), quantity);
                let id = item.id.clone();
                items.push(item);
                AddOutcome::Inserted(id)
            }
        };

        Ok((Cart::from_items(items, self.currency)?, outcome))
    }

    /// Return the cart without the given line, or None if it is absent.
    pub fn without_item(&self, item_id: &CartItemId) -> Result<Option<Cart>, CommerceError> {
        if self.item(item_id).is_none() {
            return Ok(None);
        }
        let items = self
            .items
            .iter()
            .filter(|i| &i.id != item_id)
            .cloned()
            .collect();
        Cart::from_items(items, self.currency).map(Some)
    }

    /// Return the cart with a line's quantity replaced, or None if it is absent.
    ///
    /// The quantity is stored verbatim, including zero and negatives.
    pub fn with_quantity(
        &self,
        item_id: &CartItemId,
        quantity: i64,
    ) -> Result<Option<Cart>, CommerceError> {
        if self.item(item_id).is_none() {
            return Ok(None);
        }
        let items = self
            .items
            .iter()
            .map(|i| {
                if &i.id == item_id {
                    CartItem {
                        quantity,
                        ..i.clone()
                    }
                } else {
                    i.clone()
                }
            })
            .collect();
        Cart::from_items(items, self.currency).map(Some)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty(Currency::default())
    }
}

fn compute_aggregates(items: &[CartItem], currency: Currency) -> Result<(Money, i64), CommerceError> {
    let mut lines = Vec::with_capacity(items.len());
    let mut item_count: i64 = 0;

    for item in items {
        let unit = item.unit_price();
        if unit.currency != currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: unit.currency.code().to_string(),
            });
        }
        lines.push(unit.try_multiply(item.quantity).ok_or(CommerceError::Overflow)?);
        item_count = item_count
            .checked_add(item.quantity)
            .ok_or(CommerceError::Overflow)?;
    }

    let total = Money::try_sum(lines.iter(), currency).ok_or(CommerceError::Overflow)?;
    Ok((total, item_count))
}
