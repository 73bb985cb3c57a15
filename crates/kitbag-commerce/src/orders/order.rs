//! Order types.

use crate::error::CommerceError;
use crate::ids::{OrderId, OrderItemId, ProductId, UserId};
use crate::money::Money;
use crate::orders::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting processing.
    #[default]
    Pending,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if order can be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }
}

/// A placed order, as shown in order history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Customer user ID (None for guest).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub status: OrderStatus,
    #[serde(with = "crate::money::decimal")]
    pub subtotal: Money,
    #[serde(with = "crate::money::decimal")]
    pub tax_amount: Money,
    #[serde(with = "crate::money::decimal")]
    pub shipping_amount: Money,
    #[serde(with = "crate::money::decimal")]
    pub total_amount: Money,
    pub shipping_address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    pub payment_method: String,
    pub payment_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals in the subtotal's currency.
    pub fn items_total(&self) -> Result<Money, CommerceError> {
        Money::try_sum(self.items.iter().map(|i| &i.total_price), self.subtotal.currency)
            .ok_or(CommerceError::Overflow)
    }

    /// Check that subtotal matches the lines and total adds up.
    pub fn is_consistent(&self) -> bool {
        let Ok(items_total) = self.items_total() else {
            return false;
        };
        let charged = self
            .subtotal
            .try_add(&self.tax_amount)
            .and_then(|m| m.try_add(&self.shipping_amount));
        items_total == self.subtotal && charged == Some(self.total_amount)
    }

    /// Billing address, falling back to the shipping address.
    pub fn billing_address(&self) -> &Address {
        self.billing_address.as_ref().unwrap_or(&self.shipping_address)
    }
}

/// A line item in an order, denormalized at order time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_image: String,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub quantity: i64,
    #[serde(with = "crate::money::decimal")]
    pub unit_price: Money,
    #[serde(with = "crate::money::decimal")]
    pub total_price: Money,
}
