//! Product and variant types.

use crate::ids::{ProductId, VariantId};
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the catalog (e.g., a team jersey).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Team the product belongs to.
    pub team: String,
    /// Player name printed on the product, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    /// Sport (e.g., "football").
    pub sport: String,
    /// Manufacturer brand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Base price, used when a variant has no price of its own.
    #[serde(with = "crate::money::decimal")]
    pub base_price: Money,
    /// Sale price shown in listings.
    #[serde(
        default,
        with = "crate::money::decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sale_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care_instructions: Option<String>,
    /// Mean review rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// Number of reviews.
    #[serde(default)]
    pub review_count: u32,
    /// Whether the product is visible in the storefront.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Purchasable configurations, in display order.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Create a new active product with no variants.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, base_price: Money) -> Self {
        let now = Utc::now();
        Self {
            id: ProductId::generate(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            team: String::new(),
            player: None,
            sport: String::new(),
            brand: None,
            base_price,
            sale_price: None,
            material: None,
            care_instructions: None,
            average_rating: None,
            review_count: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
            variants: Vec::new(),
        }
    }

    /// Set the team and sport.
    pub fn with_team(mut self, team: impl Into<String>, sport: impl Into<String>) -> Self {
        self.team = team.into();
        self.sport = sport.into();
        self
    }

    /// Append a variant in the given size and return its id.
    pub fn add_variant(
        &mut self,
        size: impl Into<String>,
        sku: impl Into<String>,
        price: Option<Money>,
    ) -> VariantId {
        let mut variant = ProductVariant::new(self.id.clone(), size, sku);
        variant.price = price;
        let id = variant.id.clone();
        self.variants.push(variant);
        id
    }

    /// Find the first variant whose size matches exactly.
    pub fn variant_for_size(&self, size: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.size == size)
    }

    /// Sizes offered by this product, in variant order.
    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.size.as_str())
    }

    /// Check if the product is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price
            .map(|sale| sale.amount_cents < self.base_price.amount_cents)
            .unwrap_or(false)
    }

    /// Price shown in listings: the sale price while on sale, else the base.
    pub fn listing_price(&self) -> Money {
        match self.sale_price {
            Some(sale) if self.is_on_sale() => sale,
            _ => self.base_price,
        }
    }

    /// Re-tag every price with `currency`, keeping the decimal amounts.
    ///
    /// Catalog JSON carries bare numbers, so a freshly parsed product is in
    /// the default currency until the caller says otherwise.
    pub fn in_currency(mut self, currency: Currency) -> Self {
        self.base_price = self.base_price.in_currency(currency);
        self.sale_price = self.sale_price.map(|m| m.in_currency(currency));
        self.variants = self
            .variants
            .into_iter()
            .map(|v| v.in_currency(currency))
            .collect();
        self
    }
}

/// A product variant (one size/color combination).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Parent product ID.
    pub product_id: ProductId,
    /// Size label (e.g., "M", "XL").
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Stock keeping unit for this variant.
    pub sku: String,
    /// Units on hand.
    #[serde(default)]
    pub stock_quantity: i64,
    /// Variant-specific price override.
    #[serde(
        default,
        with = "crate::money::decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Money>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl ProductVariant {
    /// Create a new variant with no price override and no stock.
    pub fn new(product_id: ProductId, size: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            id: VariantId::generate(),
            product_id,
            size: size.into(),
            color: None,
            sku: sku.into(),
            stock_quantity: 0,
            price: None,
            image_urls: Vec::new(),
        }
    }

    /// Unit price: the variant's own price if set, else the product base price.
    ///
    /// A price that is present but zero is honored. The storefront's
    /// `variant.price || product.basePrice` fell back to the base price for
    /// zero; here only a missing price does.
    pub fn resolve_price(&self, base_price: Money) -> Money {
        self.price.unwrap_or(base_price)
    }

    /// Re-tag the price override with `currency`.
    pub fn in_currency(mut self, currency: Currency) -> Self {
        self.price = self.price.map(|m| m.in_currency(currency));
        self
    }

    /// Check if this variant is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}
