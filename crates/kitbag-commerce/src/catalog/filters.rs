//! Listing filters over an in-memory product list.

use std::cmp::Ordering;

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Listing price, low to high.
    PriceAsc,
    /// Listing price, high to low.
    PriceDesc,
    /// Newest first.
    Newest,
    /// Most reviewed first.
    Popular,
    /// Highest rated first.
    Rating,
}

impl SortBy {
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortBy::PriceAsc => a.listing_price().amount_cents.cmp(&b.listing_price().amount_cents),
            SortBy::PriceDesc => b.listing_price().amount_cents.cmp(&a.listing_price().amount_cents),
            SortBy::Newest => b.created_at.cmp(&a.created_at),
            SortBy::Popular => b.review_count.cmp(&a.review_count),
            SortBy::Rating => {
                let rating = |p: &Product| p.average_rating.unwrap_or(0.0);
                rating(b).partial_cmp(&rating(a)).unwrap_or(Ordering::Equal)
            }
        }
    }
}

/// Product listing filters, as sent by the storefront's filter panel.
///
/// Empty lists and missing values match everything. Prices compare against
/// [`Product::listing_price`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team: Vec<String>,
    /// Sizes; a product matches if any variant has one of them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub size: Vec<String>,
    #[serde(
        default,
        with = "crate::money::decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_price: Option<Money>,
    #[serde(
        default,
        with = "crate::money::decimal::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brand: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl ProductFilters {
    /// Check whether a product passes every filter. Inactive products never do.
    pub fn matches(&self, product: &Product) -> bool {
        if !product.is_active {
            return false;
        }
        if self.sport.as_ref().is_some_and(|sport| *sport != product.sport) {
            return false;
        }
        if !self.team.is_empty() && !self.team.contains(&product.team) {
            return false;
        }
        if !self.size.is_empty() && !product.sizes().any(|s| self.size.iter().any(|want| want == s)) {
            return false;
        }
        if !self.brand.is_empty()
            && !product.brand.as_ref().is_some_and(|brand| self.brand.contains(brand))
        {
            return false;
        }

        let price = product.listing_price();
        let cents = |bound: Money| bound.in_currency(price.currency).amount_cents;
        if self.min_price.is_some_and(|min| price.amount_cents < cents(min)) {
            return false;
        }
        if self.max_price.is_some_and(|max| price.amount_cents > cents(max)) {
            return false;
        }
        true
    }

    /// Matching products, in `sort_by` order (catalog order when unset).
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut matched: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        if let Some(sort_by) = self.sort_by {
            matched.sort_by(|a, b| sort_by.compare(a, b));
        }
        matched
    }
}
