//! Category types.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A storefront category, one per sport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Sport the category groups (matches [`Product::sport`](super::Product::sport)).
    pub sport: String,
}

impl Category {
    /// Create a category for a sport.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, sport: impl Into<String>) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            slug: slug.into(),
            sport: sport.into(),
        }
    }

    /// Check if a product belongs here.
    pub fn contains(&self, product: &super::Product) -> bool {
        product.sport == self.sport
    }
}
