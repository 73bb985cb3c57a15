//! Cart store error types.

use kitbag_cache::CacheError;
use kitbag_commerce::CommerceError;
use thiserror::Error;

/// Errors returned by cart store operations.
///
/// Whatever the variant, the in-memory cart and the persisted slot are left
/// exactly as they were before the call.
#[derive(Error, Debug)]
pub enum CartError {
    /// The cart change itself was rejected.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// The snapshot could not be written or removed.
    #[error("Failed to persist cart: {0}")]
    Cache(#[from] CacheError),
}

impl CartError {
    /// Check if the requested size does not exist on the product.
    pub fn is_variant_not_found(&self) -> bool {
        matches!(
            self,
            CartError::Commerce(CommerceError::VariantNotFound { .. })
        )
    }
}
