//! The cart store.

use kitbag_cache::{Cache, CacheError, KvStore};
use kitbag_commerce::cart::{AddOutcome, Cart, CartItem, CartSnapshot};
use kitbag_commerce::catalog::Product;
use kitbag_commerce::ids::{CartItemId, VariantId};
use kitbag_commerce::{CommerceError, Money};

use crate::{CartError, StoreConfig};

/// Authoritative cart state plus its durable snapshot.
///
/// Every mutation builds the next [`Cart`] (aggregates recomputed from the
/// items), writes its snapshot to the slot, and only then replaces the
/// in-memory cart. A failed call changes neither.
#[derive(Debug)]
pub struct CartStore<S> {
    cache: Cache<S>,
    config: StoreConfig,
    cart: Cart,
}

impl<S: KvStore> CartStore<S> {
    /// Create a store with an empty cart. The slot is not read or written.
    pub fn new(cache: Cache<S>, config: StoreConfig) -> Self {
        let cart = Cart::empty(config.currency);
        Self {
            cache,
            config,
            cart,
        }
    }

    /// Create a store from whatever the slot holds.
    ///
    /// An absent slot gives an empty cart. A snapshot that cannot be
    /// decoded or priced is logged and treated as absent. Backend read
    /// failures are returned.
    pub fn open(cache: Cache<S>, config: StoreConfig) -> Result<Self, CartError> {
        let cart = match cache.get::<CartSnapshot>(&config.slot_key) {
            Ok(Some(snapshot)) => restore(snapshot, &config),
            Ok(None) => Cart::empty(config.currency),
            Err(CacheError::SerializeError(e)) => {
                tracing::warn!(slot = %config.slot_key, error = %e, "unreadable cart snapshot, starting empty");
                Cart::empty(config.currency)
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            slot = %config.slot_key,
            lines = cart.len(),
            item_count = cart.item_count(),
            "cart store opened"
        );
        Ok(Self {
            cache,
            config,
            cart,
        })
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current cart total.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Current sum of quantities.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Get a line by ID.
    pub fn item(&self, item_id: &CartItemId) -> Option<&CartItem> {
        self.cart.item(item_id)
    }

    /// Get the line holding a variant.
    pub fn item_for_variant(&self, variant_id: &VariantId) -> Option<&CartItem> {
        self.cart.item_for_variant(variant_id)
    }

    /// Store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The cache holding the snapshot slot.
    pub fn cache(&self) -> &Cache<S> {
        &self.cache
    }

    /// Tear the store down into its cart and cache. The slot keeps the
    /// last written snapshot.
    pub fn into_parts(self) -> (Cart, Cache<S>) {
        (self.cart, self.cache)
    }

    /// Add `quantity` of `product` in `size`.
    ///
    /// The variant is resolved by exact size match. If the product has no
    /// such size nothing changes, a warning is logged, and
    /// [`CommerceError::VariantNotFound`] is returned. Adding a variant that
    /// already has a line increases that line's quantity.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        size: &str,
        quantity: i64,
    ) -> Result<AddOutcome, CartError> {
        let (next, outcome) = match self.cart.with_added(product, size, quantity) {
            Ok(result) => result,
            Err(e @ CommerceError::VariantNotFound { .. }) => {
                tracing::warn!(
                    product_id = %product.id,
                    size,
                    "variant not found, cart unchanged"
                );
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        self.commit(next)?;
        tracing::debug!(
            item_id = %outcome.item_id(),
            merged = matches!(outcome, AddOutcome::Merged(_)),
            quantity,
            "added to cart"
        );
        Ok(outcome)
    }

    /// Remove a line. Returns `false` (and writes nothing) if it is absent.
    pub fn remove_from_cart(&mut self, item_id: &CartItemId) -> Result<bool, CartError> {
        let Some(next) = self.cart.without_item(item_id)? else {
            return Ok(false);
        };
        self.commit(next)?;
        tracing::debug!(%item_id, "removed from cart");
        Ok(true)
    }

    /// Set a line's quantity verbatim. Returns `false` (and writes nothing)
    /// if the line is absent.
    ///
    /// Zero and negative quantities are stored as given; the line stays.
    pub fn update_quantity(
        &mut self,
        item_id: &CartItemId,
        quantity: i64,
    ) -> Result<bool, CartError> {
        let Some(next) = self.cart.with_quantity(item_id, quantity)? else {
            return Ok(false);
        };
        self.commit(next)?;
        tracing::debug!(%item_id, quantity, "quantity updated");
        Ok(true)
    }

    /// Empty the cart and delete the slot.
    pub fn clear_cart(&mut self) -> Result<(), CartError> {
        self.cache.delete(&self.config.slot_key)?;
        self.cart = Cart::empty(self.config.currency);
        tracing::debug!(slot = %self.config.slot_key, "cart cleared");
        Ok(())
    }

    fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        self.cache
            .set(&self.config.slot_key, &CartSnapshot::from(&next))?;
        self.cart = next;
        tracing::trace!(
            total = %self.cart.total(),
            item_count = self.cart.item_count(),
            "cart snapshot written"
        );
        Ok(())
    }
}

fn restore(snapshot: CartSnapshot, config: &StoreConfig) -> Cart {
    let snapshot = snapshot.in_currency(config.currency);
    let stored = snapshot.clone();
    match snapshot.into_cart(config.currency) {
        Ok(cart) => {
            if !stored.matches(&cart) {
                tracing::warn!(
                    stored_total = %stored.total,
                    stored_item_count = stored.item_count,
                    total = %cart.total(),
                    item_count = cart.item_count(),
                    "stored cart aggregates disagree with items, recomputed"
                );
            }
            cart
        }
        Err(e) => {
            tracing::warn!(slot = %config.slot_key, error = %e, "cart snapshot rejected, starting empty");
            Cart::empty(config.currency)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitbag_cache::MemoryStore;
    use kitbag_commerce::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn jersey() -> Product {
        let mut product = Product::new("Third Jersey", "third-jersey", usd(2000));
        product.add_variant("S", "TJ-S", None);
        product.add_variant("M", "TJ-M", Some(usd(2200)));
        product
    }

    fn store() -> (CartStore<MemoryStore>, MemoryStore) {
        let slot = MemoryStore::new();
        (
            CartStore::new(Cache::new(slot.clone()), StoreConfig::default()),
            slot,
        )
    }

    #[test]
    fn test_new_store_is_empty_and_writes_nothing() {
        let (store, slot) = store();
        assert!(store.is_empty());
        assert!(store.total().is_zero());
        assert!(slot.is_empty());
    }

    #[test]
    fn test_add_writes_snapshot() {
        let (mut store, slot) = store();
        store.add_to_cart(&jersey(), "M", 2).unwrap();

        let snapshot: CartSnapshot = Cache::new(slot).get("cart").unwrap().unwrap();
        assert_eq!(snapshot.item_count, 2);
        assert_eq!(snapshot.total, usd(4400));
        assert_eq!(snapshot.items, store.cart().items());
    }

    #[test]
    fn test_missing_variant_leaves_everything_alone() {
        let (mut store, slot) = store();
        let err = store.add_to_cart(&jersey(), "XL", 1).unwrap_err();
        assert!(err.is_variant_not_found());
        assert!(store.is_empty());
        assert!(slot.is_empty());
    }

    #[test]
    fn test_unknown_ids_do_not_write() {
        let (mut store, slot) = store();
        let missing = CartItemId::new("cart_missing");
        assert!(!store.remove_from_cart(&missing).unwrap());
        assert!(!store.update_quantity(&missing, 3).unwrap());
        assert!(slot.is_empty());
    }

    #[test]
    fn test_clear_deletes_slot() {
        let (mut store, slot) = store();
        store.add_to_cart(&jersey(), "S", 1).unwrap();
        assert!(!slot.is_empty());

        store.clear_cart().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.item_count(), 0);
        assert!(!slot.exists("cart").unwrap());
    }

    #[test]
    fn test_custom_slot_key() {
        let slot = MemoryStore::new();
        let config = StoreConfig::default().with_slot_key("kitbag:cart");
        let mut store = CartStore::new(Cache::new(slot.clone()), config);
        store.add_to_cart(&jersey(), "S", 1).unwrap();
        assert_eq!(slot.keys().unwrap(), vec!["kitbag:cart".to_string()]);
    }

    #[test]
    fn test_open_recomputes_stale_aggregates() {
        let (mut store, slot) = store();
        store.add_to_cart(&jersey(), "S", 2).unwrap();

        let cache = Cache::new(slot.clone());
        let mut snapshot: CartSnapshot = cache.get("cart").unwrap().unwrap();
        snapshot.total = usd(1);
        snapshot.item_count = 42;
        cache.set("cart", &snapshot).unwrap();

        let reopened = CartStore::open(Cache::new(slot), StoreConfig::default()).unwrap();
        assert_eq!(reopened.total(), usd(4000));
        assert_eq!(reopened.item_count(), 2);
    }

    #[test]
    fn test_open_tolerates_garbage() {
        let slot = MemoryStore::new();
        slot.set("cart", b"not a cart").unwrap();
        let store = CartStore::open(Cache::new(slot), StoreConfig::default()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_reads_amounts_in_configured_currency() {
        let (mut store, slot) = store();
        store.add_to_cart(&jersey(), "S", 1).unwrap();

        let config = StoreConfig::default().with_currency(Currency::EUR);
        let reopened = CartStore::open(Cache::new(slot), config).unwrap();
        assert_eq!(reopened.item_count(), 1);
        assert_eq!(reopened.total(), Money::new(2000, Currency::EUR));
    }

    #[test]
    fn test_open_rejects_overflowing_snapshot() {
        let slot = MemoryStore::new();
        let mut store = CartStore::new(Cache::new(slot.clone()), StoreConfig::default());
        let outcome = store.add_to_cart(&jersey(), "S", 1).unwrap();

        let cache = Cache::new(slot.clone());
        let mut raw: serde_json::Value = cache.get("cart").unwrap().unwrap();
        raw["items"][0]["quantity"] = serde_json::json!(i64::MAX);
        cache.set("cart", &raw).unwrap();

        let reopened = CartStore::open(Cache::new(slot), StoreConfig::default()).unwrap();
        assert!(reopened.item(outcome.item_id()).is_none());
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_into_parts() {
        let (mut store, slot) = store();
        store.add_to_cart(&jersey(), "S", 1).unwrap();
        let (cart, cache) = store.into_parts();
        assert_eq!(cart.item_count(), 1);
        assert!(cache.exists("cart").unwrap());
        drop(cache);
        assert!(slot.exists("cart").unwrap());
    }
}
