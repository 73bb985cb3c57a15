//! End-to-end behavior of the cart store against its slot backends.

use std::cell::Cell;

use kitbag_cache::{Cache, CacheError, FileStore, KvStore, MemoryStore};
use kitbag_commerce::prelude::*;
use kitbag_store::{CartError, CartStore, StoreConfig};

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

/// Product P: base price 20, size S without a price, size M at 22.
fn product_p() -> Product {
    let mut product = Product::new("Club Jersey", "club-jersey", usd(2000)).with_team("Rovers", "football");
    product.add_variant("S", "CJ-S", None);
    product.add_variant("M", "CJ-M", Some(usd(2200)));
    product
}

fn memory_store() -> (CartStore<MemoryStore>, MemoryStore) {
    let slot = MemoryStore::new();
    (
        CartStore::new(Cache::new(slot.clone()), StoreConfig::default()),
        slot,
    )
}

fn assert_consistent<S: KvStore>(store: &CartStore<S>) {
    let cart = store.cart();
    let mut total = 0;
    let mut count = 0;
    for item in cart.items() {
        total += item.unit_price().amount_cents * item.quantity;
        count += item.quantity;
    }
    assert_eq!(cart.total().amount_cents, total, "total drifted from items");
    assert_eq!(cart.item_count(), count, "item count drifted from items");
}

#[test]
fn test_documented_scenario() {
    let (mut store, _slot) = memory_store();
    let p = product_p();

    let s_line = store.add_to_cart(&p, "S", 2).unwrap();
    assert!(matches!(s_line, AddOutcome::Inserted(_)));
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.item(s_line.item_id()).unwrap().quantity, 2);
    assert_eq!(store.total(), usd(4000));

    let m_line = store.add_to_cart(&p, "M", 1).unwrap();
    assert_eq!(store.cart().len(), 2);
    assert_eq!(store.total(), usd(6200));
    assert_eq!(store.item_count(), 3);

    let merged = store.add_to_cart(&p, "S", 3).unwrap();
    assert_eq!(merged, AddOutcome::Merged(s_line.item_id().clone()));
    assert_eq!(store.item(s_line.item_id()).unwrap().quantity, 5);
    assert_eq!(store.total(), usd(12200));
    assert_eq!(store.item_count(), 6);

    assert!(store.remove_from_cart(m_line.item_id()).unwrap());
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.total(), usd(10000));
    assert_eq!(store.item_count(), 5);
}

#[test]
fn test_aggregates_hold_after_every_operation() {
    let (mut store, _slot) = memory_store();
    let p = product_p();
    let mut scarf = Product::new("Scarf", "scarf", usd(1500));
    scarf.add_variant("One Size", "SC-1", Some(usd(1250)));

    let a = store.add_to_cart(&p, "S", 1).unwrap();
    assert_consistent(&store);
    let b = store.add_to_cart(&scarf, "One Size", 4).unwrap();
    assert_consistent(&store);
    store.add_to_cart(&p, "M", 2).unwrap();
    assert_consistent(&store);
    store.update_quantity(a.item_id(), 7).unwrap();
    assert_consistent(&store);
    store.add_to_cart(&p, "XXL", 1).unwrap_err();
    assert_consistent(&store);
    store.update_quantity(b.item_id(), 0).unwrap();
    assert_consistent(&store);
    store.remove_from_cart(a.item_id()).unwrap();
    assert_consistent(&store);
    store.update_quantity(b.item_id(), -2).unwrap();
    assert_consistent(&store);
    store.clear_cart().unwrap();
    assert_consistent(&store);
}

#[test]
fn test_same_size_twice_is_one_line() {
    let (mut store, _slot) = memory_store();
    let p = product_p();
    store.add_to_cart(&p, "M", 2).unwrap();
    store.add_to_cart(&p, "M", 3).unwrap();

    let variant = p.variant_for_size("M").unwrap();
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.item_for_variant(&variant.id).unwrap().quantity, 5);
}

#[test]
fn test_two_sizes_are_two_lines() {
    let (mut store, _slot) = memory_store();
    let p = product_p();
    let s = store.add_to_cart(&p, "S", 1).unwrap();
    let m = store.add_to_cart(&p, "M", 1).unwrap();
    assert_ne!(s.item_id(), m.item_id());
    assert_eq!(store.cart().len(), 2);
}

#[test]
fn test_unknown_ids_leave_cart_unchanged() {
    let (mut store, _slot) = memory_store();
    store.add_to_cart(&product_p(), "S", 2).unwrap();
    let before = store.cart().clone();

    let missing = CartItemId::new("cart_nope");
    assert!(!store.remove_from_cart(&missing).unwrap());
    assert_eq!(store.cart(), &before);
    assert!(!store.remove_from_cart(&missing).unwrap());
    assert!(!store.update_quantity(&missing, 9).unwrap());
    assert_eq!(store.cart(), &before);
}

#[test]
fn test_missing_variant_is_a_typed_error() {
    let (mut store, slot) = memory_store();
    let p = product_p();
    store.add_to_cart(&p, "S", 1).unwrap();
    let written = slot.get("cart").unwrap();

    let err = store.add_to_cart(&p, "XL", 1).unwrap_err();
    assert!(err.is_variant_not_found());
    assert!(matches!(
        err,
        CartError::Commerce(CommerceError::VariantNotFound { ref size, .. }) if size == "XL"
    ));
    assert_eq!(store.item_count(), 1);
    assert_eq!(slot.get("cart").unwrap(), written);
}

#[test]
fn test_clear_then_read() {
    let (mut store, slot) = memory_store();
    store.add_to_cart(&product_p(), "M", 2).unwrap();
    store.clear_cart().unwrap();

    assert!(store.cart().items().is_empty());
    assert!(store.total().is_zero());
    assert_eq!(store.item_count(), 0);
    assert!(!slot.exists("cart").unwrap());

    let reopened = CartStore::open(Cache::new(slot), StoreConfig::default()).unwrap();
    assert!(reopened.is_empty());
}

#[test]
fn test_reload_restores_cart() {
    let (mut store, slot) = memory_store();
    let p = product_p();
    let s = store.add_to_cart(&p, "S", 2).unwrap();
    store.add_to_cart(&p, "M", 1).unwrap();
    store.update_quantity(s.item_id(), 4).unwrap();

    let reopened = CartStore::open(Cache::new(slot), StoreConfig::default()).unwrap();
    assert_eq!(reopened.cart(), store.cart());
    assert_eq!(reopened.total(), usd(10200));
}

#[test]
fn test_file_backed_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let p = product_p();

    {
        let cache = Cache::new(FileStore::open(dir.path()).unwrap());
        let mut store = CartStore::open(cache, StoreConfig::default()).unwrap();
        assert!(store.is_empty());
        store.add_to_cart(&p, "M", 3).unwrap();
    }

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["itemCount"], 3);
    assert_eq!(json["total"], 66);
    assert_eq!(json["items"][0]["variant"]["size"], "M");
    assert_eq!(json["items"][0]["variant"]["price"], 22);
    assert_eq!(json["items"][0]["product"]["basePrice"], 20);

    let cache = Cache::new(FileStore::open(dir.path()).unwrap());
    let mut store = CartStore::open(cache, StoreConfig::default()).unwrap();
    assert_eq!(store.total(), usd(6600));

    store.clear_cart().unwrap();
    assert!(!dir.path().join("cart.json").exists());
}

/// Backend whose writes can be switched off.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: Cell<bool>,
}

impl KvStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        if self.fail_writes.get() {
            return Err(CacheError::StoreError("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        if self.fail_writes.get() {
            return Err(CacheError::StoreError("quota exceeded".to_string()));
        }
        self.inner.delete(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.inner.keys()
    }
}

#[test]
fn test_failed_write_keeps_memory_and_slot_in_step() {
    let flaky = FlakyStore::default();
    let slot = flaky.inner.clone();
    let mut store = CartStore::new(Cache::new(flaky), StoreConfig::default());
    let p = product_p();
    let line = store.add_to_cart(&p, "S", 1).unwrap();
    let before = store.cart().clone();
    let written = slot.get("cart").unwrap();

    store.cache().store().fail_writes.set(true);

    assert!(matches!(store.add_to_cart(&p, "M", 1), Err(CartError::Cache(_))));
    assert!(matches!(store.update_quantity(line.item_id(), 9), Err(CartError::Cache(_))));
    assert!(matches!(store.remove_from_cart(line.item_id()), Err(CartError::Cache(_))));
    assert!(matches!(store.clear_cart(), Err(CartError::Cache(_))));

    assert_eq!(store.cart(), &before);
    assert_eq!(slot.get("cart").unwrap(), written);

    store.cache().store().fail_writes.set(false);
    store.clear_cart().unwrap();
    assert!(slot.is_empty());
}

#[test]
fn test_open_reads_slot_written_by_storefront() {
    let slot = MemoryStore::new();
    let raw = r#"{
        "items": [{
            "id": "cart-1700000000000",
            "product": {
                "id": "p1", "name": "Home Jersey", "slug": "home-jersey",
                "team": "Rovers", "sport": "football", "basePrice": 20,
                "reviewCount": 0, "isActive": true,
                "createdAt": "2024-03-01T12:00:00Z", "updatedAt": "2024-03-01T12:00:00Z",
                "variants": []
            },
            "variant": {
                "id": "v2", "productId": "p1", "size": "M", "sku": "HJ-M",
                "stockQuantity": 5, "price": 22.5, "imageUrls": []
            },
            "quantity": 2,
            "addedAt": "2024-03-02T09:30:00.000Z"
        }],
        "total": 45,
        "itemCount": 2
    }"#;
    slot.set("cart", raw.as_bytes()).unwrap();

    let store = CartStore::open(Cache::new(slot), StoreConfig::default()).unwrap();
    assert_eq!(store.item_count(), 2);
    assert_eq!(store.total(), usd(4500));
    assert_consistent(&store);
}
