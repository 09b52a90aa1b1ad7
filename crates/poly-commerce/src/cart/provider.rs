//! Cart provider: the cart aggregate wired to a persistence backend.

use crate::cart::{Cart, CartCommand, CartSnapshot, LineItem};
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::money::Money;
use poly_storage::Storage;

/// Storage key under which the cart snapshot is persisted.
pub const CART_STORAGE_KEY: &str = "poly-cart";

/// Owns the cart and a storage backend, persisting a snapshot after every
/// command that changes the line items.
///
/// Persistence is best effort: a failed write is logged and swallowed, and
/// the in-memory cart stays authoritative for the session.
#[derive(Debug)]
pub struct CartProvider<S: Storage> {
    cart: Cart,
    storage: S,
}

impl<S: Storage> CartProvider<S> {
    /// Open a provider, attempting exactly one restore from storage.
    ///
    /// A missing, malformed, or version-mismatched payload yields an empty
    /// cart; read and parse failures are logged, never surfaced.
    pub fn open(storage: S, catalog: &Catalog) -> Self {
        let cart = match storage.get_json::<CartSnapshot>(CART_STORAGE_KEY) {
            Ok(Some(snapshot)) => snapshot.restore(catalog),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load cart snapshot, starting empty");
                Cart::new()
            }
        };
        Self { cart, storage }
    }

    /// The current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Whether the cart drawer is open.
    pub fn is_open(&self) -> bool {
        self.cart.is_open()
    }

    /// Total item count across all lines.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Cart subtotal.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.cart.subtotal()
    }

    /// Apply a command, persisting a fresh snapshot when the line items
    /// changed. Returns whether they did.
    pub fn dispatch(&mut self, command: CartCommand, catalog: &Catalog) -> bool {
        let changed = self.cart.apply(command, catalog);
        if changed {
            self.persist();
        }
        changed
    }

    /// Write the current snapshot to storage, logging any failure.
    fn persist(&mut self) {
        let snapshot = CartSnapshot::capture(&self.cart);
        if let Err(e) = self.storage.set_json(CART_STORAGE_KEY, &snapshot) {
            tracing::warn!(error = %e, "failed to persist cart snapshot");
        }
    }

    /// Tear down the provider, handing back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::ids::ProductId;
    use poly_storage::{MemoryStorage, StorageError};

    fn catalog() -> Catalog {
        Catalog::new(seed::products()).unwrap()
    }

    fn add(product_id: &str, color: &str, size: &str, quantity: i64) -> CartCommand {
        CartCommand::AddItem {
            product_id: ProductId::new(product_id),
            color: color.to_string(),
            size: size.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_dispatch_persists_and_reopen_restores() {
        let catalog = catalog();
        let mut provider = CartProvider::open(MemoryStorage::new(), &catalog);

        assert!(provider.dispatch(add("1", "Preto", "M", 2), &catalog));
        assert!(provider.dispatch(add("7", "Preto", "G", 1), &catalog));
        let saved_items = provider.items().to_vec();

        let storage = provider.into_storage();
        let reopened = CartProvider::open(storage, &catalog);
        assert_eq!(reopened.items(), saved_items.as_slice());
        assert_eq!(reopened.total_items(), 3);
    }

    #[test]
    fn test_visibility_commands_do_not_persist() {
        let catalog = catalog();
        let mut provider = CartProvider::open(MemoryStorage::new(), &catalog);

        assert!(!provider.dispatch(CartCommand::SetOpen(true), &catalog));
        assert!(provider.is_open());

        let storage = provider.into_storage();
        assert!(!storage.exists(CART_STORAGE_KEY).unwrap());
    }

    #[test]
    fn test_malformed_payload_starts_empty() {
        let catalog = catalog();
        let mut storage = MemoryStorage::new();
        storage.set(CART_STORAGE_KEY, b"{ not json").unwrap();

        let provider = CartProvider::open(storage, &catalog);
        assert!(provider.cart().is_empty());
    }

    #[test]
    fn test_wrong_version_payload_starts_empty() {
        let catalog = catalog();
        let mut storage = MemoryStorage::new();
        storage
            .set(
                CART_STORAGE_KEY,
                br#"{"version":99,"items":[{"product_id":"1","color":"Preto","size":"M","quantity":2}]}"#,
            )
            .unwrap();

        let provider = CartProvider::open(storage, &catalog);
        assert!(provider.cart().is_empty());
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        // A storage backend that accepts reads but rejects writes.
        #[derive(Debug, Default)]
        struct ReadOnlyStorage;

        impl Storage for ReadOnlyStorage {
            fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
                Ok(None)
            }

            fn set(&mut self, key: &str, _value: &[u8]) -> Result<(), StorageError> {
                Err(StorageError::Open(format!("read-only store: {key}")))
            }

            fn delete(&mut self, _key: &str) -> Result<(), StorageError> {
                Ok(())
            }
        }

        let catalog = catalog();
        let mut provider = CartProvider::open(ReadOnlyStorage, &catalog);

        // The command still lands in memory even though persistence failed.
        assert!(provider.dispatch(add("1", "Preto", "M", 1), &catalog));
        assert_eq!(provider.total_items(), 1);
    }
}
