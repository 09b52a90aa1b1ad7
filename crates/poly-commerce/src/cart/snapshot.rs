//! Versioned cart snapshot for persistence.
//!
//! The snapshot stores only what is needed to rebuild the cart against the
//! catalog: (product, color, size, quantity) per line. Prices and names are
//! re-resolved on restore so a stale payload never revives an old price.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Current snapshot schema version. Bump on any incompatible change; a
/// mismatched version on load discards the payload.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One persisted line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedLineItem {
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
    pub quantity: i64,
}

/// The persisted cart payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    pub version: u32,
    pub items: Vec<SavedLineItem>,
}

impl CartSnapshot {
    /// Capture the cart's line items. The drawer flag is intentionally not
    /// persisted.
    pub fn capture(cart: &Cart) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            items: cart
                .items()
                .iter()
                .map(|i| SavedLineItem {
                    product_id: i.product_id.clone(),
                    color: i.color.clone(),
                    size: i.size.clone(),
                    quantity: i.quantity,
                })
                .collect(),
        }
    }

    /// Rebuild a cart from this snapshot against the current catalog.
    ///
    /// A version mismatch discards the whole payload. Entries whose product
    /// no longer exists, whose variant is no longer offered, or whose
    /// quantity is non-positive are dropped individually; the remaining
    /// entries survive.
    pub fn restore(&self, catalog: &Catalog) -> Cart {
        let mut cart = Cart::new();
        if self.version != SNAPSHOT_VERSION {
            tracing::warn!(
                version = self.version,
                expected = SNAPSHOT_VERSION,
                "discarding cart snapshot with unsupported version"
            );
            return cart;
        }
        for saved in &self.items {
            match catalog.by_id(&saved.product_id) {
                Some(product) => {
                    if !cart.add_item(product, &saved.color, &saved.size, saved.quantity) {
                        tracing::warn!(
                            product_id = %saved.product_id,
                            color = %saved.color,
                            size = %saved.size,
                            "dropping cart snapshot entry with unresolvable variant"
                        );
                    }
                }
                None => {
                    tracing::warn!(
                        product_id = %saved.product_id,
                        "dropping cart snapshot entry for unknown product"
                    );
                }
            }
        }
        cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed, Catalog};

    fn catalog() -> Catalog {
        Catalog::new(seed::products()).unwrap()
    }

    #[test]
    fn test_capture_and_restore_preserves_lines() {
        let catalog = catalog();
        let shirt = catalog.by_slug("camiseta-basica-preta").unwrap();
        let pants = catalog.by_slug("calca-cargo-street").unwrap();
        let mut cart = Cart::new();
        cart.add_item(shirt, "Preto", "M", 2);
        cart.add_item(pants, "Preto", "G", 1);
        cart.set_open(true);

        let snapshot = CartSnapshot::capture(&cart);
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        let restored = snapshot.restore(&catalog);

        assert_eq!(restored.items(), cart.items());
        // Drawer visibility is session state, not persisted.
        assert!(!restored.is_open());
    }

    #[test]
    fn test_restore_reprices_from_catalog() {
        let catalog = catalog();
        let promo = catalog.by_slug("camiseta-estampada-jesus-is-king").unwrap();
        let mut cart = Cart::new();
        cart.add_item(promo, "Marrom", "M", 1);

        let restored = CartSnapshot::capture(&cart).restore(&catalog);
        assert_eq!(restored.items()[0].unit_price.amount_cents, 12990);
    }

    #[test]
    fn test_version_mismatch_yields_empty_cart() {
        let catalog = catalog();
        let snapshot = CartSnapshot {
            version: SNAPSHOT_VERSION + 1,
            items: vec![SavedLineItem {
                product_id: ProductId::new("1"),
                color: "Preto".to_string(),
                size: "M".to_string(),
                quantity: 1,
            }],
        };
        assert!(snapshot.restore(&catalog).is_empty());
    }

    #[test]
    fn test_unknown_product_entry_is_dropped() {
        let catalog = catalog();
        let snapshot = CartSnapshot {
            version: SNAPSHOT_VERSION,
            items: vec![
                SavedLineItem {
                    product_id: ProductId::new("999"),
                    color: "Preto".to_string(),
                    size: "M".to_string(),
                    quantity: 1,
                },
                SavedLineItem {
                    product_id: ProductId::new("1"),
                    color: "Preto".to_string(),
                    size: "M".to_string(),
                    quantity: 3,
                },
            ],
        };

        let restored = snapshot.restore(&catalog);
        assert_eq!(restored.line_count(), 1);
        assert_eq!(restored.items()[0].product_id.as_str(), "1");
        assert_eq!(restored.items()[0].quantity, 3);
    }

    #[test]
    fn test_stale_variant_entry_is_dropped() {
        let catalog = catalog();
        let snapshot = CartSnapshot {
            version: SNAPSHOT_VERSION,
            items: vec![SavedLineItem {
                product_id: ProductId::new("1"),
                color: "Verde".to_string(),
                size: "M".to_string(),
                quantity: 1,
            }],
        };
        assert!(snapshot.restore(&catalog).is_empty());
    }
}
