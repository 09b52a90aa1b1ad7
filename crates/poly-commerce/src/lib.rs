//! Storefront domain types and logic for Polylife.
//!
//! This crate is the client-side core of the Polylife streetwear store:
//!
//! - **Catalog**: the compiled-in product dataset and its query functions
//! - **Cart**: command-driven shopping cart with persisted snapshots
//! - **Checkout**: coupons, shipping methods, totals, payment seam
//! - **Search**: listing filters and sort keys
//!
//! # Example
//!
//! ```rust
//! use poly_commerce::prelude::*;
//! use poly_storage::MemoryStorage;
//!
//! let catalog = Catalog::new(poly_commerce::catalog::seed::products()).unwrap();
//! let mut cart = CartProvider::open(MemoryStorage::new(), &catalog);
//!
//! let shirt = catalog.by_slug("camiseta-basica-preta").unwrap();
//! cart.dispatch(
//!     CartCommand::AddItem {
//!         product_id: shirt.id.clone(),
//!         color: "Preto".to_string(),
//!         size: "M".to_string(),
//!         quantity: 2,
//!     },
//!     &catalog,
//! );
//!
//! let subtotal = cart.subtotal().unwrap();
//! assert_eq!(subtotal.display(), "R$ 179,80");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, CategoryFilter, ColorOption, Product, SizeOption, VariantKey,
        VariantStock,
    };

    // Cart
    pub use crate::cart::{
        Cart, CartCommand, CartProvider, CartSnapshot, LineItem, CART_STORAGE_KEY,
    };

    // Checkout
    pub use crate::checkout::{
        standard_methods, CheckoutSession, CheckoutTotals, Coupon, OrderConfirmation,
        PaymentGateway, ShippingMethod,
    };

    // Search
    pub use crate::search::{FilterCriteria, SortKey};
}
