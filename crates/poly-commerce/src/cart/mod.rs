//! Shopping cart module.
//!
//! The cart is a command-reduced aggregate: commands mutate the line-item
//! collection and the drawer flag, totals are derived on read, and the
//! provider persists a versioned snapshot after every item change.

mod cart;
mod provider;
mod snapshot;

pub use cart::{Cart, CartCommand, LineItem};
pub use provider::{CartProvider, CART_STORAGE_KEY};
pub use snapshot::{CartSnapshot, SavedLineItem, SNAPSHOT_VERSION};
