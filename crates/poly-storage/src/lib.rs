//! Key-value persistence layer for the Poly storefront.
//!
//! The storefront runs entirely client-side; the only durable state is a
//! handful of namespaced keys holding JSON payloads. This crate provides a
//! small [`Storage`] abstraction over that store with automatic JSON
//! serialization, plus two implementations:
//!
//! - [`MemoryStorage`] — ephemeral, used in tests and throwaway sessions.
//! - [`FileStorage`] — one JSON file per key under a root directory.
//!
//! # Example
//!
//! ```rust
//! use poly_storage::{MemoryStorage, Storage};
//!
//! let mut store = MemoryStorage::new();
//! store.set_json("greeting", &"hello".to_string()).unwrap();
//! let back: Option<String> = store.get_json("greeting").unwrap();
//! assert_eq!(back.as_deref(), Some("hello"));
//! ```

mod error;
mod kv;

pub use error::StorageError;
pub use kv::{FileStorage, MemoryStorage, Storage};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStorage, MemoryStorage, Storage, StorageError};
}
