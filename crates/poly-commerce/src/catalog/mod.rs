//! Product catalog module.
//!
//! Contains the product and category types, the compiled-in dataset, and the
//! immutable catalog store with its query functions.

mod category;
mod product;
pub mod seed;
mod store;

pub use category::{Category, CategoryFilter};
pub use product::{ColorOption, Product, SizeOption, VariantKey, VariantStock};
pub use store::Catalog;
