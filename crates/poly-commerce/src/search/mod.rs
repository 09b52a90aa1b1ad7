//! Catalog filtering and sorting.
//!
//! The criteria set mirrors the storefront's filter sidebar and is also the
//! target of URL query-parameter translation.

mod criteria;
mod sort;

pub use criteria::FilterCriteria;
pub use sort::SortKey;
