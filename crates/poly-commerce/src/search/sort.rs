//! Sort keys for catalog listings.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Sort options for a filtered product listing.
///
/// Every key sorts stably, so ties keep their catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured products first (the default).
    #[default]
    Relevance,
    /// Effective price, low to high.
    PriceAsc,
    /// Effective price, high to low.
    PriceDesc,
    /// New arrivals first.
    Newest,
}

impl SortKey {
    /// URL parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
        }
    }

    /// Parse a URL parameter value.
    pub fn from_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relevance" => Some(SortKey::Relevance),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "newest" => Some(SortKey::Newest),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relev\u{e2}ncia",
            SortKey::PriceAsc => "Menor pre\u{e7}o",
            SortKey::PriceDesc => "Maior pre\u{e7}o",
            SortKey::Newest => "Novidades",
        }
    }

    /// Sort a listing in place. Stable, so equal keys keep catalog order.
    pub fn apply(&self, items: &mut [&Product]) {
        match self {
            // `false` sorts before `true`, so negate the flag to put
            // flagged products first.
            SortKey::Relevance => items.sort_by_key(|p| !p.featured),
            SortKey::Newest => items.sort_by_key(|p| !p.is_new),
            SortKey::PriceAsc => items.sort_by_key(|p| p.effective_price().amount_cents),
            SortKey::PriceDesc => {
                items.sort_by_key(|p| Reverse(p.effective_price().amount_cents))
            }
        }
    }
}
