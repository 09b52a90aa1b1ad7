//! Product and variant types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color offered for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorOption {
    /// Color name (e.g., "Preto").
    pub name: String,
    /// Display color as a hex string (e.g., "#1a1a1a").
    pub hex: String,
    /// Whether the color is currently selectable.
    pub available: bool,
}

/// A size offered for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SizeOption {
    /// Size name (e.g., "M").
    pub name: String,
    /// Whether the size is currently selectable.
    pub available: bool,
}

/// The (color name, size name) pair identifying a purchasable SKU.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    pub color: String,
    pub size: String,
}

impl VariantKey {
    pub fn new(color: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            size: size.into(),
        }
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.color, self.size)
    }
}

/// Stock on hand for one variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantStock {
    pub key: VariantKey,
    pub quantity: i64,
}

impl VariantStock {
    pub fn new(color: impl Into<String>, size: impl Into<String>, quantity: i64) -> Self {
        Self {
            key: VariantKey::new(color, size),
            quantity,
        }
    }
}

/// A product in the catalog. Immutable after catalog construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Base price.
    pub price: Money,
    /// Promotional price; must be below the base price when present.
    pub promo_price: Option<Money>,
    /// Image references, in display order. Never empty.
    pub images: Vec<String>,
    /// Offered colors, in display order.
    pub colors: Vec<ColorOption>,
    /// Offered sizes, in display order.
    pub sizes: Vec<SizeOption>,
    /// Stock on hand per variant. Variants absent here have zero stock.
    pub stock_by_variant: Vec<VariantStock>,
    /// Full description.
    pub description: String,
    /// Fabric/material copy.
    pub material: String,
    /// Care instructions.
    pub care: String,
    /// Category tag.
    pub category: Category,
    /// Shown in the featured rail.
    pub featured: bool,
    /// Shown with the "new" badge.
    pub is_new: bool,
    /// Optional product video.
    pub video_url: Option<String>,
}

impl Product {
    /// Effective price: promotional price if present, else base price.
    pub fn effective_price(&self) -> Money {
        self.promo_price.unwrap_or(self.price)
    }

    /// Whether a promotional price is set.
    pub fn is_on_promo(&self) -> bool {
        self.promo_price.is_some()
    }

    /// Discount as a whole percentage, rounded half away from zero.
    ///
    /// Defined only when a promotional price exists below the base price.
    pub fn discount_percent(&self) -> Option<i64> {
        let promo = self.promo_price?;
        if promo.amount_cents >= self.price.amount_cents || self.price.amount_cents <= 0 {
            return None;
        }
        let savings = (self.price.amount_cents - promo.amount_cents) as f64;
        Some((savings / self.price.amount_cents as f64 * 100.0).round() as i64)
    }

    /// Stock on hand for a specific variant.
    pub fn stock_for(&self, key: &VariantKey) -> i64 {
        self.stock_by_variant
            .iter()
            .find(|s| &s.key == key)
            .map_or(0, |s| s.quantity)
    }

    /// Total stock across every variant.
    pub fn total_stock(&self) -> i64 {
        self.stock_by_variant.iter().map(|s| s.quantity).sum()
    }

    /// Whether any variant has stock.
    pub fn is_in_stock(&self) -> bool {
        self.total_stock() > 0
    }

    /// Look up an offered color by name.
    pub fn color(&self, name: &str) -> Option<&ColorOption> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// Look up an offered size by name.
    pub fn size(&self, name: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.name == name)
    }

    /// Whether the (color, size) pair resolves to offered, available options.
    ///
    /// This is the add-to-cart guard: a pair that does not resolve makes the
    /// add a silent no-op.
    pub fn has_available_variant(&self, color: &str, size: &str) -> bool {
        self.color(color).is_some_and(|c| c.available)
            && self.size(size).is_some_and(|s| s.available)
    }

    /// Whether the product has at least one available size in `names`.
    pub fn offers_any_size(&self, names: &std::collections::BTreeSet<String>) -> bool {
        self.sizes
            .iter()
            .any(|s| s.available && names.contains(&s.name))
    }

    /// Whether the product has at least one available color in `names`.
    pub fn offers_any_color(&self, names: &std::collections::BTreeSet<String>) -> bool {
        self.colors
            .iter()
            .any(|c| c.available && names.contains(&c.name))
    }
}
