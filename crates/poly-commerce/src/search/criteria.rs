//! Filter criteria for catalog listings.

use crate::catalog::{CategoryFilter, Product};
use crate::money::{Currency, Money};
use crate::search::SortKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A criteria set for [`Catalog::filter_and_sort`](crate::catalog::Catalog::filter_and_sort).
///
/// Every predicate is conjunctive: a product must satisfy all of them.
/// The default criteria match everything, sorted by relevance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    /// Category restriction.
    pub category: CategoryFilter,
    /// Only products flagged `is_new`.
    pub only_new: bool,
    /// Only products carrying a promotional price.
    pub only_promo: bool,
    /// Only products with stock in at least one variant.
    pub only_in_stock: bool,
    /// Inclusive lower bound on effective price.
    pub price_min: Option<Money>,
    /// Inclusive upper bound on effective price.
    pub price_max: Option<Money>,
    /// Product must offer at least one available size from this set.
    pub sizes: BTreeSet<String>,
    /// Product must offer at least one available color from this set.
    pub colors: BTreeSet<String>,
    /// Ordering of the result.
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Criteria matching the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Only new arrivals.
    pub fn with_only_new(mut self) -> Self {
        self.only_new = true;
        self
    }

    /// Only promotional products.
    pub fn with_only_promo(mut self) -> Self {
        self.only_promo = true;
        self
    }

    /// Only products in stock.
    pub fn with_only_in_stock(mut self) -> Self {
        self.only_in_stock = true;
        self
    }

    /// Inclusive effective-price range. Either bound may be open.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Require one of the given sizes.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.sizes.insert(size.into());
        self
    }

    /// Require one of the given colors.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.insert(color.into());
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether a product satisfies every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product.category) {
            return false;
        }
        if self.only_new && !product.is_new {
            return false;
        }
        if self.only_promo && !product.is_on_promo() {
            return false;
        }
        if self.only_in_stock && !product.is_in_stock() {
            return false;
        }

        let price = product.effective_price().amount_cents;
        if let Some(min) = self.price_min {
            if price < min.amount_cents {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if price > max.amount_cents {
                return false;
            }
        }

        if !self.sizes.is_empty() && !product.offers_any_size(&self.sizes) {
            return false;
        }
        if !self.colors.is_empty() && !product.offers_any_color(&self.colors) {
            return false;
        }

        true
    }

    /// Translate URL query parameters into a criteria set.
    ///
    /// Recognized keys: `category`, `filter` (`new`/`promo`), `instock`,
    /// `price_min`, `price_max`, `size`, `color` (both repeatable or
    /// comma-separated), `sort`. Unknown keys and unparsable values are
    /// ignored.
    pub fn from_query_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut criteria = Self::new();
        for (key, value) in pairs {
            match key {
                "category" => {
                    if let Some(filter) = CategoryFilter::from_param(value) {
                        criteria.category = filter;
                    }
                }
                "filter" => match value {
                    "new" => criteria.only_new = true,
                    "promo" => criteria.only_promo = true,
                    _ => {}
                },
                "instock" => {
                    criteria.only_in_stock = matches!(value, "1" | "true");
                }
                "price_min" => {
                    if let Ok(v) = value.parse::<f64>() {
                        criteria.price_min = Some(Money::from_decimal(v, Currency::BRL));
                    }
                }
                "price_max" => {
                    if let Ok(v) = value.parse::<f64>() {
                        criteria.price_max = Some(Money::from_decimal(v, Currency::BRL));
                    }
                }
                "size" => {
                    criteria
                        .sizes
                        .extend(split_list(value).map(str::to_string));
                }
                "color" => {
                    criteria
                        .colors
                        .extend(split_list(value).map(str::to_string));
                }
                "sort" => {
                    if let Some(sort) = SortKey::from_param(value) {
                        criteria.sort = sort;
                    }
                }
                _ => {}
            }
        }
        criteria
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed, Catalog, Category};

    fn catalog() -> Catalog {
        Catalog::new(seed::products()).unwrap()
    }

    #[test]
    fn test_default_matches_everything() {
        let catalog = catalog();
        let result = catalog.filter_and_sort(&FilterCriteria::new());
        assert_eq!(result.len(), 15);
    }

    #[test]
    fn test_category_and_promo_composition() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_category(CategoryFilter::Only(Category::Camisetas))
            .with_only_promo();

        let result = catalog.filter_and_sort(&criteria);
        let slugs: Vec<&str> = result.iter().map(|p| p.slug.as_str()).collect();
        // Only one camiseta carries a promo price; relevance puts featured
        // products first, which it already is.
        assert_eq!(slugs, vec!["camiseta-estampada-jesus-is-king"]);
    }

    #[test]
    fn test_relevance_puts_featured_first_stably() {
        let catalog = catalog();
        let criteria =
            FilterCriteria::new().with_category(CategoryFilter::Only(Category::Camisetas));

        let ids: Vec<&str> = catalog
            .filter_and_sort(&criteria)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        // Featured camisetas are 1, 3, 5 (catalog order), then 2, 4, 6.
        assert_eq!(ids, vec!["1", "3", "5", "2", "4", "6"]);
    }

    #[test]
    fn test_price_sort_uses_effective_price() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_category(CategoryFilter::Only(Category::Kits))
            .with_sort(SortKey::PriceAsc);

        let slugs: Vec<&str> = catalog
            .filter_and_sort(&criteria)
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        // Effective prices: 349.90, 499.90, 499.90 — the tie keeps catalog
        // order (kit-street-completo before kit-essencial-premium).
        assert_eq!(
            slugs,
            vec!["kit-5-camisetas", "kit-street-completo", "kit-essencial-premium"]
        );
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_price_range(
            Some(Money::from_decimal(89.90, Currency::BRL)),
            Some(Money::from_decimal(89.90, Currency::BRL)),
        );

        let result = catalog.filter_and_sort(&criteria);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.effective_price().amount_cents == 8990));
    }

    #[test]
    fn test_size_filter_requires_available_option() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_size("XG");

        let slugs: Vec<&str> = catalog
            .filter_and_sort(&criteria)
            .iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["camiseta-oversized-urban-black"]);
    }

    #[test]
    fn test_newest_sort() {
        let catalog = catalog();
        let criteria = FilterCriteria::new()
            .with_category(CategoryFilter::Only(Category::Calcas))
            .with_sort(SortKey::Newest);

        let ids: Vec<&str> = catalog
            .filter_and_sort(&criteria)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        // New: 7, 9 (catalog order); then 8.
        assert_eq!(ids, vec!["7", "9", "8"]);
    }

    #[test]
    fn test_from_query_pairs() {
        let criteria = FilterCriteria::from_query_pairs([
            ("category", "camisetas"),
            ("filter", "new"),
            ("instock", "1"),
            ("price_min", "50"),
            ("price_max", "200.50"),
            ("size", "M,G"),
            ("color", "Preto"),
            ("sort", "price-desc"),
            ("utm_source", "ignored"),
        ]);

        assert_eq!(criteria.category, CategoryFilter::Only(Category::Camisetas));
        assert!(criteria.only_new);
        assert!(criteria.only_in_stock);
        assert_eq!(criteria.price_min.unwrap().amount_cents, 5000);
        assert_eq!(criteria.price_max.unwrap().amount_cents, 20050);
        assert!(criteria.sizes.contains("M") && criteria.sizes.contains("G"));
        assert!(criteria.colors.contains("Preto"));
        assert_eq!(criteria.sort, SortKey::PriceDesc);
    }

    #[test]
    fn test_from_query_pairs_ignores_garbage() {
        let criteria = FilterCriteria::from_query_pairs([
            ("category", "shoes"),
            ("price_min", "abc"),
            ("sort", "bogus"),
        ]);
        assert_eq!(criteria, FilterCriteria::new());
    }
}
