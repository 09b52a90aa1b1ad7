//! The catalog store: an immutable product list with pure query functions.

use crate::catalog::{CategoryFilter, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::FilterCriteria;
use std::collections::HashSet;

/// The static, immutable set of all product records.
///
/// Built once at startup and never mutated; every query borrows.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every product record.
    ///
    /// Validation enforces what the dynamic source format could not: unique
    /// ids and slugs, promotional price strictly below base price, non-empty
    /// image lists, non-negative stock, and stock keys that reference
    /// declared color/size options.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for product in &products {
            Self::validate(product)?;
            if !ids.insert(product.id.as_str().to_string()) {
                return Err(invalid(product, format!("duplicate id {}", product.id)));
            }
            if !slugs.insert(product.slug.clone()) {
                return Err(invalid(product, "duplicate slug".to_string()));
            }
        }
        Ok(Self { products })
    }

    fn validate(product: &Product) -> Result<(), CommerceError> {
        if product.images.is_empty() {
            return Err(invalid(product, "no images".to_string()));
        }
        if product.colors.is_empty() || product.sizes.is_empty() {
            return Err(invalid(product, "no colors or sizes".to_string()));
        }
        if !product.price.is_positive() {
            return Err(invalid(product, "non-positive price".to_string()));
        }
        if let Some(promo) = product.promo_price {
            if promo.currency != product.price.currency {
                return Err(invalid(product, "promo price currency mismatch".to_string()));
            }
            if promo.amount_cents >= product.price.amount_cents {
                return Err(invalid(
                    product,
                    "promo price not below base price".to_string(),
                ));
            }
        }
        for stock in &product.stock_by_variant {
            if stock.quantity < 0 {
                return Err(invalid(
                    product,
                    format!("negative stock for {}", stock.key),
                ));
            }
            if product.color(&stock.key.color).is_none() {
                return Err(invalid(
                    product,
                    format!("stock references unknown color {}", stock.key.color),
                ));
            }
            if product.size(&stock.key.size).is_none() {
                return Err(invalid(
                    product,
                    format!("stock references unknown size {}", stock.key.size),
                ));
            }
        }
        Ok(())
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The unique product with a matching slug, if any.
    ///
    /// A miss is a normal return, not an error; callers render a not-found
    /// page.
    pub fn by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// The product with a matching id, if any.
    pub fn by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products flagged `featured`, in catalog order.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products flagged `is_new`, in catalog order.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// Products carrying a promotional price, in catalog order.
    pub fn on_promo(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_on_promo()).collect()
    }

    /// Products passing a category filter, in catalog order.
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }

    /// The subset satisfying every active predicate in `criteria`, ordered
    /// by its sort key (stable, ties broken by catalog order).
    pub fn filter_and_sort(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        let mut result: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| criteria.matches(p))
            .collect();
        criteria.sort.apply(&mut result);
        result
    }
}

fn invalid(product: &Product, reason: String) -> CommerceError {
    CommerceError::InvalidProduct {
        slug: product.slug.clone(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed, Category};
    use crate::money::{Currency, Money};

    fn catalog() -> Catalog {
        Catalog::new(seed::products()).unwrap()
    }

    #[test]
    fn test_seed_catalog_validates() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn test_by_slug() {
        let catalog = catalog();
        let p = catalog.by_slug("camiseta-basica-preta").unwrap();
        assert_eq!(p.id.as_str(), "1");

        assert!(catalog.by_slug("does-not-exist").is_none());
    }

    #[test]
    fn test_featured_preserves_catalog_order() {
        let catalog = catalog();
        let featured = catalog.featured();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.featured));

        let ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_by_key(|id| id.parse::<u32>().unwrap());
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_by_category_all_sentinel() {
        let catalog = catalog();
        assert_eq!(catalog.by_category(CategoryFilter::All).len(), 15);

        let kits = catalog.by_category(CategoryFilter::Only(Category::Kits));
        assert_eq!(kits.len(), 3);
        assert!(kits.iter().all(|p| p.category == Category::Kits));
    }

    #[test]
    fn test_rejects_duplicate_slug() {
        let mut products = seed::products();
        let clone = products[0].clone();
        let mut dup = clone;
        dup.id = crate::ids::ProductId::new("99");
        products.push(dup);

        assert!(matches!(
            Catalog::new(products),
            Err(CommerceError::InvalidProduct { .. })
        ));
    }

    #[test]
    fn test_rejects_promo_at_or_above_base() {
        let mut products = seed::products();
        products[0].promo_price = Some(products[0].price);

        assert!(Catalog::new(products).is_err());
    }

    #[test]
    fn test_rejects_stock_for_unknown_variant() {
        let mut products = seed::products();
        products[0]
            .stock_by_variant
            .push(crate::catalog::VariantStock::new("Roxo", "M", 3));

        assert!(Catalog::new(products).is_err());
    }

    #[test]
    fn test_rejects_negative_stock() {
        let mut products = seed::products();
        products[0].stock_by_variant[0].quantity = -1;
        assert!(Catalog::new(products).is_err());
    }

    #[test]
    fn test_rejects_empty_images() {
        let mut products = seed::products();
        products[0].images.clear();
        assert!(Catalog::new(products).is_err());
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let mut products = seed::products();
        products[0].price = Money::new(0, Currency::BRL);
        products[0].promo_price = None;
        assert!(Catalog::new(products).is_err());
    }
}
