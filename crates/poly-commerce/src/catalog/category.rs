//! Category types for product classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of store categories. Every product belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Camisetas,
    Calcas,
    Acessorios,
    Kits,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Camisetas,
        Category::Calcas,
        Category::Acessorios,
        Category::Kits,
    ];

    /// URL-friendly slug.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Camisetas => "camisetas",
            Category::Calcas => "calcas",
            Category::Acessorios => "acessorios",
            Category::Kits => "kits",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Camisetas => "Camisetas",
            Category::Calcas => "Cal\u{e7}as",
            Category::Acessorios => "Acess\u{f3}rios",
            Category::Kits => "Kits",
        }
    }

    /// Parse a category slug.
    pub fn from_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "camisetas" => Some(Category::Camisetas),
            "calcas" => Some(Category::Calcas),
            "acessorios" => Some(Category::Acessorios),
            "kits" => Some(Category::Kits),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A category selection at the filter layer.
///
/// The "all" sentinel exists only here; products always carry a concrete
/// [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Restrict to one category.
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter parameter. "all" (or empty) selects everything;
    /// unknown slugs are rejected.
    pub fn from_param(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::from_param(s).map(CategoryFilter::Only)
    }

    /// Check whether a concrete category passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_roundtrip() {
        for c in Category::ALL {
            assert_eq!(Category::from_param(c.as_str()), Some(c));
        }
    }

    #[test]
    fn test_filter_all_sentinel() {
        assert_eq!(CategoryFilter::from_param("all"), Some(CategoryFilter::All));
        assert_eq!(CategoryFilter::from_param(""), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_param("kits"),
            Some(CategoryFilter::Only(Category::Kits))
        );
        assert_eq!(CategoryFilter::from_param("shoes"), None);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Calcas));
        assert!(CategoryFilter::Only(Category::Kits).matches(Category::Kits));
        assert!(!CategoryFilter::Only(Category::Kits).matches(Category::Calcas));
    }
}
