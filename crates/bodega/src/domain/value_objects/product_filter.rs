//! ProductFilter / ProductSort - Catalog listing options

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;

/// Sort key for product listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    Price,
    Name,
}

impl ProductSort {
    /// Ascending ordering between two products under this key.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSort::Price => a.price.cmp(&b.price),
            ProductSort::Name => a.name.cmp(&b.name),
        }
    }
}

impl std::str::FromStr for ProductSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "price" => Ok(ProductSort::Price),
            "name" => Ok(ProductSort::Name),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

/// Catalog listing filter.
///
/// An absent category means no restriction; an absent sort means storage
/// order. Unrecognized sort values are dropped at the boundary, never an
/// error.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub sort: Option<ProductSort>,
}

impl ProductFilter {
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            sort: None,
        }
    }

    pub fn sorted(sort: ProductSort) -> Self {
        Self {
            category: None,
            sort: Some(sort),
        }
    }

    /// Whether `product` passes the category restriction (case-insensitive).
    pub fn matches(&self, product: &Product) -> bool {
        match &self.category {
            Some(category) => product.category.eq_ignore_ascii_case(category),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(name: &str, price: rust_decimal::Decimal, category: &str) -> Product {
        Product::new(
            name.to_string(),
            format!("{} description", name),
            price,
            format!("https://img.example/{}.png", name),
            category.to_string(),
        )
    }

    #[test]
    fn category_matches_case_insensitively() {
        let filter = ProductFilter::by_category("Snacks");
        assert!(filter.matches(&product("chips", dec!(1.50), "snacks")));
        assert!(filter.matches(&product("pretzels", dec!(2.00), "SNACKS")));
        assert!(!filter.matches(&product("cola", dec!(1.25), "Drinks")));
    }

    #[test]
    fn absent_category_matches_everything() {
        let filter = ProductFilter::default();
        assert!(filter.matches(&product("chips", dec!(1.50), "snacks")));
        assert!(filter.matches(&product("cola", dec!(1.25), "Drinks")));
    }

    #[test]
    fn sort_keys_parse_and_reject_unknown_values() {
        assert_eq!("price".parse::<ProductSort>(), Ok(ProductSort::Price));
        assert_eq!("Name".parse::<ProductSort>(), Ok(ProductSort::Name));
        assert!("popularity".parse::<ProductSort>().is_err());
    }

    #[test]
    fn price_sort_orders_ascending() {
        let cheap = product("gum", dec!(0.50), "snacks");
        let dear = product("trail mix", dec!(4.75), "snacks");
        assert_eq!(ProductSort::Price.compare(&cheap, &dear), Ordering::Less);
        assert_eq!(ProductSort::Price.compare(&dear, &cheap), Ordering::Greater);
    }

    #[test]
    fn name_sort_orders_ascending() {
        let a = product("apple", dec!(1.00), "fruit");
        let b = product("banana", dec!(1.00), "fruit");
        assert_eq!(ProductSort::Name.compare(&a, &b), Ordering::Less);
    }
}
