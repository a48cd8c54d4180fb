//! # Catalog
//!
//! The fixed menu of the order form: sizes with prices, crust types,
//! toppings at a single unit price, and the sales tax rate.
//! The catalog is built once and never changes for the life of the process.

use crate::price::{Price, TaxRate};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Sizes in menu order, priced in cents
pub const SIZES: [(&str, i64); 4] = [
    ("Small", 800),
    ("Medium", 1200),
    ("Large", 1600),
    ("Super", 2000),
];

/// Crust types (no price difference)
pub const CRUSTS: [&str; 3] = ["Thin", "Regular", "Deep-dish"];

/// Toppings in menu order
pub const TOPPINGS: [&str; 6] = [
    "Pepperoni",
    "Mushrooms",
    "Onions",
    "Sausage",
    "Bacon",
    "Extra Cheese",
];

/// Price of each topping, in cents
pub const TOPPING_PRICE_CENTS: i64 = 100;

/// Sales tax in basis points (7%)
pub const TAX_RATE_BPS: u32 = 700;

/// A pizza size and its base price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    /// Display name (e.g., "Medium")
    pub name: String,

    /// Base price of a pizza of this size
    pub price: Price,
}

impl SizeOption {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The menu the form offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Sizes in display order, unique names
    pub sizes: Vec<SizeOption>,

    /// Mutually exclusive crust types
    pub crusts: Vec<String>,

    /// Toppings in display order
    pub toppings: Vec<String>,

    /// Price charged per topping
    pub topping_price: Price,

    /// Sales tax rate
    pub tax_rate: TaxRate,
}

impl Catalog {
    /// Build the standard menu
    pub fn standard() -> Self {
        Self {
            sizes: SIZES
                .iter()
                .map(|(name, cents)| SizeOption::new(*name, Price::from_cents(*cents)))
                .collect(),
            crusts: CRUSTS.iter().map(|c| c.to_string()).collect(),
            toppings: TOPPINGS.iter().map(|t| t.to_string()).collect(),
            topping_price: Price::from_cents(TOPPING_PRICE_CENTS),
            tax_rate: TaxRate::from_bps(TAX_RATE_BPS),
        }
    }

    /// Find a size by exact name
    pub fn size(&self, name: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.name == name)
    }

    /// Size at a menu position
    pub fn size_at(&self, index: usize) -> Option<&SizeOption> {
        self.sizes.get(index)
    }

    /// Base price for a size name
    pub fn size_price(&self, name: &str) -> Option<Price> {
        self.size(name).map(|s| s.price)
    }

    /// Check if a crust type is on the menu
    pub fn has_crust(&self, name: &str) -> bool {
        self.crusts.iter().any(|c| c == name)
    }

    /// Check if a topping is on the menu
    pub fn has_topping(&self, name: &str) -> bool {
        self.toppings.iter().any(|t| t == name)
    }

    /// Menu position of a topping
    pub fn topping_index(&self, name: &str) -> Option<usize> {
        self.toppings.iter().position(|t| t == name)
    }

    /// Case-insensitive size lookup, returning the menu name
    pub fn find_size(&self, input: &str) -> Option<&str> {
        self.sizes
            .iter()
            .map(|s| s.name.as_str())
            .find(|name| name.eq_ignore_ascii_case(input.trim()))
    }

    /// Case-insensitive crust lookup, returning the menu name
    pub fn find_crust(&self, input: &str) -> Option<&str> {
        find_ignore_case(&self.crusts, input)
    }

    /// Case-insensitive topping lookup, returning the menu name
    pub fn find_topping(&self, input: &str) -> Option<&str> {
        find_ignore_case(&self.toppings, input)
    }

    /// Size names in menu order
    pub fn size_names(&self) -> impl Iterator<Item = &str> {
        self.sizes.iter().map(|s| s.name.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn find_ignore_case<'a>(names: &'a [String], input: &str) -> Option<&'a str> {
    names
        .iter()
        .map(String::as_str)
        .find(|name| name.eq_ignore_ascii_case(input.trim()))
}

/// The process-wide standard catalog
pub fn standard_catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::standard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = Catalog::standard();

        assert_eq!(
            catalog.size_names().collect::<Vec<_>>(),
            vec!["Small", "Medium", "Large", "Super"]
        );
        assert_eq!(catalog.crusts, vec!["Thin", "Regular", "Deep-dish"]);
        assert_eq!(catalog.toppings.len(), 6);
        assert_eq!(catalog.toppings[5], "Extra Cheese");
        assert_eq!(catalog.topping_price, Price::from_cents(100));
        assert_eq!(catalog.tax_rate.fraction(), Decimal::new(7, 2));
    }

    #[test]
    fn test_size_lookup() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.size_price("Medium"), Some(Price::from_cents(1200)));
        assert_eq!(catalog.size_price("Super"), Some(Price::from_cents(2000)));
        assert_eq!(catalog.size_price("medium"), None);
        assert_eq!(catalog.size_at(0).map(|s| s.name.as_str()), Some("Small"));
        assert!(catalog.size_at(4).is_none());
    }

    #[test]
    fn test_membership() {
        let catalog = Catalog::standard();

        assert!(catalog.has_crust("Deep-dish"));
        assert!(!catalog.has_crust("Stuffed"));
        assert!(catalog.has_topping("Bacon"));
        assert!(!catalog.has_topping("Pineapple"));
        assert_eq!(catalog.topping_index("Onions"), Some(2));
    }

    #[test]
    fn test_find_ignores_case() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.find_size(" large "), Some("Large"));
        assert_eq!(catalog.find_crust("deep-dish"), Some("Deep-dish"));
        assert_eq!(catalog.find_topping("EXTRA CHEESE"), Some("Extra Cheese"));
        assert_eq!(catalog.find_topping("anchovies"), None);
    }

    #[test]
    fn test_shared_catalog_is_standard() {
        assert_eq!(standard_catalog(), &Catalog::standard());
        assert!(std::ptr::eq(standard_catalog(), standard_catalog()));
    }
}
