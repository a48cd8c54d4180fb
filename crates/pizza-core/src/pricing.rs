//! # Pricing
//!
//! Turns a [`Selection`] into a [`Receipt`], or reports why it can't.
//! Pure: no I/O, no shared mutable state.

use crate::catalog::Catalog;
use crate::error::{OrderError, OrderResult};
use crate::receipt::Receipt;
use crate::selection::Selection;

/// Validate a selection and price it against the catalog.
///
/// A selection is complete when it names a crust, a size, and at least one
/// topping on the menu. Names not on the menu are treated as not chosen.
/// Topping lines follow menu order, not the order they were picked.
///
/// # Errors
/// [`OrderError::IncompleteSelection`] when anything is missing. No partial
/// receipt is produced.
pub fn compute_receipt(selection: &Selection, catalog: &Catalog) -> OrderResult<Receipt> {
    let crust = selection
        .crust
        .as_deref()
        .filter(|crust| catalog.has_crust(crust));
    let size = selection.size.as_deref().and_then(|size| catalog.size(size));
    let topping_lines: Vec<String> = catalog
        .toppings
        .iter()
        .filter(|topping| selection.toppings.contains(*topping))
        .cloned()
        .collect();

    match (crust, size) {
        (Some(crust), Some(size)) if !topping_lines.is_empty() => Ok(Receipt::new(
            size.clone(),
            crust.to_string(),
            topping_lines,
            catalog.topping_price,
            catalog.tax_rate,
        )),
        _ => Err(OrderError::IncompleteSelection {
            missing: selection.missing_choices(catalog),
        }),
    }
}

/// Alias of [`compute_receipt`]
pub fn price_order(selection: &Selection, catalog: &Catalog) -> OrderResult<Receipt> {
    compute_receipt(selection, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingChoice;
    use crate::price::Price;

    #[test]
    fn test_scenario_medium_thin() {
        let catalog = Catalog::standard();
        let selection = Selection::empty()
            .with_crust("Thin")
            .with_size("Medium")
            .with_toppings(["Pepperoni", "Mushrooms"]);

        let receipt = compute_receipt(&selection, &catalog).unwrap();

        assert_eq!(receipt.subtotal(), Price::from_cents(1400));
        assert_eq!(receipt.tax().rounded(), Price::from_cents(98));
        assert_eq!(receipt.total().rounded(), Price::from_cents(1498));
        assert_eq!(receipt.crust_label(), "Thin");
        assert_eq!(receipt.size_line().name, "Medium");
    }

    #[test]
    fn test_toppings_follow_menu_order() {
        let catalog = Catalog::standard();
        let selection = Selection::empty()
            .with_crust("Regular")
            .with_size("Large")
            .with_topping("Extra Cheese")
            .with_topping("Bacon")
            .with_topping("Pepperoni");

        let receipt = compute_receipt(&selection, &catalog).unwrap();

        assert_eq!(receipt.topping_lines(), &["Pepperoni", "Bacon", "Extra Cheese"]);
    }

    #[test]
    fn test_unknown_toppings_are_ignored() {
        let catalog = Catalog::standard();
        let selection = Selection::empty()
            .with_crust("Thin")
            .with_size("Small")
            .with_toppings(["Onions", "Pineapple"]);

        let receipt = compute_receipt(&selection, &catalog).unwrap();

        assert_eq!(receipt.topping_lines(), &["Onions"]);
        assert_eq!(receipt.subtotal(), Price::from_cents(900));
    }

    #[test]
    fn test_incomplete_selection() {
        let catalog = Catalog::standard();
        let selection = Selection::empty().with_size("Large").with_topping("Bacon");

        let err = compute_receipt(&selection, &catalog).unwrap_err();

        assert_eq!(
            err,
            OrderError::IncompleteSelection {
                missing: vec![MissingChoice::Crust]
            }
        );
    }

    #[test]
    fn test_price_order_matches_compute_receipt() {
        let catalog = Catalog::standard();
        let selection = Selection::empty()
            .with_crust("Deep-dish")
            .with_size("Super")
            .with_topping("Sausage");

        assert_eq!(
            price_order(&selection, &catalog),
            compute_receipt(&selection, &catalog)
        );
    }
}
