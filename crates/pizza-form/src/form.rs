//! # Order Form State
//!
//! Everything the form's controls hold: the crust radio group, the size
//! combo box, the topping check boxes, and the read-only order display.
//! The pricing core never sees this state, only the [`Selection`] built from it.

use pizza_core::{compute_receipt, Catalog, OrderResult, Receipt, Selection};

/// Widget state of the order form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm<'a> {
    catalog: &'a Catalog,
    crust: Option<usize>,
    size: usize,
    toppings: Vec<bool>,
    display: String,
}

impl<'a> OrderForm<'a> {
    /// A blank form: no crust, first size, no toppings, empty display
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            crust: None,
            size: 0,
            toppings: vec![false; catalog.toppings.len()],
            display: String::new(),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Pick a crust by menu position. Out-of-range positions are ignored.
    pub fn select_crust(&mut self, index: usize) -> bool {
        if index < self.catalog.crusts.len() {
            self.crust = Some(index);
            true
        } else {
            false
        }
    }

    pub fn crust_index(&self) -> Option<usize> {
        self.crust
    }

    pub fn crust(&self) -> Option<&'a str> {
        let catalog = self.catalog;
        self.crust
            .and_then(|i| catalog.crusts.get(i))
            .map(String::as_str)
    }

    /// Pick a size by menu position. Out-of-range positions are ignored.
    pub fn select_size(&mut self, index: usize) -> bool {
        if index < self.catalog.sizes.len() {
            self.size = index;
            true
        } else {
            false
        }
    }

    pub fn size_index(&self) -> usize {
        self.size
    }

    pub fn size(&self) -> Option<&'a str> {
        let catalog = self.catalog;
        catalog.size_at(self.size).map(|s| s.name.as_str())
    }

    /// Flip a topping check box, returning its new state
    pub fn toggle_topping(&mut self, index: usize) -> Option<bool> {
        let checked = self.toppings.get_mut(index)?;
        *checked = !*checked;
        Some(*checked)
    }

    /// Set a topping check box
    pub fn set_topping(&mut self, index: usize, checked: bool) -> bool {
        match self.toppings.get_mut(index) {
            Some(slot) => {
                *slot = checked;
                true
            }
            None => false,
        }
    }

    /// Check exactly the toppings at the given positions
    pub fn set_checked_toppings(&mut self, indices: &[usize]) {
        self.toppings.iter_mut().for_each(|t| *t = false);
        for &index in indices {
            self.set_topping(index, true);
        }
    }

    /// Check box states in menu order
    pub fn topping_states(&self) -> &[bool] {
        &self.toppings
    }

    /// Names of the checked toppings in menu order
    pub fn checked_toppings(&self) -> Vec<&'a str> {
        let catalog = self.catalog;
        catalog
            .toppings
            .iter()
            .zip(&self.toppings)
            .filter(|(_, checked)| **checked)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Text currently in the order display
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Snapshot the controls as a selection
    pub fn selection(&self) -> Selection {
        Selection {
            crust: self.crust().map(str::to_string),
            size: self.size().map(str::to_string),
            toppings: self.checked_toppings().into_iter().map(str::to_string).collect(),
        }
    }

    /// Price the current selection.
    ///
    /// On success the display shows the rendered receipt. On failure the
    /// display keeps whatever it showed before.
    pub fn submit(&mut self) -> OrderResult<Receipt> {
        let receipt = compute_receipt(&self.selection(), self.catalog)?;
        self.display = receipt.render();
        Ok(receipt)
    }

    /// Clear every control and the display
    pub fn reset(&mut self) {
        *self = Self::new(self.catalog);
    }
}
