//! # Selection
//!
//! A snapshot of the customer's choices, captured from the form when an
//! order is placed and handed to [`compute_receipt`](crate::compute_receipt).

use crate::catalog::Catalog;
use crate::error::MissingChoice;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Crust, size, and toppings chosen for one pizza
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Crust type, if one is chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crust: Option<String>,

    /// Size name, if one is chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Chosen toppings (may be empty)
    #[serde(default)]
    pub toppings: BTreeSet<String>,
}

impl Selection {
    /// A selection with nothing chosen
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder: set crust
    pub fn with_crust(mut self, crust: impl Into<String>) -> Self {
        self.crust = Some(crust.into());
        self
    }

    /// Builder: set size
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Builder: add a topping
    pub fn with_topping(mut self, topping: impl Into<String>) -> Self {
        self.toppings.insert(topping.into());
        self
    }

    /// Builder: add several toppings
    pub fn with_toppings<I, T>(mut self, toppings: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.toppings.extend(toppings.into_iter().map(Into::into));
        self
    }

    /// Choices still missing. Names not on the menu count as missing.
    pub fn missing_choices(&self, catalog: &Catalog) -> Vec<MissingChoice> {
        let mut missing = Vec::new();

        if !self.crust.as_deref().is_some_and(|c| catalog.has_crust(c)) {
            missing.push(MissingChoice::Crust);
        }
        if !self.size.as_deref().is_some_and(|s| catalog.size(s).is_some()) {
            missing.push(MissingChoice::Size);
        }
        if !self.toppings.iter().any(|t| catalog.has_topping(t)) {
            missing.push(MissingChoice::Toppings);
        }

        missing
    }

    /// Check if the selection can be priced
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        self.missing_choices(catalog).is_empty()
    }
}
