//! # pizza-core
//!
//! Catalog, validation and pricing for the pizza order form.
//!
//! This crate provides:
//! - `Catalog` and `standard_catalog()` for the fixed menu
//! - `Selection` for the customer's choices
//! - `compute_receipt()` to validate and price a selection
//! - `Receipt` with its fixed-width text rendering
//! - `OrderError` for typed error handling
//!
//! No I/O happens here; the form shell captures choices and displays results.
//!
//! ## Example
//!
//! ```rust
//! use pizza_core::{compute_receipt, standard_catalog, Selection};
//!
//! let selection = Selection::empty()
//!     .with_crust("Thin")
//!     .with_size("Medium")
//!     .with_toppings(["Pepperoni", "Mushrooms"]);
//!
//! let receipt = compute_receipt(&selection, standard_catalog()).unwrap();
//! assert_eq!(receipt.total().display(), "$14.98");
//! print!("{}", receipt.render());
//! ```

pub mod catalog;
pub mod error;
pub mod price;
pub mod pricing;
pub mod receipt;
pub mod selection;

// Re-exports for convenience
pub use catalog::{standard_catalog, Catalog, SizeOption};
pub use error::{MissingChoice, OrderError, OrderResult};
pub use price::{Price, TaxRate};
pub use pricing::{compute_receipt, price_order};
pub use receipt::Receipt;
pub use selection::Selection;
