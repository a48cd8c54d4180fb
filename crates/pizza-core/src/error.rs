//! # Order Error Types
//!
//! Typed error handling for pricing an order.
//! Pricing returns `Result<Receipt, OrderError>`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A required choice the customer has not made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingChoice {
    /// No crust type selected
    Crust,
    /// No size selected
    Size,
    /// No toppings selected
    Toppings,
}

impl MissingChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingChoice::Crust => "crust type",
            MissingChoice::Size => "size",
            MissingChoice::Toppings => "at least one topping",
        }
    }
}

impl fmt::Display for MissingChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an order cannot be priced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Crust, size, or toppings missing
    #[error("Please select a crust type, size, and at least one topping.")]
    IncompleteSelection { missing: Vec<MissingChoice> },
}

impl OrderError {
    /// Title of the warning shown to the customer
    pub fn title(&self) -> &'static str {
        match self {
            OrderError::IncompleteSelection { .. } => "Incomplete Order",
        }
    }

    /// The choices that still need to be made
    pub fn missing(&self) -> &[MissingChoice] {
        match self {
            OrderError::IncompleteSelection { missing } => missing,
        }
    }

    /// Process exit status used by the non-interactive quote command
    pub fn exit_code(&self) -> i32 {
        match self {
            OrderError::IncompleteSelection { .. } => 2,
        }
    }
}

/// Result type alias for pricing operations
pub type OrderResult<T> = Result<T, OrderError>;
