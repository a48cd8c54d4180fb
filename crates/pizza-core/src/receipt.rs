//! # Receipt
//!
//! The itemized price breakdown for a complete selection, and its
//! fixed-width text rendering.
//!
//! ```text
//! =========================================
//! Type of Crust & Size           $ 12.00
//! Thin Crust, Medium
//! Ingredient                     $  1.00
//! Pepperoni
//! Mushrooms
//!
//! Sub-total:                     $ 14.00
//! Tax:                           $  0.98
//! ---------------------------------------------
//! Total:                         $ 14.98
//! =========================================
//! ```

use crate::catalog::SizeOption;
use crate::price::{Price, TaxRate};
use serde::Serialize;
use std::fmt;

/// Width of the label column
pub const LABEL_WIDTH: usize = 30;

/// Rule printed at the top and bottom of the receipt
pub const BORDER_RULE: &str = "=========================================";

/// Rule printed above the total
pub const TOTAL_RULE: &str = "---------------------------------------------";

/// A priced order. Built by [`compute_receipt`](crate::compute_receipt) and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    size_line: SizeOption,
    crust_label: String,
    topping_lines: Vec<String>,
    topping_price: Price,
    tax_rate: TaxRate,
    subtotal: Price,
    tax: Price,
    total: Price,
}

impl Receipt {
    /// Compute the totals for a size, crust, and toppings already in menu order
    pub(crate) fn new(
        size_line: SizeOption,
        crust_label: String,
        topping_lines: Vec<String>,
        topping_price: Price,
        tax_rate: TaxRate,
    ) -> Self {
        let subtotal = size_line.price + topping_price.times(topping_lines.len());
        let tax = subtotal * tax_rate;
        let total = subtotal + tax;

        Self {
            size_line,
            crust_label,
            topping_lines,
            topping_price,
            tax_rate,
            subtotal,
            tax,
            total,
        }
    }

    /// Chosen size and its base price
    pub fn size_line(&self) -> &SizeOption {
        &self.size_line
    }

    /// Chosen crust type
    pub fn crust_label(&self) -> &str {
        &self.crust_label
    }

    /// Chosen toppings, in menu order
    pub fn topping_lines(&self) -> &[String] {
        &self.topping_lines
    }

    /// Unit price charged for each topping
    pub fn topping_price(&self) -> Price {
        self.topping_price
    }

    /// Tax rate applied
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Size price plus topping charges
    pub fn subtotal(&self) -> Price {
        self.subtotal
    }

    /// Unrounded tax on the subtotal
    pub fn tax(&self) -> Price {
        self.tax
    }

    /// Subtotal plus tax
    pub fn total(&self) -> Price {
        self.total
    }

    /// Render the fixed-width text shown in the order display
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(BORDER_RULE);
        out.push('\n');
        push_priced(&mut out, "Type of Crust & Size", self.size_line.price);
        push_label(
            &mut out,
            &format!("{} Crust, {}", self.crust_label, self.size_line.name),
        );

        push_priced(&mut out, "Ingredient", self.topping_price);
        for topping in &self.topping_lines {
            push_label(&mut out, topping);
        }

        out.push('\n');
        push_priced(&mut out, "Sub-total:", self.subtotal);
        push_priced(&mut out, "Tax:", self.tax);
        out.push_str(TOTAL_RULE);
        out.push('\n');
        push_priced(&mut out, "Total:", self.total);
        out.push_str(BORDER_RULE);
        out.push('\n');

        out
    }

    /// Serialize as pretty JSON.
    ///
    /// `subtotal`, `tax` and `total` keep full precision; `display` holds
    /// the same amounts rounded to cents, as printed by [`render`](Self::render).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ReceiptJson {
            receipt: self,
            display: DisplayAmounts {
                subtotal: self.subtotal.to_plain_string(),
                tax: self.tax.to_plain_string(),
                total: self.total.to_plain_string(),
            },
        })
    }
}

#[derive(Serialize)]
struct ReceiptJson<'a> {
    #[serde(flatten)]
    receipt: &'a Receipt,
    display: DisplayAmounts,
}

#[derive(Serialize)]
struct DisplayAmounts {
    subtotal: String,
    tax: String,
    total: String,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn push_label(out: &mut String, label: &str) {
    out.push_str(&format!("{:<width$}\n", label, width = LABEL_WIDTH));
}

fn push_priced(out: &mut String, label: &str, price: Price) {
    out.push_str(&format!(
        "{:<width$} {}\n",
        label,
        price.column(),
        width = LABEL_WIDTH
    ));
}
