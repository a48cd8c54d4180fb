//! # Command Line
//!
//! `pizza-order` opens the interactive form by default. `quote` prices a
//! single selection without prompting and `menu` prints the catalog.

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand};
use pizza_core::{compute_receipt, Catalog, Selection};
use std::io::Write;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "pizza-order")]
#[command(version)]
#[command(about = "Compose a pizza order and print an itemized receipt", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive order form (default)
    Form,
    /// Price one pizza without prompting
    Quote(QuoteArgs),
    /// Print sizes, crusts, toppings and the tax rate
    Menu {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Crust type (Thin, Regular, Deep-dish)
    #[arg(long)]
    pub crust: Option<String>,
    /// Size (Small, Medium, Large, Super)
    #[arg(long)]
    pub size: Option<String>,
    /// Topping to add; repeat for more
    #[arg(long = "topping", value_name = "TOPPING")]
    pub toppings: Vec<String>,
    /// Print the receipt as JSON
    #[arg(long)]
    pub json: bool,
}

impl QuoteArgs {
    /// Resolve names against the menu, ignoring case.
    ///
    /// Names that are not on the menu are rejected with the valid choices.
    pub fn to_selection(&self, catalog: &Catalog) -> anyhow::Result<Selection> {
        let mut selection = Selection::empty();

        if let Some(crust) = &self.crust {
            let name = catalog.find_crust(crust).ok_or_else(|| {
                anyhow!("Unknown crust '{}'. Choose one of: {}", crust, catalog.crusts.join(", "))
            })?;
            selection = selection.with_crust(name);
        }

        if let Some(size) = &self.size {
            let name = catalog.find_size(size).ok_or_else(|| {
                let sizes: Vec<&str> = catalog.size_names().collect();
                anyhow!("Unknown size '{}'. Choose one of: {}", size, sizes.join(", "))
            })?;
            selection = selection.with_size(name);
        }

        for topping in &self.toppings {
            let name = catalog.find_topping(topping).ok_or_else(|| {
                anyhow!(
                    "Unknown topping '{}'. Choose from: {}",
                    topping,
                    catalog.toppings.join(", ")
                )
            })?;
            selection = selection.with_topping(name);
        }

        Ok(selection)
    }
}

/// Price the quoted selection and write the receipt.
///
/// Returns the process exit status: 0 when priced, the error's exit code
/// when the selection is incomplete (the warning goes to `err`).
pub fn run_quote(
    args: &QuoteArgs,
    catalog: &Catalog,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<i32> {
    let selection = args.to_selection(catalog)?;

    match compute_receipt(&selection, catalog) {
        Ok(receipt) => {
            info!(total = %receipt.total().display(), "quote priced");
            if args.json {
                writeln!(out, "{}", receipt.to_json()?)?;
            } else {
                write!(out, "{}", receipt.render())?;
            }
            Ok(0)
        }
        Err(e) => {
            info!(missing = ?e.missing(), "incomplete quote");
            let missing: Vec<&str> = e.missing().iter().map(|m| m.as_str()).collect();
            writeln!(err, "{}: {}", e.title(), e)?;
            writeln!(err, "Missing: {}", missing.join(", "))?;
            Ok(e.exit_code())
        }
    }
}

/// Write the catalog as a plain listing or JSON
pub fn print_menu(catalog: &Catalog, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(catalog)?)?;
        return Ok(());
    }

    writeln!(out, "Sizes:")?;
    for size in &catalog.sizes {
        writeln!(out, "  {:<12} {}", size.name, size.price.display())?;
    }
    writeln!(out, "Crusts:")?;
    for crust in &catalog.crusts {
        writeln!(out, "  {}", crust)?;
    }
    writeln!(out, "Toppings ({} each):", catalog.topping_price.display())?;
    for topping in &catalog.toppings {
        writeln!(out, "  {}", topping)?;
    }
    writeln!(out, "Tax: {}", catalog.tax_rate)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::standard_catalog;
    use rstest::rstest;

    fn quote(args: &[&str]) -> (i32, String, String) {
        let cli = Cli::try_parse_from(std::iter::once("pizza-order").chain(args.iter().copied()))
            .unwrap();
        let Some(Commands::Quote(quote_args)) = cli.command else {
            panic!("expected quote command");
        };

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run_quote(&quote_args, standard_catalog(), &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_no_subcommand_opens_form() {
        let cli = Cli::try_parse_from(["pizza-order"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_quote_prints_receipt() {
        let (code, out, err) = quote(&[
            "quote", "--crust", "thin", "--size", "MEDIUM", "--topping", "mushrooms", "--topping",
            "Pepperoni",
        ]);

        assert_eq!(code, 0);
        assert!(err.is_empty());
        assert!(out.contains("Thin Crust, Medium"));
        assert!(out.find("Pepperoni") < out.find("Mushrooms"));
        assert!(out.contains("Total:                         $ 14.98\n"));
    }

    #[test]
    fn test_quote_json() {
        let (code, out, _) = quote(&[
            "quote", "--crust", "Deep-dish", "--size", "Super", "--topping", "Bacon", "--json",
        ]);

        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["crust_label"], "Deep-dish");
        assert_eq!(value["topping_lines"][0], "Bacon");
    }

    #[rstest]
    #[case::no_toppings(&["quote", "--crust", "Regular", "--size", "Small"], "at least one topping")]
    #[case::no_crust(&["quote", "--size", "Large", "--topping", "Bacon"], "crust type")]
    fn test_quote_incomplete(#[case] args: &[&str], #[case] missing: &str) {
        let (code, out, err) = quote(args);

        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err.starts_with(
            "Incomplete Order: Please select a crust type, size, and at least one topping."
        ));
        assert!(err.contains(missing));
    }

    #[test]
    fn test_unknown_names_rejected() {
        let args = QuoteArgs {
            crust: Some("Stuffed".to_string()),
            size: None,
            toppings: vec![],
            json: false,
        };

        let err = args.to_selection(standard_catalog()).unwrap_err();
        assert!(err.to_string().contains("Thin, Regular, Deep-dish"));

        let args = QuoteArgs {
            crust: None,
            size: None,
            toppings: vec!["Pineapple".to_string()],
            json: false,
        };
        assert!(args.to_selection(standard_catalog()).is_err());
    }

    #[test]
    fn test_menu_listing() {
        let mut out = Vec::new();
        print_menu(standard_catalog(), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  Medium       $12.00\n"));
        assert!(text.contains("Toppings ($1.00 each):"));
        assert!(text.contains("Tax: 7%"));
    }

    #[test]
    fn test_menu_json() {
        let mut out = Vec::new();
        print_menu(standard_catalog(), true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["sizes"][3]["name"], "Super");
        assert_eq!(value["toppings"].as_array().map(Vec::len), Some(6));
    }
}
