//! # Pizza Order
//!
//! Compose a pizza order and get an itemized receipt.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive form
//! pizza-order
//!
//! # One-off quote
//! pizza-order quote --crust thin --size medium --topping pepperoni --topping mushrooms
//!
//! # Show the menu
//! pizza-order menu
//! ```

use clap::Parser;
use pizza_core::standard_catalog;
use pizza_form::{cli, logging, run_form, Cli, Commands, FormConfig, OrderForm, TerminalPrompt};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init();

    let command = Cli::parse().command.unwrap_or(Commands::Form);
    let config = FormConfig::from_env();
    config.apply_color();

    let catalog = standard_catalog();

    match command {
        Commands::Form => {
            print_banner(&config);
            info!(title = %config.title, "order form opened");

            let mut form = OrderForm::new(catalog);
            let mut prompt = TerminalPrompt::new(&config);
            run_form(&mut form, &mut prompt)?;
        }
        Commands::Quote(args) => {
            let code = cli::run_quote(
                &args,
                catalog,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )?;
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Menu { json } => {
            cli::print_menu(catalog, json, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}

fn print_banner(config: &FormConfig) {
    println!(
        r#"
  🍕 {} 🍕
  ━━━━━━━━━━━━━━━━━━━━━━━
  Version: {}
"#,
        config.title,
        env!("CARGO_PKG_VERSION")
    );
}
