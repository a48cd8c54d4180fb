//! # Form Prompts
//!
//! The seam between the event loop and whatever draws the form.
//! [`TerminalPrompt`] draws it with `dialoguer` menus; tests script it.

use crate::app::FormAction;
use crate::config::FormConfig;
use crate::form::OrderForm;
use colored::Colorize;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, MultiSelect, Select};
use pizza_core::SizeOption;

/// Input and output of the order form.
///
/// Every `choose_*` method returns `None` when the user backs out, in which
/// case the form is left unchanged.
pub trait FormPrompt {
    /// Show the form and ask for the next action.
    fn choose_action(&mut self, form: &OrderForm<'_>) -> anyhow::Result<FormAction>;

    /// Ask for a crust type.
    ///
    /// # Arguments
    /// * `crusts` - Crust names in menu order
    /// * `current` - Position of the selected crust, if any
    fn choose_crust(&mut self, crusts: &[String], current: Option<usize>) -> anyhow::Result<Option<usize>>;

    /// Ask for a size, starting from the current one.
    fn choose_size(&mut self, sizes: &[SizeOption], current: usize) -> anyhow::Result<Option<usize>>;

    /// Ask which toppings should be checked. Returns the checked positions.
    fn choose_toppings(&mut self, toppings: &[String], checked: &[bool]) -> anyhow::Result<Option<Vec<usize>>>;

    /// Show the order display text.
    fn show_receipt(&mut self, text: &str) -> anyhow::Result<()>;

    /// Show a dismissible warning.
    fn warn(&mut self, title: &str, message: &str) -> anyhow::Result<()>;

    /// Ask a yes/no question. Defaults to no.
    fn confirm(&mut self, title: &str, message: &str) -> anyhow::Result<bool>;
}

/// Interactive terminal rendition of the form
pub struct TerminalPrompt {
    title: String,
    theme: Box<dyn Theme>,
}

impl TerminalPrompt {
    pub fn new(config: &FormConfig) -> Self {
        let theme: Box<dyn Theme> = if config.color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };

        Self {
            title: config.title.clone(),
            theme,
        }
    }

    fn print_status(&self, form: &OrderForm<'_>) {
        println!();
        println!("{}", self.title.bold());
        println!("  {:<10} {}", "Crust:", form.crust().unwrap_or("-"));
        println!("  {:<10} {}", "Size:", form.size().unwrap_or("-"));

        let toppings = form.checked_toppings();
        if toppings.is_empty() {
            println!("  {:<10} -", "Toppings:");
        } else {
            println!("  {:<10} {}", "Toppings:", toppings.join(", "));
        }
        println!();
    }
}

impl FormPrompt for TerminalPrompt {
    fn choose_action(&mut self, form: &OrderForm<'_>) -> anyhow::Result<FormAction> {
        self.print_status(form);

        let labels: Vec<&str> = FormAction::ALL.iter().map(FormAction::label).collect();
        let choice = Select::with_theme(&*self.theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(3)
            .interact_opt()?;

        // Escape behaves like the Quit button
        Ok(choice.map_or(FormAction::Quit, |i| FormAction::ALL[i]))
    }

    fn choose_crust(&mut self, crusts: &[String], current: Option<usize>) -> anyhow::Result<Option<usize>> {
        Ok(Select::with_theme(&*self.theme)
            .with_prompt("Crust Type")
            .items(crusts)
            .default(current.unwrap_or(0))
            .interact_opt()?)
    }

    fn choose_size(&mut self, sizes: &[SizeOption], current: usize) -> anyhow::Result<Option<usize>> {
        let labels: Vec<String> = sizes
            .iter()
            .map(|s| format!("{:<8} {}", s.name, s.price.display()))
            .collect();

        Ok(Select::with_theme(&*self.theme)
            .with_prompt("Pizza Size")
            .items(&labels)
            .default(current)
            .interact_opt()?)
    }

    fn choose_toppings(&mut self, toppings: &[String], checked: &[bool]) -> anyhow::Result<Option<Vec<usize>>> {
        Ok(MultiSelect::with_theme(&*self.theme)
            .with_prompt("Toppings (space to check, enter to accept)")
            .items(toppings)
            .defaults(checked)
            .interact_opt()?)
    }

    fn show_receipt(&mut self, text: &str) -> anyhow::Result<()> {
        println!();
        println!("{}", "Order Details".bold());
        print!("{}", text);
        Ok(())
    }

    fn warn(&mut self, title: &str, message: &str) -> anyhow::Result<()> {
        println!();
        println!("{} {}", "⚠".yellow(), title.yellow().bold());
        println!("  {}", message);
        Ok(())
    }

    fn confirm(&mut self, title: &str, message: &str) -> anyhow::Result<bool> {
        println!();
        println!("{}", title.bold());
        Ok(Confirm::with_theme(&*self.theme)
            .with_prompt(message)
            .default(false)
            .interact()?)
    }
}
