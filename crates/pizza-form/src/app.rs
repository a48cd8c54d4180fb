//! # Form Event Loop
//!
//! Reacts to one user action at a time, synchronously, until a quit is
//! confirmed.
//!
//! ```text
//! ┌──────────────┐  action   ┌────────────┐  Selection  ┌──────────────┐
//! │  FormPrompt  │ ────────► │ OrderForm  │ ──────────► │ pizza-core   │
//! │  (terminal)  │ ◄──────── │  (state)   │ ◄────────── │ compute_...  │
//! └──────────────┘  receipt  └────────────┘   Receipt   └──────────────┘
//!                   / warning
//! ```

use crate::form::OrderForm;
use crate::prompt::FormPrompt;
use tracing::{debug, info};

/// Title of the quit confirmation
pub const QUIT_TITLE: &str = "Confirm Exit";

/// Question asked before quitting
pub const QUIT_MESSAGE: &str = "Are you sure you want to quit?";

/// Something the user can do on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Pick the crust type
    Crust,
    /// Pick the size
    Size,
    /// Check or uncheck toppings
    Toppings,
    /// Price the order and show the receipt
    Order,
    /// Reset every control and the display
    Clear,
    /// Exit after confirmation
    Quit,
}

impl FormAction {
    /// All actions in menu order
    pub const ALL: [FormAction; 6] = [
        FormAction::Crust,
        FormAction::Size,
        FormAction::Toppings,
        FormAction::Order,
        FormAction::Clear,
        FormAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormAction::Crust => "Crust Type",
            FormAction::Size => "Pizza Size",
            FormAction::Toppings => "Toppings",
            FormAction::Order => "Order",
            FormAction::Clear => "Clear",
            FormAction::Quit => "Quit",
        }
    }
}

/// Run the form until the user confirms quitting
pub fn run_form<P: FormPrompt + ?Sized>(form: &mut OrderForm<'_>, prompt: &mut P) -> anyhow::Result<()> {
    loop {
        let action = prompt.choose_action(form)?;
        debug!(?action, "form action");

        match action {
            FormAction::Crust => {
                let crusts = &form.catalog().crusts;
                if let Some(index) = prompt.choose_crust(crusts, form.crust_index())? {
                    form.select_crust(index);
                    debug!(crust = ?form.crust(), "crust selected");
                }
            }
            FormAction::Size => {
                let sizes = &form.catalog().sizes;
                if let Some(index) = prompt.choose_size(sizes, form.size_index())? {
                    form.select_size(index);
                    debug!(size = ?form.size(), "size selected");
                }
            }
            FormAction::Toppings => {
                let toppings = &form.catalog().toppings;
                if let Some(checked) = prompt.choose_toppings(toppings, form.topping_states())? {
                    form.set_checked_toppings(&checked);
                    debug!(toppings = ?form.checked_toppings(), "toppings updated");
                }
            }
            FormAction::Order => match form.submit() {
                Ok(receipt) => {
                    info!(
                        crust = receipt.crust_label(),
                        size = %receipt.size_line().name,
                        toppings = receipt.topping_lines().len(),
                        total = %receipt.total().display(),
                        "order priced"
                    );
                    prompt.show_receipt(form.display())?;
                }
                Err(err) => {
                    info!(missing = ?err.missing(), "incomplete order");
                    prompt.warn(err.title(), &err.to_string())?;
                }
            },
            FormAction::Clear => {
                form.reset();
                info!("form cleared");
            }
            FormAction::Quit => {
                if prompt.confirm(QUIT_TITLE, QUIT_MESSAGE)? {
                    info!("quit confirmed");
                    return Ok(());
                }
                debug!("quit cancelled");
            }
        }
    }
}
