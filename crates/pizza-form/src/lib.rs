//! # pizza-form
//!
//! Terminal order form for pizza-core.
//!
//! This crate provides:
//! - `OrderForm`, the state behind the form's controls
//! - `FormPrompt` and its `dialoguer` implementation `TerminalPrompt`
//! - `run_form()`, the event loop (crust, size, toppings, order, clear, quit)
//! - The `pizza-order` command line (`form`, `quote`, `menu`)
//! - `FormConfig`, loaded from the environment
//! - `logging`, the stderr `tracing` subscriber

pub mod app;
pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod prompt;

pub use app::{run_form, FormAction};
pub use cli::{Cli, Commands, QuoteArgs};
pub use config::FormConfig;
pub use form::OrderForm;
pub use prompt::{FormPrompt, TerminalPrompt};
