//! # Form Configuration
//!
//! Presentation settings for the order form, loaded from the environment
//! (and `.env` if present). Nothing here affects pricing.

/// Default window title
pub const DEFAULT_TITLE: &str = "Silas's Pizza Order System";

/// Form configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Title shown above the form
    pub title: String,
    /// Colored terminal output
    pub color: bool,
}

impl FormConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test fixtures)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());

        Self {
            title: lookup("PIZZA_FORM_TITLE")
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            color: !no_color
                && lookup("PIZZA_FORM_COLOR")
                    .and_then(|v| parse_bool(&v))
                    .unwrap_or(true),
        }
    }

    /// Apply the color setting to terminal output
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            color: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
