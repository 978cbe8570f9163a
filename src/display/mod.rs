//! Display formatting for terminal output
//!
//! Turns expense records and summaries into plain text for the CLI.

pub mod expense;

pub use expense::{format_expense_details, format_import_preview, format_summary};

use crate::config::settings::Settings;

/// How amounts are rendered: rounded to whole units, digits grouped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormat {
    pub currency_symbol: String,
    pub thousands_separator: String,
}

impl AmountFormat {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            thousands_separator: settings.thousands_separator.clone(),
        }
    }

    /// Format an amount, e.g. `34 563 ₽`
    pub fn format(&self, amount: f64) -> String {
        let number = self.format_number(amount);
        if self.currency_symbol.is_empty() {
            number
        } else {
            format!("{} {}", number, self.currency_symbol)
        }
    }

    /// Round to the nearest whole unit and group digits by three
    pub fn format_number(&self, amount: f64) -> String {
        // `as` saturates, and -0.5 rounds to a plain 0
        let rounded = amount.round() as i64;
        let digits = rounded.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 4);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(ch);
        }

        if rounded < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
