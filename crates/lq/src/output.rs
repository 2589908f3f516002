//! Output formatting utilities for the lq CLI.
//!
//! Query parameter pairs are printed one per line as `key=value`, or as a
//! JSON array of `[key, value]` pairs when `--json` is set.

use listq_filter::Notifier;
use owo_colors::OwoColorize;

use crate::commands::Result;

/// Reports non-fatal errors on stderr.
pub struct StderrNotifier {
    use_colors: bool,
}

impl StderrNotifier {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Notifier for StderrNotifier {
    fn error(&self, message: &str) {
        eprintln!("{}", format_error_line(message, self.use_colors));
    }
}

/// Formats an error line with an `Error:` label.
pub fn format_error_line(message: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "Error:".red().bold(), message)
    } else {
        format!("Error: {message}")
    }
}

/// Formats query pairs as `key=value` lines.
///
/// Keys are dimmed when colors are enabled so the values stand out.
pub fn format_pairs_table<'a, I>(pairs: I, use_colors: bool) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut output = String::new();
    for (key, value) in pairs {
        if use_colors {
            output.push_str(&format!("{}{}{}\n", key.dimmed(), "=".dimmed(), value));
        } else {
            output.push_str(&format!("{key}={value}\n"));
        }
    }
    output
}

/// Formats query pairs as a pretty JSON array of `[key, value]` arrays.
pub fn format_pairs_json<'a, I>(pairs: I) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let pairs: Vec<[&str; 2]> = pairs.into_iter().map(|(k, v)| [k, v]).collect();
    Ok(serde_json::to_string_pretty(&pairs)?)
}

/// Formats a one-page list summary.
pub fn format_page_summary(
    count: usize,
    total: Option<i64>,
    cursor: Option<&str>,
    use_colors: bool,
) -> String {
    let mut output = String::new();

    let header = match total {
        Some(total) => format!("{count} of {total} records"),
        None => format!("{count} records"),
    };
    if use_colors {
        output.push_str(&format!("{}\n", header.bold()));
    } else {
        output.push_str(&format!("{header}\n"));
    }

    if let Some(cursor) = cursor {
        if use_colors {
            output.push_str(&format!("{} {}\n", "Next cursor:".dimmed(), cursor));
        } else {
            output.push_str(&format!("Next cursor: {cursor}\n"));
        }
    }

    output
}
