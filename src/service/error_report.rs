//! Error reports posted to the error channel.

use std::error::Error;

/// Discord's message length limit.
const MESSAGE_LIMIT: usize = 2000;

/// Formats an error and its source chain under a heading, fitted to one Discord message.
pub fn format_error_report(heading: &str, error: &(dyn Error + 'static)) -> String {
    let mut trace = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        trace.push_str("\nCaused by: ");
        trace.push_str(&cause.to_string());
        source = cause.source();
    }

    let opening = format!("{}\n```\n", heading);
    let closing = "\n```";
    let budget = MESSAGE_LIMIT.saturating_sub(opening.chars().count() + closing.len());
    if trace.chars().count() > budget {
        trace = trace.chars().take(budget).collect();
    }

    format!("{}{}{}", opening, trace, closing)
}
