//! Interactive prompts.

use std::io::IsTerminal;

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{LsiError, Result};

/// Question asked when nothing else decides serial masking.
pub const HIDE_SERIALS_PROMPT: &str = "Hide serial numbers?";

/// Convert dialoguer errors to LsiError.
fn map_dialoguer_err(e: dialoguer::Error) -> LsiError {
    LsiError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Whether a question can be asked: stdin and the prompt terminal are TTYs.
pub fn can_prompt(term: &Term) -> bool {
    std::io::stdin().is_terminal() && term.is_term()
}

/// Ask whether serial numbers should be masked. Defaults to yes.
pub fn ask_hide_serials(term: &Term) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt(HIDE_SERIALS_PROMPT)
        .default(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

/// Settle the masking preference.
///
/// An explicit choice (CLI flag or config) wins; otherwise `ask` is used
/// when interactive, and masking is on when it is not.
pub fn resolve_hide_serials<F>(explicit: Option<bool>, interactive: bool, ask: F) -> Result<bool>
where
    F: FnOnce() -> Result<bool>,
{
    match explicit {
        Some(choice) => Ok(choice),
        None if interactive => ask(),
        None => Ok(true),
    }
}
