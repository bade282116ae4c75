//! Terminal user interface components.
//!
//! This module provides:
//! - [`ReportTheme`] and color detection
//! - The serial masking prompt
//! - A progress spinner for the collection stages

pub mod prompts;
pub mod spinner;
pub mod theme;

pub use prompts::{ask_hide_serials, can_prompt, resolve_hide_serials, HIDE_SERIALS_PROMPT};
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, ReportTheme};
