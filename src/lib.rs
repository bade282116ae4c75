//! lsishow - LSI storage controller and drive summary.
//!
//! lsishow runs `lspci`, `hdsentinel` and `storcli64`, extracts structured
//! facts from their text output, joins them by slot and serial number, and
//! prints one summary of the controller and its drives with temperature
//! coloring and optional serial masking.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`inventory`] - Data model, correlation, and collection
//! - [`parse`] - Extractors for each tool's output
//! - [`report`] - Severity, masking, and rendering
//! - [`shell`] - External tool execution
//! - [`ui`] - Theme, prompt, and progress spinner
//!
//! # Example
//!
//! ```
//! use lsishow::config::LsiConfig;
//! use lsishow::inventory::Collector;
//! use lsishow::report::{render_text, ReportPolicy};
//! use lsishow::shell::MockRunner;
//! use lsishow::ui::ReportTheme;
//!
//! let mut runner = MockRunner::new();
//! runner.set_output(
//!     "lspci -vv",
//!     "01:00.0 Serial Attached SCSI controller: LSI SAS3008\n\tLnkSta:\tSpeed 8GT/s, Width x8\n",
//! );
//!
//! let config = LsiConfig::default();
//! let inventory = Collector::new(&runner, &config).collect();
//! let report = render_text(&inventory, &ReportPolicy::default(), &ReportTheme::plain());
//!
//! assert!(report.contains("Bus Interface:  PCI Express 3.0 x8"));
//! assert!(report.contains("Could not execute storcli. Is it in your PATH?"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod parse;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{LsiError, Result};
