//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`]; running without a subcommand is `show`.

pub mod completions;
pub mod dispatcher;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use show::{ShowCommand, ShowOptions};
