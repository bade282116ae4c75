//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use console::Term;

use crate::cli::args::{Cli, Commands};
use crate::config::load_config;
use crate::error::Result;
use crate::shell::{is_elevated, ToolRunner};
use crate::ui::{ask_hide_serials, can_prompt, resolve_hide_serials, should_use_colors};

use super::completions::CompletionsCommand;
use super::show::{ShowCommand, ShowOptions};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    runner: Box<dyn ToolRunner>,
}

impl CommandDispatcher {
    /// Create a dispatcher that runs tools through `runner`.
    pub fn new(runner: Box<dyn ToolRunner>) -> Self {
        Self { runner }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Completions(args)) => {
                CompletionsCommand::new(args.clone()).execute(out)
            }
            Some(Commands::Show) | None => self.show(cli, out),
        }
    }

    fn show(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let mut config = load_config(cli.config.as_deref())?;
        if let Some(controller) = cli.controller {
            config.controller = controller;
        }

        let stderr = Term::stderr();
        // JSON output is meant for scripts and never prompts.
        let interactive = !cli.json && can_prompt(&stderr);
        let hide_serials = resolve_hide_serials(
            cli.serials_choice().or(config.hide_serials),
            interactive,
            || ask_hide_serials(&stderr),
        )?;

        let options = ShowOptions {
            json: cli.json,
            colors: !cli.no_color && should_use_colors(),
            hide_serials,
            progress: show_progress(
                cli.debug,
                stderr.is_term(),
                config.sudo.wants_sudo(is_elevated()),
            ),
        };

        ShowCommand::new(self.runner.as_ref(), config, options).execute(out)
    }
}

/// Whether to draw the stage spinner on stderr.
///
/// The spinner redraws its line continuously, which would erase a sudo
/// password prompt written to the same terminal.
fn show_progress(debug: bool, on_terminal: bool, uses_sudo: bool) -> bool {
    !debug && on_terminal && !uses_sudo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn spinner_only_on_terminal_without_sudo() {
        assert!(show_progress(false, true, false));
        assert!(!show_progress(false, false, false));
        assert!(!show_progress(true, true, false));
    }

    #[test]
    fn spinner_stays_off_when_sudo_may_prompt() {
        assert!(!show_progress(false, true, true));
        assert!(!show_progress(
            false,
            true,
            crate::config::SudoPolicy::Auto.wants_sudo(false)
        ));
        assert!(show_progress(
            false,
            true,
            crate::config::SudoPolicy::Auto.wants_sudo(true)
        ));
    }

    #[test]
    fn missing_config_is_an_error() {
        let dispatcher = CommandDispatcher::new(Box::new(MockRunner::new()));
        let cli =
            Cli::try_parse_from(["lsishow", "--config", "/nonexistent/lsishow.yml"]).unwrap();

        let mut out = Vec::new();
        assert!(dispatcher.dispatch(&cli, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn default_command_prints_report() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yml");
        fs::write(&config, "controller: 0\n").unwrap();

        let dispatcher = CommandDispatcher::new(Box::new(MockRunner::new()));
        let cli = Cli::try_parse_from([
            "lsishow",
            "--config",
            config.to_str().unwrap(),
            "--show-serials",
            "--no-color",
        ])
        .unwrap();

        let mut out = Vec::new();
        let result = dispatcher.dispatch(&cli, &mut out).unwrap();

        assert!(result.success);
        let report = String::from_utf8(out).unwrap();
        assert!(report.starts_with("LSI Controller Summary\n"));
    }

    #[test]
    fn controller_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yml");
        fs::write(&config, "controller: 0\n").unwrap();

        let runner = std::rc::Rc::new(MockRunner::new());
        let dispatcher = CommandDispatcher::new(Box::new(SharedRunner(runner.clone())));
        let cli = Cli::try_parse_from([
            "lsishow",
            "--config",
            config.to_str().unwrap(),
            "--controller",
            "3",
            "--hide-serials",
        ])
        .unwrap();

        dispatcher.dispatch(&cli, &mut Vec::new()).unwrap();

        assert!(runner.calls().iter().any(|c| c == "storcli64 /c3 show"));
    }

    struct SharedRunner(std::rc::Rc<MockRunner>);

    impl ToolRunner for SharedRunner {
        fn run(
            &self,
            command: &crate::shell::ToolCommand,
        ) -> Result<crate::shell::CommandResult> {
            self.0.run(command)
        }
    }
}
