//! The `show` command: collect and print the summary.

use std::io::Write;

use crate::config::LsiConfig;
use crate::error::Result;
use crate::inventory::{Collector, STAGES};
use crate::report::{render_json, render_text, ReportPolicy};
use crate::shell::ToolRunner;
use crate::ui::{ProgressSpinner, ReportTheme};

use super::dispatcher::{Command, CommandResult};

/// How the report is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowOptions {
    /// Print JSON instead of text.
    pub json: bool,
    /// Style temperatures with colors.
    pub colors: bool,
    /// Mask serial numbers.
    pub hide_serials: bool,
    /// Draw a spinner on stderr while collecting.
    pub progress: bool,
}

/// The show command implementation.
pub struct ShowCommand<'a> {
    runner: &'a dyn ToolRunner,
    config: LsiConfig,
    options: ShowOptions,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(runner: &'a dyn ToolRunner, config: LsiConfig, options: ShowOptions) -> Self {
        Self {
            runner,
            config,
            options,
        }
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let spinner = if self.options.progress {
            ProgressSpinner::new(STAGES[0])
        } else {
            ProgressSpinner::hidden()
        };

        let inventory =
            Collector::new(self.runner, &self.config).collect_with_progress(|p| spinner.stage(p));
        spinner.finish();

        tracing::debug!(
            "Collected {} drive(s) from controller /c{}",
            inventory.drives.len(),
            self.config.controller
        );

        let policy = ReportPolicy::from_config(&self.config, self.options.hide_serials);
        let report = if self.options.json {
            render_json(&inventory, &policy)?
        } else {
            render_text(
                &inventory,
                &policy,
                &ReportTheme::for_output(self.options.colors),
            )
        };

        out.write_all(report.as_bytes())?;
        out.flush()?;
        Ok(CommandResult::success())
    }
}
