//! Mock tool runner for testing.
//!
//! `MockRunner` implements [`ToolRunner`] by serving canned output keyed by
//! the command line (without any `sudo` prefix) and records every call.
//!
//! # Example
//!
//! ```
//! use lsishow::shell::{MockRunner, ToolCommand, ToolRunner};
//!
//! let mut runner = MockRunner::new();
//! runner.set_output("lspci", "00:00.0 Host bridge: Intel");
//!
//! let output = runner.capture(&ToolCommand::new("lspci")).unwrap();
//! assert!(output.contains("Host bridge"));
//! assert_eq!(runner.calls(), vec!["lspci".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{LsiError, Result};

use super::command::{CommandResult, ToolCommand, ToolRunner};

#[derive(Debug, Clone)]
enum Canned {
    Exit { code: i32, output: String },
    Unavailable,
}

/// Tool runner serving pre-configured responses.
///
/// Commands without a configured response are reported as unavailable.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, Canned>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner with no responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `key` with successful output.
    pub fn set_output(&mut self, key: &str, output: &str) {
        self.set_exit(key, 0, output);
    }

    /// Respond to `key` with the given exit code and output.
    pub fn set_exit(&mut self, key: &str, code: i32, output: &str) {
        self.responses.insert(
            key.to_string(),
            Canned::Exit {
                code,
                output: output.to_string(),
            },
        );
    }

    /// Report `key` as not installed.
    pub fn set_unavailable(&mut self, key: &str) {
        self.responses.insert(key.to_string(), Canned::Unavailable);
    }

    /// Command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ToolRunner for MockRunner {
    fn run(&self, command: &ToolCommand) -> Result<CommandResult> {
        let key = command.key();
        self.calls.borrow_mut().push(key.clone());

        match self.responses.get(&key) {
            Some(Canned::Exit { code: 0, output }) => Ok(CommandResult::success(output.clone())),
            Some(Canned::Exit { code, output }) => {
                Ok(CommandResult::failure(Some(*code), output.clone()))
            }
            Some(Canned::Unavailable) | None => Err(LsiError::ToolUnavailable {
                tool: command.program.clone(),
            }),
        }
    }
}
