//! External tool execution.

use crate::error::{LsiError, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

use super::platform::{parse_system_path, resolve_tool_path};

/// A fixed argument vector for one external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Program name or path (e.g. `lspci`, `./storcli64`).
    pub program: String,

    /// Arguments passed verbatim.
    pub args: Vec<String>,

    /// Run through `sudo`.
    pub sudo: bool,
}

impl ToolCommand {
    /// Create a command without arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            sudo: false,
        }
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set whether the command is run through `sudo`.
    pub fn with_sudo(mut self, sudo: bool) -> Self {
        self.sudo = sudo;
        self
    }

    /// The command line without the `sudo` prefix, used as a lookup key.
    pub fn key(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sudo {
            write!(f, "sudo {}", self.key())
        } else {
            f.write_str(&self.key())
        }
    }
}

/// Result of executing an external tool.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output followed by standard error.
    pub output: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(output: String) -> Self {
        Self {
            exit_code: Some(0),
            output,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, output: String) -> Self {
        Self {
            exit_code,
            output,
            success: false,
        }
    }

    /// Turn a non-zero exit into [`LsiError::ToolExecutionFailed`].
    pub fn into_output(self, command: &ToolCommand) -> Result<String> {
        if self.success {
            Ok(self.output)
        } else {
            Err(LsiError::ToolExecutionFailed {
                command: command.to_string(),
                code: self.exit_code,
            })
        }
    }
}

/// Runs external tools on behalf of the extractors.
///
/// The collector only ever sees captured text plus a success flag, so tests
/// substitute [`MockRunner`](super::MockRunner).
pub trait ToolRunner {
    /// Run the command to completion and capture its output.
    fn run(&self, command: &ToolCommand) -> Result<CommandResult>;

    /// Run the command and return its output only if it exited successfully.
    fn capture(&self, command: &ToolCommand) -> Result<String> {
        self.run(command)?.into_output(command)
    }
}

/// Runs tools as real child processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    path_entries: Vec<PathBuf>,
}

impl SystemRunner {
    /// Create a runner that resolves programs against the system `PATH`.
    pub fn new() -> Self {
        Self {
            path_entries: parse_system_path(),
        }
    }

    /// Create a runner with explicit `PATH` entries.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }

    /// Resolve the program to an executable path.
    ///
    /// Names containing a path separator are taken as paths; bare names are
    /// looked up in the `PATH` entries.
    fn resolve(&self, program: &str) -> Result<PathBuf> {
        let unavailable = || LsiError::ToolUnavailable {
            tool: program.to_string(),
        };

        if program.contains(std::path::MAIN_SEPARATOR) || program.contains('/') {
            let path = PathBuf::from(program);
            if path.is_file() && super::platform::is_executable(&path) {
                Ok(path)
            } else {
                Err(unavailable())
            }
        } else {
            resolve_tool_path(program, &self.path_entries).ok_or_else(unavailable)
        }
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> Result<CommandResult> {
        let start = Instant::now();
        let program = self.resolve(&command.program)?;

        let mut cmd = if command.sudo {
            let mut cmd = Command::new("sudo");
            cmd.arg(&program);
            cmd
        } else {
            Command::new(&program)
        };
        cmd.args(&command.args);

        tracing::debug!("Running {}", command);

        let output = cmd.output().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                LsiError::ToolUnavailable {
                    tool: command.program.clone(),
                }
            }
            _ => LsiError::Io(e),
        })?;

        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        tracing::debug!(
            "{} exited with {:?} after {:?}",
            command,
            output.status.code(),
            start.elapsed()
        );

        if output.status.success() {
            Ok(CommandResult::success(text))
        } else {
            Ok(CommandResult::failure(output.status.code(), text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_joins_program_and_args() {
        let cmd = ToolCommand::new("storcli64").args(["/c0", "show"]);
        assert_eq!(cmd.key(), "storcli64 /c0 show");
    }

    #[test]
    fn display_includes_sudo_prefix() {
        let cmd = ToolCommand::new("hdsentinel").with_sudo(true);
        assert_eq!(cmd.to_string(), "sudo hdsentinel");
        assert_eq!(cmd.key(), "hdsentinel");
    }

    #[test]
    fn into_output_rejects_failure() {
        let cmd = ToolCommand::new("lspci");
        let result = CommandResult::failure(Some(2), "boom".into());
        let err = result.into_output(&cmd).unwrap_err();
        assert!(matches!(
            err,
            LsiError::ToolExecutionFailed { code: Some(2), .. }
        ));
    }

    #[test]
    fn into_output_passes_success_through() {
        let cmd = ToolCommand::new("lspci");
        let result = CommandResult::success("00:00.0 Host bridge".into());
        assert_eq!(result.into_output(&cmd).unwrap(), "00:00.0 Host bridge");
    }

    #[test]
    fn missing_program_is_unavailable() {
        let runner = SystemRunner::with_path(Vec::new());
        let err = runner
            .run(&ToolCommand::new("this-tool-does-not-exist-12345"))
            .unwrap_err();
        assert!(matches!(err, LsiError::ToolUnavailable { .. }));
    }

    #[test]
    fn missing_path_is_unavailable() {
        let runner = SystemRunner::new();
        let err = runner
            .run(&ToolCommand::new("/nonexistent/dir/storcli64"))
            .unwrap_err();
        assert!(matches!(err, LsiError::ToolUnavailable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn runs_resolved_program() {
        let runner = SystemRunner::new();
        let result = runner
            .run(&ToolCommand::new("sh").args(["-c", "echo hello; echo oops >&2; exit 3"]))
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.output.contains("hello"));
        assert!(result.output.contains("oops"));
    }

    #[cfg(unix)]
    #[test]
    fn capture_returns_output_on_success() {
        let runner = SystemRunner::new();
        let output = runner
            .capture(&ToolCommand::new("sh").args(["-c", "echo fast"]))
            .unwrap();
        assert!(output.contains("fast"));
    }
}
