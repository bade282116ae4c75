//! Error types for lsishow.
//!
//! This module defines [`LsiError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Tool errors (`ToolUnavailable`, `ToolExecutionFailed`) are caught at the
//!   boundary of each extractor and degrade that extractor's contribution
//! - `FieldNotFound` is routine and only ever logged
//! - `MalformedTable` becomes an advisory line in the device section
//! - Configuration and I/O errors are the only ones that reach `main`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lsishow operations.
#[derive(Debug, Error)]
pub enum LsiError {
    /// The external tool could not be located or is not executable.
    #[error("Tool not available: {tool}")]
    ToolUnavailable { tool: String },

    /// The external tool ran but exited with a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}")]
    ToolExecutionFailed { command: String, code: Option<i32> },

    /// An expected field did not appear in otherwise valid output.
    #[error("Field '{field}' not found in {source_name} output")]
    FieldNotFound { field: String, source_name: String },

    /// The columnar device table could not be located.
    #[error("Malformed device table: {message}")]
    MalformedTable { message: String },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for lsishow operations.
pub type Result<T> = std::result::Result<T, LsiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_unavailable_displays_tool() {
        let err = LsiError::ToolUnavailable {
            tool: "storcli64".into(),
        };
        assert!(err.to_string().contains("storcli64"));
    }

    #[test]
    fn tool_execution_failed_displays_command_and_code() {
        let err = LsiError::ToolExecutionFailed {
            command: "storcli64 /c0 show".into(),
            code: Some(255),
        };
        let msg = err.to_string();
        assert!(msg.contains("storcli64 /c0 show"));
        assert!(msg.contains("255"));
    }

    #[test]
    fn field_not_found_displays_field_and_source() {
        let err = LsiError::FieldNotFound {
            field: "NVDATA Version".into(),
            source_name: "storcli".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("NVDATA Version"));
        assert!(msg.contains("storcli"));
    }

    #[test]
    fn malformed_table_displays_message() {
        let err = LsiError::MalformedTable {
            message: "no header".into(),
        };
        assert!(err.to_string().contains("no header"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = LsiError::ConfigParseError {
            path: PathBuf::from("/etc/lsishow/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/lsishow/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LsiError = io_err.into();
        assert!(matches!(err, LsiError::Io(_)));
    }
}
