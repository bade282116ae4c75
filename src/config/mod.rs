//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use lsishow::config::{load_config_file, SudoPolicy};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "controller: 1\nsudo: never\n").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! assert_eq!(config.controller, 1);
//! assert_eq!(config.sudo, SudoPolicy::Never);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. `--config <path>`
//! 2. `$LSISHOW_CONFIG`
//! 3. `/etc/lsishow/config.yml`

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    discover_config, discover_config_with_env, load_config, load_config_file, CONFIG_ENV_VAR,
    SYSTEM_CONFIG_PATH,
};
pub use schema::{LsiConfig, SudoPolicy, ThresholdPair, Thresholds, ToolPaths};
pub use validator::{validate, validate_config, ValidationError};
