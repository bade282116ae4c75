//! Configuration file discovery and loading.

use crate::config::schema::LsiConfig;
use crate::config::validator::validate;
use crate::error::{LsiError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "LSISHOW_CONFIG";

/// System-wide config file, used when nothing else is given.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/lsishow/config.yml";

/// Find the config file to load.
///
/// Lookup order:
/// 1. The explicit `--config` path (must exist)
/// 2. `$LSISHOW_CONFIG` (must exist when set)
/// 3. `/etc/lsishow/config.yml` (optional)
///
/// Returns `None` when no file applies and defaults should be used.
pub fn discover_config(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    discover_config_with_env(explicit, |key| std::env::var(key), Path::new(SYSTEM_CONFIG_PATH))
}

/// Find the config file with a custom env var lookup and system path.
pub fn discover_config_with_env<F>(
    explicit: Option<&Path>,
    env_fn: F,
    system_path: &Path,
) -> Result<Option<PathBuf>>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let requested = explicit
        .map(Path::to_path_buf)
        .or_else(|| env_fn(CONFIG_ENV_VAR).ok().map(PathBuf::from));

    if let Some(path) = requested {
        return if path.is_file() {
            Ok(Some(path))
        } else {
            Err(LsiError::ConfigNotFound { path })
        };
    }

    Ok(system_path.is_file().then(|| system_path.to_path_buf()))
}

/// Parse and validate a single config file.
pub fn load_config_file(path: &Path) -> Result<LsiConfig> {
    let content = fs::read_to_string(path)?;

    // An empty document deserializes to unit, not a mapping.
    if content.trim().is_empty() {
        return Ok(LsiConfig::default());
    }

    let config: LsiConfig =
        serde_yaml::from_str(&content).map_err(|e| LsiError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate(&config)?;
    Ok(config)
}

/// Discover and load the effective configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<LsiConfig> {
    match discover_config(explicit)? {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(LsiConfig::default())
        }
    }
}
