//! Configuration validation rules.
//!
//! - Each threshold pair must have `yellow <= red`
//! - At least one controller marker, none blank
//! - Tool paths must not be blank

use crate::config::schema::{LsiConfig, ThresholdPair};
use crate::error::{LsiError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &LsiConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_thresholds("drive", &config.thresholds.drive));
    errors.extend(validate_thresholds(
        "controller",
        &config.thresholds.controller,
    ));

    if config.controller_markers.is_empty() {
        errors.push(ValidationError::new(
            "markers",
            "controller_markers must list at least one PCI class string".to_string(),
        ));
    } else if config.controller_markers.iter().any(|m| m.trim().is_empty()) {
        errors.push(ValidationError::new(
            "markers",
            "controller_markers must not contain blank entries".to_string(),
        ));
    }

    for (name, path) in [
        ("lspci", &config.tools.lspci),
        ("hdsentinel", &config.tools.hdsentinel),
        ("storcli", &config.tools.storcli),
    ] {
        if path.trim().is_empty() {
            errors.push(ValidationError::new(
                "tools",
                format!("tools.{} must not be blank", name),
            ));
        }
    }

    errors
}

fn validate_thresholds(class: &str, pair: &ThresholdPair) -> Option<ValidationError> {
    (pair.yellow > pair.red).then(|| {
        ValidationError::new(
            "thresholds",
            format!(
                "thresholds.{}: yellow ({}) must not exceed red ({})",
                class, pair.yellow, pair.red
            ),
        )
    })
}

/// Validate a configuration.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &LsiConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(LsiError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&LsiConfig::default()).is_ok());
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let mut config = LsiConfig::default();
        config.thresholds.controller = ThresholdPair {
            yellow: 90,
            red: 80,
        };

        let errors = validate_config(&config);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "thresholds");
        assert!(errors[0].message.contains("controller"));
    }

    #[test]
    fn equal_thresholds_are_allowed() {
        let mut config = LsiConfig::default();
        config.thresholds.drive = ThresholdPair {
            yellow: 55,
            red: 55,
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn rejects_missing_markers() {
        let mut config = LsiConfig::default();
        config.controller_markers.clear();
        assert_eq!(validate_config(&config)[0].rule, "markers");

        config.controller_markers = vec!["  ".into()];
        assert_eq!(validate_config(&config)[0].rule, "markers");
    }

    #[test]
    fn rejects_blank_tool_paths() {
        let mut config = LsiConfig::default();
        config.tools.storcli = String::new();

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("tools.storcli"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = LsiConfig::default();
        config.tools.lspci = String::new();
        config.tools.hdsentinel = " ".into();
        config.controller_markers.clear();

        assert_eq!(validate_config(&config).len(), 3);
    }
}
