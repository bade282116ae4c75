//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file. Every field has a default, so an empty file (or no
//! file at all) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::parse::pci::DEFAULT_CONTROLLER_MARKERS;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LsiConfig {
    /// storcli controller index (`/c0`).
    pub controller: u32,

    /// When to run hdsentinel and storcli through `sudo`.
    pub sudo: SudoPolicy,

    /// Whether to mask serial numbers; asks interactively when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_serials: Option<bool>,

    /// Character replacing the masked half of a serial number.
    pub mask_char: char,

    /// PCI class strings identifying the storage controller.
    pub controller_markers: Vec<String>,

    /// Program names or paths of the external tools.
    pub tools: ToolPaths,

    /// Temperature color thresholds.
    pub thresholds: Thresholds,
}

impl Default for LsiConfig {
    fn default() -> Self {
        Self {
            controller: 0,
            sudo: SudoPolicy::default(),
            hide_serials: None,
            mask_char: '*',
            controller_markers: DEFAULT_CONTROLLER_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            tools: ToolPaths::default(),
            thresholds: Thresholds::default(),
        }
    }
}

/// When privileged tools are run through `sudo`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SudoPolicy {
    /// Use sudo unless already running as root.
    #[default]
    Auto,
    /// Always prefix sudo.
    Always,
    /// Never prefix sudo.
    Never,
}

impl SudoPolicy {
    /// Whether to prefix sudo given the current privilege level.
    pub fn wants_sudo(self, elevated: bool) -> bool {
        match self {
            Self::Auto => !elevated,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// External tool locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    pub lspci: String,
    pub hdsentinel: String,
    pub storcli: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            lspci: "lspci".to_string(),
            hdsentinel: "hdsentinel".to_string(),
            storcli: "storcli64".to_string(),
        }
    }
}

/// Warning and critical cutoffs for one device class, in °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub yellow: u32,
    pub red: u32,
}

/// Threshold pairs per device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub drive: ThresholdPair,
    pub controller: ThresholdPair,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            drive: ThresholdPair {
                yellow: 51,
                red: 60,
            },
            // Controllers run hot; only flag them past 100 °C.
            controller: ThresholdPair {
                yellow: 51,
                red: 101,
            },
        }
    }
}
