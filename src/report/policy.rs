//! Presentation policies: temperature classification and serial masking.

use std::fmt;

use serde::Serialize;

use crate::config::{LsiConfig, ThresholdPair, Thresholds};
use crate::inventory::UNKNOWN;

/// Which threshold pair applies to a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Drive,
    Controller,
}

/// How alarming a temperature is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        })
    }
}

/// Cutoffs in °C for one device class.
///
/// `value >= red_at` is critical, `yellow_at <= value < red_at` is a
/// warning, anything lower is normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureThresholdPolicy {
    pub yellow_at: u32,
    pub red_at: u32,
}

impl TemperatureThresholdPolicy {
    /// Classify a temperature.
    ///
    /// ```
    /// use lsishow::report::{Severity, TemperatureThresholdPolicy};
    ///
    /// let drive = TemperatureThresholdPolicy { yellow_at: 51, red_at: 60 };
    /// assert_eq!(drive.classify(50), Severity::Normal);
    /// assert_eq!(drive.classify(60), Severity::Critical);
    /// ```
    pub fn classify(&self, celsius: u32) -> Severity {
        if celsius >= self.red_at {
            Severity::Critical
        } else if celsius >= self.yellow_at {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }
}

impl From<ThresholdPair> for TemperatureThresholdPolicy {
    fn from(pair: ThresholdPair) -> Self {
        Self {
            yellow_at: pair.yellow,
            red_at: pair.red,
        }
    }
}

/// Threshold policies for every device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicies {
    pub drive: TemperatureThresholdPolicy,
    pub controller: TemperatureThresholdPolicy,
}

impl ThresholdPolicies {
    pub fn for_class(&self, class: DeviceClass) -> &TemperatureThresholdPolicy {
        match class {
            DeviceClass::Drive => &self.drive,
            DeviceClass::Controller => &self.controller,
        }
    }

    /// Classify a temperature, or `None` when it is unknown.
    pub fn classify(&self, class: DeviceClass, celsius: Option<u32>) -> Option<Severity> {
        celsius.map(|value| self.for_class(class).classify(value))
    }
}

impl From<&Thresholds> for ThresholdPolicies {
    fn from(thresholds: &Thresholds) -> Self {
        Self {
            drive: thresholds.drive.into(),
            controller: thresholds.controller.into(),
        }
    }
}

impl Default for ThresholdPolicies {
    fn default() -> Self {
        Self::from(&Thresholds::default())
    }
}

/// Serial number masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskingPolicy {
    pub enabled: bool,
    pub mask_char: char,
}

impl MaskingPolicy {
    /// Masking switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            mask_char: '*',
        }
    }

    /// Hide the first half of `serial`, counted in characters.
    ///
    /// Values shorter than two characters and the unknown marker pass
    /// through unchanged.
    ///
    /// ```
    /// use lsishow::report::MaskingPolicy;
    ///
    /// let masking = MaskingPolicy { enabled: true, mask_char: '*' };
    /// assert_eq!(masking.apply("ABC123"), "***123");
    /// assert_eq!(masking.apply("ABCDE"), "**CDE");
    /// ```
    pub fn apply(&self, serial: &str) -> String {
        let len = serial.chars().count();
        if !self.enabled || len < 2 || serial == UNKNOWN {
            return serial.to_string();
        }

        let hidden = len / 2;
        std::iter::repeat(self.mask_char)
            .take(hidden)
            .chain(serial.chars().skip(hidden))
            .collect()
    }
}

/// Everything the renderers need besides the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPolicy {
    pub thresholds: ThresholdPolicies,
    pub masking: MaskingPolicy,
}

impl ReportPolicy {
    /// Build the policy from configuration and the masking decision.
    pub fn from_config(config: &LsiConfig, hide_serials: bool) -> Self {
        Self {
            thresholds: ThresholdPolicies::from(&config.thresholds),
            masking: MaskingPolicy {
                enabled: hide_serials,
                mask_char: config.mask_char,
            },
        }
    }
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            thresholds: ThresholdPolicies::default(),
            masking: MaskingPolicy::disabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masking() -> MaskingPolicy {
        MaskingPolicy {
            enabled: true,
            mask_char: '*',
        }
    }

    #[test]
    fn drive_classification() {
        let policies = ThresholdPolicies::default();
        let classify = |t| policies.for_class(DeviceClass::Drive).classify(t);

        assert_eq!(classify(50), Severity::Normal);
        assert_eq!(classify(51), Severity::Warning);
        assert_eq!(classify(59), Severity::Warning);
        assert_eq!(classify(60), Severity::Critical);
    }

    #[test]
    fn controller_classification() {
        let policies = ThresholdPolicies::default();
        let classify = |t| policies.for_class(DeviceClass::Controller).classify(t);

        assert_eq!(classify(50), Severity::Normal);
        assert_eq!(classify(100), Severity::Warning);
        assert_eq!(classify(101), Severity::Critical);
    }

    #[test]
    fn unknown_temperature_has_no_severity() {
        let policies = ThresholdPolicies::default();
        assert_eq!(policies.classify(DeviceClass::Drive, None), None);
        assert_eq!(
            policies.classify(DeviceClass::Drive, Some(45)),
            Some(Severity::Normal)
        );
    }

    #[test]
    fn thresholds_follow_config() {
        let mut config = LsiConfig::default();
        config.thresholds.drive = ThresholdPair {
            yellow: 40,
            red: 45,
        };

        let policy = ReportPolicy::from_config(&config, false);

        assert_eq!(policy.thresholds.drive.classify(42), Severity::Warning);
        assert_eq!(policy.thresholds.drive.classify(45), Severity::Critical);
    }

    #[test]
    fn masking_keeps_length_and_suffix() {
        for serial in ["ABC123", "WD-WCC4N1234567", "ZL2"] {
            let masked = masking().apply(serial);
            let hidden = serial.chars().count() / 2;

            assert_eq!(masked.chars().count(), serial.chars().count());
            assert!(masked.chars().take(hidden).all(|c| c == '*'));
            assert_eq!(&masked[hidden..], &serial[hidden..]);
        }
    }

    #[test]
    fn masking_short_and_unknown_values_pass_through() {
        assert_eq!(masking().apply(""), "");
        assert_eq!(masking().apply("A"), "A");
        assert_eq!(masking().apply(UNKNOWN), UNKNOWN);
    }

    #[test]
    fn masking_counts_characters() {
        assert_eq!(masking().apply("ÄÖÜß"), "**Üß");
    }

    #[test]
    fn custom_mask_char() {
        let policy = MaskingPolicy {
            enabled: true,
            mask_char: '#',
        };
        assert_eq!(policy.apply("1234"), "##34");
    }

    #[test]
    fn disabled_masking_is_identity() {
        assert_eq!(MaskingPolicy::disabled().apply("ABC123"), "ABC123");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Critical > Severity::Warning);
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
