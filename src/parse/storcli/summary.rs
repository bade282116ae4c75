//! Controller identity from `storcli64 /cN show` and `show temperature`.

use regex::Regex;

use crate::error::LsiError;
use crate::parse::{capture, capture_int};

lazy_regex!(RE_SERIAL, r"Serial Number\s*=[ \t]*([\w-]+)");
lazy_regex!(RE_DRIVER_VERSION, r"Driver Version\s*=[ \t]*([\d.]+)");
lazy_regex!(RE_DRIVER_NAME, r"Driver Name\s*=[ \t]*(\w+)");
lazy_regex!(RE_BIOS_VERSION, r"BIOS Version\s*=(.*)");
lazy_regex!(RE_NVDATA_VERSION, r"NVDATA Version\s*=(.*)");
lazy_regex!(RE_FW_VERSION, r"FW Version\s*=(.*)");
lazy_regex!(RE_PHYSICAL_DRIVES, r"Physical Drives\s*=[ \t]*(\d+)");
lazy_regex!(
    RE_ROC_TEMPERATURE,
    r"ROC temperature\(Degree Celsius\)[ \t=]*(\d+)"
);

/// Controller fields reported by `storcli64 /cN show`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerSummary {
    pub serial_number: Option<String>,
    pub driver_name: Option<String>,
    pub driver_version: Option<String>,
    pub bios_version: Option<String>,
    pub nvdata_version: Option<String>,
    pub firmware_version: Option<String>,
    pub physical_drives: Option<u32>,
}

fn field(re: &Regex, label: &str, text: &str) -> Option<String> {
    let value = capture(re, text);
    if value.is_none() {
        tracing::debug!(
            "{}",
            LsiError::FieldNotFound {
                field: label.to_string(),
                source_name: "storcli".to_string(),
            }
        );
    }
    value
}

/// Extract each controller field independently; absent fields stay `None`.
pub fn parse_controller_summary(text: &str) -> ControllerSummary {
    ControllerSummary {
        serial_number: field(&RE_SERIAL, "Serial Number", text),
        driver_name: field(&RE_DRIVER_NAME, "Driver Name", text),
        driver_version: field(&RE_DRIVER_VERSION, "Driver Version", text),
        bios_version: field(&RE_BIOS_VERSION, "BIOS Version", text),
        nvdata_version: field(&RE_NVDATA_VERSION, "NVDATA Version", text),
        firmware_version: field(&RE_FW_VERSION, "FW Version", text),
        physical_drives: field(&RE_PHYSICAL_DRIVES, "Physical Drives", text)
            .and_then(|n| n.parse().ok()),
    }
}

/// Extract the ROC temperature from `storcli64 /cN show temperature`.
pub fn parse_controller_temperature(text: &str) -> Option<u32> {
    capture_int(&RE_ROC_TEMPERATURE, text)
}
