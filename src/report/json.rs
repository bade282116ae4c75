//! Machine-readable report.
//!
//! Unknown values are `null`. Masking and classification follow the same
//! policy as the text report.

use serde::Serialize;

use crate::error::{LsiError, Result};
use crate::inventory::{DriveRecord, Inventory};

use super::policy::{DeviceClass, ReportPolicy, Severity};
use super::sorted_drives;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    controller: JsonController<'a>,
    drives: Vec<JsonDrive<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    advisory: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct JsonController<'a> {
    name: &'a str,
    bus_interface: Option<&'a str>,
    serial_number: Option<String>,
    driver_name: Option<&'a str>,
    driver_version: Option<&'a str>,
    bios_version: Option<&'a str>,
    nvdata_version: Option<&'a str>,
    firmware_version: Option<&'a str>,
    total_ports: Option<u32>,
    temperature_celsius: Option<u32>,
    temperature_severity: Option<Severity>,
}

#[derive(Debug, Serialize)]
struct JsonDrive<'a> {
    slot_id: &'a str,
    model: Option<&'a str>,
    serial_number: Option<String>,
    link_speed: Option<&'a str>,
    temperature_celsius: Option<u32>,
    temperature_severity: Option<Severity>,
}

impl<'a> JsonDrive<'a> {
    fn new(drive: &'a DriveRecord, policy: &ReportPolicy) -> Self {
        Self {
            slot_id: &drive.slot_id,
            model: drive.model.as_deref(),
            serial_number: drive.serial_number.as_deref().map(|s| policy.masking.apply(s)),
            link_speed: drive.link_speed.as_deref(),
            temperature_celsius: drive.temperature_celsius,
            temperature_severity: policy
                .thresholds
                .classify(DeviceClass::Drive, drive.temperature_celsius),
        }
    }
}

/// Render the report as pretty-printed JSON.
pub fn render_json(inventory: &Inventory, policy: &ReportPolicy) -> Result<String> {
    let controller = &inventory.controller;

    let report = JsonReport {
        controller: JsonController {
            name: &controller.name,
            bus_interface: controller.bus_interface.as_deref(),
            serial_number: controller
                .serial_number
                .as_deref()
                .map(|s| policy.masking.apply(s)),
            driver_name: controller.driver_name.as_deref(),
            driver_version: controller.driver_version.as_deref(),
            bios_version: controller.bios_version.as_deref(),
            nvdata_version: controller.nvdata_version.as_deref(),
            firmware_version: controller.firmware_version.as_deref(),
            total_ports: controller.total_ports,
            temperature_celsius: controller.temperature_celsius,
            temperature_severity: policy
                .thresholds
                .classify(DeviceClass::Controller, controller.temperature_celsius),
        },
        drives: sorted_drives(&inventory.drives)
            .into_iter()
            .map(|drive| JsonDrive::new(drive, policy))
            .collect(),
        advisory: inventory.advisory.as_deref(),
    };

    let mut out = serde_json::to_string_pretty(&report)
        .map_err(|e| LsiError::Other(e.into()))?;
    out.push('\n');
    Ok(out)
}
