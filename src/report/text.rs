//! The human-readable summary report.

use crate::inventory::{or_unknown, DriveRecord, Inventory, UNKNOWN};
use crate::ui::theme::ReportTheme;

use super::policy::{DeviceClass, ReportPolicy};
use super::sorted_drives;

/// Advisory used when no drive could be listed and nothing more specific is known.
pub const NO_DEVICES: &str = "No devices found or could not parse device list.";

const TITLE: &str = "LSI Controller Summary";

/// Format a temperature as `NN°C`, or the unknown marker.
pub fn format_temperature(celsius: Option<u32>) -> String {
    celsius.map_or_else(|| UNKNOWN.to_string(), |t| format!("{}°C", t))
}

/// Render the report as text, one line per entry, ending in a newline.
pub fn render_text(inventory: &Inventory, policy: &ReportPolicy, theme: &ReportTheme) -> String {
    let controller = &inventory.controller;
    let mut lines = Vec::new();

    lines.push(theme.header.apply_to(TITLE).to_string());
    lines.push("=".repeat(TITLE.len()));
    lines.push(format!("Controller: {}", controller.name));
    if let Some(bus) = &controller.bus_interface {
        lines.push(format!("Bus Interface:  {}", bus));
    }
    lines.push(format!(
        "Serial Number:    {}",
        policy
            .masking
            .apply(&or_unknown(controller.serial_number.as_ref()))
    ));

    let mut driver = format!(
        "Driver Version:  {}",
        or_unknown(controller.driver_version.as_ref())
    );
    if let Some(name) = &controller.driver_name {
        driver.push_str(&format!(" ({})", name));
    }
    lines.push(driver);

    lines.push(format!(
        "BIOS Version = {}",
        or_unknown(controller.bios_version.as_ref())
    ));
    lines.push(format!(
        "NVDATA Version = {}",
        or_unknown(controller.nvdata_version.as_ref())
    ));
    lines.push(format!(
        "FW Version = {}",
        or_unknown(controller.firmware_version.as_ref())
    ));
    lines.push(format!(
        "Physical Drives: {}",
        or_unknown(controller.total_ports.as_ref())
    ));

    let severity = policy
        .thresholds
        .classify(DeviceClass::Controller, controller.temperature_celsius);
    lines.push(format!(
        "Controller Temp: {}",
        theme.format_severity(&format_temperature(controller.temperature_celsius), severity)
    ));
    lines.push(format!("Ports Connected:  {}", inventory.drives.len()));

    lines.push(String::new());
    lines.push(theme.header.apply_to("Connected Devices:").to_string());

    let drives = sorted_drives(&inventory.drives);
    for drive in &drives {
        lines.push(render_drive(drive, policy, theme));
    }

    let advisory = match (&inventory.advisory, drives.is_empty()) {
        (Some(advisory), _) => Some(advisory.as_str()),
        (None, true) => Some(NO_DEVICES),
        (None, false) => None,
    };
    if let Some(advisory) = advisory {
        lines.push(format!("  - {}", theme.advisory.apply_to(advisory)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_drive(drive: &DriveRecord, policy: &ReportPolicy, theme: &ReportTheme) -> String {
    let severity = policy
        .thresholds
        .classify(DeviceClass::Drive, drive.temperature_celsius);

    format!(
        "  - Port {} Model: {}, SN: {}, Speed: {}, Temp: {}",
        drive.slot_id,
        or_unknown(drive.model.as_ref()),
        policy
            .masking
            .apply(&or_unknown(drive.serial_number.as_ref())),
        or_unknown(drive.link_speed.as_ref()),
        theme.format_severity(&format_temperature(drive.temperature_celsius), severity),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ControllerIdentity;
    use crate::report::MaskingPolicy;

    fn controller() -> ControllerIdentity {
        ControllerIdentity {
            name: "01:00.0 Serial Attached SCSI controller: LSI SAS3008".into(),
            bus_interface: Some("PCI Express 3.0 x8".into()),
            serial_number: Some("SP12345678".into()),
            driver_name: Some("mpt3sas".into()),
            driver_version: Some("43.100.00.00".into()),
            bios_version: Some("8.37.00.00_18.00.00.00".into()),
            nvdata_version: Some("16.17.00.03".into()),
            firmware_version: Some("16.00.12.00".into()),
            total_ports: Some(2),
            temperature_celsius: Some(62),
        }
    }

    fn drive(slot: &str, serial: &str, temp: Option<u32>) -> DriveRecord {
        DriveRecord {
            slot_id: slot.into(),
            serial_number: Some(serial.into()),
            model: Some("ST4000DM004-2CV104".into()),
            link_speed: Some("6.0Gb/s".into()),
            temperature_celsius: temp,
        }
    }

    fn render(inventory: &Inventory, policy: &ReportPolicy) -> String {
        render_text(inventory, policy, &ReportTheme::plain())
    }

    #[test]
    fn renders_full_report() {
        let inventory = Inventory {
            controller: controller(),
            drives: vec![drive("3", "ABC123", Some(45))],
            advisory: None,
        };

        let expected = "\
LSI Controller Summary
======================
Controller: 01:00.0 Serial Attached SCSI controller: LSI SAS3008
Bus Interface:  PCI Express 3.0 x8
Serial Number:    SP12345678
Driver Version:  43.100.00.00 (mpt3sas)
BIOS Version = 8.37.00.00_18.00.00.00
NVDATA Version = 16.17.00.03
FW Version = 16.00.12.00
Physical Drives: 2
Controller Temp: 62°C
Ports Connected:  1

Connected Devices:
  - Port 3 Model: ST4000DM004-2CV104, SN: ABC123, Speed: 6.0Gb/s, Temp: 45°C
";
        assert_eq!(render(&inventory, &ReportPolicy::default()), expected);
    }

    #[test]
    fn masks_serials_when_enabled() {
        let inventory = Inventory {
            controller: controller(),
            drives: vec![drive("3", "ABC123", Some(45))],
            advisory: None,
        };
        let policy = ReportPolicy {
            masking: MaskingPolicy {
                enabled: true,
                mask_char: '*',
            },
            ..Default::default()
        };

        let report = render(&inventory, &policy);

        assert!(report.contains("Serial Number:    *****45678"));
        assert!(report.contains("SN: ***123,"));
    }

    #[test]
    fn unknown_fields_use_marker() {
        let mut identity = controller();
        identity.bus_interface = None;
        identity.serial_number = None;
        identity.driver_name = None;
        identity.driver_version = None;
        identity.total_ports = None;
        identity.temperature_celsius = None;
        let inventory = Inventory {
            controller: identity,
            drives: vec![DriveRecord::empty("0")],
            advisory: None,
        };

        let report = render(&inventory, &ReportPolicy::default());

        assert!(!report.contains("Bus Interface"));
        assert!(report.contains("Serial Number:    unknown\n"));
        assert!(report.contains("Driver Version:  unknown\n"));
        assert!(report.contains("Physical Drives: unknown\n"));
        assert!(report.contains("Controller Temp: unknown\n"));
        assert!(report.contains(
            "  - Port 0 Model: unknown, SN: unknown, Speed: unknown, Temp: unknown"
        ));
    }

    #[test]
    fn ports_are_sorted_numerically() {
        let inventory = Inventory {
            controller: controller(),
            drives: vec![
                drive("10", "S10", None),
                drive("2", "S2", None),
                drive("1", "S1", None),
            ],
            advisory: None,
        };

        let report = render(&inventory, &ReportPolicy::default());

        let ports: Vec<_> = report
            .lines()
            .filter_map(|l| l.strip_prefix("  - Port "))
            .map(|l| l.split(' ').next().unwrap_or_default())
            .collect();
        assert_eq!(ports, vec!["1", "2", "10"]);
    }

    #[test]
    fn empty_device_list_gets_default_advisory() {
        let inventory = Inventory {
            controller: controller(),
            drives: vec![],
            advisory: None,
        };

        let report = render(&inventory, &ReportPolicy::default());

        assert!(report.contains("Ports Connected:  0"));
        assert!(report.ends_with(&format!("Connected Devices:\n  - {}\n", NO_DEVICES)));
    }

    #[test]
    fn specific_advisory_wins() {
        let inventory = Inventory {
            controller: controller(),
            drives: vec![],
            advisory: Some("Could not execute storcli. Is it in your PATH?".into()),
        };

        let report = render(&inventory, &ReportPolicy::default());

        assert!(report.contains("  - Could not execute storcli. Is it in your PATH?"));
        assert!(!report.contains(NO_DEVICES));
    }

    #[test]
    fn format_temperature_values() {
        assert_eq!(format_temperature(Some(45)), "45°C");
        assert_eq!(format_temperature(None), "unknown");
    }
}
