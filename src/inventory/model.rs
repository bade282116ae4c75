//! The correlated inventory data model.

use serde::Serialize;

use crate::parse::pci::ControllerDetails;
use crate::parse::storcli::ControllerSummary;

/// Marker rendered in place of any value that could not be collected.
pub const UNKNOWN: &str = "unknown";

/// Identity and health of the storage controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerIdentity {
    pub name: String,
    pub bus_interface: Option<String>,
    pub serial_number: Option<String>,
    pub driver_name: Option<String>,
    pub driver_version: Option<String>,
    pub bios_version: Option<String>,
    pub nvdata_version: Option<String>,
    pub firmware_version: Option<String>,
    pub total_ports: Option<u32>,
    pub temperature_celsius: Option<u32>,
}

impl ControllerIdentity {
    /// Combine what the PCI listing and storcli reported.
    pub fn assemble(
        details: ControllerDetails,
        summary: ControllerSummary,
        temperature_celsius: Option<u32>,
    ) -> Self {
        Self {
            name: details.name,
            bus_interface: details.bus_interface.map(|bus| bus.to_string()),
            serial_number: summary.serial_number,
            driver_name: summary.driver_name,
            driver_version: summary.driver_version,
            bios_version: summary.bios_version,
            nvdata_version: summary.nvdata_version,
            firmware_version: summary.firmware_version,
            total_ports: summary.physical_drives,
            temperature_celsius,
        }
    }
}

/// One drive, keyed by its physical slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriveRecord {
    pub slot_id: String,
    pub serial_number: Option<String>,
    pub model: Option<String>,
    pub link_speed: Option<String>,
    pub temperature_celsius: Option<u32>,
}

impl DriveRecord {
    /// A record with nothing known beyond its slot.
    pub fn empty(slot_id: impl Into<String>) -> Self {
        Self {
            slot_id: slot_id.into(),
            serial_number: None,
            model: None,
            link_speed: None,
            temperature_celsius: None,
        }
    }

    /// Numeric slot, when the slot id is an integer.
    pub fn slot_number(&self) -> Option<u32> {
        self.slot_id.trim().parse().ok()
    }
}

/// Everything one run collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub controller: ControllerIdentity,
    pub drives: Vec<DriveRecord>,
    /// Why the drive list could not be produced, when that is known.
    pub advisory: Option<String>,
}

/// Render an optional value, substituting [`UNKNOWN`].
pub fn or_unknown<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::pci::BusInterface;

    #[test]
    fn assemble_carries_every_field() {
        let details = ControllerDetails {
            name: "01:00.0 Serial Attached SCSI controller: LSI SAS3008".into(),
            bus_interface: Some(BusInterface {
                generation: Some("3.0"),
                width: 8,
            }),
        };
        let summary = ControllerSummary {
            serial_number: Some("SP1".into()),
            physical_drives: Some(8),
            ..Default::default()
        };

        let identity = ControllerIdentity::assemble(details, summary, Some(55));

        assert_eq!(identity.bus_interface.as_deref(), Some("PCI Express 3.0 x8"));
        assert_eq!(identity.serial_number.as_deref(), Some("SP1"));
        assert_eq!(identity.total_ports, Some(8));
        assert_eq!(identity.temperature_celsius, Some(55));
        assert_eq!(identity.firmware_version, None);
    }

    #[test]
    fn slot_number_parses_integers_only() {
        assert_eq!(DriveRecord::empty("10").slot_number(), Some(10));
        assert_eq!(DriveRecord::empty(" 2").slot_number(), Some(2));
        assert_eq!(DriveRecord::empty("x").slot_number(), None);
    }

    #[test]
    fn or_unknown_substitutes_sentinel() {
        assert_eq!(or_unknown::<u32>(None), "unknown");
        assert_eq!(or_unknown(Some(&"6.0Gb/s")), "6.0Gb/s");
        assert_eq!(or_unknown(Some(&45)), "45");
    }
}
