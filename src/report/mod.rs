//! Turning an [`Inventory`](crate::inventory::Inventory) into a report.
//!
//! Policies in [`policy`] decide severity and masking; [`text`] and
//! [`json`] render with them. Both renderers list drives in ascending
//! numeric slot order.

pub mod json;
pub mod policy;
pub mod text;

pub use json::render_json;
pub use policy::{
    DeviceClass, MaskingPolicy, ReportPolicy, Severity, TemperatureThresholdPolicy,
    ThresholdPolicies,
};
pub use text::{format_temperature, render_text, NO_DEVICES};

use crate::inventory::DriveRecord;

/// Drives ordered by numeric slot; non-numeric slots keep their order at the end.
pub fn sorted_drives(drives: &[DriveRecord]) -> Vec<&DriveRecord> {
    let mut sorted: Vec<&DriveRecord> = drives.iter().collect();
    sorted.sort_by_key(|drive| match drive.slot_number() {
        Some(slot) => (false, slot),
        None => (true, 0),
    });
    sorted
}
