//! Joining per-source facts into drive records.
//!
//! Two mapping tables are joined in a fixed order: the slot map from the
//! device table and the attribute listing, then serial number to
//! temperature from hdsentinel, which has no notion of slots.

use std::collections::HashSet;

use crate::parse::hdsentinel::DriveTemperatures;
use crate::parse::storcli::{SlotAttributes, TableRow};

use super::model::DriveRecord;

/// Build one record per slot seen in the table or the attribute listing.
///
/// Table rows come first in table order (the first row for a slot wins),
/// followed by slots only the attribute listing knows about. Nothing is
/// dropped for lack of enrichment.
pub fn correlate(
    rows: &[TableRow],
    attributes: &SlotAttributes,
    temperatures: &DriveTemperatures,
) -> Vec<DriveRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    let table_slots = rows.iter().map(|row| (row.slot_id.as_str(), row.model.clone()));
    let attribute_slots = attributes.slots().map(|slot| (slot, None));

    for (slot_id, model) in table_slots.chain(attribute_slots) {
        if !seen.insert(slot_id.to_string()) {
            continue;
        }

        let mut record = DriveRecord::empty(slot_id);
        record.model = model;

        if let Some(attrs) = attributes.get(slot_id) {
            record.serial_number = Some(attrs.serial_number.clone());
            record.link_speed = Some(attrs.link_speed.clone());
        }

        record.temperature_celsius = record
            .serial_number
            .as_ref()
            .and_then(|serial| temperatures.get(serial))
            .copied();

        records.push(record);
    }

    records
}
