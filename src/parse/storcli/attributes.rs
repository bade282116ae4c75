//! Per-slot drive attributes from `storcli64 /cN/sALL show all`.

use serde::Serialize;

use crate::parse::blocks::{split_blocks, Boundary};
use crate::parse::capture;

lazy_regex!(
    RE_ATTRIBUTES_HEADER,
    r"(?m)^Drive /c\d+(?:/e\d+)?/s(\d+) Device attributes :"
);
lazy_regex!(RE_NEXT_SECTION, r"(?m)^Drive /c");
lazy_regex!(RE_SERIAL, r"(?m)^[ \t]*SN[ \t]*=[ \t]*([\w-]+)");
lazy_regex!(RE_LINK_SPEED, r"Link Speed[ \t]*=[ \t]*([\d.]+\w+/s)");

/// Identity and link facts for one drive slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriveAttributes {
    pub serial_number: String,
    pub link_speed: String,
}

/// Slot id to drive attributes, in the order the slots were reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotAttributes {
    entries: Vec<(String, DriveAttributes)>,
}

impl SlotAttributes {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record attributes for a slot, replacing any earlier entry for it.
    pub fn insert(&mut self, slot_id: impl Into<String>, attributes: DriveAttributes) {
        let slot_id = slot_id.into();
        match self.entries.iter_mut().find(|(slot, _)| *slot == slot_id) {
            Some((_, existing)) => *existing = attributes,
            None => self.entries.push((slot_id, attributes)),
        }
    }

    /// Attributes for a slot.
    pub fn get(&self, slot_id: &str) -> Option<&DriveAttributes> {
        self.entries
            .iter()
            .find(|(slot, _)| slot == slot_id)
            .map(|(_, attributes)| attributes)
    }

    /// Slot ids in report order.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(slot, _)| slot.as_str())
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slot has attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extract serial number and link speed for every slot.
///
/// A slot whose section lacks either field is left out.
pub fn parse_slot_attributes(text: &str) -> SlotAttributes {
    let mut attributes = SlotAttributes::new();

    for section in split_blocks(text, Boundary::Before(&RE_ATTRIBUTES_HEADER)) {
        let Some(header) = RE_ATTRIBUTES_HEADER.captures(section) else {
            continue;
        };
        let (Some(whole), Some(slot)) = (header.get(0), header.get(1)) else {
            continue;
        };

        // The attribute list ends where the next "Drive /c..." subsection begins.
        let body = &section[whole.end()..];
        let body = match RE_NEXT_SECTION.find(body) {
            Some(next) => &body[..next.start()],
            None => body,
        };

        match (capture(&RE_SERIAL, body), capture(&RE_LINK_SPEED, body)) {
            (Some(serial_number), Some(link_speed)) => attributes.insert(
                slot.as_str(),
                DriveAttributes {
                    serial_number,
                    link_speed,
                },
            ),
            _ => tracing::debug!("Slot {} lacks serial number or link speed", slot.as_str()),
        }
    }

    attributes
}
