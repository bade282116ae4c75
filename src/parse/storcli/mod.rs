//! Extractors for the storcli RAID management utility.
//!
//! Three invocations feed the report:
//!
//! - `/cN/sALL show all` - per-slot serial number and link speed ([`attributes`])
//! - `/cN show` - the physical drive table ([`table`]) and controller summary ([`summary`])
//! - `/cN show temperature` - the controller (ROC) temperature ([`summary`])

pub mod attributes;
pub mod summary;
pub mod table;

pub use attributes::{parse_slot_attributes, DriveAttributes, SlotAttributes};
pub use summary::{parse_controller_summary, parse_controller_temperature, ControllerSummary};
pub use table::{clean_model, parse_device_table, ModelColumn, TableRow};
