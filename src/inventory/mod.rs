//! The correlated inventory and how it is collected.
//!
//! - [`model`] - controller identity and drive records
//! - [`correlate`] - joining slot and serial keyed facts into drive records
//! - [`collect`] - running the tools through a [`ToolRunner`](crate::shell::ToolRunner)

pub mod collect;
pub mod correlate;
pub mod model;

pub use collect::{CollectProgress, Collector, STAGES, STORCLI_UNAVAILABLE};
pub use correlate::correlate;
pub use model::{or_unknown, ControllerIdentity, DriveRecord, Inventory, UNKNOWN};
