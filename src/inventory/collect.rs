//! Running the diagnostic tools and assembling an [`Inventory`].
//!
//! Every stage is independent: a tool that is missing or fails degrades its
//! own contribution to unknown or empty and the remaining stages still run.

use tracing::{debug, warn};

use crate::config::LsiConfig;
use crate::error::LsiError;
use crate::parse::hdsentinel::{parse_temperatures, DriveTemperatures};
use crate::parse::pci::{
    parse_plain_listing, parse_verbose_listing, ControllerDetails, CONTROLLER_NOT_FOUND,
};
use crate::parse::storcli::{
    parse_controller_summary, parse_controller_temperature, parse_device_table,
    parse_slot_attributes, ControllerSummary, SlotAttributes, TableRow,
};
use crate::shell::{is_elevated, ToolCommand, ToolRunner};

use super::correlate::correlate;
use super::model::{ControllerIdentity, Inventory};

/// Advisory shown when storcli could not be run at all.
pub const STORCLI_UNAVAILABLE: &str = "Could not execute storcli. Is it in your PATH?";

/// Stage labels, in execution order.
pub const STAGES: [&str; 5] = [
    "Reading PCI bus",
    "Reading drive temperatures",
    "Reading drive attributes",
    "Reading controller summary",
    "Reading controller temperature",
];

/// Progress events emitted while collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectProgress<'a> {
    /// Human-readable stage label.
    pub stage: &'a str,
    /// Zero-based stage index.
    pub index: usize,
    /// Number of stages.
    pub total: usize,
}

/// Runs the tools named by a configuration through a [`ToolRunner`].
pub struct Collector<'a, R: ToolRunner + ?Sized> {
    runner: &'a R,
    config: &'a LsiConfig,
    elevated: bool,
}

impl<'a, R: ToolRunner + ?Sized> Collector<'a, R> {
    /// Create a collector for the current process privileges.
    pub fn new(runner: &'a R, config: &'a LsiConfig) -> Self {
        Self {
            runner,
            config,
            elevated: is_elevated(),
        }
    }

    /// Override whether the process is treated as already privileged.
    pub fn with_elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    /// Collect everything without progress reporting.
    pub fn collect(&self) -> Inventory {
        self.collect_with_progress(|_| {})
    }

    /// Collect everything, reporting each stage before it runs.
    pub fn collect_with_progress<F>(&self, mut on_progress: F) -> Inventory
    where
        F: FnMut(CollectProgress<'_>),
    {
        let mut stage = |index: usize| {
            on_progress(CollectProgress {
                stage: STAGES[index],
                index,
                total: STAGES.len(),
            })
        };

        stage(0);
        let details = self.controller_details();

        stage(1);
        let temperatures = self.drive_temperatures();

        stage(2);
        let attributes = self.slot_attributes();

        stage(3);
        let (summary, table) = self.controller_show();

        stage(4);
        let controller_temperature = self.controller_temperature();

        let (drives, advisory) = match table {
            Ok(rows) => (correlate(&rows, &attributes, &temperatures), None),
            Err(advisory) => (correlate(&[], &attributes, &temperatures), Some(advisory)),
        };

        Inventory {
            controller: ControllerIdentity::assemble(details, summary, controller_temperature),
            drives,
            advisory,
        }
    }

    fn storcli(&self, args: &[&str]) -> ToolCommand {
        let mut path = format!("/c{}", self.config.controller);
        let mut rest = args;
        if let Some((suffix, tail)) = args.split_first() {
            if suffix.starts_with('/') {
                path.push_str(suffix);
                rest = tail;
            }
        }

        ToolCommand::new(&self.config.tools.storcli)
            .args(std::iter::once(path).chain(rest.iter().map(|a| a.to_string())))
            .with_sudo(self.config.sudo.wants_sudo(self.elevated))
    }

    fn controller_details(&self) -> ControllerDetails {
        let markers = &self.config.controller_markers;
        let lspci = &self.config.tools.lspci;

        match self.runner.capture(&ToolCommand::new(lspci).args(["-vv"])) {
            Ok(text) => {
                if let Some(details) = parse_verbose_listing(&text, markers) {
                    return details;
                }
                debug!("Controller not in verbose listing, trying plain lspci");
            }
            Err(e) => warn!("Verbose PCI listing failed: {}", e),
        }

        let name = match self.runner.capture(&ToolCommand::new(lspci)) {
            Ok(text) => {
                parse_plain_listing(&text, markers).unwrap_or_else(|| CONTROLLER_NOT_FOUND.into())
            }
            Err(e) => {
                warn!("PCI listing failed: {}", e);
                format!("Error retrieving controller details: {}", e)
            }
        };

        ControllerDetails {
            name,
            bus_interface: None,
        }
    }

    fn drive_temperatures(&self) -> DriveTemperatures {
        let command = ToolCommand::new(&self.config.tools.hdsentinel)
            .with_sudo(self.config.sudo.wants_sudo(self.elevated));

        match self.runner.capture(&command) {
            Ok(text) => parse_temperatures(&text),
            Err(e) => {
                warn!("Drive temperatures unavailable: {}", e);
                DriveTemperatures::new()
            }
        }
    }

    fn slot_attributes(&self) -> SlotAttributes {
        match self.runner.capture(&self.storcli(&["/sALL", "show", "all"])) {
            Ok(text) => parse_slot_attributes(&text),
            Err(e) => {
                warn!("Drive attributes unavailable: {}", e);
                SlotAttributes::new()
            }
        }
    }

    /// Controller summary plus the device table, or the advisory replacing it.
    fn controller_show(&self) -> (ControllerSummary, Result<Vec<TableRow>, String>) {
        let text = match self.runner.capture(&self.storcli(&["show"])) {
            Ok(text) => text,
            Err(e) => {
                warn!("Controller summary unavailable: {}", e);
                return (
                    ControllerSummary::default(),
                    Err(STORCLI_UNAVAILABLE.to_string()),
                );
            }
        };

        let table = parse_device_table(&text).map_err(|e| match e {
            LsiError::MalformedTable { message } => {
                debug!("Device table malformed: {}", message);
                format!("Could not parse device list: {}", message)
            }
            other => other.to_string(),
        });

        (parse_controller_summary(&text), table)
    }

    fn controller_temperature(&self) -> Option<u32> {
        match self
            .runner
            .capture(&self.storcli(&["show", "temperature"]))
        {
            Ok(text) => parse_controller_temperature(&text),
            Err(e) => {
                warn!("Controller temperature unavailable: {}", e);
                None
            }
        }
    }
}
