//! Controller details from the PCI bus listing.
//!
//! `lspci -vv` prints one block per device, each opened by a bus address
//! line. The storage controller is the first block carrying a class marker
//! such as `Serial Attached SCSI controller`; its `LnkSta:` line gives the
//! negotiated link speed and width.

use std::fmt;

use serde::Serialize;

use super::blocks::{split_blocks, Boundary};

/// Name reported when no controller could be found in either listing.
pub const CONTROLLER_NOT_FOUND: &str = "LSI controller not found.";

/// Class markers identifying the storage controller by default.
pub const DEFAULT_CONTROLLER_MARKERS: &[&str] = &["Serial Attached SCSI controller"];

/// PCIe signalling rates (GT/s) and the generation they belong to.
const PCIE_GENERATIONS: &[(f64, &str)] = &[(16.0, "4.0"), (8.0, "3.0"), (5.0, "2.0"), (2.5, "1.0")];

lazy_regex!(
    RE_BUS_ADDRESS,
    r"(?m)^(?:[0-9a-fA-F]{4}:)?[0-9a-fA-F]{2}:[0-9a-fA-F]{2}\.[0-9a-fA-F]"
);
lazy_regex!(
    RE_LINK_STATUS,
    r"(?s)LnkSta:.*?Speed ([\d.]+)GT/s.*?Width x(\d+)"
);

/// Negotiated PCI Express link of the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusInterface {
    /// Generation label ("3.0"), or `None` for unrecognized speeds.
    pub generation: Option<&'static str>,
    /// Lane count.
    pub width: u32,
}

impl fmt::Display for BusInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PCI Express {} x{}",
            self.generation.unwrap_or("Unknown"),
            self.width
        )
    }
}

/// What the PCI listing says about the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDetails {
    /// Device line as printed by `lspci`.
    pub name: String,
    /// Link details, only known from the verbose listing.
    pub bus_interface: Option<BusInterface>,
}

/// Map a raw link speed in GT/s to its PCIe generation label.
///
/// ```
/// use lsishow::parse::pci::pcie_generation;
///
/// assert_eq!(pcie_generation("8"), Some("3.0"));
/// assert_eq!(pcie_generation("2.5"), Some("1.0"));
/// assert_eq!(pcie_generation("32"), None);
/// ```
pub fn pcie_generation(speed: &str) -> Option<&'static str> {
    let speed: f64 = speed.trim().parse().ok()?;
    PCIE_GENERATIONS
        .iter()
        .find(|(rate, _)| (rate - speed).abs() < 1e-6)
        .map(|(_, label)| *label)
}

fn is_controller(text: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| text.contains(marker.as_str()))
}

/// Find the controller in a verbose (`lspci -vv`) listing.
pub fn parse_verbose_listing(text: &str, markers: &[String]) -> Option<ControllerDetails> {
    let block = split_blocks(text, Boundary::Before(&RE_BUS_ADDRESS))
        .find(|block| is_controller(block, markers))?;

    let name = block.lines().next().unwrap_or_default().trim().to_string();

    let bus_interface = RE_LINK_STATUS.captures(block).and_then(|caps| {
        let width = caps.get(2)?.as_str().parse().ok()?;
        Some(BusInterface {
            generation: pcie_generation(caps.get(1)?.as_str()),
            width,
        })
    });

    if bus_interface.is_none() {
        tracing::debug!("No link status for controller '{}'", name);
    }

    Some(ControllerDetails {
        name,
        bus_interface,
    })
}

/// Find the controller line in a plain (`lspci`) listing.
pub fn parse_plain_listing(text: &str, markers: &[String]) -> Option<String> {
    text.lines()
        .find(|line| is_controller(line, markers))
        .map(|line| line.trim().to_string())
}
