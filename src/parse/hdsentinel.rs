//! Drive temperatures from Hard Disk Sentinel.

use std::collections::HashMap;

use super::blocks::{split_blocks, Boundary};
use super::{capture, capture_int};

/// Serial number to temperature in °C.
pub type DriveTemperatures = HashMap<String, u32>;

const SECTION_TOKEN: &str = "HDD Device";
const DEVICE_MARKER: &str = "HDD Model ID";

lazy_regex!(RE_SERIAL, r"HDD Serial No:[ \t]*(.*)");
lazy_regex!(RE_TEMPERATURE, r"Temperature\s*:\s*(\d+)\s*°C");

/// Extract the serial-to-temperature mapping from `hdsentinel` output.
///
/// Sections lacking either a serial number or a temperature are skipped.
///
/// ```
/// use lsishow::parse::hdsentinel::parse_temperatures;
///
/// let text = "HDD Device  0: /dev/sda\nHDD Model ID : ST4000\nHDD Serial No: ZFN0\nTemperature  : 38 °C\n";
/// assert_eq!(parse_temperatures(text).get("ZFN0"), Some(&38));
/// ```
pub fn parse_temperatures(text: &str) -> DriveTemperatures {
    split_blocks(text, Boundary::Token(SECTION_TOKEN))
        .filter(|section| section.contains(DEVICE_MARKER))
        .filter_map(|section| {
            let serial = capture(&RE_SERIAL, section)?;
            let temperature = capture_int(&RE_TEMPERATURE, section)?;
            Some((serial, temperature))
        })
        .collect()
}
