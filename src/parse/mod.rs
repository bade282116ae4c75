//! Tolerant extractors for diagnostic tool output.
//!
//! Every extractor here is total: it never fails on unexpected text and
//! reports each field as present (`Some`) or absent (`None`).
//!
//! - [`blocks`] - Splitting output into per-entity blocks
//! - [`pci`] - Controller name and link details from `lspci`
//! - [`hdsentinel`] - Drive temperatures keyed by serial number
//! - [`storcli`] - Slot attributes, the device table and controller summary

use regex::Regex;

// --- Compiled regexes (one-time via LazyLock) ---

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: std::sync::LazyLock<regex::Regex> =
            std::sync::LazyLock::new(|| regex::Regex::new($pattern).unwrap());
    };
}

pub mod blocks;
pub mod hdsentinel;
pub mod pci;
pub mod storcli;

/// First capture group of `re` in `text`, trimmed. Empty captures count as absent.
pub(crate) fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// First capture group of `re` in `text`, parsed as an integer.
pub(crate) fn capture_int(re: &Regex, text: &str) -> Option<u32> {
    capture(re, text).and_then(|s| s.parse().ok())
}
