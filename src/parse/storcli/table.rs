//! The columnar physical drive table of `storcli64 /cN show`.
//!
//! ```text
//! -------------------------------------------------------------------------------
//! EID:Slt DID State DG     Size Intf Med SED PI SeSz Model                Sp Type
//! -------------------------------------------------------------------------------
//! :0        0 JBOD  -  3.637 TB SATA HDD N   N  512B ST4000DM004-2CV104   U  -
//! -------------------------------------------------------------------------------
//! ```
//!
//! storcli pads columns to the terminal width, so the Model column span is
//! recomputed from the header of every listing.

use serde::Serialize;

use crate::error::{LsiError, Result};

lazy_regex!(RE_TABLE_HEADER, r"(?m)^EID:Slt\s+DID\s+State.*$");
lazy_regex!(RE_FIRST_INT, r"\d+");

const MODEL_LABEL: &str = "Model";

/// Vendor rebranding quirk: storcli drops the leading `S` from some Seagate models.
const TRUNCATED_PREFIX: char = 'T';
const TRUNCATED_MARKER: &str = "DM00";
const RESTORED_PREFIX: char = 'S';

/// One row of the device table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub slot_id: String,
    pub model: Option<String>,
}

/// Byte span of the Model column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelColumn {
    /// Offset of the `Model` label in the header.
    pub start: usize,
    /// Offset of the next header token, or `None` when Model is the last column.
    pub end: Option<usize>,
}

impl ModelColumn {
    /// Locate the Model column in a header line.
    pub fn locate(header: &str) -> Option<Self> {
        let start = header.find(MODEL_LABEL)?;
        let after = start + MODEL_LABEL.len();
        let end = header[after..]
            .find(|c: char| !c.is_whitespace())
            .map(|offset| after + offset);
        Some(Self { start, end })
    }

    /// Text of `line` left of the column.
    fn leading<'a>(&self, line: &'a str) -> &'a str {
        line.get(..self.start).unwrap_or(line)
    }

    /// Text of `line` within the column, clamped to the line length.
    fn cell<'a>(&self, line: &'a str) -> &'a str {
        let end = self.end.unwrap_or(line.len()).min(line.len());
        line.get(self.start..end).unwrap_or_default()
    }
}

fn is_rule(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 10 && line.chars().all(|c| c == '-')
}

/// Slot number from an `EID:Slt` token such as `:3` or `252:3`.
fn slot_from_eid_slt(token: &str) -> Option<String> {
    let slot_part = token.rsplit(':').next().unwrap_or(token);
    RE_FIRST_INT
        .find(slot_part)
        .or_else(|| RE_FIRST_INT.find(token))
        .map(|m| m.as_str().to_string())
}

/// Apply vendor-string cleanup to a raw model cell.
///
/// ```
/// use lsishow::parse::storcli::table::clean_model;
///
/// assert_eq!(clean_model("T4000DM004-2CV104"), "ST4000DM004-2CV104");
/// assert_eq!(clean_model("HUH721010AL, 5204 -"), "HUH721010AL");
/// ```
pub fn clean_model(raw: &str) -> String {
    let mut model = raw.trim().to_string();
    if model.starts_with(TRUNCATED_PREFIX) && model.contains(TRUNCATED_MARKER) {
        model.insert(0, RESTORED_PREFIX);
    }
    let model = model.split(',').next().unwrap_or_default();
    model.trim_end_matches([' ', '-']).to_string()
}

/// Parse one body line against the column layout.
pub fn parse_row(line: &str, column: &ModelColumn) -> Option<TableRow> {
    let tokens: Vec<&str> = column.leading(line).split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    let slot_id = slot_from_eid_slt(tokens[0])?;
    let model = Some(clean_model(column.cell(line))).filter(|m| !m.is_empty());

    Some(TableRow { slot_id, model })
}

/// Parse the device table out of `storcli64 /cN show` output.
///
/// Returns [`LsiError::MalformedTable`] when the header, its Model column or
/// the ruled body cannot be found. Individual lines that do not parse are
/// skipped.
pub fn parse_device_table(text: &str) -> Result<Vec<TableRow>> {
    let header = RE_TABLE_HEADER
        .find(text)
        .ok_or_else(|| LsiError::MalformedTable {
            message: "device table header not found".into(),
        })?;

    let column = ModelColumn::locate(header.as_str()).ok_or_else(|| LsiError::MalformedTable {
        message: "no Model column in device table header".into(),
    })?;

    let mut lines = text[header.end()..].lines().skip_while(|line| !is_rule(line));
    if lines.next().is_none() {
        return Err(LsiError::MalformedTable {
            message: "device table has no opening rule".into(),
        });
    }

    let mut body = Vec::new();
    let mut closed = false;
    for line in lines {
        if is_rule(line) {
            closed = true;
            break;
        }
        body.push(line);
    }
    if !closed {
        return Err(LsiError::MalformedTable {
            message: "device table has no closing rule".into(),
        });
    }

    Ok(body
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let row = parse_row(line, &column);
            if row.is_none() {
                tracing::debug!("Skipping device table line: {:?}", line);
            }
            row
        })
        .collect())
}
