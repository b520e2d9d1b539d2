// ============================================================
// SUMMARY ROW
// ============================================================
// Reshaped record emitted by the summary feed

use csv::ByteRecord;

/// Header row of the reshaped feed
pub const SUMMARY_HEADER: [&str; 3] = ["Time", "Field", "Value"];

/// Minimum number of source fields a record needs to be reshaped
pub const MIN_SOURCE_FIELDS: usize = 3;

/// One row of the reshaped feed.
///
/// Source columns map as `0 -> time`, `2 -> field`, `1 -> value`. The swap of
/// columns 1 and 2 matches the dashboard's expected schema.
///
/// Fields are raw bytes: source files are not required to be UTF-8 and are
/// passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub time: Vec<u8>,
    pub field: Vec<u8>,
    pub value: Vec<u8>,
}

impl SummaryRow {
    /// Build a row from a source record, or `None` when it has fewer than
    /// three fields.
    pub fn from_source(record: &ByteRecord) -> Option<Self> {
        if record.len() < MIN_SOURCE_FIELDS {
            return None;
        }

        Some(Self {
            time: trim_quotes(&record[0]).to_vec(),
            field: trim_quotes(&record[2]).to_vec(),
            value: trim_quotes(&record[1]).to_vec(),
        })
    }

    pub fn as_record(&self) -> [&[u8]; 3] {
        [self.time.as_slice(), self.field.as_slice(), self.value.as_slice()]
    }
}

/// Strip leading and trailing double quotes. No other unescaping.
pub fn trim_quotes(value: &[u8]) -> &[u8] {
    let start = value
        .iter()
        .position(|&b| b != b'"')
        .unwrap_or(value.len());
    let end = value
        .iter()
        .rposition(|&b| b != b'"')
        .map_or(start, |pos| pos + 1);
    &value[start..end]
}
