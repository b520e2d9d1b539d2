// ============================================================
// CSV PARSER
// ============================================================
// Parse the summary source file into raw records

use csv::{ByteRecord, ReaderBuilder, Trim};
use std::path::Path;

use crate::domain::error::{GatewayError, Result};

/// Quote-aware CSV parser for the summary source file
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether the first record is a header to drop
    skip_header: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            skip_header: true,
        }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw file content. `path` is only used for error reporting.
    ///
    /// The first record is dropped whatever it contains when `skip_header`
    /// is set. Records may have differing field counts and need not be UTF-8.
    pub fn parse_content(&self, path: &Path, content: &[u8]) -> Result<Vec<ByteRecord>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .trim(Trim::None)
            .flexible(true)
            .from_reader(content);

        let mut records = Vec::new();
        for (index, result) in reader.byte_records().enumerate() {
            let record = result.map_err(|e| {
                GatewayError::csv_processing(path, format!("row {}: {}", index + 1, e))
            })?;

            if index == 0 && self.skip_header {
                continue;
            }
            records.push(record);
        }

        Ok(records)
    }
}
