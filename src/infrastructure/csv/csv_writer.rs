// ============================================================
// CSV WRITER
// ============================================================
// Serialize reshaped rows into an in-memory CSV body

use csv::{Terminator, WriterBuilder};
use std::path::Path;

use crate::domain::csv::{SummaryRow, SUMMARY_HEADER};
use crate::domain::error::{GatewayError, Result};

/// Write the `Time,Field,Value` header followed by `rows`.
///
/// The body is fully built before returning, so callers never send a
/// partial CSV. Fields are quoted only when they hold a delimiter, quote or
/// line break; leading whitespace alone does not trigger quoting.
pub fn write_summary<'a, I>(path: &Path, rows: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a SummaryRow>,
{
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(SUMMARY_HEADER)
        .map_err(|e| GatewayError::csv_processing(path, e))?;

    for row in rows {
        writer
            .write_record(row.as_record())
            .map_err(|e| GatewayError::csv_processing(path, e))?;
    }

    writer
        .into_inner()
        .map_err(|e| GatewayError::csv_processing(path, e))
}
