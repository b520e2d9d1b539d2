use std::path::PathBuf;
use tokio::io::AsyncReadExt;

use crate::domain::csv::SummaryRow;
use crate::domain::error::{GatewayError, Result};
use crate::infrastructure::csv::{write_summary, CsvParser};

/// Reads the summary source file and reshapes it into `Time,Field,Value`.
pub struct SummaryFeedUseCase {
    source_path: PathBuf,
    parser: CsvParser,
}

impl SummaryFeedUseCase {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            parser: CsvParser::new(),
        }
    }

    /// Returns the complete CSV body. The file is re-read on every call and
    /// its handle is dropped before returning.
    pub async fn execute(&self) -> Result<Vec<u8>> {
        let content = {
            let mut file = tokio::fs::File::open(&self.source_path)
                .await
                .map_err(|e| GatewayError::file_access(&self.source_path, e))?;

            let mut content = Vec::new();
            file.read_to_end(&mut content)
                .await
                .map_err(|e| GatewayError::csv_processing(&self.source_path, e))?;
            content
        };

        let records = self.parser.parse_content(&self.source_path, &content)?;
        let rows: Vec<SummaryRow> = records.iter().filter_map(SummaryRow::from_source).collect();

        write_summary(&self.source_path, &rows)
    }
}
