use actix_files::NamedFile;
use std::path::PathBuf;

use crate::domain::error::{GatewayError, Result};

/// Opens the pre-aggregated daily summary for verbatim streaming.
pub struct DailySummaryUseCase {
    path: PathBuf,
}

impl DailySummaryUseCase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn execute(&self) -> Result<NamedFile> {
        NamedFile::open_async(&self.path)
            .await
            .map_err(|e| GatewayError::file_access(&self.path, e))
    }
}
