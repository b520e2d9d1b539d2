use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum GatewayError {
    FileAccess { path: PathBuf, reason: String },
    CsvProcessing { path: PathBuf, reason: String },
    Config(String),
}

impl GatewayError {
    pub fn file_access(path: &Path, err: impl fmt::Display) -> Self {
        GatewayError::FileAccess {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    pub fn csv_processing(path: &Path, err: impl fmt::Display) -> Self {
        GatewayError::CsvProcessing {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    /// Message returned to HTTP clients. Never includes the underlying cause.
    pub fn client_message(&self) -> String {
        match self {
            GatewayError::FileAccess { path, .. } => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                format!("Unable to access {} file", name)
            }
            GatewayError::CsvProcessing { .. } => "Error processing CSV data".to_string(),
            GatewayError::Config(_) => "Internal server error".to_string(),
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::FileAccess { path, reason } => {
                write!(f, "File access error ({}): {}", path.display(), reason)
            }
            GatewayError::CsvProcessing { path, reason } => {
                write!(f, "CSV processing error ({}): {}", path.display(), reason)
            }
            GatewayError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<figment::Error> for GatewayError {
    fn from(err: figment::Error) -> Self {
        GatewayError::Config(err.to_string())
    }
}

// Every failure is terminal for the request and surfaces as a plain-text 500.
impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.client_message())
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
