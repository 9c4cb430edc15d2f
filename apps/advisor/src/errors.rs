use thiserror::Error;

/// Application-level error type.
///
/// The matcher itself never fails; these cover the fallible edges around it
/// (catalog files, config values, practice names).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown practice: '{0}'")]
    UnknownPractice(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for the error variant.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::UnknownPractice(_) => "UNKNOWN_PRACTICE",
            AppError::Io(e) => {
                tracing::error!("I/O error: {e}");
                "IO_ERROR"
            }
            AppError::Json(e) => {
                tracing::error!("JSON error: {e}");
                "JSON_ERROR"
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "INTERNAL_ERROR"
            }
        }
    }
}
