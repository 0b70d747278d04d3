// Error types for the route converter

use std::path::PathBuf;
use thiserror::Error;

use crate::routes::LineError;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cannot find the file specified: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} malformed route line(s):\n{}", .0.len(), format_line_errors(.0))]
    MalformedRoutes(Vec<LineError>),

    #[error("Too many converted files found for today in {} (last tried {})", dir.display(), last.display())]
    OutputNamesExhausted { dir: PathBuf, last: PathBuf },

    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

fn format_line_errors(errors: &[LineError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

impl AppError {
    /// Convert error to user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AppError::InputNotFound(_) => {
                "Please give the name of an existing route file to convert.".to_string()
            }
            AppError::InputRead { .. } => {
                "The route file could not be read. Check permissions and encoding.".to_string()
            }
            AppError::MalformedRoutes(errors) => {
                format!(
                    "Fix the {} line(s) above or rerun with --skip-malformed. No output was written.",
                    errors.len()
                )
            }
            AppError::OutputNamesExhausted { .. } => {
                "Too many converted files exist for today. Remove old ones or pick another output directory.".to_string()
            }
            AppError::OutputWrite { .. } => {
                "File system error. Check permissions and disk space.".to_string()
            }
        }
    }

    /// Input problems end the run quietly rather than as a failure
    pub fn is_graceful(&self) -> bool {
        matches!(self, AppError::InputNotFound(_) | AppError::InputRead { .. })
    }
}
