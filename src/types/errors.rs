use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Container-level failure while opening or listing an archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to read ZIP: {0}")]
    Corrupt(String),
    #[error("Failed to read entry #{index}: {reason}")]
    Entry { index: usize, reason: String },
    #[error("Failed to read '{path}': {reason}")]
    Read { path: String, reason: String },
    #[error("Entry '{path}' inflates past {limit} bytes")]
    TooLarge { path: String, limit: u64 },
    #[error("Manifest build cancelled")]
    Cancelled,
}

/// Request-level failure of the validate pipeline.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("No files provided")]
    NoFiles,
    #[error("File too large: '{name}' is {size} bytes (limit {limit})")]
    FileTooLarge { name: String, size: u64, limit: u64 },
    #[error("Pack '{pack}' is unreadable: {source}")]
    Archive {
        pack: String,
        #[source]
        source: ArchiveError,
    },
    #[error("Validation timed out after {0:?}")]
    TimedOut(Duration),
    #[error("Manifest worker failed: {0}")]
    Worker(String),
}

/// Failure while assembling a HUD export archive.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Pick at least one feature")]
    NothingSelected,
    #[error("'{path}' is not a source for feature '{feature}'")]
    NotACandidate { feature: String, path: String },
    #[error("ZIP write error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Metadata encode error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Timed out: {0}")]
    Timeout(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommandError {
    /// HTTP status the transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Archive(_) | Self::Timeout(_) | Self::Internal(_) => 500,
        }
    }
}

impl From<ArchiveError> for CommandError {
    fn from(error: ArchiveError) -> Self {
        match error {
            ArchiveError::TooLarge { .. } => CommandError::BadRequest(error.to_string()),
            _ => CommandError::Archive(error.to_string()),
        }
    }
}

impl From<BundleError> for CommandError {
    fn from(error: BundleError) -> Self {
        match error {
            BundleError::NoFiles | BundleError::FileTooLarge { .. } => {
                CommandError::BadRequest(error.to_string())
            }
            BundleError::Archive {
                source: ArchiveError::TooLarge { .. },
                ..
            } => CommandError::BadRequest(error.to_string()),
            BundleError::Archive { .. } => CommandError::Archive(error.to_string()),
            BundleError::TimedOut(_) => CommandError::Timeout(error.to_string()),
            BundleError::Worker(_) => CommandError::Internal(error.to_string()),
        }
    }
}

impl From<ExportError> for CommandError {
    fn from(error: ExportError) -> Self {
        match error {
            ExportError::NothingSelected | ExportError::NotACandidate { .. } => {
                CommandError::BadRequest(error.to_string())
            }
            _ => CommandError::Internal(error.to_string()),
        }
    }
}

impl Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
