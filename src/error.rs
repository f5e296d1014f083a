use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("No such file: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to load PDF: {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("Error writing document {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error serializing document {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("Invalid split options: {reason}")]
    Configuration { reason: String },

    #[error("Failed to report output")]
    Report(#[from] std::io::Error),
}

impl SplitError {
    pub fn configuration(reason: impl Into<String>) -> Self {
        SplitError::Configuration {
            reason: reason.into(),
        }
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            SplitError::NotFound { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
