//! Error types for statusgen-cli

use crate::exit_codes;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from statusgen-core
    #[error(transparent)]
    Core(#[from] statusgen_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Invalid combination of flags
    #[error("{message}")]
    Usage { message: String },
}

impl CliError {
    /// Create a new usage error with the given message
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage { .. } => exit_codes::USAGE,
            CliError::Core(_) | CliError::Io(_) => exit_codes::FAILURE,
        }
    }
}
