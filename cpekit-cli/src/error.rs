//! CLI-specific error types and exit code mapping

use cpekit_core::CpeError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to standard Unix exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// The given CPE string failed to parse or serialize.
    #[error("{0}")]
    Cpe(#[from] CpeError),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                      |
    /// |------|------------------------------|
    /// | 0    | Success                      |
    /// | 1    | General error                |
    /// | 2    | Configuration error          |
    /// | 4    | CPE parse/serialize failure  |
    /// | 10   | IO error                     |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Cpe(_) => 4,
            Self::Io(_) => 10,
            Self::JsonSerialize(_) => 1,
        }
    }
}
