//! Error types for the calculator edges.
//!
//! Computation itself never fails: missing or invalid numbers only blank the result. Errors come from parsing unit
//! names and commands, from configuration files, and from terminal I/O.

/// Result type for calculator operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Error type for calculator operations
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("Unknown {kind} unit: '{input}'")]
    UnknownUnit { kind: &'static str, input: String },

    #[error("Unknown quantity: '{0}' (expected density, mass or volume)")]
    UnknownTarget(String),

    #[error("Unknown command: '{0}' (type 'help' for the list)")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    pub(crate) fn unknown_unit(kind: &'static str, input: &str) -> Self {
        CalcError::UnknownUnit {
            kind,
            input: input.to_string(),
        }
    }
}
