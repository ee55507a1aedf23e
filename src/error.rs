//! Error types and handling for plugreg
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Most malformed input is repaired rather than reported: unparseable
//! metadata, bad repository URLs, and failed enrichment calls all degrade to
//! defaults inside the core modules. The variants here cover what is left,
//! which is essentially registry file I/O and CLI misuse.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for plugreg operations
#[derive(Error, Diagnostic, Debug)]
pub enum PlugregError {
    // Registry errors
    #[error("Failed to read registry file: {path}")]
    #[diagnostic(
        code(plugreg::registry::read_failed),
        help("Check that the registry file is readable")
    )]
    RegistryReadFailed { path: String, reason: String },

    #[error("Failed to parse registry file: {path}")]
    #[diagnostic(
        code(plugreg::registry::parse_failed),
        help("The registry must be a JSON object mapping plugin ids to records")
    )]
    RegistryParseFailed { path: String, reason: String },

    #[error("Failed to write registry file: {path}")]
    #[diagnostic(code(plugreg::registry::write_failed))]
    RegistryWriteFailed { path: String, reason: String },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(plugreg::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Serialization errors
    #[error("Failed to serialize output: {reason}")]
    #[diagnostic(code(plugreg::serialize::failed))]
    SerializeFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(plugreg::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PlugregError {
    fn from(err: std::io::Error) -> Self {
        PlugregError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PlugregError {
    fn from(err: serde_json::Error) -> Self {
        PlugregError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PlugregError>;
