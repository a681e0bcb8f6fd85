//! Error types for the car diagnostics CLI
//!
//! A failing diagnosis is not an error: it is a report with a non-zero exit
//! code. These variants cover the loading boundary and internal defects.

use car_diagnostics_core::DiagnosticError;
use thiserror::Error;

/// Main error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Document parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Serialization error while rendering output
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Error raised by the diagnostic engine
    #[error(transparent)]
    Diagnostic(#[from] DiagnosticError),
}

impl CliError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CliError::InvalidInput(msg.into())
    }

    /// Create a file error
    pub fn file_error(msg: impl Into<String>) -> Self {
        CliError::FileError(msg.into())
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        CliError::ParseError(msg.into())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        match self {
            CliError::InvalidInput(_) | CliError::FileError(_) | CliError::ParseError(_) => true,
            CliError::Diagnostic(err) => err.is_user_error(),
            CliError::SerializationError(_) => false,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::FileError(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::ParseError(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::ParseError(format!("TOML error: {}", err))
    }
}

impl From<quick_xml::de::DeError> for CliError {
    fn from(err: quick_xml::de::DeError) -> Self {
        CliError::ParseError(format!("XML error: {}", err))
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "Invalid input: test error");
    }

    #[test]
    fn test_is_user_error() {
        assert!(CliError::file_error("missing").is_user_error());
        assert!(CliError::parse_error("bad").is_user_error());
        assert!(!CliError::SerializationError("x".to_string()).is_user_error());
        assert!(!CliError::from(DiagnosticError::contract_violation("x")).is_user_error());
        assert!(CliError::from(DiagnosticError::invalid_config("x")).is_user_error());
    }

    #[test]
    fn test_diagnostic_error_is_transparent() {
        let err = CliError::from(DiagnosticError::contract_violation("count is 0"));
        assert_eq!(err.to_string(), "Contract violation: count is 0");
    }
}
