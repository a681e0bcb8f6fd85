//! Error types for car diagnostics
//!
//! Data problems in a record are never errors: they are reported as
//! diagnostic outcomes. The variants here cover invalid configuration,
//! engine contract violations and report output failures.

use thiserror::Error;

/// Main error type for diagnostic operations
#[derive(Error, Debug)]
pub enum DiagnosticError {
    /// A required-inventory configuration was rejected
    #[error("Invalid inventory configuration: {0}")]
    InvalidConfig(String),

    /// An emission function was called with arguments the engine must never produce
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Writing the report failed
    #[error("Report output error: {0}")]
    Io(#[from] std::io::Error),
}

impl DiagnosticError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        DiagnosticError::InvalidConfig(msg.into())
    }

    /// Create a contract violation error
    pub fn contract_violation(msg: impl Into<String>) -> Self {
        DiagnosticError::ContractViolation(msg.into())
    }

    /// Check if this is caused by user-supplied input (vs a defect)
    pub fn is_user_error(&self) -> bool {
        matches!(self, DiagnosticError::InvalidConfig(_))
    }
}

/// Result type alias for diagnostic operations
pub type Result<T> = std::result::Result<T, DiagnosticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiagnosticError::contract_violation("Count must be greater than 0");
        assert_eq!(err.to_string(), "Contract violation: Count must be greater than 0");
    }

    #[test]
    fn test_is_user_error() {
        assert!(DiagnosticError::invalid_config("zero count").is_user_error());
        assert!(!DiagnosticError::contract_violation("bad").is_user_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: DiagnosticError = io.into();
        assert!(matches!(err, DiagnosticError::Io(_)));
    }
}
