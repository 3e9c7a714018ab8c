//! Error kinds for compgraph operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide whether to surface a diagnostic,
/// fix their input, or give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid configuration or parameters
    ConfigInvalid,

    /// Invalid argument passed to function
    InvalidArgument,

    // =========================================================================
    // Tree errors
    // =========================================================================
    /// The traversal reached a tree shape the depth rule does not cover
    StructuralViolation,

    /// Input could be parsed but cannot be represented as a config tree
    InvalidFormat,

    /// Failed to deserialize input
    DeserializationFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether the error stems from the input document rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::StructuralViolation
                | ErrorKind::InvalidFormat
                | ErrorKind::DeserializationFailed
                | ErrorKind::ConfigInvalid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(
            ErrorKind::StructuralViolation.to_string(),
            "StructuralViolation"
        );
        assert_eq!(ErrorKind::FileNotFound.as_str(), "FileNotFound");
    }

    #[test]
    fn test_is_input_error() {
        assert!(ErrorKind::StructuralViolation.is_input_error());
        assert!(ErrorKind::ConfigInvalid.is_input_error());
        assert!(!ErrorKind::IoFailed.is_input_error());
        assert!(!ErrorKind::InvalidArgument.is_input_error());
    }
}
