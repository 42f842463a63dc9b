//! Error handling for kerfkit
//!
//! Two layers of errors:
//! - Parameter errors (settings validation)
//! - Engine errors (drawing and layout)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Settings parameter error
///
/// Raised while applying name/value overrides to a settings bundle.
/// A failed override leaves the bundle untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Parameter name not declared by the settings bundle
    #[error("Unknown parameter for {settings}: {name}")]
    Unknown {
        /// The settings bundle that rejected the name.
        settings: &'static str,
        /// The unknown parameter name.
        name: String,
    },

    /// Parameter value outside the usable range
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        /// The parameter name.
        name: String,
        /// Why the value is unusable.
        reason: String,
    },
}

/// Drawing engine error
///
/// Represents failures while composing parts: bad edge code strings,
/// unknown move directives and geometrically impossible requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Settings parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Edge code not present in the canvas registry
    #[error("Unknown edge code: {0:?}")]
    UnknownEdge(char),

    /// Wrong number of edge codes for the part
    #[error("Expected {expected} edge codes, got {got}")]
    EdgeCount {
        /// How many codes the part needs.
        expected: usize,
        /// How many codes the caller supplied.
        got: usize,
    },

    /// Unknown token in a move directive
    #[error("Unknown move direction: {0:?}")]
    UnknownDirection(String),

    /// Requested part cannot be laid out
    #[error("Geometry error: {0}")]
    Geometry(String),
}

/// Result type using ParameterError
pub type ParameterResult<T> = std::result::Result<T, ParameterError>;

/// Result type using EngineError
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::Unknown {
            settings: "FingerJointSettings",
            name: "fingre".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown parameter for FingerJointSettings: fingre"
        );
    }

    #[test]
    fn test_engine_error_display() {
        assert_eq!(
            EngineError::UnknownEdge('q').to_string(),
            "Unknown edge code: 'q'"
        );
        assert_eq!(
            EngineError::EdgeCount {
                expected: 4,
                got: 3
            }
            .to_string(),
            "Expected 4 edge codes, got 3"
        );
        assert_eq!(
            EngineError::UnknownDirection("sideways".to_string()).to_string(),
            "Unknown move direction: \"sideways\""
        );
    }

    #[test]
    fn test_parameter_error_converts_to_engine_error() {
        let err: EngineError = ParameterError::InvalidValue {
            name: "width".to_string(),
            reason: "must be positive".to_string(),
        }
        .into();
        assert!(matches!(err, EngineError::Parameter(_)));
    }
}
