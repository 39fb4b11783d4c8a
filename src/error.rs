//! Errors from dynamic operation dispatch.
//!
//! Style composition itself never fails: operations coerce unrecognized
//! argument shapes to their family defaults instead of erroring. The one
//! fallible surface is looking an operation up by name.

/// Error returned by [`Chain::op`](crate::Chain::op).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    /// No operation is registered under the requested name.
    UnknownOperation {
        /// The name that was requested
        name: String,
    },
}

impl std::fmt::Display for OpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpError::UnknownOperation { name } => {
                write!(f, "unknown style operation: \"{}\"", name)
            }
        }
    }
}

impl std::error::Error for OpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operation_display() {
        let err = OpError::UnknownOperation {
            name: "glow".to_string(),
        };
        assert!(err.to_string().contains("glow"));
    }
}
