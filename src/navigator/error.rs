//! Error types for property navigation.

use std::fmt;

use crate::resolver::ResolveError;

/// Errors that can occur while navigating a value by property expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateError {
    /// The expression could not be resolved.
    Malformed {
        expression: String,
        source: ResolveError,
    },
    /// No value exists for `segment`; `resolved` is the prefix that did resolve.
    NotFound { segment: String, resolved: String },
    /// The expression was empty.
    EmptyExpression,
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigateError::Malformed { expression, source } => write!(
                f,
                "Malformed property expression '{}': {}",
                expression, source
            ),
            NavigateError::NotFound { segment, resolved } if resolved.is_empty() => {
                write!(f, "No value for '{}'", segment)
            }
            NavigateError::NotFound { segment, resolved } => {
                write!(f, "No value for '{}' in '{}'", segment, resolved)
            }
            NavigateError::EmptyExpression => write!(f, "Empty property expression"),
        }
    }
}

impl std::error::Error for NavigateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavigateError::Malformed { source, .. } => Some(source),
            _ => None,
        }
    }
}
