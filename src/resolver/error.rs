//! Error types for property-path resolution.

use std::fmt;

/// Errors raised while decomposing a malformed property expression.
///
/// Every variant aborts the call that raised it; the resolver never
/// substitutes a default or returns a partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An opening `[` or `(` has no matching closing delimiter.
    MissingEndDelimiter { delimiter: char },
    /// An indexed segment with nothing between its brackets (`name[]`).
    EmptyIndex,
    /// Bracket contents that are not a non-negative base-10 integer in range.
    InvalidIndexValue { value: String },
    /// A segment with no name where one is required (strict flavor only).
    EmptyName { position: usize },
    /// Text following a closed index or key (strict flavor only).
    TrailingText { segment: String, trailing: String },
    /// A closing delimiter inside a segment name (strict flavor only).
    ReservedCharacter { character: char, position: usize },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MissingEndDelimiter { .. } => write!(f, "Missing End Delimiter"),
            ResolveError::EmptyIndex => write!(f, "No Index Value"),
            ResolveError::InvalidIndexValue { value } => {
                write!(f, "Invalid index value '{}'", value)
            }
            ResolveError::EmptyName { position } => {
                write!(f, "Empty property name at position {}", position)
            }
            ResolveError::TrailingText { segment, trailing } => {
                write!(f, "Unexpected text '{}' after '{}'", trailing, segment)
            }
            ResolveError::ReservedCharacter {
                character,
                position,
            } => write!(
                f,
                "Reserved character '{}' at position {}",
                character, position
            ),
        }
    }
}

impl std::error::Error for ResolveError {}
