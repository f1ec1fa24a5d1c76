//! Classified path segments.

use std::fmt;

/// A single classified step of a property expression.
///
/// Segments borrow their name and key from the expression they were
/// resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'e> {
    /// Plain attribute access (`name`)
    Simple { name: &'e str },
    /// Integer index into an attribute (`name[3]`)
    Indexed { name: &'e str, index: usize },
    /// Associative key into an attribute (`name(key)`)
    Keyed { name: &'e str, key: &'e str },
}

impl<'e> Segment<'e> {
    /// Returns the name portion of the segment.
    pub fn name(&self) -> &'e str {
        match *self {
            Segment::Simple { name }
            | Segment::Indexed { name, .. }
            | Segment::Keyed { name, .. } => name,
        }
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self, Segment::Indexed { .. })
    }

    pub fn is_keyed(&self) -> bool {
        matches!(self, Segment::Keyed { .. })
    }
}

impl fmt::Display for Segment<'_> {
    /// Renders the segment back in expression syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Simple { name } => write!(f, "{}", name),
            Segment::Indexed { name, index } => write!(f, "{}[{}]", name, index),
            Segment::Keyed { name, key } => write!(f, "{}({})", name, key),
        }
    }
}
