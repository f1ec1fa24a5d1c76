//! Property expression resolver.
//!
//! The resolver isolates one segment at a time from a compound expression
//! such as `accounts[2].owner(name)`. It classifies the segment, extracts its
//! name, index or key, and strips it to yield the rest of the path.

use serde::{Deserialize, Serialize};

use super::error::ResolveError;
use super::segment::Segment;

const NESTED: char = '.';
const INDEXED_START: char = '[';
const INDEXED_END: char = ']';
const KEYED_START: char = '(';
const KEYED_END: char = ')';

/// Largest accepted index by default (the largest 32-bit signed integer).
pub const DEFAULT_MAX_INDEX: usize = i32::MAX as usize;

/// How much checking [`Resolver::validate`] performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Indexes and keys of every segment must be well formed.
    #[default]
    Standard,
    /// Additionally rejects empty names, reserved characters in names and
    /// text after a closed index or key.
    Strict,
}

/// Settings a [`Resolver`] is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    pub flavor: Flavor,
    /// Largest index `index_of` accepts before reporting an invalid value.
    pub max_index: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            flavor: Flavor::Standard,
            max_index: DEFAULT_MAX_INDEX,
        }
    }
}

/// Scanner state while isolating the next segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Plain,
    InIndex,
    InKey,
}

/// Stateless resolver for property-path expressions.
///
/// Every operation is a pure function of its input. An empty expression
/// stands in for an absent one and maps to the documented empty result
/// (`""`, `false`, `None`) without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolver {
    options: ResolverOptions,
}

impl Resolver {
    /// Creates a resolver with the standard flavor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with the strict flavor.
    pub fn strict() -> Self {
        Self::with_options(ResolverOptions {
            flavor: Flavor::Strict,
            ..ResolverOptions::default()
        })
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    pub fn flavor(&self) -> Flavor {
        self.options.flavor
    }

    /// Returns the name of the first segment: everything before the first
    /// `.`, `[` or `(`, or the whole expression if none is present.
    pub fn property_name<'e>(&self, expr: &'e str) -> &'e str {
        match first_delimiter(expr) {
            Some((pos, _)) => &expr[..pos],
            None => expr,
        }
    }

    /// Returns true if a `[` appears before any `.` or `(`.
    pub fn is_indexed(&self, expr: &str) -> bool {
        matches!(first_delimiter(expr), Some((_, INDEXED_START)))
    }

    /// Returns true if a `(` appears before any `.` or `[`.
    pub fn is_keyed(&self, expr: &str) -> bool {
        matches!(first_delimiter(expr), Some((_, KEYED_START)))
    }

    /// Returns the index of the first segment, or `None` if it isn't indexed.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::MissingEndDelimiter`] if no `]` follows the `[`
    /// - [`ResolveError::EmptyIndex`] for `name[]`
    /// - [`ResolveError::InvalidIndexValue`] if the brackets hold anything but
    ///   digits, or a number above the configured maximum
    pub fn index_of(&self, expr: &str) -> Result<Option<usize>, ResolveError> {
        let start = match first_delimiter(expr) {
            Some((pos, INDEXED_START)) => pos,
            _ => return Ok(None),
        };
        let value = enclosed(expr, start, INDEXED_END)?;
        self.parse_index(value).map(Some)
    }

    /// Returns the key of the first segment, or `None` if it isn't keyed.
    ///
    /// The key is returned verbatim; the first `)` after the `(` ends it.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingEndDelimiter`] if no `)` follows the `(`.
    pub fn key_of<'e>(&self, expr: &'e str) -> Result<Option<&'e str>, ResolveError> {
        match first_delimiter(expr) {
            Some((pos, KEYED_START)) => enclosed(expr, pos, KEYED_END).map(Some),
            _ => Ok(None),
        }
    }

    /// Returns the first complete segment of `expr`, including its index or
    /// key, but not any nested segments that follow it.
    ///
    /// A `.` inside brackets or parentheses does not split the segment, so
    /// `owner(first.name)` is one segment. An unterminated index or key runs
    /// to the end of the expression.
    pub fn next_segment<'e>(&self, expr: &'e str) -> Option<&'e str> {
        if expr.is_empty() {
            return None;
        }

        let mut state = ScanState::Plain;
        for (pos, ch) in expr.char_indices() {
            match (state, ch) {
                (ScanState::Plain, NESTED) => return Some(&expr[..pos]),
                (ScanState::Plain, INDEXED_START) => state = ScanState::InIndex,
                (ScanState::Plain, KEYED_START) => state = ScanState::InKey,
                (ScanState::InIndex, INDEXED_END) | (ScanState::InKey, KEYED_END) => {
                    return Some(&expr[..pos + ch.len_utf8()]);
                }
                _ => {}
            }
        }
        Some(expr)
    }

    /// Returns what follows the first segment, with one leading `.` removed.
    ///
    /// Returns `None` when the first segment is the whole expression.
    pub fn remainder<'e>(&self, expr: &'e str) -> Option<&'e str> {
        let segment = self.next_segment(expr)?;
        if segment.len() == expr.len() {
            return None;
        }
        let rest = &expr[segment.len()..];
        Some(rest.strip_prefix(NESTED).unwrap_or(rest))
    }

    pub fn has_more_segments(&self, expr: &str) -> bool {
        self.remainder(expr).is_some()
    }

    /// Iterates over the raw segments of `expr`.
    pub fn segments<'e>(&self, expr: &'e str) -> Segments<'e> {
        Segments {
            resolver: *self,
            rest: Some(expr),
        }
    }

    /// Classifies the first segment of `segment` and extracts its parts.
    pub fn parse_segment<'e>(&self, segment: &'e str) -> Result<Segment<'e>, ResolveError> {
        let name = self.property_name(segment);
        if let Some(index) = self.index_of(segment)? {
            return Ok(Segment::Indexed { name, index });
        }
        if let Some(key) = self.key_of(segment)? {
            return Ok(Segment::Keyed { name, key });
        }
        Ok(Segment::Simple { name })
    }

    /// Checks every segment of `expr` up front.
    ///
    /// The standard flavor checks each index and key. The strict flavor also
    /// rejects empty names (except a bare index or key addressing the current
    /// value), closing delimiters inside names, and text after a closed index
    /// or key other than `.`, `[` or `(`.
    pub fn validate(&self, expr: &str) -> Result<(), ResolveError> {
        let strict = self.options.flavor == Flavor::Strict;
        if expr.is_empty() {
            return if strict {
                Err(ResolveError::EmptyName { position: 0 })
            } else {
                Ok(())
            };
        }

        let mut rest = expr;
        let mut position = 0;
        // The first segment may index the current value directly.
        let mut chained = true;
        while let Some(raw) = self.next_segment(rest) {
            let segment = self.parse_segment(raw)?;
            if strict {
                check_name(&segment, position, chained)?;
            }

            let Some(next) = self.remainder(rest) else {
                break;
            };
            let tail = &rest[raw.len()..];
            chained = tail.starts_with(|ch: char| ch == INDEXED_START || ch == KEYED_START);
            if strict
                && (segment.is_indexed() || segment.is_keyed())
                && !chained
                && !tail.starts_with(NESTED)
            {
                return Err(ResolveError::TrailingText {
                    segment: raw.to_string(),
                    trailing: self.property_name(tail).to_string(),
                });
            }

            position += rest.len() - next.len();
            if strict && next.is_empty() {
                return Err(ResolveError::EmptyName { position });
            }
            rest = next;
        }
        Ok(())
    }

    fn parse_index(&self, value: &str) -> Result<usize, ResolveError> {
        if value.is_empty() {
            return Err(ResolveError::EmptyIndex);
        }
        let invalid = || ResolveError::InvalidIndexValue {
            value: value.to_string(),
        };
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        value
            .parse::<usize>()
            .ok()
            .filter(|index| *index <= self.options.max_index)
            .ok_or_else(invalid)
    }
}

/// Returns the position and character of the first `.`, `[` or `(`.
fn first_delimiter(expr: &str) -> Option<(usize, char)> {
    expr.char_indices()
        .find(|&(_, ch)| matches!(ch, NESTED | INDEXED_START | KEYED_START))
}

/// Returns the text between the opening delimiter at `start` and the first
/// `end` after it.
fn enclosed(expr: &str, start: usize, end: char) -> Result<&str, ResolveError> {
    let body = &expr[start + 1..];
    body.find(end)
        .map(|len| &body[..len])
        .ok_or(ResolveError::MissingEndDelimiter { delimiter: end })
}

fn check_name(segment: &Segment<'_>, position: usize, chained: bool) -> Result<(), ResolveError> {
    let name = segment.name();
    if name.is_empty() {
        let decorated = segment.is_indexed() || segment.is_keyed();
        if !(chained && decorated) {
            return Err(ResolveError::EmptyName { position });
        }
    }
    if let Some((offset, character)) = name
        .char_indices()
        .find(|&(_, ch)| ch == INDEXED_END || ch == KEYED_END)
    {
        return Err(ResolveError::ReservedCharacter {
            character,
            position: position + offset,
        });
    }
    Ok(())
}

/// Iterator over the raw segments of an expression.
///
/// Drives the `next_segment` / `remainder` loop until no segments remain.
#[derive(Debug, Clone)]
pub struct Segments<'e> {
    resolver: Resolver,
    rest: Option<&'e str>,
}

impl<'e> Iterator for Segments<'e> {
    type Item = &'e str;

    fn next(&mut self) -> Option<Self::Item> {
        let expr = self.rest.take()?;
        let segment = self.resolver.next_segment(expr)?;
        self.rest = self.resolver.remainder(expr);
        Some(segment)
    }
}

impl std::iter::FusedIterator for Segments<'_> {}
