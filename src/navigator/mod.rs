//! Navigation of structured values by property expression.
//!
//! The navigator drives a [`Resolver`] over an expression one segment at a
//! time and asks the current value for the matching attribute through the
//! [`Navigable`] trait.
//!
//! # Examples
//!
//! ```
//! use proppath::navigator::Navigator;
//! use proppath::resolver::Resolver;
//!
//! let doc: serde_yaml::Value =
//!     serde_yaml::from_str("accounts: [{owner: {name: Ada}}]").unwrap();
//! let navigator = Navigator::new(Resolver::new());
//! let name = navigator.get(&doc, "accounts[0].owner(name)").unwrap();
//! assert_eq!(name.as_str(), Some("Ada"));
//! ```

pub mod error;
pub mod value;

pub use error::NavigateError;
pub use value::Navigable;

use crate::resolver::{Flavor, ResolveError, Resolver, Segment};

/// Walks [`Navigable`] values along property expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator {
    resolver: Resolver,
}

impl Navigator {
    pub fn new(resolver: Resolver) -> Self {
        Navigator { resolver }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Returns the value `expr` refers to, starting from `root`.
    ///
    /// With the strict flavor the whole expression is validated before any
    /// lookup happens; otherwise a malformed segment is reported when the
    /// walk reaches it.
    pub fn get<'v, V: Navigable>(&self, root: &'v V, expr: &str) -> Result<&'v V, NavigateError> {
        if expr.is_empty() {
            return Err(NavigateError::EmptyExpression);
        }
        if self.resolver.flavor() == Flavor::Strict {
            self.resolver
                .validate(expr)
                .map_err(|source| malformed(expr, source))?;
        }

        let mut current = root;
        let mut rest = expr;
        while let Some(raw) = self.resolver.next_segment(rest) {
            let segment = self
                .resolver
                .parse_segment(raw)
                .map_err(|source| malformed(expr, source))?;
            log::trace!("resolving '{}' of '{}'", segment, expr);

            current = step(current, &segment).ok_or_else(|| {
                let consumed = &expr[..expr.len() - rest.len()];
                let resolved = consumed.strip_suffix('.').unwrap_or(consumed);
                log::debug!("no value for '{}' after '{}'", raw, resolved);
                NavigateError::NotFound {
                    segment: raw.to_string(),
                    resolved: resolved.to_string(),
                }
            })?;

            match self.resolver.remainder(rest) {
                Some(next) => rest = next,
                None => break,
            }
        }
        Ok(current)
    }
}

fn step<'v, V: Navigable>(current: &'v V, segment: &Segment<'_>) -> Option<&'v V> {
    match *segment {
        Segment::Simple { name } => current.get_simple(name),
        Segment::Indexed { name, index } => current.get_indexed(name, index),
        Segment::Keyed { name, key } => current.get_keyed(name, key),
    }
}

fn malformed(expr: &str, source: ResolveError) -> NavigateError {
    log::debug!("malformed property expression '{}': {}", expr, source);
    NavigateError::Malformed {
        expression: expr.to_string(),
        source,
    }
}
