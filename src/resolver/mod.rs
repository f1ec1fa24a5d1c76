//! Resolver for compound property-path expressions.
//!
//! An expression is a `.`-separated chain of segments, each of which is
//! simple, indexed or keyed:
//!
//! - `name` - Plain attribute
//! - `name[3]` - Indexed attribute (non-negative base-10 index)
//! - `name(key)` - Keyed attribute (key taken verbatim up to the first `)`)
//!
//! # Examples
//!
//! ```
//! use proppath::resolver::Resolver;
//!
//! let resolver = Resolver::new();
//! let expr = "accounts[2].owner(name)";
//! assert_eq!(resolver.next_segment(expr), Some("accounts[2]"));
//! assert_eq!(resolver.index_of(expr), Ok(Some(2)));
//! assert_eq!(resolver.remainder(expr), Some("owner(name)"));
//! ```

pub mod error;
pub mod parser;
pub mod segment;

pub use error::ResolveError;
pub use parser::{Flavor, Resolver, ResolverOptions, Segments, DEFAULT_MAX_INDEX};
pub use segment::Segment;
