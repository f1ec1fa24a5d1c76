//! File I/O for navigable documents.
//!
//! This module provides functionality to load YAML and JSON documents from
//! disk or stdin, with transparent gzip decompression.

pub mod loader;
