//! Document loading functionality.
//!
//! This module provides functions to load YAML or JSON documents from files
//! or stdin, parsing them into `serde_yaml::Value` trees that can be navigated
//! by property expression. Gzip-compressed input is decompressed transparently.

use anyhow::{Context, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Loads and parses a document from the filesystem.
///
/// YAML is a superset of JSON, so both formats are accepted. A `.gz`
/// extension marks the file as gzip-compressed.
///
/// # Examples
///
/// ```no_run
/// use proppath::file::loader::load_document;
///
/// let doc = load_document("settings.yaml").unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - The file is gzipped but corrupted
/// - The file contents are not a valid document
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file '{}'", path_ref.display()))?
    };

    log::debug!("loaded {} bytes from {}", content.len(), path_ref.display());
    parse_document(&content)
}

/// Loads and parses a document from standard input.
///
/// Gzip input is recognised by its magic bytes (0x1f 0x8b).
///
/// # Errors
///
/// This function will return an error if:
/// - Reading from stdin fails
/// - The input is not valid UTF-8 (after decompression)
/// - The input is not a valid document
pub fn load_document_from_stdin() -> Result<Value> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    parse_document(&content)
}

/// Parses YAML or JSON text into a value tree.
///
/// Content that is empty or holds only comments is rejected.
pub fn parse_document(content: &str) -> Result<Value> {
    if is_comment_only(content) {
        anyhow::bail!("No document found");
    }
    serde_yaml::from_str(content).context("Failed to parse document")
}

fn is_comment_only(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

/// Reads and decompresses a gzipped file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid gzip format (corrupted)
/// - The decompressed content is not valid UTF-8
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}
