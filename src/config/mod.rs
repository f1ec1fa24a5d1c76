//! Configuration system for proppath.
//!
//! This module provides the configuration structure for proppath with sensible
//! defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from a TOML file and merged with command-line
//! arguments.
//!
//! # Example
//!
//! ```
//! use proppath::config::Config;
//! use proppath::resolver::Flavor;
//!
//! let config = Config::default();
//! assert_eq!(config.flavor, Flavor::Standard);
//!
//! let strict = Config {
//!     flavor: Flavor::Strict,
//!     ..Config::default()
//! };
//! assert_eq!(strict.resolver().flavor(), Flavor::Strict);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resolver::{Flavor, Resolver, ResolverOptions, DEFAULT_MAX_INDEX};

/// Configuration for the proppath resolver and CLI.
///
/// # Fields
///
/// * `flavor` - Resolver flavor: "standard" or "strict" (default: "standard")
/// * `max_index` - Largest accepted index (default: 2147483647)
/// * `log_level` - Log filter used when `RUST_LOG` is unset (default: "warn")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Resolver flavor
    #[serde(default)]
    pub flavor: Flavor,

    /// Largest index accepted inside `[...]`
    #[serde(default = "default_max_index")]
    pub max_index: usize,

    /// Default log filter
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_index() -> usize {
    DEFAULT_MAX_INDEX
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flavor: Flavor::default(),
            max_index: default_max_index(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/proppath/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("proppath");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if there is no config file.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_default(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from `path`, or the defaults if it doesn't exist.
    ///
    /// A file that exists but is unreadable or invalid is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Loads configuration from an explicit path, failing on any error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Builds the resolver this configuration describes.
    pub fn resolver(&self) -> Resolver {
        Resolver::with_options(ResolverOptions {
            flavor: self.flavor,
            max_index: self.max_index,
        })
    }
}
