//! Configuration for document output

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::units::Units;

/// Errors that can occur when loading a writer configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for document output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
    /// Unit every length attribute is written in
    pub units: Units,

    /// Spaces per nesting level; 0 writes everything on one line
    pub indent: usize,

    /// Skip objects without a codec (with a warning) instead of failing the write
    pub skip_unsupported: bool,

    /// Write files to a temporary sibling and rename it into place
    pub atomic: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            units: Units::Pt,
            indent: 2,
            skip_unsupported: false,
            atomic: false,
        }
    }
}

impl WriterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; absent keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the output length unit
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    /// Set the indentation width
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether unsupported objects are skipped
    pub fn with_skip_unsupported(mut self, skip: bool) -> Self {
        self.skip_unsupported = skip;
        self
    }

    /// Set whether files are replaced atomically
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}
