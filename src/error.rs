//! Error types for title resolution, catalogs and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the interpolation registry
#[derive(Debug, Error)]
pub enum TitleError {
    /// No placeholder registered under this name
    #[error("unknown placeholder ':{name}'")]
    UnknownPlaceholder { name: String },

    /// Format alias not present in the alias table
    #[error("unknown format alias ':{name}'")]
    UnknownFormat { name: String },
}

impl TitleError {
    /// Create an unknown placeholder error
    pub fn unknown_placeholder(name: impl Into<String>) -> Self {
        Self::UnknownPlaceholder { name: name.into() }
    }

    /// Create an unknown format alias error
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat { name: name.into() }
    }
}

/// Errors that can occur when loading a translation catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// Arrays, numbers and other non-string leaves
    #[error("unsupported value at '{key}': expected a string or a table")]
    UnsupportedValue { key: String },
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
