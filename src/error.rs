//! Top-level error types for smd-footprint-gen.
//!
//! Errors of individual table rows ([`DimensionError`](crate::footprint::DimensionError))
//! never reach this level: the batch skips the row and reports it.

use std::path::PathBuf;

use thiserror::Error;

use crate::footprint::CatalogError;
use crate::kicad::LibraryError;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that abort a generation run.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A part catalog could not be built or loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A library or board file could not be written.
    #[error(transparent)]
    Library(#[from] LibraryError),

    /// A report file could not be written.
    #[error("failed to write report: {path}")]
    Report {
        /// Path to the report file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
