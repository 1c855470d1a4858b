//! Error types for library and board file operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors that can occur while writing libraries or packing boards.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Failed to create an output directory.
    #[error("Failed to create directory: {path}")]
    CreateDir {
        /// Path to the directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to open or read a file.
    #[error("Failed to read file: {path}")]
    FileRead {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file: {path}")]
    FileWrite {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A directory listing pattern could not be built or walked.
    #[error("Invalid file pattern '{pattern}': {message}")]
    Pattern {
        /// The glob pattern.
        pattern: String,
        /// Description of what's wrong.
        message: String,
    },

    /// Two footprints of one library share a name.
    #[error("Footprint '{name}' written twice to library '{library}'")]
    DuplicateFootprint {
        /// Library name.
        library: String,
        /// Footprint name.
        name: String,
    },

    /// A template sentinel names a library that cannot be resolved.
    #[error("Unknown library '{name}' in board template")]
    UnknownLibrary {
        /// Library name from the sentinel line.
        name: String,
    },
}

impl LibraryError {
    /// Creates a directory creation error.
    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Creates a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a file write error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a pattern error.
    pub fn pattern(pattern: impl Into<String>, message: impl ToString) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Creates a duplicate footprint error.
    pub fn duplicate_footprint(library: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateFootprint {
            library: library.into(),
            name: name.into(),
        }
    }

    /// Creates an unknown library error.
    pub fn unknown_library(name: impl Into<String>) -> Self {
        Self::UnknownLibrary { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LibraryError::unknown_library("Capacitors_SMD");
        assert_eq!(
            err.to_string(),
            "Unknown library 'Capacitors_SMD' in board template"
        );
    }

    #[test]
    fn write_error_names_path() {
        let err = LibraryError::file_write(
            "/out/Capacitors_SMD.pretty/C_0603_Reflow.kicad_mod",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("C_0603_Reflow.kicad_mod"));
    }
}
