//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::footprint::PartFamily;
use crate::kicad::BoardLayout;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Directory the libraries are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Names of the built-in libraries.
    #[serde(default)]
    pub libraries: LibrariesConfig,

    /// Test board placement constants.
    #[serde(default)]
    pub board: BoardConfig,

    /// Additional part catalogs loaded from JSON files.
    #[serde(default)]
    pub extra_catalogs: Vec<ExtraCatalog>,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            _schema: None,
            _comment: None,
            output_dir: default_output_dir(),
            libraries: LibrariesConfig::default(),
            board: BoardConfig::default(),
            extra_catalogs: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            &self.libraries.ceramic,
            &self.libraries.tantalum,
            &self.libraries.inductors,
        ];
        for name in names
            .into_iter()
            .chain(self.extra_catalogs.iter().map(|c| &c.library))
        {
            validate_library_name(name)?;
        }

        if names[0] == names[2] || names[1] == names[2] {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Library '{}' cannot hold both capacitors and inductors",
                    names[2]
                ),
            });
        }

        for (label, layout) in [
            ("capacitors", &self.board.capacitors),
            ("inductors", &self.board.inductors),
        ] {
            if layout.rows_per_page == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("Board layout '{label}': rows_per_page must be at least 1"),
                });
            }
            if !(layout.row_pitch > 0.0 && layout.column_pitch > 0.0) {
                return Err(ConfigError::ValidationError {
                    message: format!("Board layout '{label}': pitches must be positive"),
                });
            }
        }

        Ok(())
    }

    /// Returns the board layout used for a family.
    #[must_use]
    pub const fn board_layout(&self, family: PartFamily) -> &BoardLayout {
        match family {
            PartFamily::Capacitor => &self.board.capacitors,
            PartFamily::Inductor => &self.board.inductors,
        }
    }
}

fn validate_library_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(ConfigError::ValidationError {
            message: format!("Invalid library name '{name}'. Must be a plain directory name"),
        });
    }
    Ok(())
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Names of the built-in libraries.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibrariesConfig {
    /// Ceramic chip capacitors.
    /// Default: "`Capacitors_SMD`"
    #[serde(default = "default_ceramic")]
    pub ceramic: String,

    /// Tantalum chip capacitors.
    /// Default: "`Capacitors_Tantalum_SMD`"
    #[serde(default = "default_tantalum")]
    pub tantalum: String,

    /// Chip inductors.
    /// Default: "`Inductors_SMD`"
    #[serde(default = "default_inductors")]
    pub inductors: String,
}

impl Default for LibrariesConfig {
    fn default() -> Self {
        Self {
            ceramic: default_ceramic(),
            tantalum: default_tantalum(),
            inductors: default_inductors(),
        }
    }
}

fn default_ceramic() -> String {
    "Capacitors_SMD".to_string()
}

fn default_tantalum() -> String {
    "Capacitors_Tantalum_SMD".to_string()
}

fn default_inductors() -> String {
    "Inductors_SMD".to_string()
}

/// Test board layouts per family.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Capacitor test board.
    #[serde(default = "BoardLayout::capacitors")]
    pub capacitors: BoardLayout,

    /// Inductor test board.
    #[serde(default = "BoardLayout::inductors")]
    pub inductors: BoardLayout,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            capacitors: BoardLayout::capacitors(),
            inductors: BoardLayout::inductors(),
        }
    }
}

/// A part catalog loaded from a JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraCatalog {
    /// Path to the catalog file.
    pub path: PathBuf,

    /// Library the parts are written to.
    pub library: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
