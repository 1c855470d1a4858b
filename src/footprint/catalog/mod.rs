//! Part catalogs.
//!
//! A catalog maps part identifiers to their body dimensions and to one land
//! pattern per soldering process. The built-in tables live in
//! [`capacitors`] and [`inductors`]; further catalogs can be loaded from
//! JSON files with [`Catalog::from_json_file`].
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "family": "inductor",
//!   "parts": [
//!     {
//!       "id": "LQM18F",
//!       "body_length": 1.6,
//!       "body_width": 0.8,
//!       "size_label": "0603/1608",
//!       "variants": {
//!         "Reflow": { "a": 0.7, "b": 1.9, "c": 0.7 }
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Pad sets use the letters of the manufacturer documents: Kemet tables
//! (`Z`, `G`, `X`, `Y`, `C`) or Murata tables (`a`, `b`, `c`, optional `d`,
//! `B`, `C`).

pub mod capacitors;
pub mod inductors;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::footprint::family::PartFamily;
use crate::footprint::naming::footprint_name;
use crate::footprint::process::SolderProcess;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog file: {path}")]
    ReadError {
        /// Path to the catalog file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Catalog file could not be parsed.
    #[error("failed to parse catalog file: {path}")]
    ParseError {
        /// Path to the catalog file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Two parts share an identifier.
    #[error("duplicate part '{id}' in {family} catalog")]
    DuplicatePart {
        /// Family of the catalog.
        family: PartFamily,
        /// The repeated identifier.
        id: String,
    },

    /// Two parts would write a footprint of the same name.
    #[error("part '{id}' produces footprint '{name}', already produced by part '{existing}'")]
    DuplicateName {
        /// The colliding footprint name.
        name: String,
        /// Part being added.
        id: String,
        /// Part already producing the name.
        existing: String,
    },

    /// A part has no land pattern at all.
    #[error("part '{id}' defines no soldering process variant")]
    NoVariants {
        /// Part identifier.
        id: String,
    },

    /// Catalogs of different families were merged into one library.
    #[error("library '{library}' holds {expected} parts, cannot add {found} catalog")]
    FamilyMismatch {
        /// Library name.
        library: String,
        /// Family already in the library.
        expected: PartFamily,
        /// Family of the added catalog.
        found: PartFamily,
    },
}

/// Second pair of pads forming T-shaped lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondaryPads {
    /// Outer-edge-to-outer-edge distance across the secondary pads (mm).
    pub span: f64,

    /// Secondary pad size in Y (mm).
    pub pad_height: f64,
}

/// Land pattern for one soldering process.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "PadTable")]
pub struct PadSpec {
    /// Pad size in Y, across the pad axis (mm).
    pub pad_height: f64,

    /// Pad size in X, along the pad axis (mm).
    pub pad_width: f64,

    /// Outer-edge-to-outer-edge distance across both pads (mm).
    pub total_span: f64,

    /// Distance between pad centres (mm).
    pub center_pitch: f64,

    /// Distance between the facing inner pad edges (mm).
    pub inner_gap: f64,

    /// Copper size in Y when the pad is only partially opened in the mask.
    pub copper_height: Option<f64>,

    /// Outer pads of a T-shaped land.
    pub secondary: Option<SecondaryPads>,
}

impl PadSpec {
    /// Creates a pad set from a Kemet table row.
    ///
    /// * `z` - total span
    /// * `g` - inner gap
    /// * `x` - pad height
    /// * `y` - pad width
    /// * `c` - centre pitch
    #[must_use]
    pub const fn kemet(z: f64, g: f64, x: f64, y: f64, c: f64) -> Self {
        Self {
            pad_height: x,
            pad_width: y,
            total_span: z,
            center_pitch: c,
            inner_gap: g,
            copper_height: None,
            secondary: None,
        }
    }

    /// Creates a pad set from a Murata table row.
    ///
    /// * `a` - inner gap
    /// * `b` - total span
    /// * `c` - pad height
    #[must_use]
    pub fn murata(a: f64, b: f64, c: f64) -> Self {
        Self {
            pad_height: c,
            pad_width: (b - a) / 2.0,
            total_span: b,
            center_pitch: (b + a) / 2.0,
            inner_gap: a,
            copper_height: None,
            secondary: None,
        }
    }

    /// Sets the copper height of partially masked pads (Murata `d`).
    #[must_use]
    pub const fn with_copper_height(mut self, d: f64) -> Self {
        self.copper_height = Some(d);
        self
    }

    /// Adds the outer pads of a T-shaped land (Murata `B` and `C`).
    #[must_use]
    pub const fn with_secondary(mut self, span: f64, pad_height: f64) -> Self {
        self.secondary = Some(SecondaryPads { span, pad_height });
        self
    }

    /// Copper height when it exceeds the masked pad height.
    #[must_use]
    pub fn masked_copper_height(&self) -> Option<f64> {
        self.copper_height.filter(|&d| d > self.pad_height)
    }

    /// Outer span of the whole land, secondary pads included.
    #[must_use]
    pub fn outer_span(&self) -> f64 {
        self.secondary
            .map_or(self.total_span, |s| s.span.max(self.total_span))
    }

    /// Largest Y extent of any pad in the land.
    #[must_use]
    pub fn max_pad_height(&self) -> f64 {
        let mut height = self.pad_height;
        if let Some(d) = self.copper_height {
            height = height.max(d);
        }
        if let Some(s) = self.secondary {
            height = height.max(s.pad_height);
        }
        height
    }
}

/// Pad table rows as written in the manufacturer documents.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PadTable {
    Kemet {
        #[serde(rename = "Z")]
        span: f64,
        #[serde(rename = "G")]
        gap: f64,
        #[serde(rename = "X")]
        height: f64,
        #[serde(rename = "Y")]
        width: f64,
        #[serde(rename = "C")]
        pitch: f64,
    },
    Murata {
        #[serde(rename = "a")]
        gap: f64,
        #[serde(rename = "b")]
        span: f64,
        #[serde(rename = "c")]
        height: f64,
        #[serde(rename = "d", default)]
        copper_height: Option<f64>,
        #[serde(rename = "B", default)]
        secondary_span: Option<f64>,
        #[serde(rename = "C", default)]
        secondary_height: Option<f64>,
    },
}

impl TryFrom<PadTable> for PadSpec {
    type Error = String;

    fn try_from(table: PadTable) -> Result<Self, Self::Error> {
        Ok(match table {
            PadTable::Kemet {
                span,
                gap,
                height,
                width,
                pitch,
            } => Self::kemet(span, gap, height, width, pitch),
            PadTable::Murata {
                gap,
                span,
                height,
                copper_height,
                secondary_span,
                secondary_height,
            } => {
                let mut pads = Self::murata(gap, span, height);
                if let Some(d) = copper_height {
                    pads = pads.with_copper_height(d);
                }
                match (secondary_span, secondary_height) {
                    (Some(span), Some(height)) => pads = pads.with_secondary(span, height),
                    (None, None) => {}
                    _ => return Err("secondary pads need both `B` and `C`".to_string()),
                }
                pads
            }
        })
    }
}

/// One component type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartSpec {
    /// Part identifier, unique within its catalog.
    pub id: String,

    /// Body length along the pad axis (mm).
    pub body_length: f64,

    /// Body width across the pad axis (mm).
    pub body_width: f64,

    /// Body height (mm).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_height: Option<f64>,

    /// Length of the contacts along the pad axis (mm).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_tallness: Option<f64>,

    /// Width of the contacts across the pad axis (mm).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_width: Option<f64>,

    /// Manufacturer size code (e.g. "R", "0603/1608").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_label: Option<String>,

    /// EIA inch size code (e.g. "1206").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inch_size_label: Option<String>,

    /// Whether the part needs a polarity mark.
    #[serde(default)]
    pub polarized: bool,

    /// 3D model shared with another, mechanically identical part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_3d_shape: Option<String>,

    /// Land pattern per soldering process.
    pub variants: IndexMap<SolderProcess, PadSpec>,
}

impl PartSpec {
    /// Creates a part with the given body size and no land patterns.
    #[must_use]
    pub fn new(id: impl Into<String>, body_length: f64, body_width: f64) -> Self {
        Self {
            id: id.into(),
            body_length,
            body_width,
            body_height: None,
            contact_tallness: None,
            contact_width: None,
            size_label: None,
            inch_size_label: None,
            polarized: false,
            alt_3d_shape: None,
            variants: IndexMap::new(),
        }
    }

    /// Sets the body height.
    #[must_use]
    pub fn body_height(mut self, height: f64) -> Self {
        self.body_height = Some(height);
        self
    }

    /// Sets the contact length along the pad axis.
    #[must_use]
    pub fn contact_tallness(mut self, tallness: f64) -> Self {
        self.contact_tallness = Some(tallness);
        self
    }

    /// Sets the contact width across the pad axis.
    #[must_use]
    pub fn contact_width(mut self, width: f64) -> Self {
        self.contact_width = Some(width);
        self
    }

    /// Sets the manufacturer size code.
    #[must_use]
    pub fn size(mut self, label: impl Into<String>) -> Self {
        self.size_label = Some(label.into());
        self
    }

    /// Sets the EIA inch size code.
    #[must_use]
    pub fn inch_size(mut self, label: impl Into<String>) -> Self {
        self.inch_size_label = Some(label.into());
        self
    }

    /// Marks the part as polarized.
    #[must_use]
    pub fn polarized(mut self) -> Self {
        self.polarized = true;
        self
    }

    /// Reuses the 3D model of another part.
    #[must_use]
    pub fn shape(mut self, model: impl Into<String>) -> Self {
        self.alt_3d_shape = Some(model.into());
        self
    }

    /// Adds the land pattern for a soldering process.
    #[must_use]
    pub fn variant(mut self, process: SolderProcess, pads: PadSpec) -> Self {
        self.variants.insert(process, pads);
        self
    }

    /// Returns the land pattern for a soldering process.
    #[must_use]
    pub fn pads(&self, process: SolderProcess) -> Option<&PadSpec> {
        self.variants.get(&process)
    }
}

/// An ordered collection of parts of one family.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Family of every part in the catalog.
    pub family: PartFamily,

    parts: IndexMap<String, PartSpec>,

    /// Footprint name of every part and process, mapped to the owning part.
    names: IndexMap<String, String>,
}

/// Catalog file layout: parts are a list so duplicates can be reported.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    family: PartFamily,
    parts: Vec<PartSpec>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new(family: PartFamily) -> Self {
        Self {
            family,
            parts: IndexMap::new(),
            names: IndexMap::new(),
        }
    }

    /// Builds a catalog from a list of parts.
    ///
    /// # Errors
    ///
    /// Returns an error if a part has no variants or repeats an identifier.
    pub fn from_parts(
        family: PartFamily,
        parts: impl IntoIterator<Item = PartSpec>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(family);
        catalog.extend(parts)?;
        Ok(catalog)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it breaks
    /// the catalog invariants.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: CatalogFile =
            serde_json::from_str(&contents).map_err(|e| CatalogError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let catalog = Self::from_parts(file.family, file.parts)?;

        tracing::info!(
            path = %path.display(),
            family = %catalog.family,
            count = catalog.len(),
            "Loaded catalog"
        );

        Ok(catalog)
    }

    /// Adds a part to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the part has no variants, its identifier is
    /// already present, or one of its footprint names is already produced
    /// by another part. Names are checked for every process, including a
    /// synthesised Hand variant.
    pub fn add(&mut self, part: PartSpec) -> Result<(), CatalogError> {
        if part.variants.is_empty() {
            return Err(CatalogError::NoVariants { id: part.id });
        }
        if self.parts.contains_key(&part.id) {
            return Err(CatalogError::DuplicatePart {
                family: self.family,
                id: part.id,
            });
        }

        let names: Vec<String> = SolderProcess::ALL
            .iter()
            .map(|&process| footprint_name(self.family, &part, process))
            .collect();
        for name in &names {
            if let Some(existing) = self.names.get(name) {
                return Err(CatalogError::DuplicateName {
                    name: name.clone(),
                    id: part.id,
                    existing: existing.clone(),
                });
            }
        }

        for name in names {
            self.names.insert(name, part.id.clone());
        }
        self.parts.insert(part.id.clone(), part);
        Ok(())
    }

    /// Adds several parts to the catalog.
    ///
    /// # Errors
    ///
    /// Stops at the first part [`Catalog::add`] rejects.
    pub fn extend(&mut self, parts: impl IntoIterator<Item = PartSpec>) -> Result<(), CatalogError> {
        for part in parts {
            self.add(part)?;
        }
        Ok(())
    }

    /// Returns a part by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PartSpec> {
        self.parts.get(id)
    }

    /// Iterates the parts in table order.
    pub fn iter(&self) -> impl Iterator<Item = &PartSpec> {
        self.parts.values()
    }

    /// Returns the number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if the catalog holds no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
