//! Test board packing.
//!
//! A test board is a printable proof sheet showing every footprint of a
//! library next to its process variants. It is produced from a KiCad board
//! template in which lines of the form `@<library dir>` mark where the
//! footprints of a `.pretty` directory go.
//!
//! # Layout
//!
//! Each part gets a row slot; its process variants sit side by side in
//! columns (Reflow, Wave/Flow, Hand). Slots fill a page top to bottom, then
//! continue on the next page to the right:
//!
//! ```text
//! x = base_x + page * 4 * column_pitch + column * column_pitch
//! y = base_y + row * row_pitch
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::footprint::SolderProcess;
use crate::kicad::error::{LibraryError, LibraryResult};
use crate::kicad::library::{list_files, MODULE_EXTENSION};
use crate::kicad::module::{format_mm, MODULE_PREFIX};

/// Columns per page; one more than the process columns leaves a gap.
const COLUMNS_PER_PAGE: u32 = 4;

/// Matches footprint names ending in a process suffix.
const PROCESS_SUFFIX_PATTERN: &str = r"^(.*)_(Reflow|Wave|Flow|Hand)$";

/// Placement constants of a test board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardLayout {
    /// X of the first column (mm).
    #[serde(default = "default_base")]
    pub base_x: f64,

    /// Y of the first row (mm).
    #[serde(default = "default_base")]
    pub base_y: f64,

    /// Distance between rows (mm).
    #[serde(default = "default_row_pitch")]
    pub row_pitch: f64,

    /// Rows on one page.
    pub rows_per_page: u32,

    /// Distance between process columns (mm).
    pub column_pitch: f64,
}

const fn default_base() -> f64 {
    20.0
}

const fn default_row_pitch() -> f64 {
    10.0
}

impl BoardLayout {
    /// Layout of the capacitor test board.
    #[must_use]
    pub const fn capacitors() -> Self {
        Self {
            base_x: default_base(),
            base_y: default_base(),
            row_pitch: default_row_pitch(),
            rows_per_page: 16,
            column_pitch: 15.0,
        }
    }

    /// Layout of the inductor test board.
    #[must_use]
    pub const fn inductors() -> Self {
        Self {
            base_x: default_base(),
            base_y: default_base(),
            row_pitch: default_row_pitch(),
            rows_per_page: 18,
            column_pitch: 14.0,
        }
    }

    /// Width of one page of columns (mm).
    #[must_use]
    pub fn page_width(&self) -> f64 {
        f64::from(COLUMNS_PER_PAGE) * self.column_pitch
    }

    /// Position of a footprint in row slot `slot` and column `column`.
    #[must_use]
    pub fn position(&self, slot: u32, column: u32) -> (f64, f64) {
        let row = slot % self.rows_per_page;
        let page = slot / self.rows_per_page;
        let x = f64::from(column).mul_add(
            self.column_pitch,
            f64::from(page).mul_add(self.page_width(), self.base_x),
        );
        let y = f64::from(row).mul_add(self.row_pitch, self.base_y);
        (x, y)
    }
}

/// A footprint file to be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFile {
    /// File name, including the extension.
    pub file_name: String,

    /// Module text.
    pub text: String,
}

impl ModuleFile {
    /// Footprint name, the file name without extension.
    #[must_use]
    pub fn name(&self) -> &str {
        self.file_name
            .strip_suffix(&format!(".{MODULE_EXTENSION}"))
            .unwrap_or(&self.file_name)
    }
}

/// Where the packer finds the footprints a template names.
pub trait FootprintSource {
    /// Returns the footprints of the library named by a sentinel line.
    ///
    /// # Errors
    ///
    /// Returns an error if the library cannot be read.
    fn modules(&self, library: &str) -> LibraryResult<Vec<ModuleFile>>;
}

/// Reads footprints from `.pretty` directories on disk.
///
/// Sentinel names are resolved relative to `root`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source resolving library paths under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a source resolving library paths next to a template file.
    #[must_use]
    pub fn beside(template: &Path) -> Self {
        Self::new(template.parent().map_or_else(PathBuf::new, Path::to_path_buf))
    }
}

impl FootprintSource for DirectorySource {
    fn modules(&self, library: &str) -> LibraryResult<Vec<ModuleFile>> {
        let dir = self.root.join(library);

        let mut modules = Vec::new();
        for path in list_files(&dir, MODULE_EXTENSION)? {
            let text = fs::read_to_string(&path).map_err(|e| LibraryError::file_read(&path, e))?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            modules.push(ModuleFile { file_name, text });
        }

        if modules.is_empty() {
            tracing::warn!(library = %dir.display(), "No footprints found for board sentinel");
        }
        Ok(modules)
    }
}

/// Reads the footprints a library writer reported as written.
///
/// Only the listed names are read; other files in the `.pretty`
/// directories are ignored. A sentinel naming a library that is not listed
/// is an error.
#[derive(Debug, Clone)]
pub struct ListedSource {
    root: PathBuf,
    libraries: IndexMap<String, Vec<String>>,
}

impl ListedSource {
    /// Creates an empty listing of libraries under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            libraries: IndexMap::new(),
        }
    }

    /// Lists the footprints written to `library` (its name without `.pretty`).
    pub fn insert(&mut self, library: &str, names: impl IntoIterator<Item = String>) {
        self.libraries
            .entry(library.to_string())
            .or_default()
            .extend(names);
    }
}

impl FootprintSource for ListedSource {
    fn modules(&self, library: &str) -> LibraryResult<Vec<ModuleFile>> {
        let trimmed = library.trim_end_matches('/');
        let name = trimmed.strip_suffix(".pretty").unwrap_or(trimmed);
        let names = self
            .libraries
            .get(name)
            .ok_or_else(|| LibraryError::unknown_library(library))?;

        let dir = self.root.join(format!("{name}.pretty"));
        names
            .iter()
            .map(|footprint| {
                let file_name = format!("{footprint}.{MODULE_EXTENSION}");
                let path = dir.join(&file_name);
                let text =
                    fs::read_to_string(&path).map_err(|e| LibraryError::file_read(&path, e))?;
                Ok(ModuleFile { file_name, text })
            })
            .collect()
    }
}

/// One footprint placed on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    /// Footprint name.
    pub footprint_name: String,
    /// X position (mm).
    pub x: f64,
    /// Y position (mm).
    pub y: f64,
    /// Process column.
    pub column: u32,
}

/// Result of packing a template.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedBoard {
    /// Board text.
    pub text: String,
    /// Placements in board order.
    pub placements: Vec<Placement>,
}

/// Slot assignment state, carried across sentinel lines.
struct SlotCounter {
    suffix: Regex,
    slot: u32,
    previous: Option<String>,
    occupied: Vec<u32>,
    unnamed_column: u32,
}

impl SlotCounter {
    fn new() -> LibraryResult<Self> {
        let suffix = Regex::new(PROCESS_SUFFIX_PATTERN)
            .map_err(|e| LibraryError::pattern(PROCESS_SUFFIX_PATTERN, e))?;
        Ok(Self {
            suffix,
            slot: 0,
            previous: None,
            occupied: Vec::new(),
            unnamed_column: 0,
        })
    }

    /// Returns the base name and column of a footprint.
    fn classify(&mut self, name: &str) -> (String, u32) {
        let process = self.suffix.captures(name).and_then(|caps| {
            let base = caps.get(1)?.as_str().to_string();
            let process = SolderProcess::from_str_loose(caps.get(2)?.as_str())?;
            Some((base, process.board_column()))
        });

        process.unwrap_or_else(|| {
            // Names without a process suffix alternate between the first
            // two columns, one slot each.
            let column = self.unnamed_column;
            self.unnamed_column ^= 1;
            tracing::debug!(footprint = name, column, "Footprint without process suffix");
            (name.to_string(), column)
        })
    }

    /// Assigns the row slot and column of the next footprint.
    fn next(&mut self, name: &str) -> (u32, u32) {
        let (base, column) = self.classify(name);

        if let Some(previous) = &self.previous {
            if *previous != base || self.occupied.contains(&column) {
                self.slot += 1;
                self.occupied.clear();
            }
        }
        self.occupied.push(column);
        self.previous = Some(base);

        (self.slot, column)
    }
}

/// Inserts `(at x y)` after the `(module ...)` line of a footprint.
fn place_module(text: &str, x: f64, y: f64, out: &mut String) {
    let mut placed = false;
    for line in text.split_inclusive('\n') {
        out.push_str(line);
        if !line.ends_with('\n') {
            out.push('\n');
        }
        if !placed && line.trim_start().starts_with(MODULE_PREFIX) {
            out.push_str(&format!("  (at {} {})\n", format_mm(x), format_mm(y)));
            placed = true;
        }
    }
}

/// Packs the footprints named by a template's sentinel lines.
///
/// Lines starting with `@` are replaced by the footprints of the named
/// library, sorted by file name, each placed at its slot position. All other
/// lines are copied unchanged.
///
/// # Errors
///
/// Returns an error if `source` cannot provide a library.
pub fn pack(
    template: &str,
    layout: &BoardLayout,
    source: &dyn FootprintSource,
) -> LibraryResult<PackedBoard> {
    let mut counter = SlotCounter::new()?;
    let mut text = String::with_capacity(template.len());
    let mut placements = Vec::new();

    for line in template.split_inclusive('\n') {
        let Some(library) = line.strip_prefix('@') else {
            text.push_str(line);
            continue;
        };

        let library = library.trim();
        let mut modules = source.modules(library)?;
        modules.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        for module in &modules {
            let (slot, column) = counter.next(module.name());
            let (x, y) = layout.position(slot, column);
            place_module(&module.text, x, y, &mut text);
            placements.push(Placement {
                footprint_name: module.name().to_string(),
                x,
                y,
                column,
            });
        }

        tracing::debug!(library, count = modules.len(), "Placed library on board");
    }

    Ok(PackedBoard { text, placements })
}

/// Packs a template file into a board file.
///
/// # Errors
///
/// Returns an error if a file cannot be read or written, or if `source`
/// cannot provide a library.
pub fn pack_file(
    template: &Path,
    output: &Path,
    layout: &BoardLayout,
    source: &dyn FootprintSource,
) -> LibraryResult<PackedBoard> {
    let template_text =
        fs::read_to_string(template).map_err(|e| LibraryError::file_read(template, e))?;

    let board = pack(&template_text, layout, source)?;
    fs::write(output, &board.text).map_err(|e| LibraryError::file_write(output, e))?;

    tracing::info!(
        template = %template.display(),
        output = %output.display(),
        placed = board.placements.len(),
        "Wrote test board"
    );

    Ok(board)
}
