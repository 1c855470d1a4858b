//! Footprint library directories.
//!
//! A library named `Capacitors_SMD` consists of two sibling directories:
//!
//! - `Capacitors_SMD.pretty/` holding one `.kicad_mod` file per footprint
//! - `Capacitors_SMD.3dshapes/` holding the `.wrl` models the footprints
//!   refer to
//!
//! Models are produced elsewhere; the writer only creates the directory and
//! references it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::footprint::FootprintRecord;
use crate::kicad::error::{LibraryError, LibraryResult};
use crate::kicad::module;

/// Extension of footprint files.
pub const MODULE_EXTENSION: &str = "kicad_mod";

/// Extension of 3D model files.
pub const MODEL_EXTENSION: &str = "wrl";

/// A footprint library being written.
#[derive(Debug)]
pub struct FootprintLibrary {
    name: String,
    pretty_dir: PathBuf,
    shapes_dir: PathBuf,
    written: Vec<String>,
}

impl FootprintLibrary {
    /// Opens the library `name` under `parent`, creating its directories if
    /// they are missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    pub fn create(parent: &Path, name: &str) -> LibraryResult<Self> {
        let pretty_dir = parent.join(format!("{name}.pretty"));
        let shapes_dir = parent.join(format!("{name}.3dshapes"));

        for dir in [&pretty_dir, &shapes_dir] {
            fs::create_dir_all(dir).map_err(|e| LibraryError::create_dir(dir, e))?;
        }

        Ok(Self {
            name: name.to_string(),
            pretty_dir,
            shapes_dir,
            written: Vec::new(),
        })
    }

    /// Library name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory holding the footprint files.
    #[must_use]
    pub fn pretty_dir(&self) -> &Path {
        &self.pretty_dir
    }

    /// Directory holding the 3D models.
    #[must_use]
    pub fn shapes_dir(&self) -> &Path {
        &self.shapes_dir
    }

    /// Model directory as written into footprint files.
    #[must_use]
    pub fn model_dir(&self) -> String {
        format!("{}.3dshapes", self.name)
    }

    /// Names of the footprints written so far, in write order.
    #[must_use]
    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// Writes one footprint, replacing a file left by a previous run.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written, or if a footprint of
    /// the same name was already written to this library.
    pub fn write(&mut self, record: &FootprintRecord) -> LibraryResult<PathBuf> {
        if self.written.contains(&record.name) {
            return Err(LibraryError::duplicate_footprint(&self.name, &record.name));
        }

        let path = self
            .pretty_dir
            .join(format!("{}.{MODULE_EXTENSION}", record.name));
        let text = module::render(record, &self.model_dir());

        fs::write(&path, text).map_err(|e| LibraryError::file_write(&path, e))?;

        tracing::debug!(
            library = %self.name,
            footprint = %record.name,
            model = %record.model,
            "Wrote footprint"
        );

        self.written.push(record.name.clone());
        Ok(path)
    }

    /// Lists the model names present in the `.3dshapes` directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed.
    pub fn existing_models(&self) -> LibraryResult<Vec<String>> {
        let mut models: Vec<String> = list_files(&self.shapes_dir, MODEL_EXTENSION)?
            .iter()
            .filter_map(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect();
        models.sort();
        Ok(models)
    }
}

/// Lists the files in `dir` with the given extension.
///
/// The directory part is escaped, so names such as `run[1]` are taken
/// literally.
pub(crate) fn list_files(dir: &Path, extension: &str) -> LibraryResult<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{extension}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );

    let paths = glob::glob(&pattern).map_err(|e| LibraryError::pattern(&pattern, e))?;
    paths
        .map(|entry| entry.map_err(|e| LibraryError::pattern(&pattern, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::{generator::generate, PadSpec, PartFamily, PartSpec, SolderProcess};

    fn record(id: &str) -> FootprintRecord {
        let pads = PadSpec::kemet(2.78, 0.68, 1.08, 1.05, 1.73);
        let part = PartSpec::new(id, 1.6, 0.8).variant(SolderProcess::Reflow, pads);
        generate(PartFamily::Capacitor, &part, SolderProcess::Reflow, &pads)
    }

    #[test]
    fn create_makes_both_directories() {
        let dir = tempfile::tempdir().unwrap();
        let library = FootprintLibrary::create(dir.path(), "Capacitors_SMD").unwrap();

        assert!(library.pretty_dir().is_dir());
        assert!(library.shapes_dir().is_dir());
        assert!(dir.path().join("Capacitors_SMD.pretty").is_dir());
        assert_eq!(library.model_dir(), "Capacitors_SMD.3dshapes");
    }

    #[test]
    fn write_records_names_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = FootprintLibrary::create(dir.path(), "Capacitors_SMD").unwrap();

        let path = library.write(&record("0603")).unwrap();
        library.write(&record("0402")).unwrap();
        assert_eq!(library.written(), ["C_0603_Reflow", "C_0402_Reflow"]);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("(module C_0603_Reflow (layer F.Cu)\n"));
        assert!(text.contains("(model Capacitors_SMD.3dshapes/C_0603.wrl"));
    }

    #[test]
    fn second_write_of_a_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = FootprintLibrary::create(dir.path(), "Capacitors_SMD").unwrap();

        library.write(&record("0603")).unwrap();
        let err = library.write(&record("0603")).unwrap_err();
        assert!(matches!(err, LibraryError::DuplicateFootprint { .. }));
        assert_eq!(library.written(), ["C_0603_Reflow"]);
    }

    #[test]
    fn rerun_overwrites_previous_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = FootprintLibrary::create(dir.path(), "Capacitors_SMD").unwrap();
        let path = first.write(&record("0603")).unwrap();
        fs::write(&path, "stale").unwrap();

        let mut second = FootprintLibrary::create(dir.path(), "Capacitors_SMD").unwrap();
        assert_eq!(second.write(&record("0603")).unwrap(), path);
        assert!(fs::read_to_string(&path).unwrap().starts_with("(module "));
    }

    #[test]
    fn existing_models_lists_wrl_stems() {
        let dir = tempfile::tempdir().unwrap();
        let library = FootprintLibrary::create(dir.path(), "Inductors_SMD").unwrap();
        fs::write(library.shapes_dir().join("LQM21D.wrl"), "").unwrap();
        fs::write(library.shapes_dir().join("LQH32M.wrl"), "").unwrap();
        fs::write(library.shapes_dir().join("notes.txt"), "").unwrap();

        assert_eq!(library.existing_models().unwrap(), ["LQH32M", "LQM21D"]);
    }

    #[test]
    fn glob_characters_in_directory_are_literal() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("run[1]");
        let library = FootprintLibrary::create(&parent, "Inductors_SMD").unwrap();
        fs::write(library.shapes_dir().join("LQM21D.wrl"), "").unwrap();

        assert_eq!(library.existing_models().unwrap(), ["LQM21D"]);
    }
}
