//! Library generation runs.
//!
//! A run walks every part of every library, validates each land pattern,
//! generates the footprint and writes it. Bad table rows are skipped and
//! reported; only I/O failures stop a run.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::config::{Config, LibrariesConfig};
use crate::error::GenerateError;
use crate::footprint::catalog::{capacitors, inductors};
use crate::footprint::generator::FootprintGenerator;
use crate::footprint::hand::hand_variant_for;
use crate::footprint::naming::own_model_name;
use crate::footprint::validate::validate;
use crate::footprint::{
    Catalog, CatalogError, DimensionError, FootprintRecord, PartFamily, PartSpec, SolderProcess,
};
use crate::kicad::{FootprintLibrary, LibraryResult, ListedSource};

/// A footprint whose 3D model is not known.
///
/// This is a warning: the footprint is still written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("3D model '{model}' of {footprint} not found in {library}")]
pub struct MissingAsset {
    /// Library the footprint was written to.
    pub library: String,
    /// Footprint name.
    pub footprint: String,
    /// Model name the footprint refers to.
    pub model: String,
}

/// A table row that was not generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    /// Part identifier.
    pub part: String,
    /// Soldering process of the row.
    pub process: SolderProcess,
    /// Why the row was rejected.
    pub reason: String,
}

impl From<&DimensionError> for SkippedRecord {
    fn from(err: &DimensionError) -> Self {
        Self {
            part: err.part().to_string(),
            process: err.process(),
            reason: err.to_string(),
        }
    }
}

/// Outcome of writing one library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryReport {
    /// Library name.
    pub library: String,
    /// Family of the parts in the library.
    pub family: PartFamily,
    /// Footprints written, in write order.
    pub written: Vec<String>,
    /// Rows rejected by validation.
    pub skipped: Vec<SkippedRecord>,
    /// Footprints referring to unknown 3D models.
    pub missing_assets: Vec<MissingAsset>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// One report per library.
    pub libraries: Vec<LibraryReport>,
}

impl BatchReport {
    /// Total number of footprints written.
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.libraries.iter().map(|l| l.written.len()).sum()
    }

    /// Total number of rejected rows.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.libraries.iter().map(|l| l.skipped.len()).sum()
    }

    /// Board packer source reading exactly the footprints of this run from
    /// `output_dir`.
    #[must_use]
    pub fn footprint_source(&self, output_dir: &Path) -> ListedSource {
        let mut source = ListedSource::new(output_dir);
        for library in &self.libraries {
            source.insert(&library.library, library.written.iter().cloned());
        }
        source
    }
}

/// Known 3D model names.
///
/// A model is known if some part of the catalog is its owner, or if a
/// `.wrl` file of that name is already in the model directory.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    models: BTreeSet<String>,
}

impl AssetIndex {
    /// Builds the index of the models owned by the parts of `catalog`.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let models = catalog
            .iter()
            .map(|part| own_model_name(catalog.family, part))
            .collect();
        Self { models }
    }

    /// Adds model names, for example those found on disk.
    pub fn extend(&mut self, models: impl IntoIterator<Item = String>) {
        self.models.extend(models);
    }

    /// Whether `model` is known.
    #[must_use]
    pub fn contains(&self, model: &str) -> bool {
        self.models.contains(model)
    }
}

/// A library and the parts written to it.
#[derive(Debug, Clone)]
pub struct LibraryJob {
    /// Library name.
    pub name: String,
    /// Parts of the library.
    pub catalog: Catalog,
}

impl LibraryJob {
    /// Creates a job.
    pub fn new(name: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            name: name.into(),
            catalog,
        }
    }
}

/// Returns the built-in libraries.
///
/// # Errors
///
/// Returns an error if a built-in table breaks the catalog invariants.
pub fn builtin_jobs(libraries: &LibrariesConfig) -> Result<Vec<LibraryJob>, CatalogError> {
    let ceramic = Catalog::from_parts(PartFamily::Capacitor, capacitors::ceramic())?;
    let tantalum = Catalog::from_parts(PartFamily::Capacitor, capacitors::tantalum())?;
    let inductors = Catalog::from_parts(PartFamily::Inductor, inductors::all())?;

    let mut jobs: Vec<LibraryJob> = Vec::new();
    for (name, catalog) in [
        (&libraries.ceramic, ceramic),
        (&libraries.tantalum, tantalum),
        (&libraries.inductors, inductors),
    ] {
        merge_into(&mut jobs, name, &catalog)?;
    }
    Ok(jobs)
}

/// Returns the built-in libraries plus the extra catalogs of `config`.
///
/// # Errors
///
/// Returns an error if a catalog cannot be loaded or merged.
pub fn load_jobs(config: &Config) -> Result<Vec<LibraryJob>, CatalogError> {
    let mut jobs = builtin_jobs(&config.libraries)?;
    for extra in &config.extra_catalogs {
        let catalog = Catalog::from_json_file(&extra.path)?;
        merge_into(&mut jobs, &extra.library, &catalog)?;
    }
    Ok(jobs)
}

/// Adds the parts of `catalog` to the job named `name`, creating it if needed.
fn merge_into(jobs: &mut Vec<LibraryJob>, name: &str, catalog: &Catalog) -> Result<(), CatalogError> {
    match jobs.iter_mut().find(|job| job.name == name) {
        Some(job) => {
            if job.catalog.family != catalog.family {
                return Err(CatalogError::FamilyMismatch {
                    library: name.to_string(),
                    expected: job.catalog.family,
                    found: catalog.family,
                });
            }
            job.catalog.extend(catalog.iter().cloned())
        }
        None => {
            jobs.push(LibraryJob::new(name, catalog.clone()));
            Ok(())
        }
    }
}

/// Generates every footprint of one part.
///
/// Authored variants come first, in process order, followed by the
/// synthesised Hand variant when the part needs one. Rows failing
/// validation yield their error in place of a record.
#[must_use]
pub fn footprints_for_part(
    family: PartFamily,
    part: &PartSpec,
) -> Vec<Result<FootprintRecord, DimensionError>> {
    let generator = FootprintGenerator::new(family);
    let hand = hand_variant_for(family, part).map(|pads| (SolderProcess::Hand, pads));

    SolderProcess::ALL
        .iter()
        .filter_map(|&process| part.pads(process).map(|pads| (process, *pads)))
        .chain(hand)
        .map(|(process, pads)| {
            validate(family, part, process, &pads)?;
            Ok(generator.generate(part, process, &pads))
        })
        .collect()
}

/// Writes one library under `output_dir`.
///
/// # Errors
///
/// Returns an error if the library directories or a footprint file cannot
/// be written.
pub fn generate_library(output_dir: &Path, job: &LibraryJob) -> LibraryResult<LibraryReport> {
    let family = job.catalog.family;
    let mut library = FootprintLibrary::create(output_dir, &job.name)?;

    let mut assets = AssetIndex::from_catalog(&job.catalog);
    assets.extend(library.existing_models()?);

    let mut skipped = Vec::new();
    let mut missing_assets = Vec::new();

    for part in job.catalog.iter() {
        for result in footprints_for_part(family, part) {
            match result {
                Ok(record) => {
                    if !assets.contains(&record.model) {
                        let missing = MissingAsset {
                            library: job.name.clone(),
                            footprint: record.name.clone(),
                            model: record.model.clone(),
                        };
                        tracing::warn!(
                            part = %part.id,
                            process = %record.process,
                            model = %record.model,
                            "{missing}"
                        );
                        missing_assets.push(missing);
                    }
                    library.write(&record)?;
                }
                Err(err) => {
                    tracing::warn!(
                        part = %err.part(),
                        process = %err.process(),
                        "Skipping footprint: {err}"
                    );
                    skipped.push(SkippedRecord::from(&err));
                }
            }
        }
    }

    tracing::info!(
        library = %job.name,
        family = %family,
        written = library.written().len(),
        skipped = skipped.len(),
        missing_assets = missing_assets.len(),
        "Wrote library"
    );

    Ok(LibraryReport {
        library: job.name.clone(),
        family,
        written: library.written().to_vec(),
        skipped,
        missing_assets,
    })
}

/// Writes every library of `jobs` under `output_dir`.
///
/// # Errors
///
/// Stops at the first library that cannot be written.
pub fn generate_all(output_dir: &Path, jobs: &[LibraryJob]) -> LibraryResult<BatchReport> {
    let libraries = jobs
        .iter()
        .map(|job| generate_library(output_dir, job))
        .collect::<LibraryResult<Vec<_>>>()?;
    Ok(BatchReport { libraries })
}

/// Runs a full generation with the settings of `config`.
///
/// # Errors
///
/// Returns an error if a catalog cannot be loaded or a library cannot be
/// written.
pub fn run(config: &Config) -> Result<BatchReport, GenerateError> {
    let jobs = load_jobs(config)?;
    Ok(generate_all(&config.output_dir, &jobs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::PadSpec;

    #[test]
    fn ceramic_part_gets_synthesised_hand_variant() {
        let part = PartSpec::new("0603", 1.6, 0.8)
            .variant(SolderProcess::Wave, PadSpec::kemet(3.18, 0.68, 0.80, 1.25, 1.93))
            .variant(SolderProcess::Reflow, PadSpec::kemet(2.78, 0.68, 1.08, 1.05, 1.73));

        let names: Vec<_> = footprints_for_part(PartFamily::Capacitor, &part)
            .into_iter()
            .map(|r| r.unwrap().name)
            .collect();
        assert_eq!(names, ["C_0603_Reflow", "C_0603_Wave", "C_0603_Hand"]);
    }

    #[test]
    fn bad_row_is_reported_and_others_survive() {
        let part = PartSpec::new("0805", 2.0, 1.25)
            .variant(SolderProcess::Reflow, PadSpec::kemet(3.18, 0.68, 1.45, 1.25, 1.93))
            .variant(SolderProcess::Wave, PadSpec::kemet(9.99, 0.68, 1.45, 1.25, 1.93));

        let results = footprints_for_part(PartFamily::Capacitor, &part);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(DimensionError::GapMismatch { .. })));
        assert_eq!(results[2].as_ref().unwrap().name, "C_0805_Hand");
    }

    #[test]
    fn colliding_names_from_extra_catalog_are_rejected() {
        let pads = PadSpec::kemet(2.78, 0.68, 1.08, 1.05, 1.73);
        let catalog = |part: PartSpec| {
            Catalog::from_parts(PartFamily::Capacitor, [part.variant(SolderProcess::Reflow, pads)])
                .unwrap()
        };

        let mut jobs = builtin_jobs(&LibrariesConfig::default()).unwrap();
        merge_into(&mut jobs, "Capacitors_SMD", &catalog(PartSpec::new("0604_Size-X", 1.6, 0.8)))
            .unwrap();

        let sized = catalog(PartSpec::new("0604", 1.6, 0.8).size("X"));
        merge_into(&mut jobs, "Capacitors_Tantalum_SMD", &sized).unwrap();
        let err = merge_into(&mut jobs, "Capacitors_SMD", &sized).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));
    }

    #[test]
    fn report_lists_written_footprints_for_packing() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::from_parts(
            PartFamily::Inductor,
            [PartSpec::new("LQM18F", 1.6, 0.8)
                .variant(SolderProcess::Reflow, PadSpec::murata(0.7, 1.9, 0.7))],
        )
        .unwrap();
        let report = generate_all(dir.path(), &[LibraryJob::new("Inductors_SMD", catalog)]).unwrap();

        let source = report.footprint_source(dir.path());
        let board = crate::kicad::pack(
            "@Inductors_SMD.pretty\n",
            &crate::kicad::BoardLayout::inductors(),
            &source,
        )
        .unwrap();
        let names: Vec<_> = board
            .placements
            .iter()
            .map(|p| p.footprint_name.as_str())
            .collect();
        assert_eq!(names, ["LQM18F_Hand", "LQM18F_Reflow"]);
    }

    #[test]
    fn asset_index_knows_catalog_owners() {
        let catalog = Catalog::from_parts(PartFamily::Inductor, inductors::all()).unwrap();
        let index = AssetIndex::from_catalog(&catalog);
        assert!(index.contains("LQM21D"));
        assert!(!index.contains("LQX99"));
    }

    #[test]
    fn builtin_jobs_use_configured_names() {
        let jobs = builtin_jobs(&LibrariesConfig::default()).unwrap();
        let names: Vec<_> = jobs.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, ["Capacitors_SMD", "Capacitors_Tantalum_SMD", "Inductors_SMD"]);
    }

    #[test]
    fn merging_different_families_fails() {
        let mut jobs = builtin_jobs(&LibrariesConfig::default()).unwrap();
        let extra = Catalog::from_parts(
            PartFamily::Inductor,
            [PartSpec::new("LQX", 1.6, 0.8)
                .variant(SolderProcess::Reflow, PadSpec::murata(0.7, 1.9, 0.7))],
        )
        .unwrap();

        let err = merge_into(&mut jobs, "Capacitors_SMD", &extra).unwrap_err();
        assert!(matches!(err, CatalogError::FamilyMismatch { .. }));

        merge_into(&mut jobs, "Inductors_SMD", &extra).unwrap();
        assert!(jobs[2].catalog.get("LQX").is_some());
    }
}
