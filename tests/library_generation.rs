//! End-to-end tests of library generation.
//!
//! These tests run the generator over the built-in catalogs and write real
//! libraries into temporary directories.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::json;
use smd_footprint_gen::batch::{self, builtin_jobs, footprints_for_part, generate_all};
use smd_footprint_gen::config::{load_config, LibrariesConfig};
use smd_footprint_gen::footprint::geometry::Rect;
use smd_footprint_gen::footprint::hand::hand_variant_for;
use smd_footprint_gen::footprint::validate::GAP_TOLERANCE;
use smd_footprint_gen::footprint::{PartFamily, SolderProcess};
use tempfile::TempDir;

/// Creates a temporary directory inside `.tmp/` for test isolation.
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
fn test_temp_dir() -> TempDir {
    let tmp_root = Path::new(".tmp");
    fs::create_dir_all(tmp_root).expect("Failed to create .tmp directory");
    let tmp_root = tmp_root
        .canonicalize()
        .expect("Failed to canonicalize .tmp path");
    tempfile::tempdir_in(&tmp_root).expect("Failed to create temp dir")
}

/// Tolerance for courtyard containment; snapping may shrink by 0.0005 mm.
const CONTAINMENT_TOLERANCE: f64 = 1e-3;

fn kicad_mod_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to list library")
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".kicad_mod"))
        .collect();
    names.sort();
    names
}

// =============================================================================
// Catalog Properties
// =============================================================================

#[test]
fn every_builtin_row_generates() {
    for job in builtin_jobs(&LibrariesConfig::default()).unwrap() {
        for part in job.catalog.iter() {
            for result in footprints_for_part(job.catalog.family, part) {
                assert!(result.is_ok(), "{}: {}", job.name, result.unwrap_err());
            }
        }
    }
}

#[test]
fn capacitor_rows_satisfy_gap_invariant() {
    for job in builtin_jobs(&LibrariesConfig::default()).unwrap() {
        if job.catalog.family != PartFamily::Capacitor {
            continue;
        }
        for part in job.catalog.iter() {
            let rows = SolderProcess::ALL
                .iter()
                .filter_map(|p| part.pads(*p).copied())
                .chain(hand_variant_for(PartFamily::Capacitor, part));
            for pads in rows {
                let sum = 2.0f64.mul_add(pads.pad_width, pads.inner_gap);
                assert!(
                    (sum - pads.total_span).abs() <= GAP_TOLERANCE,
                    "{}: {sum} != {}",
                    part.id,
                    pads.total_span
                );
            }
        }
    }
}

#[test]
fn names_are_unique_across_libraries() {
    let mut names = HashSet::new();
    for job in builtin_jobs(&LibrariesConfig::default()).unwrap() {
        for part in job.catalog.iter() {
            for record in footprints_for_part(job.catalog.family, part) {
                let name = record.unwrap().name;
                assert!(names.insert(name.clone()), "duplicate footprint {name}");
            }
        }
    }
    assert!(names.contains("C_0603_Hand"));
    assert!(names.contains("C_EIA-7343-20_Size-Kemet-V-AVX-Y_Wave"));
    assert!(names.contains("LQH32M_Hand"));
}

#[test]
fn courtyard_contains_pads_and_body() {
    for job in builtin_jobs(&LibrariesConfig::default()).unwrap() {
        let family = job.catalog.family;
        for part in job.catalog.iter() {
            let clearance = family.courtyard_clearance(part.body_width);
            let body = Rect::centred(part.body_length, part.body_width);

            for record in footprints_for_part(family, part) {
                let record = record.unwrap();
                let courtyard = record.courtyard().expect("courtyard drawn");
                let required = record
                    .pad_bounds()
                    .expect("pads placed")
                    .union(&body)
                    .expanded(clearance);
                assert!(
                    courtyard.contains(&required, CONTAINMENT_TOLERANCE),
                    "{}: {courtyard:?} does not contain {required:?}",
                    record.name
                );
            }
        }
    }
}

// =============================================================================
// Library Output
// =============================================================================

#[test]
fn generate_writes_all_libraries() {
    let temp_dir = test_temp_dir();
    let jobs = builtin_jobs(&LibrariesConfig::default()).unwrap();

    let report = generate_all(temp_dir.path(), &jobs).unwrap();

    assert_eq!(report.libraries.len(), 3);
    assert_eq!(report.skipped_count(), 0);
    for library in &report.libraries {
        assert!(library.missing_assets.is_empty(), "{:?}", library.missing_assets);

        let pretty = temp_dir.path().join(format!("{}.pretty", library.library));
        let shapes = temp_dir.path().join(format!("{}.3dshapes", library.library));
        assert!(shapes.is_dir());
        assert_eq!(kicad_mod_files(&pretty).len(), library.written.len());
    }

    let text = fs::read_to_string(
        temp_dir
            .path()
            .join("Capacitors_Tantalum_SMD.pretty/C_EIA-3216-18_Size-A_Reflow.kicad_mod"),
    )
    .unwrap();
    assert!(text.contains("(tags \"capacitor EIA-3216-18 1206 A reflow\")"));
    assert!(text.contains("(model Capacitors_Tantalum_SMD.3dshapes/C_EIA-3216-18_Size-A.wrl"));

    let text = fs::read_to_string(
        temp_dir
            .path()
            .join("Inductors_SMD.pretty/LQM21F_Reflow.kicad_mod"),
    )
    .unwrap();
    assert!(text.contains("(model Inductors_SMD.3dshapes/LQM21D.wrl"));
}

#[test]
fn regeneration_is_byte_identical() {
    let first = test_temp_dir();
    let second = test_temp_dir();
    let jobs = builtin_jobs(&LibrariesConfig::default()).unwrap();

    generate_all(first.path(), &jobs).unwrap();
    generate_all(second.path(), &jobs).unwrap();
    // Re-running into the same directory overwrites in place.
    let report = generate_all(second.path(), &jobs).unwrap();

    let pretty = "Inductors_SMD.pretty";
    let names = kicad_mod_files(&first.path().join(pretty));
    assert_eq!(names, kicad_mod_files(&second.path().join(pretty)));
    assert_eq!(names.len(), report.libraries[2].written.len());

    for name in names {
        let a = fs::read(first.path().join(pretty).join(&name)).unwrap();
        let b = fs::read(second.path().join(pretty).join(&name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
}

#[test]
fn run_with_extra_catalogs() {
    let temp_dir = test_temp_dir();
    let out = temp_dir.path().join("out");

    let inductors = temp_dir.path().join("inductors.json");
    fs::write(
        &inductors,
        json!({
            "family": "inductor",
            "parts": [
                {
                    "id": "LQX10",
                    "body_length": 1.6,
                    "body_width": 0.8,
                    "size_label": "0603/1608",
                    "alt_3d_shape": "LQX_SHARED",
                    "variants": { "Reflow": { "a": 0.7, "b": 1.9, "c": 0.7 } }
                },
                {
                    "id": "LQX20",
                    "body_length": 2.0,
                    "body_width": 1.25,
                    "alt_3d_shape": "LQX_ON_DISK",
                    "variants": { "Reflow": { "a": 1.2, "b": 3.5, "c": 1.0 } }
                }
            ]
        })
        .to_string(),
    )
    .unwrap();

    let capacitors = temp_dir.path().join("capacitors.json");
    fs::write(
        &capacitors,
        json!({
            "family": "capacitor",
            "parts": [
                {
                    "id": "0508",
                    "body_length": 1.25,
                    "body_width": 2.0,
                    "alt_3d_shape": "C_0603",
                    "variants": {
                        "Reflow": { "Z": 2.0, "G": 0.4, "X": 2.2, "Y": 0.8, "C": 1.2 },
                        "Wave": { "Z": 2.9, "G": 0.4, "X": 2.2, "Y": 0.8, "C": 1.2 }
                    }
                }
            ]
        })
        .to_string(),
    )
    .unwrap();

    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        json!({
            "output_dir": out,
            "extra_catalogs": [
                { "path": inductors, "library": "Extra_Inductors" },
                { "path": capacitors, "library": "Capacitors_SMD" }
            ]
        })
        .to_string(),
    )
    .unwrap();

    let shapes = out.join("Extra_Inductors.3dshapes");
    fs::create_dir_all(&shapes).unwrap();
    fs::write(shapes.join("LQX_ON_DISK.wrl"), "").unwrap();

    let config = load_config(Some(&config_path)).unwrap();
    let report = batch::run(&config).unwrap();

    assert_eq!(report.libraries.len(), 4);

    let ceramic = &report.libraries[0];
    assert_eq!(ceramic.library, "Capacitors_SMD");
    assert!(ceramic.written.contains(&"C_0508_Reflow".to_string()));
    assert!(ceramic.written.contains(&"C_0508_Hand".to_string()));
    assert_eq!(ceramic.skipped.len(), 1);
    assert_eq!(ceramic.skipped[0].part, "0508");
    assert_eq!(ceramic.skipped[0].process, SolderProcess::Wave);
    assert!(ceramic.skipped[0].reason.contains("G + Y*2 != Z"));
    assert!(!out.join("Capacitors_SMD.pretty/C_0508_Wave.kicad_mod").exists());
    assert!(ceramic.missing_assets.is_empty());
    let text = fs::read_to_string(out.join("Capacitors_SMD.pretty/C_0508_Reflow.kicad_mod")).unwrap();
    assert!(text.contains("(model Capacitors_SMD.3dshapes/C_0603.wrl"));

    let extra = &report.libraries[3];
    assert_eq!(extra.library, "Extra_Inductors");
    assert_eq!(extra.written, ["LQX10_Reflow", "LQX10_Hand", "LQX20_Reflow", "LQX20_Hand"]);
    assert_eq!(extra.missing_assets.len(), 2);
    assert!(extra.missing_assets.iter().all(|m| m.model == "LQX_SHARED"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["libraries"][3]["missing_assets"][0]["footprint"], "LQX10_Reflow");
    assert_eq!(json["libraries"][0]["skipped"][0]["process"], "Wave");
}
