//! Test board packing against libraries written to disk.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use smd_footprint_gen::batch::{builtin_jobs, generate_all, generate_library};
use smd_footprint_gen::config::LibrariesConfig;
use smd_footprint_gen::kicad::{pack, pack_file, BoardLayout, DirectorySource, LibraryError};
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

/// Helper to compare floats with tolerance.
fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

const TEMPLATE: &str = "(kicad_pcb (version 4) (host pcbnew 4.0.2-stable)\n\
  (general\n    (links 0)\n  )\n\
@Capacitors_SMD.pretty\n\
@Capacitors_Tantalum_SMD.pretty\n\
)\n";

/// Writes the two capacitor libraries and returns the output directory.
fn write_capacitor_libraries() -> TempDir {
    let temp_dir = test_temp_dir();
    let jobs = builtin_jobs(&LibrariesConfig::default()).unwrap();
    for job in jobs.iter().filter(|j| j.name.starts_with("Capacitors")) {
        generate_library(temp_dir.path(), job).unwrap();
    }
    temp_dir
}

// =============================================================================
// Packing From Disk
// =============================================================================

#[test]
fn capacitor_board_places_every_footprint_once() {
    let temp_dir = write_capacitor_libraries();
    let source = DirectorySource::new(temp_dir.path());

    let board = pack(TEMPLATE, &BoardLayout::capacitors(), &source).unwrap();

    // 10 ceramic parts, half of them without a Wave row; 10 tantalum parts.
    assert_eq!(board.placements.len(), 5 * 3 + 5 * 2 + 10 * 3);

    let positions: HashSet<_> = board
        .placements
        .iter()
        .map(|p| (p.x.to_bits(), p.y.to_bits()))
        .collect();
    assert_eq!(positions.len(), board.placements.len(), "placements collide");

    let modules = board.text.matches("(module ").count();
    assert_eq!(modules, board.placements.len());
    let placed = board
        .text
        .lines()
        .filter(|l| l.starts_with("  (at "))
        .count();
    assert_eq!(placed, board.placements.len());
    assert!(board.text.starts_with("(kicad_pcb (version 4)"));
    assert!(!board.text.contains('@'));
}

#[test]
fn variants_of_one_part_share_a_row() {
    let temp_dir = write_capacitor_libraries();
    let source = DirectorySource::new(temp_dir.path());
    let board = pack(TEMPLATE, &BoardLayout::capacitors(), &source).unwrap();

    let find = |name: &str| {
        board
            .placements
            .iter()
            .find(|p| p.footprint_name == name)
            .unwrap_or_else(|| panic!("{name} not placed"))
    };

    let reflow = find("C_0603_Reflow");
    let wave = find("C_0603_Wave");
    let hand = find("C_0603_Hand");
    assert!(approx_eq(reflow.y, wave.y, 1e-9));
    assert!(approx_eq(reflow.y, hand.y, 1e-9));
    assert!(approx_eq(wave.x - reflow.x, 15.0, 1e-9));
    assert!(approx_eq(hand.x - reflow.x, 30.0, 1e-9));

    // First part of the second library continues below the first library.
    let first_tantalum = find("C_EIA-3216-12_Size-S_Reflow");
    let last_ceramic = find("C_2225_Reflow");
    assert!(first_tantalum.y > last_ceramic.y || first_tantalum.x > last_ceramic.x);
}

#[test]
fn placement_follows_module_line() {
    let temp_dir = write_capacitor_libraries();
    let source = DirectorySource::new(temp_dir.path());
    let board = pack(TEMPLATE, &BoardLayout::capacitors(), &source).unwrap();

    let lines: Vec<&str> = board.text.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with("(module ") {
            assert!(lines[i + 1].starts_with("  (at "), "no placement after {line}");
        }
    }
    assert!(board.text.contains("(module C_0201_Hand (layer F.Cu)\n  (at 50 20)\n"));
    assert!(board.text.contains("(module C_0201_Reflow (layer F.Cu)\n  (at 20 20)\n"));
}

#[test]
fn pack_file_is_deterministic() {
    let temp_dir = write_capacitor_libraries();
    let template = temp_dir.path().join("Capacitors_gen.kicad_pcb.template");
    fs::write(&template, TEMPLATE).unwrap();

    let first = temp_dir.path().join("first.kicad_pcb");
    let second = temp_dir.path().join("second.kicad_pcb");
    let layout = BoardLayout::capacitors();
    pack_file(&template, &first, &layout, &DirectorySource::beside(&template)).unwrap();
    pack_file(&template, &second, &layout, &DirectorySource::new(temp_dir.path())).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn missing_template_is_a_read_error() {
    let temp_dir = test_temp_dir();
    let template = temp_dir.path().join("missing.template");
    let err = pack_file(
        &template,
        &temp_dir.path().join("out.kicad_pcb"),
        &BoardLayout::inductors(),
        &DirectorySource::beside(&template),
    )
    .unwrap_err();
    assert!(matches!(err, LibraryError::FileRead { .. }));
}

#[test]
fn written_list_matches_directory_listing() {
    let temp_dir = test_temp_dir();
    let jobs: Vec<_> = builtin_jobs(&LibrariesConfig::default())
        .unwrap()
        .into_iter()
        .filter(|j| j.name.starts_with("Capacitors"))
        .collect();
    let report = generate_all(temp_dir.path(), &jobs).unwrap();

    let layout = BoardLayout::capacitors();
    let listed = pack(TEMPLATE, &layout, &report.footprint_source(temp_dir.path())).unwrap();
    let scanned = pack(TEMPLATE, &layout, &DirectorySource::new(temp_dir.path())).unwrap();
    assert_eq!(listed, scanned);
}

#[test]
fn output_directory_with_glob_characters() {
    let temp_dir = test_temp_dir();
    let root = temp_dir.path().join("run[1]");
    let jobs = builtin_jobs(&LibrariesConfig::default()).unwrap();
    let ceramic = jobs.iter().find(|j| j.name == "Capacitors_SMD").unwrap();
    let report = generate_library(&root, ceramic).unwrap();
    assert!(!report.written.is_empty());

    let board = pack(
        "@Capacitors_SMD.pretty\n",
        &BoardLayout::capacitors(),
        &DirectorySource::new(&root),
    )
    .unwrap();
    assert_eq!(board.placements.len(), report.written.len());
}
