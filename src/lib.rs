//! smd-footprint-gen: KiCad footprint libraries for chip capacitors and chip inductors
//!
//! Footprints are generated from manufacturer land pattern tables: Kemet for
//! ceramic and tantalum capacitors, Murata for inductors. Each table row
//! gives the pads for one soldering process; the generator adds the
//! silkscreen outline, polarity mark, courtyard and 3D model reference.
//!
//! # Architecture
//!
//! - **Catalogs**: built-in part tables, plus JSON catalogs from the config
//! - **Validation**: inconsistent rows are reported and skipped
//! - **Generation**: pure geometry, one record per part and process
//! - **Output**: `.pretty` libraries and a packed test board for proofing
//!
//! # Modules
//!
//! - [`batch`] — Generation runs and their reports
//! - [`config`] — Configuration loading and validation
//! - [`error`] — Error types
//! - [`footprint`] — Catalogs, validation and footprint geometry
//! - [`kicad`] — Footprint files, libraries and test boards

pub mod batch;
pub mod config;
pub mod error;
pub mod footprint;
pub mod kicad;
