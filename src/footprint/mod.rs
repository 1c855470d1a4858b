//! Chip capacitor and chip inductor footprints.
//!
//! This module turns manufacturer land pattern tables into footprint
//! geometry. Nothing here touches the file system; see [`crate::kicad`] for
//! the library writer and the test board packer.
//!
//! # Families
//!
//! - **Capacitor**: Kemet ceramic and tantalum tables (`Z`, `G`, `X`, `Y`, `C`)
//! - **Inductor**: Murata power, general and RF tables (`a`, `b`, `c`, `d`, `B`, `C`)
//!
//! # Pipeline
//!
//! 1. [`validate::validate`] rejects inconsistent table rows
//! 2. [`generator::generate`] derives pads, silkscreen and courtyard
//! 3. [`hand::hand_variant_for`] adds a Hand row when only Reflow is published
//!
//! # Example
//!
//! ```
//! use smd_footprint_gen::footprint::{
//!     catalog::{PadSpec, PartSpec},
//!     family::PartFamily,
//!     generator::generate,
//!     process::SolderProcess,
//!     validate::validate,
//! };
//!
//! let pads = PadSpec::kemet(2.78, 0.68, 1.08, 1.05, 1.73);
//! let part = PartSpec::new("0603", 1.6, 0.8).variant(SolderProcess::Reflow, pads);
//!
//! validate(PartFamily::Capacitor, &part, SolderProcess::Reflow, &pads).unwrap();
//! let record = generate(PartFamily::Capacitor, &part, SolderProcess::Reflow, &pads);
//!
//! assert_eq!(record.name, "C_0603_Reflow");
//! assert_eq!(record.pads().count(), 2);
//! ```

pub mod catalog;
pub mod family;
pub mod generator;
pub mod geometry;
pub mod hand;
pub mod naming;
pub mod process;
pub mod validate;

pub use catalog::{Catalog, CatalogError, PadSpec, PartSpec};
pub use family::PartFamily;
pub use generator::{FootprintGenerator, FootprintRecord};
pub use process::SolderProcess;
pub use validate::DimensionError;
