//! Footprint and 3D model naming.
//!
//! # Name Format
//!
//! - Capacitors: `C_{ID}[_Size-{SIZE}]_{PROCESS}`, e.g. `C_0603_Reflow`,
//!   `C_EIA-6032-15_Size-Kemet-U-AVX-W_Wave`
//! - Inductors: `{ID}_{PROCESS}`, e.g. `LQM18F_Flow`
//!
//! Capacitor size labels may contain spaces; they are replaced with hyphens.
//! Inductor size labels ("0603/1608") contain a path separator and are never
//! part of a name.

use crate::footprint::catalog::PartSpec;
use crate::footprint::family::PartFamily;
use crate::footprint::process::SolderProcess;

/// Returns the footprint name for a part and soldering process.
///
/// # Examples
///
/// ```
/// use smd_footprint_gen::footprint::catalog::PartSpec;
/// use smd_footprint_gen::footprint::family::PartFamily;
/// use smd_footprint_gen::footprint::naming::footprint_name;
/// use smd_footprint_gen::footprint::process::SolderProcess;
///
/// let part = PartSpec::new("EIA-3216-18", 3.2, 1.6).size("A");
/// let name = footprint_name(PartFamily::Capacitor, &part, SolderProcess::Reflow);
/// assert_eq!(name, "C_EIA-3216-18_Size-A_Reflow");
/// ```
#[must_use]
pub fn footprint_name(family: PartFamily, part: &PartSpec, process: SolderProcess) -> String {
    format!("{}_{process}", base_name(family, part))
}

/// Returns the 3D model name (without extension) for a part.
///
/// A part reuses the model named by `alt_3d_shape` when it is set.
#[must_use]
pub fn model_name(family: PartFamily, part: &PartSpec) -> String {
    part.alt_3d_shape
        .clone()
        .unwrap_or_else(|| own_model_name(family, part))
}

/// Returns the name a part's own 3D model would carry.
///
/// This is the model other parts refer to through `alt_3d_shape`.
#[must_use]
pub fn own_model_name(family: PartFamily, part: &PartSpec) -> String {
    base_name(family, part)
}

/// Footprint name without the process suffix.
fn base_name(family: PartFamily, part: &PartSpec) -> String {
    match family {
        PartFamily::Capacitor => match &part.size_label {
            Some(size) => format!("C_{}_Size-{}", part.id, size.replace(' ', "-")),
            None => format!("C_{}", part.id),
        },
        PartFamily::Inductor => part.id.clone(),
    }
}

/// Returns the footprint description.
#[must_use]
pub fn description(family: PartFamily, part: &PartSpec, process: SolderProcess) -> String {
    let size = part
        .size_label
        .as_ref()
        .map(|s| format!(" Size {s},"))
        .unwrap_or_default();
    format!(
        "{} SMD {},{size} {process} soldering",
        family.description_word(),
        part.id
    )
}

/// Returns the footprint search tags.
#[must_use]
pub fn tags(family: PartFamily, part: &PartSpec, process: SolderProcess) -> String {
    let mut tags = vec![family.tag_word().to_string(), part.id.clone()];
    if family == PartFamily::Capacitor {
        if let Some(inch) = &part.inch_size_label {
            tags.push(inch.clone());
        }
    }
    if let Some(size) = &part.size_label {
        tags.push(size.clone());
    }
    tags.push(process.name().to_lowercase());
    tags.join(" ")
}
