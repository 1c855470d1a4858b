//! Hand soldering land patterns derived from reflow ones.
//!
//! Manufacturers rarely publish pads for hand soldering. When a part has a
//! Reflow row but no Hand row, a Hand row is synthesised by enlarging the
//! reflow pads so a soldering iron tip fits next to the part.

use crate::footprint::catalog::{PadSpec, PartSpec, SecondaryPads};
use crate::footprint::family::PartFamily;
use crate::footprint::process::SolderProcess;

/// Returns the synthesised Hand pads for `part`, if it needs them.
///
/// Parts with an explicit Hand row or without a Reflow row get `None`.
#[must_use]
pub fn hand_variant_for(family: PartFamily, part: &PartSpec) -> Option<PadSpec> {
    if part.pads(SolderProcess::Hand).is_some() {
        return None;
    }
    part.pads(SolderProcess::Reflow)
        .map(|reflow| derive_hand_variant(family, reflow))
}

/// Derives hand soldering pads from reflow pads.
///
/// - **Capacitors**: pads grow by 25% and move outward by the extra width,
///   so the inner gap stays exactly the same.
/// - **Inductors**: the span grows by 25% and the pad height by 10%; pad
///   width and pitch follow from the new span and the unchanged gap.
#[must_use]
pub fn derive_hand_variant(family: PartFamily, reflow: &PadSpec) -> PadSpec {
    match family {
        PartFamily::Capacitor => {
            let grow = reflow.pad_width * 0.25;
            PadSpec {
                center_pitch: reflow.center_pitch + grow,
                total_span: 2.0f64.mul_add(grow, reflow.total_span),
                pad_height: reflow.pad_height * 1.25,
                pad_width: reflow.pad_width * 1.25,
                ..*reflow
            }
        }
        PartFamily::Inductor => {
            let total_span = reflow.total_span * 1.25;
            PadSpec {
                pad_height: reflow.pad_height * 1.10,
                pad_width: (total_span - reflow.inner_gap) / 2.0,
                total_span,
                center_pitch: (total_span + reflow.inner_gap) / 2.0,
                secondary: reflow.secondary.map(|s| SecondaryPads {
                    span: s.span * 1.25,
                    pad_height: s.pad_height * 1.10,
                }),
                ..*reflow
            }
        }
    }
}
