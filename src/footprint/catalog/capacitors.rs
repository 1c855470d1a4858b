//! Kemet chip capacitor tables.
//!
//! Land patterns from Kemet's "Surface Mount - Mounting Pad Dimensions and
//! Considerations". Pad rows use the document's letters:
//!
//! - `Z` - total span, outer edge of the left pad to outer edge of the right pad
//! - `G` - gap between the inner pad edges
//! - `X` - pad height
//! - `Y` - pad width
//! - `C` - distance between pad centres
//!
//! Parts without a Wave row are not recommended for wave soldering.

use crate::footprint::catalog::{PadSpec, PartSpec};
use crate::footprint::process::SolderProcess::{Reflow, Wave};

/// Ceramic chip capacitors, keyed by EIA inch size.
#[must_use]
pub fn ceramic() -> Vec<PartSpec> {
    vec![
        PartSpec::new("0201", 0.60, 0.30)
            .contact_tallness(0.15)
            .variant(Reflow, PadSpec::kemet(1.66, 0.18, 0.46, 0.74, 0.92)),
        PartSpec::new("0402", 1.00, 0.50)
            .contact_tallness(0.25)
            .variant(Reflow, PadSpec::kemet(2.14, 0.28, 0.74, 0.93, 1.21)),
        PartSpec::new("0603", 1.60, 0.80)
            .contact_tallness(0.35)
            .variant(Reflow, PadSpec::kemet(2.78, 0.68, 1.08, 1.05, 1.73))
            .variant(Wave, PadSpec::kemet(3.18, 0.68, 0.80, 1.25, 1.93)),
        PartSpec::new("0805", 2.00, 1.25)
            .contact_tallness(0.50)
            .variant(Reflow, PadSpec::kemet(3.30, 0.70, 1.60, 1.30, 2.00))
            .variant(Wave, PadSpec::kemet(3.70, 0.70, 1.10, 1.50, 2.20)),
        PartSpec::new("1206", 3.20, 1.60)
            .contact_tallness(0.50)
            .variant(Reflow, PadSpec::kemet(4.50, 1.50, 2.00, 1.50, 3.00))
            .variant(Wave, PadSpec::kemet(4.90, 1.50, 1.40, 1.70, 3.20)),
        PartSpec::new("1210", 3.20, 2.50)
            .contact_tallness(0.50)
            .variant(Reflow, PadSpec::kemet(4.50, 1.50, 2.90, 1.50, 3.00))
            .variant(Wave, PadSpec::kemet(4.90, 1.50, 2.00, 1.70, 3.20)),
        PartSpec::new("1812", 4.50, 3.20)
            .contact_tallness(0.60)
            .variant(Reflow, PadSpec::kemet(5.90, 2.30, 3.70, 1.80, 4.10))
            .variant(Wave, PadSpec::kemet(6.30, 2.30, 2.60, 2.00, 4.30)),
        PartSpec::new("1825", 4.50, 6.40)
            .contact_tallness(0.60)
            .variant(Reflow, PadSpec::kemet(5.90, 2.30, 6.90, 1.80, 4.10)),
        PartSpec::new("2220", 5.60, 5.00)
            .contact_tallness(0.60)
            .variant(Reflow, PadSpec::kemet(7.00, 3.30, 5.50, 1.85, 5.15)),
        PartSpec::new("2225", 5.60, 6.30)
            .contact_tallness(0.60)
            .variant(Reflow, PadSpec::kemet(7.00, 3.30, 6.80, 1.85, 5.15)),
    ]
}

/// Tantalum chip capacitors, keyed by EIA metric case code.
///
/// Body fields: `L` length, `W` body width, `W1` contact width, `H` height,
/// `T` contact length.
#[must_use]
pub fn tantalum() -> Vec<PartSpec> {
    vec![
        tantalum_part("EIA-3216-12", "S", "1206", (3.20, 1.20, 1.60, 1.20, 0.80))
            .variant(Reflow, PadSpec::kemet(4.70, 0.80, 1.50, 1.95, 2.75))
            .variant(Wave, PadSpec::kemet(5.10, 0.80, 1.10, 2.15, 2.95)),
        tantalum_part("EIA-3216-18", "A", "1206", (3.20, 1.20, 1.60, 1.80, 0.80))
            .variant(Reflow, PadSpec::kemet(4.70, 0.80, 1.50, 1.95, 2.75))
            .variant(Wave, PadSpec::kemet(5.10, 0.80, 1.10, 2.15, 2.95)),
        tantalum_part("EIA-3528-12", "T", "1210", (3.50, 2.20, 2.80, 1.20, 0.80))
            .variant(Reflow, PadSpec::kemet(5.00, 1.10, 2.50, 1.95, 3.05))
            .variant(Wave, PadSpec::kemet(5.40, 1.10, 1.80, 2.15, 3.25)),
        tantalum_part("EIA-3528-21", "B", "1210", (3.50, 2.20, 2.80, 2.10, 0.80))
            .variant(Reflow, PadSpec::kemet(5.00, 1.10, 2.50, 1.95, 3.05))
            .variant(Wave, PadSpec::kemet(5.40, 1.10, 1.80, 2.15, 3.25)),
        tantalum_part("EIA-6032-28", "C", "2312", (6.00, 2.20, 3.20, 2.80, 1.30))
            .variant(Reflow, PadSpec::kemet(7.60, 2.50, 2.50, 2.55, 5.05))
            .variant(Wave, PadSpec::kemet(8.00, 2.50, 1.80, 2.75, 5.25)),
        tantalum_part("EIA-6032-15", "Kemet-U AVX-W", "2312", (6.00, 2.20, 3.20, 1.50, 1.30))
            .variant(Reflow, PadSpec::kemet(7.60, 2.50, 2.50, 2.55, 5.05))
            .variant(Wave, PadSpec::kemet(8.00, 2.50, 1.80, 2.75, 5.25)),
        tantalum_part("EIA-7343-31", "D", "2917", (7.30, 2.40, 4.30, 3.10, 1.30))
            .variant(Reflow, PadSpec::kemet(8.90, 3.80, 2.70, 2.55, 6.35))
            .variant(Wave, PadSpec::kemet(9.70, 3.80, 2.70, 2.95, 6.75)),
        tantalum_part("EIA-7343-20", "Kemet-V AVX-Y", "2917", (7.30, 3.10, 4.30, 2.00, 1.30))
            .variant(Reflow, PadSpec::kemet(8.90, 3.80, 2.70, 2.55, 6.35))
            .variant(Wave, PadSpec::kemet(9.30, 3.80, 1.90, 2.75, 6.55)),
        tantalum_part("EIA-7343-43", "Kemet-X AVX-E", "2917", (7.30, 2.40, 4.30, 4.30, 1.30))
            .variant(Reflow, PadSpec::kemet(8.90, 3.80, 2.70, 2.55, 6.35))
            .variant(Wave, PadSpec::kemet(9.70, 3.80, 2.70, 2.95, 6.75)),
        tantalum_part("EIA-7360-38", "Kemet-E", "2623", (7.30, 4.10, 6.00, 3.80, 1.30))
            .variant(Reflow, PadSpec::kemet(8.90, 3.80, 4.40, 2.55, 6.35))
            .variant(Wave, PadSpec::kemet(9.70, 3.80, 4.40, 2.95, 6.75)),
    ]
}

/// Builds a polarized tantalum part from `(L, W1, W, H, T)`.
fn tantalum_part(id: &str, size: &str, inch_size: &str, body: (f64, f64, f64, f64, f64)) -> PartSpec {
    let (length, contact_width, width, height, contact_length) = body;
    PartSpec::new(id, length, width)
        .contact_width(contact_width)
        .body_height(height)
        .contact_tallness(contact_length)
        .size(size)
        .inch_size(inch_size)
        .polarized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_part_has_reflow_pads() {
        for part in ceramic().iter().chain(tantalum().iter()) {
            assert!(part.pads(Reflow).is_some(), "{} has no reflow pads", part.id);
        }
    }

    #[test]
    fn tantalum_parts_are_polarized() {
        assert!(tantalum().iter().all(|p| p.polarized));
        assert!(ceramic().iter().all(|p| !p.polarized));
    }

    #[test]
    fn kemet_rows_are_consistent() {
        for part in ceramic().iter().chain(tantalum().iter()) {
            for (process, pads) in &part.variants {
                let sum = pads.inner_gap + 2.0 * pads.pad_width;
                assert!(
                    (sum - pads.total_span).abs() <= 1e-6,
                    "{} {process}: {sum} != {}",
                    part.id,
                    pads.total_span
                );
            }
        }
    }
}
