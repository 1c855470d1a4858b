//! Part families and their drawing rules.
//!
//! Capacitors and inductors share the same generator, but the two families
//! were tuned separately and differ in a handful of constants. Those
//! differences change the generated geometry of existing parts, so they are
//! kept per family rather than unified.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Offset of the polarity mark and outline gaps from the pad edges (mm).
pub const MARK_OFFSET: f64 = 0.3 / 2.0;

/// Courtyard line width (mm).
pub const COURTYARD_LINE_WIDTH: f64 = 0.05;

/// Courtyard grid used by families that snap the courtyard (mm).
pub const COURTYARD_GRID: f64 = 0.05;

/// Body width below which a part counts as "very small" (mm).
const SMALL_BODY_WIDTH: f64 = 1.0;

/// A family of parts sharing naming and drawing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartFamily {
    /// Ceramic and tantalum chip capacitors (Kemet tables).
    Capacitor,

    /// Chip inductors (Murata tables).
    Inductor,
}

impl PartFamily {
    /// Courtyard clearance around the part (mm).
    ///
    /// Smaller parts get the tighter 0.15 mm margin.
    #[must_use]
    pub fn courtyard_clearance(&self, body_width: f64) -> f64 {
        if body_width < SMALL_BODY_WIDTH {
            0.15
        } else {
            0.25
        }
    }

    /// Silkscreen line width (mm).
    ///
    /// Inductors use thin lines on very small bodies; capacitors never do.
    #[must_use]
    pub fn silkscreen_width(&self, body_width: f64) -> f64 {
        match self {
            Self::Inductor if body_width < SMALL_BODY_WIDTH => 0.10,
            Self::Capacitor | Self::Inductor => 0.15,
        }
    }

    /// Whether courtyard coordinates are snapped outward to [`COURTYARD_GRID`].
    #[must_use]
    pub const fn snaps_courtyard(&self) -> bool {
        matches!(self, Self::Inductor)
    }

    /// Whether the pad tables carry the `gap + 2 * width == span` invariant.
    #[must_use]
    pub const fn checks_gap_invariant(&self) -> bool {
        matches!(self, Self::Capacitor)
    }

    /// Word used in footprint descriptions ("Capacitor SMD ...").
    #[must_use]
    pub const fn description_word(&self) -> &'static str {
        match self {
            Self::Capacitor => "Capacitor",
            Self::Inductor => "Inductor",
        }
    }

    /// Word used as the first footprint tag.
    #[must_use]
    pub const fn tag_word(&self) -> &'static str {
        match self {
            Self::Capacitor => "capacitor",
            Self::Inductor => "inductor",
        }
    }
}

impl fmt::Display for PartFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_word())
    }
}

/// Snaps a courtyard coordinate outward to the 0.05 mm grid.
///
/// Negative values round toward negative infinity and positive values toward
/// positive infinity, so the courtyard never shrinks. A 0.01 grid-unit fuzz
/// keeps values already on the grid from jumping a full step.
#[must_use]
pub fn snap_outward(value: f64) -> f64 {
    let steps = value / COURTYARD_GRID;
    if value < 0.0 {
        (steps + 0.01).floor() * COURTYARD_GRID
    } else {
        (steps - 0.01).ceil() * COURTYARD_GRID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearance_depends_on_body_width() {
        for family in [PartFamily::Capacitor, PartFamily::Inductor] {
            assert!((family.courtyard_clearance(0.8) - 0.15).abs() < f64::EPSILON);
            assert!((family.courtyard_clearance(1.0) - 0.25).abs() < f64::EPSILON);
            assert!((family.courtyard_clearance(3.2) - 0.25).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn thin_lines_only_for_small_inductors() {
        assert!((PartFamily::Inductor.silkscreen_width(0.5) - 0.10).abs() < f64::EPSILON);
        assert!((PartFamily::Inductor.silkscreen_width(1.25) - 0.15).abs() < f64::EPSILON);
        assert!((PartFamily::Capacitor.silkscreen_width(0.3) - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn snap_rounds_away_from_zero() {
        assert!((snap_outward(1.01) - 1.05).abs() < 1e-9);
        assert!((snap_outward(-1.01) + 1.05).abs() < 1e-9);
        assert!((snap_outward(1.05) - 1.05).abs() < 1e-9);
        assert!((snap_outward(-1.05) + 1.05).abs() < 1e-9);
        assert!((snap_outward(0.65) - 0.65).abs() < 1e-9);
    }

    #[test]
    fn snap_never_shrinks_noticeably() {
        let mut x = -3.0;
        while x < 3.0 {
            let snapped = snap_outward(x);
            assert!(snapped.abs() >= x.abs() - 0.000_5 - 1e-12, "{x} -> {snapped}");
            x += 0.013;
        }
    }
}
