//! Land pattern table checks.
//!
//! Table rows are typed in by hand from manufacturer documents. A row that
//! contradicts itself must not reach the generator: it would produce a
//! footprint whose pads do not match the published land pattern.

use thiserror::Error;

use crate::footprint::catalog::{PadSpec, PartSpec};
use crate::footprint::family::PartFamily;
use crate::footprint::process::SolderProcess;

/// Tolerance of the `G + 2 * Y == Z` check (mm).
pub const GAP_TOLERANCE: f64 = 1e-6;

/// A table row with inconsistent or impossible dimensions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimensionError {
    /// Inner gap plus both pad widths does not add up to the total span.
    #[error(
        "table error in {part} {process}: G + Y*2 != Z ({gap} + {pad_width}*2 = {sum} != {span})"
    )]
    GapMismatch {
        /// Part identifier.
        part: String,
        /// Soldering process of the row.
        process: SolderProcess,
        /// Inner gap (G).
        gap: f64,
        /// Pad width (Y).
        pad_width: f64,
        /// `gap + 2 * pad_width`.
        sum: f64,
        /// Total span (Z).
        span: f64,
    },

    /// A dimension is zero, negative or not a number.
    #[error("table error in {part} {process}: {field} must be positive, got {value}")]
    NonPositive {
        /// Part identifier.
        part: String,
        /// Soldering process of the row.
        process: SolderProcess,
        /// Name of the offending field.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The pads would overlap or swap sides.
    #[error("table error in {part} {process}: inner gap {gap} is not smaller than span {span}")]
    GapExceedsSpan {
        /// Part identifier.
        part: String,
        /// Soldering process of the row.
        process: SolderProcess,
        /// Inner gap.
        gap: f64,
        /// Total span.
        span: f64,
    },

    /// The outer pads of a T-shaped land do not reach past the inner pads.
    #[error(
        "table error in {part} {process}: secondary span {secondary} does not exceed span {span}"
    )]
    SecondaryInsideSpan {
        /// Part identifier.
        part: String,
        /// Soldering process of the row.
        process: SolderProcess,
        /// Secondary span.
        secondary: f64,
        /// Primary span.
        span: f64,
    },
}

impl DimensionError {
    /// Identifier of the part whose row is wrong.
    #[must_use]
    pub fn part(&self) -> &str {
        match self {
            Self::GapMismatch { part, .. }
            | Self::NonPositive { part, .. }
            | Self::GapExceedsSpan { part, .. }
            | Self::SecondaryInsideSpan { part, .. } => part,
        }
    }

    /// Soldering process of the row that is wrong.
    #[must_use]
    pub const fn process(&self) -> SolderProcess {
        match self {
            Self::GapMismatch { process, .. }
            | Self::NonPositive { process, .. }
            | Self::GapExceedsSpan { process, .. }
            | Self::SecondaryInsideSpan { process, .. } => *process,
        }
    }
}

/// Checks one table row before generation.
///
/// # Errors
///
/// Returns the first inconsistency found. The gap invariant is only checked
/// for families whose tables carry it.
pub fn validate(
    family: PartFamily,
    part: &PartSpec,
    process: SolderProcess,
    pads: &PadSpec,
) -> Result<(), DimensionError> {
    let positive = |field: &'static str, value: f64| {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(DimensionError::NonPositive {
                part: part.id.clone(),
                process,
                field,
                value,
            })
        }
    };

    positive("body length", part.body_length)?;
    positive("body width", part.body_width)?;
    positive("pad height", pads.pad_height)?;
    positive("pad width", pads.pad_width)?;
    positive("total span", pads.total_span)?;
    positive("centre pitch", pads.center_pitch)?;
    if let Some(d) = pads.copper_height {
        positive("copper height", d)?;
    }
    if let Some(secondary) = pads.secondary {
        positive("secondary span", secondary.span)?;
        positive("secondary pad height", secondary.pad_height)?;
    }

    if !pads.inner_gap.is_finite() || pads.inner_gap < 0.0 {
        return Err(DimensionError::NonPositive {
            part: part.id.clone(),
            process,
            field: "inner gap",
            value: pads.inner_gap,
        });
    }

    if pads.inner_gap >= pads.total_span {
        return Err(DimensionError::GapExceedsSpan {
            part: part.id.clone(),
            process,
            gap: pads.inner_gap,
            span: pads.total_span,
        });
    }

    if let Some(secondary) = pads.secondary {
        if secondary.span <= pads.total_span {
            return Err(DimensionError::SecondaryInsideSpan {
                part: part.id.clone(),
                process,
                secondary: secondary.span,
                span: pads.total_span,
            });
        }
    }

    if family.checks_gap_invariant() {
        let sum = 2.0f64.mul_add(pads.pad_width, pads.inner_gap);
        if (sum - pads.total_span).abs() > GAP_TOLERANCE {
            return Err(DimensionError::GapMismatch {
                part: part.id.clone(),
                process,
                gap: pads.inner_gap,
                pad_width: pads.pad_width,
                sum,
                span: pads.total_span,
            });
        }
    }

    Ok(())
}
