//! KiCad footprint module text.
//!
//! Footprints are written in the legacy `(module ...)` s-expression grammar,
//! one element per line:
//!
//! ```text
//! (module C_0603_Reflow (layer F.Cu)
//!   (descr "Capacitor SMD 0603, Reflow soldering")
//!   (tags "capacitor 0603 reflow")
//!   (attr smd)
//!   (fp_text reference REF** (at 0 -1.39) (layer F.SilkS)
//!     (effects (font (size 1 1) (thickness 0.15)))
//!   )
//!   ...
//!   (model Capacitors_SMD.3dshapes/C_0603.wrl
//!     (at (xyz 0 0 0))
//!     (scale (xyz 1 1 1))
//!     (rotate (xyz 0 0 0))
//!   )
//! )
//! ```

use std::fmt::Write;

use crate::footprint::geometry::{Line, Pad, Primitive};
use crate::footprint::FootprintRecord;

/// Prefix of the first line of every module.
pub const MODULE_PREFIX: &str = "(module ";

/// Significant digits kept by [`format_mm`].
const SIGNIFICANT_DIGITS: i32 = 6;

/// Values closer to zero than this are written as `0`.
const ZERO_THRESHOLD: f64 = 1e-9;

/// Formats a coordinate or size in millimetres.
///
/// Keeps six significant digits and strips trailing zeros, so `0.865` stays
/// `0.865`, `1.0` becomes `1` and rounding noise such as
/// `1.5400000000000001` becomes `1.54`.
#[must_use]
pub fn format_mm(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.abs() < ZERO_THRESHOLD {
        return "0".to_string();
    }

    #[allow(clippy::cast_possible_truncation)]
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = usize::try_from((SIGNIFICANT_DIGITS - 1 - magnitude).clamp(0, 12)).unwrap_or(0);
    let s = trim_float(format!("{value:.decimals$}"));
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

fn trim_float(mut s: String) -> String {
    if !s.contains('.') {
        return s;
    }

    while let Some(stripped) = s.strip_suffix('0') {
        s = stripped.to_string();
    }
    if let Some(stripped) = s.strip_suffix('.') {
        s = stripped.to_string();
    }

    if s.is_empty() {
        "0".to_string()
    } else {
        s
    }
}

/// Renders a footprint record as module text.
///
/// `model_dir` is the directory prefix of the 3D model reference, usually
/// `{library}.3dshapes`.
#[must_use]
pub fn render(record: &FootprintRecord, model_dir: &str) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{MODULE_PREFIX}{} (layer F.Cu)", record.name);
    let _ = writeln!(out, "  (descr \"{}\")", record.description);
    let _ = writeln!(out, "  (tags \"{}\")", record.tags);
    let _ = writeln!(out, "  (attr smd)");

    let _ = writeln!(
        out,
        "  (fp_text reference REF** (at 0 {}) (layer F.SilkS)",
        format_mm(record.reference_y)
    );
    write_text_effects(&mut out);
    let _ = writeln!(out, "  (fp_text value {} (at 0 0) (layer F.Fab)", record.name);
    write_text_effects(&mut out);

    for primitive in &record.geometry {
        match primitive {
            Primitive::Pad(pad) => write_pad(&mut out, pad),
            Primitive::Line(line) => write_line(&mut out, line),
        }
    }

    let _ = writeln!(out, "  (model {model_dir}/{}.wrl", record.model);
    out.push_str("    (at (xyz 0 0 0))\n");
    out.push_str("    (scale (xyz 1 1 1))\n");
    out.push_str("    (rotate (xyz 0 0 0))\n");
    out.push_str("  )\n");
    out.push_str(")\n");
    out
}

fn write_text_effects(out: &mut String) {
    out.push_str("    (effects (font (size 1 1) (thickness 0.15)))\n");
    out.push_str("  )\n");
}

fn write_pad(out: &mut String, pad: &Pad) {
    let _ = writeln!(
        out,
        "  (pad {} smd rect (at {} {}) (size {} {}) (layers {}))",
        pad.number,
        format_mm(pad.at.x),
        format_mm(pad.at.y),
        format_mm(pad.width),
        format_mm(pad.height),
        pad.layers.names().join(" ")
    );
}

fn write_line(out: &mut String, line: &Line) {
    let _ = writeln!(
        out,
        "  (fp_line (start {} {}) (end {} {}) (layer {}) (width {:.2}))",
        format_mm(line.start.x),
        format_mm(line.start.y),
        format_mm(line.end.x),
        format_mm(line.end.y),
        line.layer.name(),
        line.width
    );
}
