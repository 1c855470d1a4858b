//! Footprint geometry for two-terminal chip parts.
//!
//! Chip capacitors and chip inductors share one layout: two rectangular pads
//! on the X axis, a silkscreen outline along the long body edges, an
//! optional polarity bracket around pad 1, and a rectangular courtyard.

use serde::Serialize;

use crate::footprint::catalog::{PadSpec, PartSpec};
use crate::footprint::family::{snap_outward, PartFamily, COURTYARD_LINE_WIDTH, MARK_OFFSET};
use crate::footprint::geometry::{Line, LineRole, Pad, PadLayers, Primitive, Rect};
use crate::footprint::naming;
use crate::footprint::process::SolderProcess;

/// Distance between the courtyard and the reference text baseline (mm).
const REFERENCE_GAP: f64 = 0.2;

/// Reference text size (mm).
const REFERENCE_SIZE: f64 = 1.0;

/// A generated footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintRecord {
    /// Footprint name, also the file name in the library.
    pub name: String,

    /// Family the part belongs to.
    pub family: PartFamily,

    /// Identifier of the part.
    pub part_id: String,

    /// Soldering process of the land pattern.
    pub process: SolderProcess,

    /// Human-readable description.
    pub description: String,

    /// Search tags, space separated.
    pub tags: String,

    /// Y position of the reference designator (mm).
    pub reference_y: f64,

    /// Pads and lines in drawing order.
    pub geometry: Vec<Primitive>,

    /// 3D model name, without directory or extension.
    pub model: String,
}

impl FootprintRecord {
    /// Iterates the pads.
    pub fn pads(&self) -> impl Iterator<Item = &Pad> {
        self.geometry.iter().filter_map(|p| match p {
            Primitive::Pad(pad) => Some(pad),
            Primitive::Line(_) => None,
        })
    }

    /// Iterates the lines drawn for `role`.
    pub fn lines(&self, role: LineRole) -> impl Iterator<Item = &Line> {
        self.geometry.iter().filter_map(move |p| match p {
            Primitive::Line(line) if line.role == role => Some(line),
            _ => None,
        })
    }

    /// Returns the rectangle enclosed by the courtyard lines.
    #[must_use]
    pub fn courtyard(&self) -> Option<Rect> {
        bounds(self.lines(LineRole::Courtyard).flat_map(|l| {
            [
                Rect::around(l.start, 0.0, 0.0),
                Rect::around(l.end, 0.0, 0.0),
            ]
        }))
    }

    /// Returns the union of all pad outlines.
    #[must_use]
    pub fn pad_bounds(&self) -> Option<Rect> {
        bounds(self.pads().map(Pad::bounds))
    }
}

fn bounds(rects: impl Iterator<Item = Rect>) -> Option<Rect> {
    rects.reduce(|acc, r| acc.union(&r))
}

/// Generator for one part family.
#[derive(Debug, Clone, Copy)]
pub struct FootprintGenerator {
    family: PartFamily,
}

impl FootprintGenerator {
    /// Creates a generator applying the rules of `family`.
    #[must_use]
    pub const fn new(family: PartFamily) -> Self {
        Self { family }
    }

    /// Returns the family this generator draws for.
    #[must_use]
    pub const fn family(&self) -> PartFamily {
        self.family
    }

    /// Generates the footprint of `part` for one soldering process.
    ///
    /// The result depends on the arguments only. Table rows should have
    /// passed [`validate`](crate::footprint::validate::validate) first.
    ///
    /// # Layout
    ///
    /// - Pads sit at `±pitch/2`; partially masked pads add a copper-only pad
    ///   at the copper height; T-shaped lands add an outer pad pair.
    /// - The outline runs along `y = ±W/2`; short closing segments at
    ///   `x = ±L/2` are added when the body is taller than the pads.
    /// - The polarity bracket hugs pad 1, `0.15` mm off its edges.
    /// - The courtyard encloses pads and body plus the clearance.
    #[must_use]
    pub fn generate(&self, part: &PartSpec, process: SolderProcess, pads: &PadSpec) -> FootprintRecord {
        let family = self.family;
        let clearance = family.courtyard_clearance(part.body_width);
        let line_width = family.silkscreen_width(part.body_width);
        let extent_y = part.body_width.max(pads.max_pad_height());

        let mut geometry = Vec::new();
        Self::place_pads(pads, &mut geometry);
        Self::draw_outline(part, pads, line_width, &mut geometry);
        if part.polarized {
            Self::draw_polarity_mark(part, pads, line_width, &mut geometry);
        }
        self.draw_courtyard(part, pads, clearance, extent_y, &mut geometry);

        let reference_y = -(extent_y / 2.0 + clearance + REFERENCE_GAP + REFERENCE_SIZE / 2.0);

        FootprintRecord {
            name: naming::footprint_name(family, part, process),
            family,
            part_id: part.id.clone(),
            process,
            description: naming::description(family, part, process),
            tags: naming::tags(family, part, process),
            reference_y,
            geometry,
            model: naming::model_name(family, part),
        }
    }

    fn place_pads(pads: &PadSpec, out: &mut Vec<Primitive>) {
        let px = pads.center_pitch / 2.0;

        for (number, x) in [(1, -px), (2, px)] {
            let pad = Pad::rectangular(number, x, pads.pad_width, pads.pad_height);
            match pads.masked_copper_height() {
                Some(copper) => {
                    // Copper is taller than the mask opening.
                    let copper_pad = Pad::rectangular(number, x, pads.pad_width, copper)
                        .on_layers(PadLayers::COPPER);
                    out.push(Primitive::Pad(copper_pad));
                    out.push(Primitive::Pad(pad.on_layers(PadLayers::MASK | PadLayers::PASTE)));
                }
                None => out.push(Primitive::Pad(pad)),
            }
        }

        if let Some(secondary) = pads.secondary {
            let sx = (secondary.span + pads.total_span) / 4.0;
            let width = (secondary.span - pads.total_span) / 2.0;
            for (number, x) in [(1, -sx), (2, sx)] {
                out.push(Primitive::Pad(Pad::rectangular(
                    number,
                    x,
                    width,
                    secondary.pad_height,
                )));
            }
        }
    }

    fn draw_outline(part: &PartSpec, pads: &PadSpec, width: f64, out: &mut Vec<Primitive>) {
        let l2 = part.body_length / 2.0;
        let w2 = part.body_width / 2.0;
        let ph2 = pads.pad_height / 2.0 + MARK_OFFSET;
        let silk = |x1, y1, x2, y2| Primitive::Line(Line::silk(x1, y1, x2, y2, width, LineRole::Outline));

        out.push(silk(-l2, -w2, l2, -w2));
        out.push(silk(-l2, w2, l2, w2));

        // Close the body ends only where they clear the pads.
        if w2 > ph2 {
            out.push(silk(-l2, -w2, -l2, -ph2));
            out.push(silk(-l2, ph2, -l2, w2));
            out.push(silk(l2, -w2, l2, -ph2));
            out.push(silk(l2, ph2, l2, w2));
        }
    }

    fn draw_polarity_mark(part: &PartSpec, pads: &PadSpec, width: f64, out: &mut Vec<Primitive>) {
        let w2 = part.body_width / 2.0;
        let ph2 = pads.pad_height / 2.0 + MARK_OFFSET;
        let xl = pads.total_span / 2.0 + MARK_OFFSET;
        let xr = pads.inner_gap / 2.0 - MARK_OFFSET;
        let silk = |x1, y1, x2, y2| Primitive::Line(Line::silk(x1, y1, x2, y2, width, LineRole::Polarity));

        // Inner edge of pad 1
        out.push(silk(-xr, -w2, -xr, w2));
        // Top and bottom ticks
        out.push(silk(-xl, -ph2, -xr, -ph2));
        out.push(silk(-xl, ph2, -xr, ph2));
        // Outer edge of pad 1
        out.push(silk(-xl, ph2, -xl, -ph2));
    }

    fn draw_courtyard(
        &self,
        part: &PartSpec,
        pads: &PadSpec,
        clearance: f64,
        extent_y: f64,
        out: &mut Vec<Primitive>,
    ) {
        let half_x = pads.outer_span().max(part.body_length) / 2.0 + clearance;
        let half_y = extent_y / 2.0 + clearance;

        let snap = |v: f64| {
            if self.family.snaps_courtyard() {
                snap_outward(v)
            } else {
                v
            }
        };
        let (x0, y0, x1, y1) = (snap(-half_x), snap(-half_y), snap(half_x), snap(half_y));
        let crtyd = |xa, ya, xb, yb| Primitive::Line(Line::courtyard(xa, ya, xb, yb, COURTYARD_LINE_WIDTH));

        out.push(crtyd(x0, y0, x1, y0));
        out.push(crtyd(x0, y1, x1, y1));
        out.push(crtyd(x0, y0, x0, y1));
        out.push(crtyd(x1, y0, x1, y1));
    }
}

/// Generates one footprint with the rules of `family`.
#[must_use]
pub fn generate(
    family: PartFamily,
    part: &PartSpec,
    process: SolderProcess,
    pads: &PadSpec,
) -> FootprintRecord {
    FootprintGenerator::new(family).generate(part, process, pads)
}
