//! Geometric primitives making up a footprint.
//!
//! Coordinates follow the footprint convention: origin at the part centre,
//! X along the pad axis, Y pointing down, all values in millimetres.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (mm).
    pub x: f64,
    /// Y coordinate (mm).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum X (mm).
    pub min_x: f64,
    /// Minimum Y (mm).
    pub min_y: f64,
    /// Maximum X (mm).
    pub max_x: f64,
    /// Maximum Y (mm).
    pub max_y: f64,
}

impl Rect {
    /// Creates a rectangle centred at origin.
    #[must_use]
    pub fn centred(width: f64, height: f64) -> Self {
        Self::around(Point::default(), width, height)
    }

    /// Creates a rectangle of the given size centred on `centre`.
    #[must_use]
    pub fn around(centre: Point, width: f64, height: f64) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            min_x: centre.x - half_w,
            min_y: centre.y - half_h,
            max_x: centre.x + half_w,
            max_y: centre.y + half_h,
        }
    }

    /// Returns the smallest rectangle containing both rectangles.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns the rectangle grown by `margin` on every side.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// Whether `other` lies inside this rectangle, allowing `tolerance`.
    #[must_use]
    pub fn contains(&self, other: &Self, tolerance: f64) -> bool {
        other.min_x >= self.min_x - tolerance
            && other.min_y >= self.min_y - tolerance
            && other.max_x <= self.max_x + tolerance
            && other.max_y <= self.max_y + tolerance
    }

    /// Returns the rectangle width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the rectangle height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Board layers used by the generated footprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Front copper.
    #[serde(rename = "F.Cu")]
    FrontCopper,
    /// Front silkscreen.
    #[serde(rename = "F.SilkS")]
    FrontSilkscreen,
    /// Front courtyard.
    #[serde(rename = "F.CrtYd")]
    FrontCourtyard,
    /// Front fabrication.
    #[serde(rename = "F.Fab")]
    FrontFabrication,
}

impl Layer {
    /// Returns the layer name as written in footprint files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FrontCopper => "F.Cu",
            Self::FrontSilkscreen => "F.SilkS",
            Self::FrontCourtyard => "F.CrtYd",
            Self::FrontFabrication => "F.Fab",
        }
    }
}

bitflags! {
    /// Layers a pad is present on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PadLayers: u8 {
        /// Front copper.
        const COPPER = 0b001;
        /// Front solder paste.
        const PASTE = 0b010;
        /// Front solder mask opening.
        const MASK = 0b100;
    }
}

impl PadLayers {
    /// Returns the layer names in the order footprint files list them.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        // Mask-only pads list the mask first.
        let order: &[(Self, &str)] = if self.contains(Self::COPPER) {
            &[(Self::COPPER, "F.Cu"), (Self::PASTE, "F.Paste"), (Self::MASK, "F.Mask")]
        } else {
            &[(Self::MASK, "F.Mask"), (Self::PASTE, "F.Paste")]
        };
        order
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

/// A rectangular SMD pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    /// Pad number (1 = left, 2 = right).
    pub number: u32,

    /// Pad centre.
    pub at: Point,

    /// Pad size in X (mm).
    pub width: f64,

    /// Pad size in Y (mm).
    pub height: f64,

    /// Layers the pad is present on.
    pub layers: PadLayers,
}

impl Pad {
    /// Creates a rectangular pad on copper, paste and mask.
    #[must_use]
    pub const fn rectangular(number: u32, x: f64, width: f64, height: f64) -> Self {
        Self {
            number,
            at: Point::new(x, 0.0),
            width,
            height,
            layers: PadLayers::all(),
        }
    }

    /// Returns the same pad restricted to `layers`.
    #[must_use]
    pub fn on_layers(mut self, layers: PadLayers) -> Self {
        self.layers = layers;
        self
    }

    /// Returns the pad outline.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::around(self.at, self.width, self.height)
    }
}

/// What a line is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    /// Body outline on the silkscreen.
    Outline,
    /// Polarity mark on the silkscreen.
    Polarity,
    /// Courtyard boundary.
    Courtyard,
}

/// A line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Layer the line is drawn on.
    pub layer: Layer,
    /// Line width (mm).
    pub width: f64,
    /// What the line is drawn for.
    pub role: LineRole,
}

impl Line {
    /// Creates a silkscreen line.
    #[must_use]
    pub const fn silk(x1: f64, y1: f64, x2: f64, y2: f64, width: f64, role: LineRole) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            layer: Layer::FrontSilkscreen,
            width,
            role,
        }
    }

    /// Creates a courtyard line.
    #[must_use]
    pub const fn courtyard(x1: f64, y1: f64, x2: f64, y2: f64, width: f64) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            layer: Layer::FrontCourtyard,
            width,
            role: LineRole::Courtyard,
        }
    }
}

/// A drawing primitive of a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// A pad.
    Pad(Pad),
    /// A line segment.
    Line(Line),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pad_layer_order() {
        assert_eq!(PadLayers::all().names(), vec!["F.Cu", "F.Paste", "F.Mask"]);
    }

    #[test]
    fn mask_only_pad_layer_order() {
        let layers = PadLayers::MASK | PadLayers::PASTE;
        assert_eq!(layers.names(), vec!["F.Mask", "F.Paste"]);
    }

    #[test]
    fn copper_only_pad() {
        assert_eq!(PadLayers::COPPER.names(), vec!["F.Cu"]);
    }

    #[test]
    fn rect_containment() {
        let outer = Rect::centred(4.0, 2.0);
        let inner = Rect::around(Point::new(1.0, 0.0), 1.0, 1.0);
        assert!(outer.contains(&inner, 0.0));
        assert!(!inner.contains(&outer, 0.0));
        assert!(outer.contains(&outer.expanded(0.0005), 0.001));
    }

    #[test]
    fn rect_union_and_size() {
        let a = Rect::around(Point::new(-1.0, 0.0), 1.0, 1.0);
        let b = Rect::around(Point::new(1.0, 0.0), 1.0, 2.0);
        let u = a.union(&b);
        assert!((u.width() - 3.0).abs() < 1e-12);
        assert!((u.height() - 2.0).abs() < 1e-12);
    }
}
