//! Murata chip inductor tables.
//!
//! Land patterns from Murata's "Chip inductors (chip coils)" catalog. Pad
//! rows use the catalog's letters:
//!
//! - `a` - gap between the inner pad edges
//! - `b` - total span, outer edge of the left pad to outer edge of the right pad
//! - `c` - pad height
//! - `d` - copper height of pads only partially opened in the mask
//! - `B`, `C` - span and height of the outer pads of T-shaped lands
//!
//! Several electrically distinct parts share a body; those reuse the 3D model
//! of the first part with that body.

use crate::footprint::catalog::{PadSpec, PartSpec};
use crate::footprint::process::SolderProcess::{Flow, Hand, Reflow};

fn part(id: &str, size: &str, length: f64, width: f64) -> PartSpec {
    PartSpec::new(id, length, width).size(size)
}

/// Power inductors (LQM, LQH series).
#[must_use]
pub fn power() -> Vec<PartSpec> {
    vec![
        part("LQM18F", "0603/1608", 1.6, 0.8)
            .variant(Flow, PadSpec::murata(0.7, 2.4, 0.7))
            .variant(Reflow, PadSpec::murata(0.7, 1.9, 0.7)),
        part("LQM18P", "0603/1608", 1.6, 0.8)
            .variant(Flow, PadSpec::murata(0.7, 2.4, 0.7))
            .variant(Reflow, PadSpec::murata(0.7, 1.9, 0.7)),
        part("LQM21D", "0805/2012", 2.0, 1.25)
            .variant(Reflow, PadSpec::murata(1.2, 3.5, 1.0)),
        part("LQM21F", "0805/2012", 2.0, 1.25)
            .variant(Reflow, PadSpec::murata(1.2, 3.5, 1.0))
            .shape("LQM21D"),
        part("LQM21P", "0805/2012", 2.0, 1.25)
            .variant(Reflow, PadSpec::murata(1.2, 3.5, 1.0)),
        part("LQM2MP", "0806/2016", 2.0, 1.6)
            .variant(Reflow, PadSpec::murata(0.8, 2.4, 1.8)),
        part("LQM2HP", "1008/2520", 2.5, 2.0)
            .variant(Reflow, PadSpec::murata(1.6, 3.0, 1.5)),
        part("LQH2HP", "1008/2520", 2.5, 2.0)
            .polarized()
            .variant(Reflow, PadSpec::murata(0.8, 3.0, 1.4)),
        part("LQH2HP_GR", "1008/2520", 2.5, 2.0)
            .polarized()
            .variant(Reflow, PadSpec::murata(1.25, 2.5, 2.0))
            .shape("LQH2HP"),
        part("LQM31P", "1206/3216", 3.2, 1.6)
            .variant(Reflow, PadSpec::murata(2.0, 4.7, 1.2)),
        part("LQM32P", "1210/3225", 3.2, 2.5)
            .variant(Reflow, PadSpec::murata(1.9, 3.6, 2.7)),
        part("LQH2MC", "0806/2016", 2.0, 1.6)
            .variant(Reflow, PadSpec::murata(0.8, 2.6, 1.0)),
        part("LQH31C", "1206/3216", 3.2, 1.6)
            .variant(Reflow, PadSpec::murata(1.0, 4.5, 1.5)),
        part("LQH32C", "1210/3225", 3.2, 2.5)
            .variant(Reflow, PadSpec::murata(1.3, 3.3, 2.0).with_secondary(5.5, 1.0))
            .shape("LQH32M"),
        part("LQH32P", "1210/3225", 3.2, 2.5)
            .variant(Reflow, PadSpec::murata(1.3, 3.8, 2.0)),
        part("LQH3N", "1212/3030", 3.0, 3.0)
            .polarized()
            .variant(Reflow, PadSpec::murata(1.0, 3.3, 3.3).with_secondary(3.9, 1.8)),
        part("LQH43C", "1812/4532", 4.5, 3.2)
            .variant(Reflow, PadSpec::murata(1.5, 4.5, 3.0).with_secondary(7.5, 1.5)),
        part("LQH43P", "1812/4532", 4.5, 3.2)
            .variant(Reflow, PadSpec::murata(1.5, 4.5, 3.0).with_secondary(7.5, 1.5))
            .shape("LQH43C"),
        part("LQH44P", "1515/4040", 4.0, 4.0)
            .variant(Reflow, PadSpec::murata(1.3, 4.4, 3.0)),
        part("LQH5BP", "2020/5050", 5.0, 5.0)
            .variant(Reflow, PadSpec::murata(1.8, 5.5, 4.1)),
        part("LQH55D", "2220/5750", 5.7, 5.0)
            .variant(Reflow, PadSpec::murata(2.0, 8.0, 3.5)),
        part("LQH66S", "2525/6363", 6.3, 6.3)
            .variant(Reflow, PadSpec::murata(2.0, 8.0, 3.5)),
        part("LQW15C_00", "0402/1005", 1.0, 0.5)
            .variant(Reflow, PadSpec::murata(0.4, 1.4, 0.6)),
        part("LQW15C_10", "0402/1005", 1.0, 0.5)
            .variant(Reflow, PadSpec::murata(0.4, 1.4, 0.66)),
        part("LQW18C", "0603/1608", 1.6, 0.8)
            .variant(Reflow, PadSpec::murata(0.7, 2.2, 1.0)),
        masked("LQM2MP_GH_1.5A", "0806/2016", (2.0, 1.6), (0.8, 2.4, 1.8, 1.8), "LQM2MP"),
        masked("LQM2MP_GH_2.5A", "0806/2016", (2.0, 1.6), (0.8, 2.4, 1.8, 2.4), "LQM2MP"),
        masked("LQM2MP_GH_5A", "0806/2016", (2.0, 1.6), (0.8, 2.4, 1.8, 5.0), "LQM2MP"),
        masked("LQM2HP_GH_1.5A", "1008/2520", (2.5, 2.0), (1.6, 3.0, 1.5, 1.5), "LQM2HP"),
        masked("LQM2HP_GH_2.6A", "1008/2520", (2.5, 2.0), (1.6, 3.0, 1.5, 2.4), "LQM2HP"),
        masked("LQM2HP_GH_3.3A", "1008/2520", (2.5, 2.0), (1.6, 3.0, 1.5, 3.6), "LQM2HP"),
        masked("LQM2HP_JH_1.6A", "1008/2520", (2.5, 2.0), (1.6, 3.0, 1.5, 1.5), "LQM2HP"),
        masked("LQM2HP_JH_2.4A", "1008/2520", (2.5, 2.0), (1.6, 3.0, 1.5, 2.4), "LQM2HP"),
        masked("LQM2HP_JH_3.5A", "1008/2520", (2.5, 2.0), (1.6, 3.0, 1.5, 3.6), "LQM2HP"),
    ]
}

/// Builds a high-current part with partially masked pads from `(a, b, c, d)`.
fn masked(
    id: &str,
    size: &str,
    body: (f64, f64),
    row: (f64, f64, f64, f64),
    shape: &str,
) -> PartSpec {
    let (a, b, c, d) = row;
    part(id, size, body.0, body.1)
        .variant(Reflow, PadSpec::murata(a, b, c).with_copper_height(d))
        .shape(shape)
}

/// General purpose inductors.
#[must_use]
pub fn general() -> Vec<PartSpec> {
    vec![
        part("LQB15NN", "0402/1005", 1.0, 0.5)
            .variant(Reflow, PadSpec::murata(0.4, 1.3, 0.5)),
        part("LQB18N", "0603/1608", 1.6, 0.8)
            .variant(Flow, PadSpec::murata(0.7, 2.4, 0.7))
            .variant(Reflow, PadSpec::murata(0.7, 1.9, 0.7))
            .variant(Hand, PadSpec::murata(0.7, 2.6, 0.9))
            .shape("LQM18F"),
        part("LQM18N", "0603/1608", 1.6, 0.8)
            .variant(Flow, PadSpec::murata(0.7, 2.4, 0.7))
            .variant(Reflow, PadSpec::murata(0.7, 1.9, 0.7))
            .variant(Hand, PadSpec::murata(0.7, 2.6, 0.9))
            .shape("LQM18F"),
        // LQM21P-G0 shares the body too, depending on inductance.
        part("LQM21N", "0805/2012", 2.0, 1.25)
            .variant(Flow, PadSpec::murata(1.2, 4.0, 1.0))
            .variant(Reflow, PadSpec::murata(1.2, 3.0, 1.0))
            .shape("LQM21D"),
        part("LQH31M", "1206/3216", 3.2, 1.6)
            .variant(Reflow, PadSpec::murata(1.0, 4.5, 1.5))
            .shape("LQH31C"),
        part("LQH32M", "1210/3225", 3.2, 2.5)
            .variant(Reflow, PadSpec::murata(1.3, 3.3, 2.0).with_secondary(5.5, 1.0)),
        part("LQH43M", "1812/4532", 4.5, 3.2)
            .variant(Reflow, PadSpec::murata(1.5, 4.5, 3.0).with_secondary(7.5, 1.5))
            .shape("LQH43C"),
        part("LQH43N", "1812/4532", 4.5, 3.2)
            .variant(Reflow, PadSpec::murata(1.5, 4.5, 3.0).with_secondary(7.5, 1.5))
            .shape("LQH43C"),
        part("LQH44N", "1515/4040", 4.0, 4.0)
            .variant(Reflow, PadSpec::murata(1.3, 4.4, 3.0)),
    ]
}

/// RF inductors (LQG, LQP, LQW series).
#[must_use]
pub fn rf() -> Vec<PartSpec> {
    vec![
        part("LQG15H", "0402/1005", 1.0, 0.5)
            .polarized()
            .variant(Reflow, PadSpec::murata(0.4, 1.4, 0.5))
            .variant(Hand, PadSpec::murata(0.4, 1.5, 0.6)),
        part("LQG18H", "0603/1608", 1.6, 0.8)
            .polarized()
            .variant(Reflow, PadSpec::murata(0.6, 1.8, 0.6))
            .variant(Hand, PadSpec::murata(0.8, 2.2, 0.8)),
        part("LQP02TN", "01005/0402", 0.4, 0.2)
            .polarized()
            .variant(Reflow, PadSpec::murata(0.16, 0.4, 0.2))
            .variant(Hand, PadSpec::murata(0.2, 0.56, 0.23)),
        part("LQP02TQ", "01005/0402", 0.4, 0.2)
            .variant(Reflow, PadSpec::murata(0.2, 0.56, 0.2)),
        part("LQP03T", "0201/0603", 0.6, 0.3)
            .polarized()
            .variant(Reflow, PadSpec::murata(0.2, 0.8, 0.2))
            .variant(Hand, PadSpec::murata(0.3, 0.9, 0.3)),
        part("LQP15M", "0402/1005", 1.0, 0.5)
            .variant(Reflow, PadSpec::murata(0.4, 1.4, 0.5))
            .variant(Hand, PadSpec::murata(0.4, 1.5, 0.6)),
        part("LQP18M", "0603/1608", 1.6, 0.8)
            .variant(Reflow, PadSpec::murata(0.7, 1.8, 0.6))
            .variant(Hand, PadSpec::murata(0.9, 2.2, 0.8)),
        PartSpec::new("LQW03A", 0.53, 0.4)
            .variant(Reflow, PadSpec::murata(0.23, 0.65, 0.4)),
        part("LQW04A", "03015/0804", 0.8, 0.4)
            .variant(Reflow, PadSpec::murata(0.4, 1.0, 0.4)),
        part("LQW15A_00", "0402/1005", 1.0, 0.5)
            .variant(Reflow, PadSpec::murata(0.5, 1.2, 0.65))
            .shape("LQW15C_00"),
        part("LQW15A_80", "0402/1005", 1.0, 0.5)
            .variant(Reflow, PadSpec::murata(0.6, 1.42, 0.66))
            .shape("LQW15C_10"),
        part("LQW18A_00", "0603/1608", 1.6, 0.8)
            .variant(Reflow, PadSpec::murata(0.6, 1.9, 0.7))
            .variant(Hand, PadSpec::murata(0.8, 2.0, 1.0))
            .shape("LQW18C"),
        part("LQW18A_80", "0603/1608", 1.65, 0.99)
            .variant(Reflow, PadSpec::murata(0.86, 2.0, 1.15))
            .shape("LQW18C"),
        part("LQW21H", "0805/2015", 2.0, 1.2)
            .variant(Reflow, PadSpec::murata(1.0, 2.6, 1.2)),
        part("LQW2BH", "0805/2015", 2.00, 1.5)
            .variant(Reflow, PadSpec::murata(0.8, 3.0, 1.2)),
        part("LQW2BA", "0805/2015", 2.09, 1.5)
            .variant(Reflow, PadSpec::murata(0.76, 2.8, 1.78)),
        part("LQW2UA", "1008/2520", 2.62, 2.3)
            .variant(Reflow, PadSpec::murata(1.27, 3.3, 2.54)),
        part("LQH31H", "1206/3216", 3.2, 1.6)
            .variant(Reflow, PadSpec::murata(1.0, 4.5, 1.5)),
        part("LQW31H", "1206/3216", 3.2, 1.6)
            .variant(Reflow, PadSpec::murata(1.0, 4.5, 1.5))
            .shape("LQH31C"),
    ]
}

/// All Murata inductors, as written into one library.
#[must_use]
pub fn all() -> Vec<PartSpec> {
    let mut parts = power();
    parts.extend(general());
    parts.extend(rf());
    parts
}
