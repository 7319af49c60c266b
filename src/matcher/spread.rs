//! Intensity-spread table
//!
//! One constant per `(palette, class)`, derived offline by an exhaustive
//! sweep of the full 256³ color cube against the shipped palette tables:
//! for every cube color `q` of class `C`, find the L1-nearest color in the
//! `C` partition and record `|q.intensity() - nearest.intensity()|`; the
//! spread is the maximum over all `q` (taking, among distance ties, the
//! candidate with the smallest intensity delta). This is the correctness
//! contract the whole search design rests on: the nearest match is always
//! inside the intensity window `q.intensity() ± spread`, so the engine
//! never has to scan a whole partition.
//!
//! The constants are coupled to three things and must be re-derived if any
//! of them changes: the palette tables, the classifier tie-break rule, and
//! the L1 distance metric. They are not transferable between metrics.

use crate::color::OrderClass;
use crate::palette::PaletteId;

/// The guaranteed intensity bound for nearest matches in the given
/// palette/class partition.
///
/// For any query `q` of class `class`, some L1-nearest color in the
/// partition of `id` for `class` has intensity within the returned value
/// of `q.intensity()`.
pub const fn intensity_spread(id: PaletteId, class: OrderClass) -> u16 {
    match id {
        PaletteId::Dmc => match class {
            OrderClass::Gray => 99,
            OrderClass::Rgb => 100,
            OrderClass::Rbg => 138,
            OrderClass::Grb => 175,
            OrderClass::Gbr => 171,
            OrderClass::Brg => 226,
            OrderClass::Bgr => 163,
        },
        PaletteId::Anchor => match class {
            OrderClass::Gray => 104,
            OrderClass::Rgb => 110,
            OrderClass::Rbg => 172,
            OrderClass::Grb => 175,
            OrderClass::Gbr => 179,
            OrderClass::Brg => 198,
            OrderClass::Bgr => 176,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spreads_are_plausible_bounds() {
        // A spread of 0 could never bound a nonempty window around an
        // arbitrary query, and nothing can exceed the intensity range.
        for id in [PaletteId::Dmc, PaletteId::Anchor] {
            for &class in &OrderClass::ALL {
                let spread = intensity_spread(id, class);
                assert!(spread > 0);
                assert!(spread <= 765);
            }
        }
    }
}
