//! Order classifier
//!
//! Colors are grouped by the relative rank of their channel values before
//! any distance computation happens. A query only ever competes against
//! palette colors of its own class, which is what lets the intensity-spread
//! bounds stay small.

use super::rgb::Color;

/// Two channels closer than this (pairwise) make a color [`OrderClass::Gray`].
pub const GRAY_DIFF: u8 = 12;

/// The seven order classes of a color.
///
/// A color is [`Gray`](OrderClass::Gray) when all three channel pairs differ
/// by less than [`GRAY_DIFF`]; otherwise it carries the total order of its
/// channels ([`Rgb`](OrderClass::Rgb) meaning `r >= g >= b`, and so on for
/// the other five permutations).
///
/// Classes are computed on demand from a [`Color`] and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderClass {
    /// All channels mutually within [`GRAY_DIFF`] of each other.
    Gray,
    /// `r >= g >= b`
    Rgb,
    /// `r >= b >= g`
    Rbg,
    /// `g >= r >= b`
    Grb,
    /// `g >= b >= r`
    Gbr,
    /// `b >= r >= g`
    Brg,
    /// `b >= g >= r`
    Bgr,
}

impl OrderClass {
    /// All seven classes, for iterating partitions and spread tables.
    pub const ALL: [OrderClass; 7] = [
        OrderClass::Gray,
        OrderClass::Rgb,
        OrderClass::Rbg,
        OrderClass::Grb,
        OrderClass::Gbr,
        OrderClass::Brg,
        OrderClass::Bgr,
    ];
}

/// Classify a color into its order class.
///
/// Pure and O(1). Gray wins over any channel ordering.
///
/// When two channels are equal, the earlier-listed channel (R over G over B)
/// is treated as the larger, which can occasionally assign a boundary color
/// to a class whose partition holds a slightly worse match than a
/// neighboring class would. The intensity-spread table was derived against
/// this exact rule; changing the tie-break without re-deriving the table
/// breaks the search contract.
///
/// # Example
///
/// ```
/// use floss_match::{classify, Color, OrderClass};
///
/// assert_eq!(classify(Color::new(10, 10, 10)), OrderClass::Gray);
/// assert_eq!(classify(Color::new(200, 100, 50)), OrderClass::Rgb);
/// assert_eq!(classify(Color::new(50, 100, 200)), OrderClass::Bgr);
/// ```
pub fn classify(color: Color) -> OrderClass {
    let r = color.r();
    let g = color.g();
    let b = color.b();

    if r.abs_diff(g) < GRAY_DIFF && g.abs_diff(b) < GRAY_DIFF && r.abs_diff(b) < GRAY_DIFF {
        return OrderClass::Gray;
    }

    // Strict comparisons: on equality the earlier channel ranks higher.
    if g > r {
        if b > g {
            OrderClass::Bgr
        } else if b > r {
            OrderClass::Gbr
        } else {
            OrderClass::Grb
        }
    } else if b > r {
        OrderClass::Brg
    } else if b > g {
        OrderClass::Rbg
    } else {
        OrderClass::Rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gray_threshold_is_strict() {
        // Pairwise differences of 11 are still gray; 12 is not.
        assert_eq!(classify(Color::new(100, 111, 100)), OrderClass::Gray);
        assert_eq!(classify(Color::new(100, 112, 100)), OrderClass::Grb);
        assert_eq!(classify(Color::new(10, 10, 10)), OrderClass::Gray);
    }

    #[test]
    fn test_gray_requires_all_pairs_close() {
        // r-g and g-b are each under the threshold but r-b is not.
        assert_eq!(classify(Color::new(100, 110, 120)), OrderClass::Bgr);
    }

    #[test]
    fn test_all_six_permutations() {
        assert_eq!(classify(Color::new(200, 100, 50)), OrderClass::Rgb);
        assert_eq!(classify(Color::new(200, 50, 100)), OrderClass::Rbg);
        assert_eq!(classify(Color::new(100, 200, 50)), OrderClass::Grb);
        assert_eq!(classify(Color::new(50, 200, 100)), OrderClass::Gbr);
        assert_eq!(classify(Color::new(100, 50, 200)), OrderClass::Brg);
        assert_eq!(classify(Color::new(50, 100, 200)), OrderClass::Bgr);
    }

    #[test]
    fn test_equal_channels_rank_earlier_channel_higher() {
        // r == g: R outranks G, so the class is Rgb rather than Grb.
        assert_eq!(classify(Color::new(100, 100, 50)), OrderClass::Rgb);
        // g == b: G outranks B.
        assert_eq!(classify(Color::new(50, 100, 100)), OrderClass::Gbr);
        // r == b: R outranks B.
        assert_eq!(classify(Color::new(100, 50, 100)), OrderClass::Rbg);
    }

    #[test]
    fn test_every_color_classifies() {
        // Exhaustive over a coarse lattice: classify is total and agrees
        // with the plain channel-order definition away from ties and gray.
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let c = Color::new(r as u8, g as u8, b as u8);
                    let class = classify(c);
                    let (r, g, b) = (c.r(), c.g(), c.b());
                    let ordered = match class {
                        OrderClass::Gray => true,
                        OrderClass::Rgb => r >= g && g >= b,
                        OrderClass::Rbg => r >= b && b >= g,
                        OrderClass::Grb => g >= r && r >= b,
                        OrderClass::Gbr => g >= b && b >= r,
                        OrderClass::Brg => b >= r && r >= g,
                        OrderClass::Bgr => b >= g && g >= r,
                    };
                    assert!(ordered, "classify({c}) = {class:?} violates its own order");
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let c = Color::new(37, 81, 160);
        assert_eq!(classify(c), classify(c));
    }
}
