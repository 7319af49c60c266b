//! RGB color value
//!
//! [`Color`] is the only color representation the engine uses: three 8-bit
//! channels, an intensity, and an L1 distance. All matching happens directly
//! on these values; there is no conversion to other color models.

use std::fmt;

/// An immutable RGB color with 8-bit channels.
///
/// Channels are `u8`, so out-of-range values are unrepresentable and
/// construction never fails. An "unset" color (the original editor's invalid
/// sentinel) is expressed as `Option<Color>` at API boundaries rather than
/// as a flag on the value itself.
///
/// Two distinct orderings apply to colors:
///
/// - [`Ord`] is lexicographic on `(r, g, b)` and exists so colors can be
///   used as map/set keys.
/// - The search engine orders candidates by [`intensity()`](Color::intensity),
///   which is unrelated to `Ord`.
///
/// # Example
///
/// ```
/// use floss_match::Color;
///
/// let c = Color::new(200, 100, 50);
/// assert_eq!(c.intensity(), 350);
/// assert_eq!(c.distance(Color::new(200, 100, 60)), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Create a color from three channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// The channels as a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Sum of the three channels, in `0..=765`.
    ///
    /// Intensity is the fast, monotonic-enough proxy the search engine uses
    /// to bound nearest-neighbor candidates before any distance computation.
    #[inline]
    pub const fn intensity(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }

    /// L1 (Manhattan) distance: sum of absolute per-channel differences.
    ///
    /// The original editor called this "distance squared", but no squaring
    /// occurs; the name was a misnomer, the semantics are plain L1. The
    /// hardcoded intensity-spread table was derived against this exact
    /// metric; switching to Euclidean (squared or not) would require
    /// re-deriving every spread constant.
    #[inline]
    pub const fn distance(self, other: Color) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}
