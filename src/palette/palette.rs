//! Palette and floss types
//!
//! A [`Palette`] is an immutable, named set of reference colors: the fixed
//! commercial floss lines the editor can match against. Each entry is a
//! [`Floss`]: a manufacturer code, an optional display name, and a color.

use tracing::debug;

use super::error::PaletteError;
use crate::color::Color;

/// Identifier of a built-in reference palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteId {
    /// DMC floss line, 453 colors.
    Dmc,
    /// Anchor floss line, 444 colors.
    Anchor,
}

impl PaletteId {
    /// Manufacturer name as displayed to users.
    pub const fn name(self) -> &'static str {
        match self {
            PaletteId::Dmc => "DMC",
            PaletteId::Anchor => "Anchor",
        }
    }
}

impl std::fmt::Display for PaletteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One palette entry: a spool of floss.
///
/// Codes are the manufacturer's numeric identifiers. The handful of DMC
/// flosses with non-numeric labels (White, Ecru) carry small negative codes
/// so every entry still has a unique integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floss {
    code: i32,
    name: Option<String>,
    color: Color,
}

impl Floss {
    /// Manufacturer code.
    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Display name, if the table carries one (Anchor's does not).
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The floss color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// An immutable, named, fixed set of reference colors.
///
/// Built-in palettes are obtained from a [`PaletteStore`](crate::PaletteStore),
/// which loads each one at most once. [`Palette::parse`] is available for
/// external tables in the same delimited format the built-in tables use.
#[derive(Debug, Clone)]
pub struct Palette {
    id: PaletteId,
    flosses: Vec<Floss>,
}

impl Palette {
    /// Parse a palette from delimited text, one floss per line:
    /// `code <TAB> name <TAB> R <TAB> G <TAB> B`.
    ///
    /// The name field may be empty. Blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`PaletteError`] naming the first offending line if any
    /// record is malformed, or [`PaletteError::EmptyTable`] if no records
    /// survive.
    pub fn parse(id: PaletteId, text: &str) -> Result<Self, PaletteError> {
        let mut flosses = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = raw.split('\t').collect();
            if fields.len() != 5 {
                return Err(PaletteError::MalformedRecord {
                    line,
                    found: fields.len(),
                });
            }
            let code: i32 = fields[0].parse().map_err(|_| PaletteError::InvalidCode {
                line,
                value: fields[0].to_string(),
            })?;
            let parse_channel = |field: &str, channel: &'static str| -> Result<u8, PaletteError> {
                field.parse().map_err(|_| PaletteError::InvalidChannel {
                    line,
                    channel,
                    value: field.to_string(),
                })
            };
            let r = parse_channel(fields[2], "R")?;
            let g = parse_channel(fields[3], "G")?;
            let b = parse_channel(fields[4], "B")?;
            let name = if fields[1].is_empty() {
                None
            } else {
                Some(fields[1].to_string())
            };
            flosses.push(Floss {
                code,
                name,
                color: Color::new(r, g, b),
            });
        }
        if flosses.is_empty() {
            return Err(PaletteError::EmptyTable);
        }
        debug!(palette = %id, colors = flosses.len(), "loaded palette table");
        Ok(Self { id, flosses })
    }

    /// Which palette this is.
    #[inline]
    pub fn id(&self) -> PaletteId {
        self.id
    }

    /// Number of flosses.
    #[inline]
    pub fn len(&self) -> usize {
        self.flosses.len()
    }

    /// True if the palette has no flosses. Always false for a parsed
    /// palette; empty tables are rejected at parse time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flosses.is_empty()
    }

    /// All flosses, in table order.
    #[inline]
    pub fn flosses(&self) -> &[Floss] {
        &self.flosses
    }

    /// All colors, in table order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.flosses.iter().map(|f| f.color)
    }

    /// True if `color` is exactly one of this palette's reference colors.
    pub fn contains(&self, color: Color) -> bool {
        self.flosses.iter().any(|f| f.color == color)
    }

    /// The floss whose color is exactly `color`, if any.
    ///
    /// This is the labeling step's lookup: colors already produced by the
    /// matcher map back to a code and display name. Linear scan; the
    /// palettes are a few hundred entries.
    pub fn floss_for(&self, color: Color) -> Option<&Floss> {
        self.flosses.iter().find(|f| f.color == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "310\tBlack\t0\t0\t0\n-10\tWhite\t252\t251\t248\n1\t\t255\t255\t255\n";

    #[test]
    fn test_parse_basic_table() {
        let palette = Palette::parse(PaletteId::Dmc, SAMPLE).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.id(), PaletteId::Dmc);

        let black = &palette.flosses()[0];
        assert_eq!(black.code(), 310);
        assert_eq!(black.name(), Some("Black"));
        assert_eq!(black.color(), Color::new(0, 0, 0));

        // Negative codes stand in for non-numeric labels.
        assert_eq!(palette.flosses()[1].code(), -10);

        // Empty name field parses as unnamed.
        assert_eq!(palette.flosses()[2].name(), None);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "310\tBlack\t0\t0\t0\n\n1\t\t255\t255\t255\n";
        let palette = Palette::parse(PaletteId::Anchor, text).unwrap();
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let err = Palette::parse(PaletteId::Dmc, "310\tBlack\t0\t0\n").unwrap_err();
        assert_eq!(err, PaletteError::MalformedRecord { line: 1, found: 4 });
    }

    #[test]
    fn test_parse_rejects_bad_code() {
        let err = Palette::parse(PaletteId::Dmc, "x\tBlack\t0\t0\t0\n").unwrap_err();
        assert!(matches!(err, PaletteError::InvalidCode { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_out_of_range_channel() {
        let err = Palette::parse(PaletteId::Dmc, "310\tBlack\t0\t256\t0\n").unwrap_err();
        assert!(matches!(
            err,
            PaletteError::InvalidChannel {
                line: 1,
                channel: "G",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_empty_table() {
        let err = Palette::parse(PaletteId::Dmc, "\n\n").unwrap_err();
        assert_eq!(err, PaletteError::EmptyTable);
    }

    #[test]
    fn test_contains_and_floss_for() {
        let palette = Palette::parse(PaletteId::Dmc, SAMPLE).unwrap();
        assert!(palette.contains(Color::new(0, 0, 0)));
        assert!(!palette.contains(Color::new(1, 0, 0)));

        let white = palette.floss_for(Color::new(252, 251, 248)).unwrap();
        assert_eq!(white.name(), Some("White"));
        assert_eq!(palette.floss_for(Color::new(9, 9, 9)), None);
    }
}
