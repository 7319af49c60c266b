//! Per-class palette partitions
//!
//! A [`Partition`] is the subset of one palette whose colors classify to a
//! single [`OrderClass`], stored with precomputed intensities and sorted
//! ascending by intensity. Partitions are what the nearest-match engine
//! actually searches: the sort order is what makes the intensity window a
//! cheap binary search instead of a full palette scan.

use tracing::debug;

use crate::color::{classify, Color, OrderClass};
use crate::palette::Palette;

/// A palette color with its precomputed intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IndexedColor {
    color: Color,
    intensity: u16,
}

impl IndexedColor {
    #[inline]
    pub(crate) fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn intensity(self) -> u16 {
        self.intensity
    }
}

/// The colors of one palette belonging to one order class, sorted
/// ascending by intensity. Immutable once built.
#[derive(Debug, Clone)]
pub(crate) struct Partition {
    entries: Vec<IndexedColor>,
}

impl Partition {
    /// Filter `palette` down to the colors classifying to `class`, pair
    /// each with its intensity, and sort by intensity. Intensity ties are
    /// left in whatever order the sort produces; no stability is required.
    ///
    /// # Panics
    ///
    /// Panics if the partition comes out empty. Every class of both
    /// shipped palettes is populated; an empty partition means the palette
    /// data and the classifier tie-break rule have drifted apart, which is
    /// a fatal precondition violation, not a runtime error.
    pub(crate) fn build(palette: &Palette, class: OrderClass) -> Self {
        let mut entries: Vec<IndexedColor> = palette
            .colors()
            .filter(|&c| classify(c) == class)
            .map(|color| IndexedColor {
                color,
                intensity: color.intensity(),
            })
            .collect();
        entries.sort_unstable_by_key(|e| e.intensity);

        assert!(
            !entries.is_empty(),
            "{} palette has no colors of class {:?}: palette data and the \
             classifier tie-break rule have drifted apart",
            palette.id(),
            class
        );
        debug!(
            palette = %palette.id(),
            ?class,
            colors = entries.len(),
            min_intensity = entries[0].intensity,
            max_intensity = entries[entries.len() - 1].intensity,
            "built partition"
        );
        Self { entries }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Intensity of the dimmest color.
    #[inline]
    pub(crate) fn first_intensity(&self) -> u16 {
        self.entries[0].intensity
    }

    /// Intensity of the brightest color.
    #[inline]
    pub(crate) fn last_intensity(&self) -> u16 {
        self.entries[self.entries.len() - 1].intensity
    }

    /// The entries whose intensity lies in `lower..=upper`, located by
    /// binary search. May be empty if no intensity falls in the range.
    pub(crate) fn window(&self, lower: i32, upper: i32) -> &[IndexedColor] {
        let start = self
            .entries
            .partition_point(|e| i32::from(e.intensity) < lower);
        let end = self
            .entries
            .partition_point(|e| i32::from(e.intensity) <= upper);
        &self.entries[start..end]
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[IndexedColor] {
        &self.entries
    }
}
