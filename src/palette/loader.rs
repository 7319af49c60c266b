//! Palette store: lazy loading and memoization
//!
//! [`PaletteStore`] owns all mutable state in the crate: the two lazily
//! parsed built-in palettes and the fourteen per-`(palette, class)`
//! partition slots the matcher searches. Everything a slot holds is a pure
//! function of its key, so entries are built once and immutable from then
//! on. The store replaces the original editor's process-wide statics;
//! independent stores are fully isolated, which is what the tests rely on.

use std::sync::OnceLock;

use super::palette::{Palette, PaletteId};
use crate::color::{Color, OrderClass};
use crate::matcher::partition::Partition;

/// The DMC floss table. External data resource, embedded at build time.
const DMC_TABLE: &str = include_str!("data/dmc.tsv");

/// The Anchor floss table. External data resource, embedded at build time.
const ANCHOR_TABLE: &str = include_str!("data/anchor.tsv");

/// Owner of the palette and partition caches.
///
/// All accessors take `&self`; the store is `Sync` and every cache entry is
/// built at most once (`OnceLock`), so concurrent first use neither races
/// nor duplicates work. Once an entry is visible it never changes.
///
/// # Example
///
/// ```
/// use floss_match::{Color, PaletteId, PaletteStore};
///
/// let store = PaletteStore::new();
/// let dmc = store.palette(PaletteId::Dmc);
/// assert_eq!(dmc.len(), 453);
///
/// let nearest = store.nearest_match(PaletteId::Dmc, Color::new(0, 0, 0));
/// assert_eq!(nearest, Color::new(0, 0, 0));
/// ```
#[derive(Debug, Default)]
pub struct PaletteStore {
    dmc: OnceLock<Palette>,
    anchor: OnceLock<Palette>,
    partitions: [OnceLock<Partition>; 14],
}

impl PaletteStore {
    /// Create an empty store. Nothing is parsed until first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in palette for `id`, parsed on first call and cached for
    /// the life of the store. Repeated calls return the same instance.
    ///
    /// # Panics
    ///
    /// Panics if the embedded table fails to parse. The tables ship with
    /// the crate, so that is a data-integrity bug, not a runtime condition.
    pub fn palette(&self, id: PaletteId) -> &Palette {
        let (slot, table) = match id {
            PaletteId::Dmc => (&self.dmc, DMC_TABLE),
            PaletteId::Anchor => (&self.anchor, ANCHOR_TABLE),
        };
        slot.get_or_init(|| {
            Palette::parse(id, table)
                .unwrap_or_else(|e| panic!("embedded {id} palette table is corrupt: {e}"))
        })
    }

    /// The intensity-sorted partition of palette `id` for `class`, built on
    /// first request and cached. Repeated calls return the same instance.
    ///
    /// # Panics
    ///
    /// Panics if the partition would be empty (see [`Partition::build`]).
    pub(crate) fn partition(&self, id: PaletteId, class: OrderClass) -> &Partition {
        self.partitions[slot_index(id, class)]
            .get_or_init(|| Partition::build(self.palette(id), class))
    }

    /// The reference color nearest to `query` in palette `id`.
    ///
    /// Convenience method for [`nearest_match`](crate::nearest_match).
    pub fn nearest_match(&self, id: PaletteId, query: Color) -> Color {
        crate::matcher::nearest_match(self, id, query)
    }
}

fn slot_index(id: PaletteId, class: OrderClass) -> usize {
    let palette = match id {
        PaletteId::Dmc => 0,
        PaletteId::Anchor => 1,
    };
    let class = match class {
        OrderClass::Gray => 0,
        OrderClass::Rgb => 1,
        OrderClass::Rbg => 2,
        OrderClass::Grb => 3,
        OrderClass::Gbr => 4,
        OrderClass::Brg => 5,
        OrderClass::Bgr => 6,
    };
    palette * 7 + class
}
