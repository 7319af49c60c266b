//! floss-match: nearest-reference-color search over fixed floss palettes
//!
//! Given an arbitrary RGB color, find the closest color in a large fixed
//! commercial embroidery palette (DMC: 453 colors, Anchor: 444) under an
//! L1 (Manhattan) metric, without scanning the whole palette per query.
//!
//! # Quick Start
//!
//! [`PaletteStore`] owns all caches and is the entry point:
//!
//! ```
//! use floss_match::{nearest_match, Color, PaletteId, PaletteStore};
//!
//! let store = PaletteStore::new();
//! let floss = nearest_match(&store, PaletteId::Dmc, Color::new(123, 67, 200));
//! assert!(store.palette(PaletteId::Dmc).contains(floss));
//! ```
//!
//! # How the Search Works
//!
//! Three ideas combine to keep a query at O(log n + k) instead of O(n):
//!
//! 1. **Order classes.** Every color belongs to exactly one of seven
//!    [`OrderClass`]es: `Gray` (all channels within 12 of each other) or
//!    one of the six orderings of its channels (`Rgb` meaning
//!    `r >= g >= b`, and so on). The nearest match to a query is searched
//!    only among palette colors of the query's own class.
//!
//! 2. **Intensity-sorted partitions.** Each palette is split once, lazily,
//!    into seven sublists sorted by intensity (the channel sum, 0–765) and
//!    memoized in the store.
//!
//! 3. **Spread bounds.** For each `(palette, class)` pair a hardcoded
//!    constant, derived offline by exhaustively sweeping the full 256³
//!    color cube, guarantees that the nearest partition color lies within
//!    `query.intensity() ± spread`. A binary search bounds that window and
//!    only the window is distance-scanned.
//!
//! ```text
//! query ──> classify ──> partition (cache hit or build)
//!                              │
//!                   binary search intensity window
//!                              │
//!                   linear scan window for min L1 distance
//!                              │
//!                        best Color
//! ```
//!
//! The spread constants are the load-bearing invariant of the whole
//! design. They are valid only for the shipped tables, the exact
//! classifier tie-break (equal channels rank the earlier-listed channel
//! higher), and the L1 metric; changing any of those requires re-deriving
//! every constant. A violation (a window that cannot contain the
//! partition's nearest color) is a data-integrity bug and panics rather
//! than returning a silently wrong answer. No other error class exists at
//! query time.
//!
//! # Consumers
//!
//! The engine is a pure library with no wire format of its own. It serves
//! the pixel-quantization pipeline ([`nearest_match_all`]), the
//! interactive color picker ([`nearest_match`]), and the report/labeling
//! step ([`Palette::floss_for`]). External palette tables can be supplied
//! through [`Palette::parse`] in a simple delimited text format.
//!
//! # Concurrency
//!
//! [`PaletteStore`] is `Sync`; every cache entry is built at most once and
//! is immutable once visible. Queries never block each other and return
//! synchronously.

pub mod color;
pub mod matcher;
pub mod palette;


pub use color::{classify, Color, OrderClass, GRAY_DIFF};
pub use matcher::{
    intensity_spread, nearest_in_list, nearest_match, nearest_match_all, query_window,
};
pub use palette::{Floss, Palette, PaletteError, PaletteId, PaletteStore};
