//! Nearest-match query engine
//!
//! The search narrows in three steps: classify the query, binary-search the
//! class partition for the intensity window guaranteed by the spread table,
//! then linear-scan only that window for the minimum L1 distance. The
//! window typically holds a small fraction of the partition, so a query
//! costs O(log n + k) instead of a full palette scan.

use tracing::trace;

use super::spread::intensity_spread;
use crate::color::{classify, Color, OrderClass};
use crate::palette::{PaletteId, PaletteStore};

/// Same-class candidates closer than this win outright in
/// [`nearest_in_list`] before any global scan happens.
const GOOD_CLASS_MATCH: u32 = 100;

/// Find the reference color in palette `id` nearest to `query` under the
/// L1 metric.
///
/// The returned color is always an element of the palette. Distance ties
/// resolve to the candidate encountered first in intensity order, an
/// accepted consequence of the scan, not an engineered rule.
///
/// # Panics
///
/// Panics if the intensity window implied by the spread table does not
/// overlap the partition, or contains no partition entry. Either means the
/// palette data and the spread table were edited inconsistently; that is a
/// data-integrity bug which must fail loudly rather than degrade to an
/// approximate answer.
///
/// # Example
///
/// ```
/// use floss_match::{nearest_match, Color, PaletteId, PaletteStore};
///
/// let store = PaletteStore::new();
/// let white = nearest_match(&store, PaletteId::Dmc, Color::new(255, 255, 255));
/// assert_eq!(white, Color::new(252, 251, 248));
/// ```
pub fn nearest_match(store: &PaletteStore, id: PaletteId, query: Color) -> Color {
    let class = classify(query);
    let partition = store.partition(id, class);
    let spread = i32::from(intensity_spread(id, class));

    let qi = i32::from(query.intensity());
    let lower = qi - spread;
    let upper = qi + spread;

    // Spread-table consistency: the window must reach the partition from
    // both ends. Failing here means the table was edited without
    // re-deriving the spreads.
    assert!(
        i32::from(partition.first_intensity()) <= upper,
        "{id}/{class:?}: window upper bound {upper} is below the dimmest \
         partition intensity {}; spread table is inconsistent with palette data",
        partition.first_intensity()
    );
    assert!(
        i32::from(partition.last_intensity()) >= lower,
        "{id}/{class:?}: window lower bound {lower} is above the brightest \
         partition intensity {}; spread table is inconsistent with palette data",
        partition.last_intensity()
    );

    let window = partition.window(lower, upper);
    assert!(
        !window.is_empty(),
        "{id}/{class:?}: no partition intensity in {lower}..={upper}; \
         spread table is inconsistent with palette data"
    );
    trace!(
        palette = %id,
        ?class,
        query = %query,
        window = window.len(),
        of = partition.len(),
        "scanning intensity window"
    );

    let mut best = window[0].color();
    let mut best_distance = query.distance(best);
    for entry in &window[1..] {
        let distance = query.distance(entry.color());
        if distance < best_distance {
            best_distance = distance;
            best = entry.color();
        }
    }
    best
}

/// Map every color in `colors` to its nearest reference color in palette
/// `id`, preserving input order.
///
/// With `dedup`, only the first occurrence of each resulting reference
/// color is kept; the quantization pipeline uses this to collapse many
/// image colors onto one floss without repeats.
pub fn nearest_match_all(
    store: &PaletteStore,
    id: PaletteId,
    colors: &[Color],
    dedup: bool,
) -> Vec<Color> {
    let mut out: Vec<Color> = Vec::with_capacity(colors.len());
    for &color in colors {
        let matched = nearest_match(store, id, color);
        if !dedup || !out.contains(&matched) {
            out.push(matched);
        }
    }
    out
}

/// Find the color in an arbitrary, unindexed candidate list nearest to
/// `query`. Returns `None` for an empty list.
///
/// Unlike [`nearest_match`] this has no partitions or spread bounds to
/// lean on; it is meant for small working sets such as the colors already
/// chosen for a pattern. A same-class candidate closer than a fixed
/// threshold is preferred, since it will be a visually similar kind of color,
/// and only if none exists does the plain global minimum win.
pub fn nearest_in_list(query: Color, candidates: &[Color]) -> Option<Color> {
    let class = classify(query);

    let same_class = candidates
        .iter()
        .filter(|&&c| classify(c) == class)
        .map(|&c| (query.distance(c), c))
        .min_by_key(|&(d, _)| d)
        .filter(|&(d, _)| d < GOOD_CLASS_MATCH);
    if let Some((_, color)) = same_class {
        return Some(color);
    }

    candidates
        .iter()
        .map(|&c| (query.distance(c), c))
        .min_by_key(|&(d, _)| d)
        .map(|(_, color)| color)
}

/// How classes and windows narrow a query, for logging and diagnostics.
///
/// Returns `(class, window_len, partition_len)` for the given query
/// without running the distance scan.
pub fn query_window(
    store: &PaletteStore,
    id: PaletteId,
    query: Color,
) -> (OrderClass, usize, usize) {
    let class = classify(query);
    let partition = store.partition(id, class);
    let spread = i32::from(intensity_spread(id, class));
    let qi = i32::from(query.intensity());
    let window = partition.window(qi - spread, qi + spread);
    (class, window.len(), partition.len())
}
