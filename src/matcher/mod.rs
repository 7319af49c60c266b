//! Nearest-match search engine
//!
//! The search machinery: per-class partitions of a palette, the
//! offline-derived spread bounds that make the intensity window correct,
//! and the query engine that ties them together.

pub(crate) mod partition;

mod nearest;
mod spread;

pub use nearest::{nearest_in_list, nearest_match, nearest_match_all, query_window};
pub use spread::intensity_spread;
