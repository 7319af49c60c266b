//! Error type for palette table parsing
//!
//! The only recoverable errors in the crate come from parsing a palette
//! table supplied as text. The embedded DMC/Anchor tables ship with the
//! crate, so a parse failure there is a data-integrity bug and panics
//! instead (see [`PaletteStore`](crate::PaletteStore)).

use thiserror::Error;

/// Error parsing a delimited palette table.
///
/// Tables are line-based, one floss per line:
/// `code <TAB> name <TAB> R <TAB> G <TAB> B`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A line did not have the five tab-separated fields.
    #[error("line {line}: expected 5 tab-separated fields, found {found}")]
    MalformedRecord {
        /// 1-based line number in the input text.
        line: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// A floss code field was not an integer.
    #[error("line {line}: invalid floss code {value:?}")]
    InvalidCode {
        /// 1-based line number in the input text.
        line: usize,
        /// The offending field text.
        value: String,
    },

    /// A channel field was not an integer in `0..=255`.
    #[error("line {line}: invalid {channel} channel {value:?}")]
    InvalidChannel {
        /// 1-based line number in the input text.
        line: usize,
        /// Which channel failed ("R", "G" or "B").
        channel: &'static str,
        /// The offending field text.
        value: String,
    },

    /// The table contained no entries at all.
    #[error("palette table is empty")]
    EmptyTable,
}
