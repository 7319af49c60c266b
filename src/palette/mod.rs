//! Palettes and the palette store
//!
//! This module provides the reference palettes ([`Palette`], [`Floss`]),
//! the identifier of the two built-in floss lines ([`PaletteId`]), and the
//! [`PaletteStore`] that loads and memoizes them.

mod error;
mod loader;
#[allow(clippy::module_inception)]
mod palette;

pub use error::PaletteError;
pub use loader::PaletteStore;
pub use palette::{Floss, Palette, PaletteId};
