//! Color value and order classifier
//!
//! This module provides the [`Color`] value the whole engine operates on,
//! and the [`classify`] function that assigns each color to one of seven
//! [`OrderClass`]es by the relative rank of its channels.
//!
//! # Example
//!
//! ```
//! use floss_match::{classify, Color, OrderClass};
//!
//! let c = Color::new(200, 100, 50);
//! assert_eq!(c.intensity(), 350);
//! assert_eq!(classify(c), OrderClass::Rgb);
//! ```

mod order;
mod rgb;

pub use order::{classify, OrderClass, GRAY_DIFF};
pub use rgb::Color;
