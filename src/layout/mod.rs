//! Text layout for square icon labels.
//!
//! This module turns an arbitrary label string into a block of newline-joined
//! lines that fits a fixed-width square canvas: words too wide for the canvas
//! are split into hyphenated fragments, and fragments are greedily packed
//! into lines.
//!
//! All measurement goes through the [`TextMeasure`](crate::TextMeasure)
//! capability, so the algorithms here are pure string manipulation against a
//! width oracle and can be exercised without any font file at all.
//!
//! # Layout Functions
//!
//! - [`hyphenate_word`](crate::layout::hyphenate_word) - split one word into fragments that fit a width budget
//! - [`hyphenate`](crate::layout::hyphenate) - apply [`hyphenate_word`](crate::layout::hyphenate_word) to every word of a label
//! - [`squarify`](crate::layout::squarify) - pack hyphenated fragments into lines for the square canvas
//!
//! # Example
//!
//! ```
//! use icon_gen::layout::squarify;
//! use icon_gen::{Px, TextMeasure};
//!
//! // a toy measure where every character is ten pixels wide
//! struct Monospace;
//! impl TextMeasure for Monospace {
//!     fn width_of(&self, text: &str) -> Px {
//!         Px(text.chars().count() as f32 * 10.0)
//!     }
//! }
//!
//! // "API Gateway" fits on one line at this width
//! let wrapped = squarify("API Gateway", &Monospace, Px(170.0)).unwrap();
//! assert_eq!(wrapped, "API Gateway");
//!
//! // three longer words wrap onto a line each
//! let wrapped = squarify("Elastic Container Service", &Monospace, Px(170.0)).unwrap();
//! assert_eq!(wrapped, "Elastic\nContainer\nService");
//! ```

mod hyphenate;
mod squarify;

pub use hyphenate::*;
pub use squarify::*;
