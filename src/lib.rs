mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod font;
pub use font::*;

mod icon;
pub use icon::*;

/// Utility functions to hyphenate and wrap label text onto the square canvas
pub mod layout;

mod node;
pub use node::*;

mod units;
pub use units::*;

mod error;
pub use error::*;
