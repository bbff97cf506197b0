//! Formatters that render primitives into other representations.

mod core_graphics;
mod svg;

#[cfg(feature = "kurbo")]
mod bez_path;

pub use core_graphics::CoreGraphicsFormatter;
pub use svg::SvgFormatter;

#[cfg(feature = "kurbo")]
pub use bez_path::BezPathFormatter;
