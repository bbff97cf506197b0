//! Common geometry types used by the SVG path converter.

#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fill_rule;
mod point;


pub use fill_rule::FillRule;
pub use point::Point;

/// Tolerance used when deciding whether two coordinates, or a radius, are
/// effectively zero.
pub const NEAR_ZERO: f32 = 0.000019;

/// Returns true if `value` is within [`NEAR_ZERO`] of zero.
#[inline(always)]
pub fn is_near_zero(value: f32) -> bool {
    value.abs() < NEAR_ZERO
}
