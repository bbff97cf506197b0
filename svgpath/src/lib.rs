//! Conversion of SVG path data into drawing commands.
//!
//! The [`parse`] function reads the path data mini-language of the SVG `d`
//! attribute and drives a [`PathFormatter`] with the resulting sequence of
//! moves, lines, curves and closes. Relative coordinates are resolved,
//! smooth curves get their reflected control points and elliptical arcs are
//! approximated with cubic curves (see the [`arc`] module) so a formatter
//! only has to deal with absolute geometry.
//!
//! A [`PathConverter`] binds a formatter and hands out names for paths that
//! are converted without one. The [`backend`] module has formatters that
//! produce source code, normalized path data and, with the `kurbo` feature,
//! [`kurbo::BezPath`](https://docs.rs/kurbo/latest/kurbo/struct.BezPath.html)
//! values.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Expose the underlying geometry types crate.
pub extern crate path_types as types;

pub mod arc;
pub mod backend;
pub mod convert;
pub mod error;
pub mod formatter;
pub mod parser;


pub use convert::PathConverter;
pub use error::{ConvertError, MalformedPathError, MissingFormatterError};
pub use formatter::{NullFormatter, PathElement, PathFormatter};
pub use parser::{parse, PathSummary};
pub use path_types::{FillRule, Point};
