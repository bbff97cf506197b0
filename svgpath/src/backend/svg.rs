//! Normalized SVG path data.

use std::fmt::Write;

use crate::{formatter::PathFormatter, Point};

/// Formatter that writes primitives back out as absolute SVG path data.
///
/// Every element is written with its uppercase command letter, arcs are
/// written as the curves they convert to and paths parsed into the same
/// formatter are concatenated.
#[derive(Clone, Default, Debug)]
pub struct SvgFormatter(String, Option<usize>);

impl SvgFormatter {
    /// Creates a new formatter that writes floats with the standard
    /// behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new formatter with the given precision (the number of
    /// digits that will be printed after the decimal).
    pub fn with_precision(precision: usize) -> Self {
        Self(String::default(), Some(precision))
    }

    fn push_command(&mut self, command: char, points: &[Point<f32>]) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push(command);
        for (i, Point { x, y }) in points.iter().enumerate() {
            if i != 0 {
                self.0.push(' ');
            }
            let _ = match self.1 {
                Some(prec) => write!(self.0, "{x:.0$},{y:.0$}", prec),
                None => write!(self.0, "{x},{y}"),
            };
        }
    }
}

impl core::ops::Deref for SvgFormatter {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl PathFormatter for SvgFormatter {
    fn move_to(&mut self, point: Point<f32>) {
        self.push_command('M', &[point]);
    }

    fn line_to(&mut self, point: Point<f32>) {
        self.push_command('L', &[point]);
    }

    fn quad_curve_to(&mut self, control: Point<f32>, end: Point<f32>) {
        self.push_command('Q', &[control, end]);
    }

    fn curve_to(&mut self, control1: Point<f32>, control2: Point<f32>, end: Point<f32>) {
        self.push_command('C', &[control1, control2, end]);
    }

    fn close_path(&mut self) {
        self.push_command('Z', &[]);
    }
}
