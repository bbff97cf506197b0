//! Building [`kurbo::BezPath`] values.

use kurbo::BezPath;

use crate::{formatter::PathFormatter, Point};

/// Formatter that accumulates primitives into a [`BezPath`].
#[derive(Clone, Default, Debug)]
pub struct BezPathFormatter {
    path: BezPath,
}

fn as_kurbo_point(point: Point<f32>) -> kurbo::Point {
    kurbo::Point::new(point.x as f64, point.y as f64)
}

impl BezPathFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn into_inner(self) -> BezPath {
        self.path
    }
}

impl PathFormatter for BezPathFormatter {
    fn move_to(&mut self, point: Point<f32>) {
        self.path.move_to(as_kurbo_point(point))
    }

    fn line_to(&mut self, point: Point<f32>) {
        self.path.line_to(as_kurbo_point(point))
    }

    fn quad_curve_to(&mut self, control: Point<f32>, end: Point<f32>) {
        self.path
            .quad_to(as_kurbo_point(control), as_kurbo_point(end))
    }

    fn curve_to(&mut self, control1: Point<f32>, control2: Point<f32>, end: Point<f32>) {
        self.path.curve_to(
            as_kurbo_point(control1),
            as_kurbo_point(control2),
            as_kurbo_point(end),
        )
    }

    fn close_path(&mut self) {
        self.path.close_path()
    }
}
