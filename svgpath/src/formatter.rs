//! Types for collecting the output of path data conversion.

use crate::{arc, Point};

/// Interface for accepting the sequence of primitives produced by parsing
/// path data.
///
/// The parser calls these methods in path order, starting with
/// [`prologue`](Self::prologue) and, if the whole path parsed, ending with
/// [`epilogue`](Self::epilogue). A formatter must only be driven by one parse
/// at a time.
///
/// Only the geometric primitives are required. Elliptical arcs are converted
/// to cubic curves by the provided [`arc_to`](Self::arc_to) so backends that
/// have no native arc support need no arc math of their own.
#[allow(unused_variables)]
pub trait PathFormatter {
    /// Called once before any primitive of the path named `name`.
    fn prologue(&mut self, name: &str) {}

    /// Called once after the last primitive of a successfully parsed path.
    fn epilogue(&mut self) {}

    /// Begin a new subpath at `point`.
    fn move_to(&mut self, point: Point<f32>);

    /// Emit a line segment from the current point to `point`.
    fn line_to(&mut self, point: Point<f32>);

    /// Emit a quadratic bezier segment from the current point with a control
    /// point at `control` and ending at `end`.
    fn quad_curve_to(&mut self, control: Point<f32>, end: Point<f32>);

    /// Emit a cubic bezier segment from the current point with control
    /// points at `control1` and `control2` and ending at `end`.
    fn curve_to(&mut self, control1: Point<f32>, control2: Point<f32>, end: Point<f32>);

    /// Emit an elliptical arc from `start` to `end`.
    ///
    /// `x_axis_rotation` is in degrees. The default implementation replays
    /// the arc as a series of [`curve_to`](Self::curve_to) calls (or a single
    /// [`line_to`](Self::line_to) for degenerate radii) using
    /// [`arc_to_bezier`](arc::arc_to_bezier).
    fn arc_to(
        &mut self,
        radii: Point<f32>,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Point<f32>,
        start: Point<f32>,
    ) {
        arc::arc_to_bezier(self, radii, x_axis_rotation, large_arc, sweep, end, start);
    }

    /// Close the current subpath.
    fn close_path(&mut self);
}

/// Single geometric element of a path.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathElement {
    /// Begin a new subpath at the point.
    MoveTo(Point<f32>),
    /// Draw a line from the current point to the point.
    LineTo(Point<f32>),
    /// Draw a quadratic bezier from the current point.
    QuadTo { control: Point<f32>, end: Point<f32> },
    /// Draw a cubic bezier from the current point.
    CurveTo {
        control1: Point<f32>,
        control2: Point<f32>,
        end: Point<f32>,
    },
    /// Close the current subpath.
    Close,
}

impl PathElement {
    /// Returns the point this element ends at, if it has one.
    pub fn end_point(&self) -> Option<Point<f32>> {
        match *self {
            Self::MoveTo(point) | Self::LineTo(point) => Some(point),
            Self::QuadTo { end, .. } | Self::CurveTo { end, .. } => Some(end),
            Self::Close => None,
        }
    }

    /// Sends this element to the given formatter.
    pub fn replay(&self, formatter: &mut (impl PathFormatter + ?Sized)) {
        match *self {
            Self::MoveTo(point) => formatter.move_to(point),
            Self::LineTo(point) => formatter.line_to(point),
            Self::QuadTo { control, end } => formatter.quad_curve_to(control, end),
            Self::CurveTo {
                control1,
                control2,
                end,
            } => formatter.curve_to(control1, control2, end),
            Self::Close => formatter.close_path(),
        }
    }
}

impl PathFormatter for Vec<PathElement> {
    fn move_to(&mut self, point: Point<f32>) {
        self.push(PathElement::MoveTo(point))
    }

    fn line_to(&mut self, point: Point<f32>) {
        self.push(PathElement::LineTo(point))
    }

    fn quad_curve_to(&mut self, control: Point<f32>, end: Point<f32>) {
        self.push(PathElement::QuadTo { control, end })
    }

    fn curve_to(&mut self, control1: Point<f32>, control2: Point<f32>, end: Point<f32>) {
        self.push(PathElement::CurveTo {
            control1,
            control2,
            end,
        })
    }

    fn close_path(&mut self) {
        self.push(PathElement::Close)
    }
}

impl<F: PathFormatter + ?Sized> PathFormatter for &mut F {
    fn prologue(&mut self, name: &str) {
        (**self).prologue(name)
    }

    fn epilogue(&mut self) {
        (**self).epilogue()
    }

    fn move_to(&mut self, point: Point<f32>) {
        (**self).move_to(point)
    }

    fn line_to(&mut self, point: Point<f32>) {
        (**self).line_to(point)
    }

    fn quad_curve_to(&mut self, control: Point<f32>, end: Point<f32>) {
        (**self).quad_curve_to(control, end)
    }

    fn curve_to(&mut self, control1: Point<f32>, control2: Point<f32>, end: Point<f32>) {
        (**self).curve_to(control1, control2, end)
    }

    fn arc_to(
        &mut self,
        radii: Point<f32>,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Point<f32>,
        start: Point<f32>,
    ) {
        (**self).arc_to(radii, x_axis_rotation, large_arc, sweep, end, start)
    }

    fn close_path(&mut self) {
        (**self).close_path()
    }
}

/// Formatter that drops all output into the ether.
pub struct NullFormatter;

impl PathFormatter for NullFormatter {
    fn move_to(&mut self, _point: Point<f32>) {}
    fn line_to(&mut self, _point: Point<f32>) {}
    fn quad_curve_to(&mut self, _control: Point<f32>, _end: Point<f32>) {}
    fn curve_to(&mut self, _control1: Point<f32>, _control2: Point<f32>, _end: Point<f32>) {}
    fn close_path(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_replay() {
        let mut recorded = Vec::new();
        recorded.move_to(Point::new(1.0, 2.0));
        recorded.line_to(Point::new(3.0, 4.0));
        recorded.quad_curve_to(Point::new(5.0, 6.0), Point::new(7.0, 8.0));
        recorded.curve_to(
            Point::new(9.0, 10.0),
            Point::new(11.0, 12.0),
            Point::new(13.0, 14.0),
        );
        recorded.close_path();
        let mut replayed: Vec<PathElement> = Vec::new();
        for element in &recorded {
            element.replay(&mut replayed);
        }
        assert_eq!(recorded, replayed);
        assert_eq!(recorded[2].end_point(), Some(Point::new(7.0, 8.0)));
        assert_eq!(recorded[4].end_point(), None);
    }

    #[test]
    fn default_arc_to_emits_curves() {
        let mut recorded: Vec<PathElement> = Vec::new();
        recorded.arc_to(
            Point::new(5.0, 5.0),
            0.0,
            false,
            true,
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
        );
        assert!(!recorded.is_empty());
        assert!(recorded
            .iter()
            .all(|element| matches!(element, PathElement::CurveTo { .. })));
        let end = recorded.last().and_then(PathElement::end_point).unwrap();
        assert!(end.approx_eq(Point::new(10.0, 0.0), 1e-4));
    }

    #[test]
    fn forwarding_reference() {
        fn draw(mut formatter: impl PathFormatter) {
            formatter.prologue("forward");
            formatter.move_to(Point::new(1.0, 1.0));
            formatter.close_path();
            formatter.epilogue();
        }
        let mut recorded: Vec<PathElement> = Vec::new();
        draw(&mut recorded);
        assert_eq!(
            recorded,
            [PathElement::MoveTo(Point::new(1.0, 1.0)), PathElement::Close]
        );
    }
}
