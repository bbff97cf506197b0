//! Conversion of elliptical arcs to cubic bezier curves.
//!
//! Path data describes arcs by their endpoints. They are converted to a
//! center parameterization and then approximated by one cubic segment per
//! half turn (or less) of sweep.
//!
//! See "F.6 Elliptical arc implementation notes" at
//! <https://www.w3.org/TR/SVG11/implnote.html#ArcImplementationNotes>

use crate::{formatter::PathFormatter, Point};
use path_types::is_near_zero;
use std::f64::consts::{PI, TAU};

/// An elliptical arc described by its endpoints.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct EllipticalArc {
    /// The x and y radii of the ellipse. Signs are ignored.
    pub radii: Point<f32>,
    /// Rotation of the ellipse's x-axis in degrees.
    pub x_axis_rotation: f32,
    /// Selects the arc spanning more than 180 degrees.
    pub large_arc: bool,
    /// Selects the arc drawn in the positive angle direction.
    pub sweep: bool,
    /// Current point when the arc begins.
    pub start: Point<f32>,
    /// Point the arc ends at.
    pub end: Point<f32>,
}

/// Outcome of converting an arc to center parameterization.
///
/// Out of range parameters may see an arc omitted or treated as a line.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ArcParameterization {
    /// Center parameterization of the arc.
    CenterParameters {
        /// Center of the ellipse.
        center: Point<f64>,
        /// Radii of the ellipse, after correction.
        radii: Point<f64>,
        /// Angle of the start point, in `[0, 2π)`.
        theta1: f64,
        /// Signed angular extent. Positive when sweeping in the positive
        /// direction.
        delta_theta: f64,
    },
    /// A radius is zero, or so large that the sweep vanishes, so the arc is
    /// a straight line to the end point.
    LineTo,
    /// Start and end coincide so nothing is drawn.
    Omit,
}

/// One cubic bezier segment of an arc approximation, starting at the end
/// of the previous segment.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CubicSegment {
    pub control1: Point<f32>,
    pub control2: Point<f32>,
    pub end: Point<f32>,
}

impl EllipticalArc {
    /// Computes the ellipse center and angles of the arc.
    ///
    /// Radii that are too small to span the endpoints are scaled up
    /// uniformly until exactly one solution exists.
    pub fn center_parameterization(&self) -> ArcParameterization {
        if is_near_zero(self.end.x - self.start.x) && is_near_zero(self.end.y - self.start.y) {
            return ArcParameterization::Omit;
        }
        if is_near_zero(self.radii.x) || is_near_zero(self.radii.y) {
            return ArcParameterization::LineTo;
        }
        let start = self.start.to_f64();
        let end = self.end.to_f64();
        let mut rx = (self.radii.x as f64).abs();
        let mut ry = (self.radii.y as f64).abs();
        let (sin_phi, cos_phi) = (self.x_axis_rotation as f64).to_radians().sin_cos();

        // Step 1: compute (x1', y1') in the frame of the ellipse axes
        let dx2 = (start.x - end.x) / 2.0;
        let dy2 = (start.y - end.y) / 2.0;
        let x1p = cos_phi * dx2 + sin_phi * dy2;
        let y1p = cos_phi * dy2 - sin_phi * dx2;
        let x1p2 = x1p * x1p;
        let y1p2 = y1p * y1p;

        // Out of range radii, see F.6.6
        let lambda = x1p2 / (rx * rx) + y1p2 / (ry * ry);
        if lambda > 1.0 {
            let lambda_root = lambda.sqrt();
            log::debug!("arc radii ({rx}, {ry}) scaled by {lambda_root} to reach the end point");
            rx *= lambda_root;
            ry *= lambda_root;
        }
        let rx2 = rx * rx;
        let ry2 = ry * ry;

        // Step 2: compute (cx', cy')
        let c = rx2 * ry2 - rx2 * y1p2 - ry2 * x1p2;
        let (cxp, cyp) = if c < 0.0 {
            // Rounding left no solution. Scale until there is exactly one,
            // which puts the center on the midpoint.
            let scale = (1.0 - c / (rx2 * ry2)).sqrt();
            rx *= scale;
            ry *= scale;
            (0.0, 0.0)
        } else {
            let mut k = (c / (rx2 * y1p2 + ry2 * x1p2)).sqrt();
            if self.large_arc == self.sweep {
                k = -k;
            }
            (k * rx * y1p / ry, -k * ry * x1p / rx)
        };

        // Step 3: compute (cx, cy) from (cx', cy')
        let center = Point::new(
            cos_phi * cxp - sin_phi * cyp + (start.x + end.x) / 2.0,
            sin_phi * cxp + cos_phi * cyp + (start.y + end.y) / 2.0,
        );

        // Step 4: compute the angles. atan2 keeps the sign that acos
        // would lose.
        let at = ((y1p - cyp) / ry).atan2((x1p - cxp) / rx);
        let theta1 = if at < 0.0 { TAU + at } else { at };
        let nat = ((-y1p - cyp) / ry).atan2((-x1p - cxp) / rx);
        let mut delta_theta = if nat < at { TAU - at + nat } else { nat - at };
        if self.sweep {
            if delta_theta < 0.0 {
                delta_theta += TAU;
            }
        } else if delta_theta > 0.0 {
            delta_theta -= TAU;
        }
        // Radii far larger than the chord flatten the arc until both angles
        // round to the same value.
        if delta_theta == 0.0 || !delta_theta.is_finite() {
            log::debug!("arc radii ({rx}, {ry}) too large to sweep an angle");
            return ArcParameterization::LineTo;
        }

        ArcParameterization::CenterParameters {
            center,
            radii: Point::new(rx, ry),
            theta1,
            delta_theta,
        }
    }

    /// Returns the cubic segments approximating this arc.
    ///
    /// The list is empty when the arc is omitted or degrades to a line; see
    /// [`center_parameterization`](Self::center_parameterization) to tell
    /// those cases apart.
    pub fn to_cubics(&self) -> Vec<CubicSegment> {
        let mut segments = Vec::new();
        if let ArcParameterization::CenterParameters {
            center,
            radii,
            theta1,
            delta_theta,
        } = self.center_parameterization()
        {
            self.for_each_cubic(center, radii, theta1, delta_theta, |segment| {
                segments.push(segment)
            });
        }
        segments
    }

    fn for_each_cubic(
        &self,
        center: Point<f64>,
        radii: Point<f64>,
        mut theta1: f64,
        delta_theta: f64,
        mut f: impl FnMut(CubicSegment),
    ) {
        // One extra segment so that each one sweeps strictly less than a
        // half turn.
        let count = (delta_theta.abs() / PI) as usize + 1;
        let delta = delta_theta / count as f64;
        // See section 2.13 of
        // <http://www.stillhq.com/ctpfaq/2001/comp.text.pdf-faq-2001-04.txt>
        let bcp = 4.0 / 3.0 * (1.0 - (delta / 2.0).cos()) / (delta / 2.0).sin();
        let (sin_phi, cos_phi) = (self.x_axis_rotation as f64).to_radians().sin_cos();
        let cos_phi_rx = cos_phi * radii.x;
        let cos_phi_ry = cos_phi * radii.y;
        let sin_phi_rx = sin_phi * radii.x;
        let sin_phi_ry = sin_phi * radii.y;
        let (mut sin_theta1, mut cos_theta1) = theta1.sin_cos();
        let mut start = self.start.to_f64();
        for i in 0..count {
            let theta2 = theta1 + delta;
            let (sin_theta2, cos_theta2) = theta2.sin_cos();
            let control1 = Point::new(
                start.x - bcp * (cos_phi_rx * sin_theta1 + sin_phi_ry * cos_theta1),
                start.y + bcp * (cos_phi_ry * cos_theta1 - sin_phi_rx * sin_theta1),
            );
            let end = Point::new(
                center.x + cos_phi_rx * cos_theta2 - sin_phi_ry * sin_theta2,
                center.y + sin_phi_rx * cos_theta2 + cos_phi_ry * sin_theta2,
            );
            let control2 = Point::new(
                end.x + bcp * (cos_phi_rx * sin_theta2 + sin_phi_ry * cos_theta2),
                end.y + bcp * (sin_phi_rx * sin_theta2 - cos_phi_ry * cos_theta2),
            );
            // The last parametric point is the requested end point up to
            // rounding; emit the exact value.
            let emitted_end = if i + 1 == count {
                self.end
            } else {
                end.map(|v| v as f32)
            };
            f(CubicSegment {
                control1: control1.map(|v| v as f32),
                control2: control2.map(|v| v as f32),
                end: emitted_end,
            });
            start = end;
            theta1 = theta2;
            sin_theta1 = sin_theta2;
            cos_theta1 = cos_theta2;
        }
    }
}

/// Converts an elliptical arc to cubic curves and sends them to `formatter`.
///
/// Coincident endpoints emit nothing and a zero radius emits a single
/// [`line_to`](PathFormatter::line_to) to `end`. `x_axis_rotation` is in
/// degrees.
pub fn arc_to_bezier<F: PathFormatter + ?Sized>(
    formatter: &mut F,
    radii: Point<f32>,
    x_axis_rotation: f32,
    large_arc: bool,
    sweep: bool,
    end: Point<f32>,
    start: Point<f32>,
) {
    let arc = EllipticalArc {
        radii,
        x_axis_rotation,
        large_arc,
        sweep,
        start,
        end,
    };
    match arc.center_parameterization() {
        ArcParameterization::Omit => {
            log::debug!("omitting zero length arc at ({}, {})", start.x, start.y);
        }
        ArcParameterization::LineTo => {
            log::debug!("flat arc treated as a line");
            formatter.line_to(end);
        }
        ArcParameterization::CenterParameters {
            center,
            radii,
            theta1,
            delta_theta,
        } => arc.for_each_cubic(center, radii, theta1, delta_theta, |segment| {
            formatter.curve_to(segment.control1, segment.control2, segment.end)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathElement;

    fn arc(radii: (f32, f32), rotation: f32, large_arc: bool, sweep: bool) -> EllipticalArc {
        EllipticalArc {
            radii: radii.into(),
            x_axis_rotation: rotation,
            large_arc,
            sweep,
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 0.0),
        }
    }

    fn center_of(arc: &EllipticalArc) -> (Point<f64>, Point<f64>, f64) {
        match arc.center_parameterization() {
            ArcParameterization::CenterParameters {
                center,
                radii,
                delta_theta,
                ..
            } => (center, radii, delta_theta),
            other => panic!("expected center parameters, got {other:?}"),
        }
    }

    #[test]
    fn coincident_endpoints_emit_nothing() {
        for radii in [(0.0, 0.0), (1.0, 1.0), (5.0, 20.0), (-3.0, 4.0)] {
            for (large_arc, sweep) in [(false, false), (false, true), (true, false), (true, true)] {
                let mut elements: Vec<PathElement> = Vec::new();
                let point = Point::new(3.5, -7.25);
                arc_to_bezier(
                    &mut elements,
                    radii.into(),
                    30.0,
                    large_arc,
                    sweep,
                    point,
                    point,
                );
                assert!(elements.is_empty());
            }
        }
        // within tolerance counts as coincident
        let nearly = EllipticalArc {
            start: Point::new(1.0, 1.0),
            end: Point::new(1.00001, 1.0),
            ..arc((4.0, 4.0), 0.0, false, true)
        };
        assert_eq!(nearly.center_parameterization(), ArcParameterization::Omit);
    }

    #[test]
    fn zero_radius_is_a_line() {
        for radii in [(0.0, 5.0), (5.0, 0.0), (0.00001, 3.0), (-0.000018, 1.0)] {
            let mut elements: Vec<PathElement> = Vec::new();
            arc_to_bezier(
                &mut elements,
                radii.into(),
                0.0,
                false,
                true,
                Point::new(10.0, 0.0),
                Point::new(0.0, 0.0),
            );
            assert_eq!(elements, [PathElement::LineTo(Point::new(10.0, 0.0))]);
        }
    }

    #[test]
    fn huge_radii_are_a_line() {
        let mut elements: Vec<PathElement> = Vec::new();
        crate::parse("M0 0 A 1e30 1e30 0 0 1 1 0", "flat", &mut elements).unwrap();
        assert_eq!(
            elements,
            [
                PathElement::MoveTo(Point::new(0.0, 0.0)),
                PathElement::LineTo(Point::new(1.0, 0.0)),
            ]
        );
    }

    #[test]
    fn huge_radii_never_produce_nan() {
        for (large_arc, sweep) in [(false, false), (false, true), (true, false), (true, true)] {
            for radius in [1e20, 1e30, 3e38] {
                let arc = EllipticalArc {
                    radii: Point::new(radius, radius),
                    x_axis_rotation: 0.0,
                    large_arc,
                    sweep,
                    start: Point::new(0.0, 0.0),
                    end: Point::new(1.0, 0.0),
                };
                for segment in arc.to_cubics() {
                    for point in [segment.control1, segment.control2, segment.end] {
                        assert!(!point.x.is_nan() && !point.y.is_nan(), "{arc:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn semicircle() {
        let arc = arc((5.0, 5.0), 0.0, false, true);
        let (center, radii, delta_theta) = center_of(&arc);
        assert!((center.x - 5.0).abs() < 1e-9 && center.y.abs() < 1e-9);
        assert_eq!(radii, Point::new(5.0, 5.0));
        assert!((delta_theta - PI).abs() < 1e-9);
        let cubics = arc.to_cubics();
        assert_eq!(cubics.len(), 2);
        // positive sweep from left to right passes through negative y
        assert!(cubics[0].end.approx_eq(Point::new(5.0, -5.0), 1e-4));
        assert_eq!(cubics[1].end, Point::new(10.0, 0.0));
    }

    #[test]
    fn negative_sweep_mirrors() {
        let cubics = arc((5.0, 5.0), 0.0, false, false).to_cubics();
        assert_eq!(cubics.len(), 2);
        assert!(cubics[0].end.approx_eq(Point::new(5.0, 5.0), 1e-4));
    }

    #[test]
    fn small_radii_are_scaled_up() {
        let (center, radii, _) = center_of(&arc((1.0, 1.0), 0.0, false, true));
        assert!((radii.x - 5.0).abs() < 1e-6 && (radii.y - 5.0).abs() < 1e-6);
        assert!((center.x - 5.0).abs() < 1e-6 && center.y.abs() < 1e-6);
    }

    #[test]
    fn negative_radii_use_magnitude() {
        let positive = arc((6.0, 8.0), 15.0, true, false).to_cubics();
        let negative = arc((-6.0, -8.0), 15.0, true, false).to_cubics();
        assert_eq!(positive, negative);
    }

    #[test]
    fn delta_sign_follows_sweep() {
        for large_arc in [false, true] {
            let (_, _, positive) = center_of(&arc((6.0, 6.0), 0.0, large_arc, true));
            let (_, _, negative) = center_of(&arc((6.0, 6.0), 0.0, large_arc, false));
            assert!(positive > 0.0);
            assert!(negative < 0.0);
            if large_arc {
                assert!(positive.abs() > PI && negative.abs() > PI);
            } else {
                assert!(positive.abs() < PI && negative.abs() < PI);
            }
        }
    }

    #[test]
    fn segments_are_under_a_half_turn() {
        let arc = arc((6.0, 6.0), 0.0, true, true);
        let (_, _, delta_theta) = center_of(&arc);
        let cubics = arc.to_cubics();
        assert_eq!(cubics.len(), 2);
        assert!(delta_theta.abs() / (cubics.len() as f64) < PI);
    }

    #[test]
    fn circular_points_lie_on_circle() {
        for (large_arc, sweep) in [(false, false), (false, true), (true, false), (true, true)] {
            let arc = arc((7.0, 7.0), 0.0, large_arc, sweep);
            let (center, radii, delta_theta) = center_of(&arc);
            let center = center.map(|v| v as f32);
            let cubics = arc.to_cubics();
            let delta = delta_theta / cubics.len() as f64;
            let bcp = (4.0 / 3.0 * (1.0 - (delta / 2.0).cos()) / (delta / 2.0).sin()) as f32;
            let radius = radii.x as f32;
            // tangent handles sit off the circle by a fixed factor
            let handle_distance = radius * (1.0 + bcp * bcp).sqrt();
            let mut start = arc.start;
            for cubic in &cubics {
                assert!((cubic.end.distance(center) - radius).abs() < 1e-3);
                assert!((cubic.control1.distance(center) - handle_distance).abs() < 1e-3);
                assert!((cubic.control2.distance(center) - handle_distance).abs() < 1e-3);
                // the curve's midpoint stays close to the circle
                let mid = Point::new(
                    0.125 * start.x
                        + 0.375 * cubic.control1.x
                        + 0.375 * cubic.control2.x
                        + 0.125 * cubic.end.x,
                    0.125 * start.y
                        + 0.375 * cubic.control1.y
                        + 0.375 * cubic.control2.y
                        + 0.125 * cubic.end.y,
                );
                assert!((mid.distance(center) - radius).abs() < 0.01);
                start = cubic.end;
            }
        }
    }

    #[test]
    fn rotated_ellipse_ends_at_end_point() {
        let arc = EllipticalArc {
            radii: Point::new(25.0, 100.0),
            x_axis_rotation: -30.0,
            large_arc: false,
            sweep: true,
            start: Point::new(50.0, 125.0),
            end: Point::new(100.0, 75.0),
        };
        let cubics = arc.to_cubics();
        assert!(!cubics.is_empty());
        assert_eq!(cubics.last().unwrap().end, arc.end);
        // segments are chained: interior ends lie on the ellipse
        let (center, radii, _) = center_of(&arc);
        let (sin_phi, cos_phi) = (-30.0f64).to_radians().sin_cos();
        for cubic in &cubics {
            let p = cubic.end.to_f64() - center;
            let x = cos_phi * p.x + sin_phi * p.y;
            let y = -sin_phi * p.x + cos_phi * p.y;
            let on_ellipse = (x / radii.x).powi(2) + (y / radii.y).powi(2);
            assert!((on_ellipse - 1.0).abs() < 1e-3);
        }
    }
}
