#![no_main]
use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};
use path_types::Point;
use svgpath::{arc::arc_to_bezier, PathElement};

/// Parameters of a single elliptical arc.
#[derive(Arbitrary, Debug)]
struct ArcInput {
    radii: (f32, f32),
    x_axis_rotation: f32,
    large_arc: bool,
    sweep: bool,
    start: (f32, f32),
    end: (f32, f32),
}

impl ArcInput {
    fn is_finite(&self) -> bool {
        [
            self.radii.0,
            self.radii.1,
            self.x_axis_rotation,
            self.start.0,
            self.start.1,
            self.end.0,
            self.end.1,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

fuzz_target!(|input: ArcInput| {
    let end: Point<f32> = input.end.into();
    let mut elements: Vec<PathElement> = Vec::new();
    arc_to_bezier(
        &mut elements,
        input.radii.into(),
        input.x_axis_rotation,
        input.large_arc,
        input.sweep,
        end,
        input.start.into(),
    );
    // at most one segment per half turn plus one
    assert!(elements.len() <= 3);
    if input.is_finite() {
        for element in &elements {
            if let PathElement::CurveTo {
                control1, control2, ..
            } = element
            {
                // coordinates may overflow f32 but are never undefined
                assert!(!control1.x.is_nan() && !control1.y.is_nan());
                assert!(!control2.x.is_nan() && !control2.y.is_nan());
            }
        }
    }
    if let Some(PathElement::CurveTo { end: last, .. }) = elements.last() {
        assert!(last.x.to_bits() == end.x.to_bits() && last.y.to_bits() == end.y.to_bits());
    }
});
