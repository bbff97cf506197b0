//! Converts the shared path corpora and checks the results against kurbo's
//! independent path data parser.

use kurbo::{BezPath, PathEl, Shape};
use path_test_data::{arcs, icons, shapes};
use pretty_assertions::assert_eq;
use svgpath::{
    backend::{CoreGraphicsFormatter, SvgFormatter},
    parse, PathConverter, PathElement, Point,
};

fn elements(path_data: &str) -> Vec<PathElement> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut elements = Vec::new();
    parse(path_data, "corpus", &mut elements).unwrap();
    elements
}

fn to_kurbo(point: Point<f32>) -> kurbo::Point {
    kurbo::Point::new(point.x as f64, point.y as f64)
}

/// Converts to kurbo elements, dropping the moveto that reopens each
/// closed subpath since kurbo does not emit one.
fn to_kurbo_elements(elements: &[PathElement]) -> Vec<PathEl> {
    let mut result = Vec::new();
    let mut after_close = false;
    for element in elements {
        let el = match *element {
            PathElement::MoveTo(_) if after_close => {
                after_close = false;
                continue;
            }
            PathElement::MoveTo(point) => PathEl::MoveTo(to_kurbo(point)),
            PathElement::LineTo(point) => PathEl::LineTo(to_kurbo(point)),
            PathElement::QuadTo { control, end } => PathEl::QuadTo(to_kurbo(control), to_kurbo(end)),
            PathElement::CurveTo {
                control1,
                control2,
                end,
            } => PathEl::CurveTo(to_kurbo(control1), to_kurbo(control2), to_kurbo(end)),
            PathElement::Close => PathEl::ClosePath,
        };
        after_close = el == PathEl::ClosePath;
        result.push(el);
    }
    result
}

fn el_points(el: &PathEl) -> Vec<kurbo::Point> {
    match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => vec![p],
        PathEl::QuadTo(p0, p1) => vec![p0, p1],
        PathEl::CurveTo(p0, p1, p2) => vec![p0, p1, p2],
        PathEl::ClosePath => vec![],
    }
}

fn assert_matches_kurbo(name: &str, path_data: &str) {
    let ours = to_kurbo_elements(&elements(path_data));
    let theirs = BezPath::from_svg(path_data).unwrap();
    let theirs = theirs.elements();
    assert_eq!(ours.len(), theirs.len(), "{name}");
    for (i, (a, b)) in ours.iter().zip(theirs).enumerate() {
        assert_eq!(
            std::mem::discriminant(a),
            std::mem::discriminant(b),
            "{name}: element {i}"
        );
        for (p, q) in el_points(a).into_iter().zip(el_points(b)) {
            assert!(
                (p - q).hypot() < 0.01,
                "{name}: element {i} differs, {p:?} != {q:?}"
            );
        }
    }
}

#[test]
fn icons_match_kurbo() {
    for (name, path_data) in icons::ALL {
        assert_matches_kurbo(name, path_data);
    }
}

#[test]
fn shapes_match_kurbo() {
    for name in ["smooth_cubic", "smooth_quad", "nested_squares"] {
        let (_, path_data) = shapes::ALL
            .iter()
            .find(|(shape, _)| *shape == name)
            .unwrap();
        assert_matches_kurbo(name, path_data);
    }
}

#[test]
fn compact_numbers() {
    let ours = elements(shapes::COMPACT_NUMBERS);
    assert_eq!(
        &ours[..5],
        &[
            PathElement::MoveTo(Point::new(0.5, 0.5)),
            PathElement::LineTo(Point::new(0.25, 0.75)),
            PathElement::LineTo(Point::new(0.0, 0.5)),
            PathElement::LineTo(Point::new(0.25, 0.25)),
            PathElement::Close,
        ]
    );
}

#[test]
fn arc_areas_match_kurbo() {
    for (name, path_data) in [("pie", arcs::PIE), ("flags", arcs::FLAGS)] {
        let mut ours = BezPath::new();
        for el in to_kurbo_elements(&elements(path_data)) {
            ours.push(el);
        }
        let theirs = BezPath::from_svg(path_data).unwrap();
        let (ours, theirs) = (ours.area(), theirs.area());
        assert!(
            (ours - theirs).abs() / theirs.abs() < 1e-3,
            "{name}: area {ours} != {theirs}"
        );
    }
}

#[test]
fn all_corpora_parse() {
    for (name, path_data) in icons::ALL
        .iter()
        .chain(arcs::ALL)
        .chain(shapes::ALL)
    {
        let mut converter = PathConverter::with_formatter(Vec::<PathElement>::new());
        let summary = converter.parse(path_data, Some(*name)).unwrap();
        assert_eq!(summary.name, *name);
        assert!(summary.segments > 0, "{name}");
    }
}

#[test]
fn svg_round_trip() {
    for (name, path_data) in icons::ALL.iter().chain(arcs::ALL).chain(shapes::ALL) {
        let original = elements(path_data);
        let mut svg = SvgFormatter::new();
        parse(path_data, name, &mut svg).unwrap();
        let reparsed = elements(&svg);
        // each closepath reopens the subpath once more on the way back in
        let reparsed: Vec<_> = reparsed
            .iter()
            .enumerate()
            .filter(|(i, element)| {
                !(matches!(element, PathElement::MoveTo(_))
                    && *i >= 2
                    && reparsed[i - 1] == PathElement::Close
                    && i + 1 < reparsed.len()
                    && matches!(reparsed[i + 1], PathElement::MoveTo(_)))
            })
            .map(|(_, element)| *element)
            .collect();
        assert_eq!(original, reparsed, "{name}");
    }
}

#[test]
fn core_graphics_icons() {
    let mut converter =
        PathConverter::with_formatter(CoreGraphicsFormatter::new(String::new()));
    for (name, path_data) in icons::ALL {
        converter.parse(path_data, Some(*name)).unwrap();
    }
    converter.parse(icons::STAR, None).unwrap();
    let source = converter.into_formatter().unwrap().into_inner().unwrap();
    for (name, _) in icons::ALL {
        assert!(source.contains(&format!("\tstatic void {name} (CGContext c)\n\t{{\n")));
    }
    assert!(source.contains("\tstatic void Unnamed_1 (CGContext c)\n"));
    assert_eq!(
        source.matches("\t\tc.FillPath ();\n\t\tc.StrokePath ();\n\t}\n\n").count(),
        icons::ALL.len() + 1
    );
    assert!(source.starts_with("\tstatic void search (CGContext c)\n\t{\n\t\tc.MoveTo (0f, 437f);\n"));
}
