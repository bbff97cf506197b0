#![no_main]
use libfuzzer_sys::fuzz_target;
use svgpath::{backend::SvgFormatter, PathConverter, PathElement};

fuzz_target!(|data: &[u8]| {
    let Ok(path_data) = std::str::from_utf8(data) else {
        return;
    };
    let mut streaming = PathConverter::with_formatter(Vec::<PathElement>::new());
    let mut buffered = PathConverter::with_formatter(Vec::<PathElement>::new());
    let streamed = streaming.parse(path_data, None);
    let buffered_result = buffered.parse_buffered(path_data, None);
    assert_eq!(streamed, buffered_result);
    let streamed_elements = streaming.into_formatter().unwrap_or_default();
    let buffered_elements = buffered.into_formatter().unwrap_or_default();
    match streamed {
        Ok(summary) => {
            assert_eq!(streamed_elements, buffered_elements);
            assert_eq!(summary.name, "Unnamed_1");
            // Finite output must be accepted when written back out
            let mut svg = SvgFormatter::new();
            for element in &streamed_elements {
                element.replay(&mut svg);
            }
            if !svg.contains("NaN") && !svg.contains("inf") {
                assert!(svgpath::parse(&svg, "", &mut svgpath::NullFormatter).is_ok());
            }
        }
        Err(_) => assert!(buffered_elements.is_empty()),
    }
});
