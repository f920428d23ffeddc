// this_file: tests/circular.rs

//! End-to-end circular text rendering tests.

use arctext::{
    render_circular_text, Align, ArcLayout, ArcTextError, CircularRenderer, FontMetrics,
    LayoutRequest, RenderFormat, RenderOutput, TtfRenderer, UniformMetrics,
};
use std::path::PathBuf;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bitmap(output: RenderOutput) -> arctext::Bitmap {
    match output {
        RenderOutput::Bitmap(bitmap) => bitmap,
        other => panic!("expected bitmap output, got {other:?}"),
    }
}

/// A real font file, when the host has one in the usual places.
fn find_test_font() -> Option<PathBuf> {
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

#[test]
fn hello_center_inside_inward_is_300_square() {
    init_logging();
    let mut request = LayoutRequest::new("HELLO", 300.0);
    request.font_family = find_test_font()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| "missing-test-font".to_string());

    let output = render_circular_text(&request).unwrap();
    let bitmap = bitmap(output);
    assert_eq!(bitmap.width, 300);
    assert_eq!(bitmap.height, 300);
    assert_eq!(bitmap.data.len(), 300 * 300 * 4);
    // corner stays pure background: white, fully opaque
    assert_eq!(&bitmap.data[..4], &[255, 255, 255, 255]);
}

#[test]
fn glyphs_darken_pixels_near_the_top_of_the_circle() {
    init_logging();
    let Some(font) = find_test_font() else {
        return; // no usable system font on this host
    };

    let mut request = LayoutRequest::new("HELLO", 300.0);
    request.font_family = font.to_string_lossy().into_owned();
    let output = render_circular_text(&request).unwrap();
    let bitmap = bitmap(output);

    // centered on angle 0, inward: ink lands in the upper band of the circle
    let mut found_ink = false;
    for y in 0..60usize {
        for x in 100..200usize {
            let idx = (y * 300 + x) * 4;
            if bitmap.data[idx] < 200 {
                found_ink = true;
                break;
            }
        }
    }
    assert!(found_ink, "expected glyph coverage near 12 o'clock");
}

#[test]
fn background_opacity_reaches_the_bitmap() {
    init_logging();
    let mut request = LayoutRequest::new("", 50.0);
    request.background = "#FF0000".to_string();
    request.background_opacity = 0.5;
    let output = render_circular_text(&request).unwrap();
    let bitmap = bitmap(output);
    assert_eq!(bitmap.data[3], 128);
    assert!(bitmap.data[0] > 200, "red channel survives unpremultiply");
}

#[test]
fn png_round_trip_through_renderer_trait() {
    init_logging();
    let renderer = TtfRenderer::new();
    let mut request = LayoutRequest::new("ARC", 120.0);
    request.font_family = "missing-test-font".to_string();
    match renderer.render(&request, RenderFormat::Png).unwrap() {
        RenderOutput::Png(data) => {
            assert_eq!(&data[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        }
        other => panic!("expected png, got {other:?}"),
    }
}

#[test]
fn degenerate_radius_is_an_error_not_a_hang() {
    init_logging();
    let mut request = LayoutRequest::new("LONG TEXT", 10.0);
    request.font_size = "64px".to_string();
    let err = render_circular_text(&request).unwrap_err();
    assert!(matches!(err, ArcTextError::DegenerateRadius { .. }));
}

#[test]
fn layout_request_json_drives_a_render() {
    init_logging();
    let json = r##"{
        "text": "AB",
        "diameter": 200.0,
        "start_angle": 0.0,
        "align": "right",
        "text_inside": true,
        "inward_facing": true,
        "font_family": "missing-test-font",
        "font_size": "16px",
        "kerning": 0.0,
        "text_color": "#000000",
        "background": "336699",
        "background_opacity": 1.0
    }"##;
    let request: LayoutRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.align, Align::Right);
    let output = render_circular_text(&request).unwrap();
    let bitmap = bitmap(output);
    assert_eq!(bitmap.width, 200);
    assert_eq!(&bitmap.data[..4], &[0x33, 0x66, 0x99, 255]);
}

#[test]
fn layout_is_stable_across_repeated_calls() {
    let request = LayoutRequest::new("IDEMPOTENT", 400.0);
    let metrics = UniformMetrics::new(9.0, 18.0);
    let first = ArcLayout::compute(&request, &metrics).unwrap();
    let second = ArcLayout::compute(&request, &metrics).unwrap();
    assert_eq!(first.placements, second.placements);
    assert_eq!(first.surface_size, second.surface_size);
}

#[test]
fn uniform_metrics_satisfy_dimension_property_outside() {
    let metrics = UniformMetrics::new(10.0, 20.0);
    let mut request = LayoutRequest::new("ROUND", 150.0);
    request.text_inside = false;
    let layout = ArcLayout::compute(&request, &metrics).unwrap();
    assert_eq!(layout.surface_size, 150 + 2 * metrics.text_height() as u32);
}
