use super::*;

#[test]
fn path_is_an_open_polyline_with_fixed_precision() {
    let d = path_data(&[
        Point::new(1.0, 2.0),
        Point::new(3.141_592_65, -0.5),
        Point::new(1.0, 2.0),
    ]);
    assert_eq!(d, "M 1.0000 2.0000 L 3.1416 -0.5000 L 1.0000 2.0000");
    assert!(!d.contains('Z'));
    assert_eq!(path_data(&[]), "");
}

#[test]
fn document_orders_background_before_path() {
    let canvas = CanvasSpec {
        width: 320.0,
        height: 240.0,
        margin: 0.1,
    };
    let style = StrokeStyle {
        stroke_width: 1.5,
        stroke_color: "navy".to_string(),
        background_color: "#fafafa".to_string(),
    };
    let svg = render_svg(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)], &canvas, &style);

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("width=\"320\" height=\"240\" viewBox=\"0 0 320 240\""));
    let rect = svg.find("<rect").unwrap();
    let path = svg.find("<path").unwrap();
    assert!(rect < path);
    assert!(svg.contains("fill=\"#fafafa\""));
    assert!(svg.contains("stroke=\"navy\""));
    assert!(svg.contains("stroke-width=\"1.5\""));
    assert!(svg.contains("d=\"M 0.0000 0.0000 L 1.0000 1.0000\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn style_validation() {
    assert!(StrokeStyle::default().validate().is_ok());
    let bad = StrokeStyle {
        stroke_color: "red\" onload=\"x".to_string(),
        ..StrokeStyle::default()
    };
    assert!(bad.validate().is_err());
    let bad = StrokeStyle {
        background_color: "  ".to_string(),
        ..StrokeStyle::default()
    };
    assert!(bad.validate().is_err());
    let bad = StrokeStyle {
        stroke_width: -1.0,
        ..StrokeStyle::default()
    };
    assert!(bad.validate().is_err());
}
