use super::*;

#[test]
fn bounds_cover_all_points() {
    assert_eq!(bounds(&[]), None);
    let b = bounds(&[
        Point::new(1.0, 5.0),
        Point::new(-2.0, 3.0),
        Point::new(4.0, -1.0),
    ])
    .unwrap();
    assert_eq!(b, Rect::new(-2.0, -1.0, 4.0, 5.0));
}

#[test]
fn scale_uses_tighter_axis() {
    let canvas = CanvasSpec {
        width: 800.0,
        height: 800.0,
        margin: 0.1,
    };
    let scale = fit_scale(Rect::new(0.0, 0.0, 100.0, 50.0), &canvas);
    assert!((scale - 6.4).abs() < 1e-12);
}

#[test]
fn degenerate_axes_are_clamped() {
    let canvas = CanvasSpec::default();
    assert!((fit_scale(Rect::new(3.0, 3.0, 3.0, 3.0), &canvas) - 640.0).abs() < 1e-9);

    let out = normalize_to_canvas(&[Point::new(7.0, 7.0); 3], &canvas);
    assert_eq!(out, vec![Point::new(400.0, 400.0); 3]);
}

#[test]
fn output_is_centered_and_flipped() {
    let canvas = CanvasSpec {
        width: 200.0,
        height: 100.0,
        margin: 0.0,
    };
    let pts = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
    let out = normalize_to_canvas(&pts, &canvas);
    // Scale = min(200/10, 100/10) = 10, centered at (100, 50).
    assert_eq!(out[0], Point::new(50.0, 100.0));
    assert_eq!(out[1], Point::new(150.0, 0.0));
}

#[test]
fn fitted_path_stays_inside_margins() {
    let canvas = CanvasSpec {
        width: 640.0,
        height: 480.0,
        margin: 0.15,
    };
    let pts: Vec<Point> = (0..400)
        .map(|i| {
            let t = f64::from(i) * 0.05;
            Point::new(t.cos() * 37.0 + 1000.0, (t * 3.0).sin() * 12.0 - 5.0)
        })
        .collect();
    let out = normalize_to_canvas(&pts, &canvas);
    let b = bounds(&out).unwrap();
    let avail = canvas.available();
    let eps = 1e-9;
    assert!(b.width() <= avail.x + eps);
    assert!(b.height() <= avail.y + eps);
    assert!(b.x0 >= canvas.width * canvas.margin - eps);
    assert!(b.x1 <= canvas.width * (1.0 - canvas.margin) + eps);
    assert!(b.y0 >= canvas.height * canvas.margin - eps);
    assert!(b.y1 <= canvas.height * (1.0 - canvas.margin) + eps);
}

#[test]
fn validate_rejects_bad_canvases() {
    assert!(CanvasSpec::default().validate().is_ok());
    for bad in [
        CanvasSpec {
            width: 0.0,
            ..CanvasSpec::default()
        },
        CanvasSpec {
            height: f64::NAN,
            ..CanvasSpec::default()
        },
        CanvasSpec {
            margin: 0.5,
            ..CanvasSpec::default()
        },
        CanvasSpec {
            margin: -0.1,
            ..CanvasSpec::default()
        },
    ] {
        assert!(bad.validate().is_err(), "{bad:?}");
    }
}
