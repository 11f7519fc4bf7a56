use super::*;

fn config(json: &str) -> DrawingConfig {
    DrawingConfig::from_json(json).unwrap()
}

#[test]
fn circle_with_rotation_closes_over_combined_period() {
    let cfg = config(
        r#"{
          "pipeline": ["gear", "spin"],
          "stages": {
            "gear": { "type": "circle", "radius": 10, "cycles": 2 },
            "spin": { "type": "rotation", "total_degrees": 540 }
          },
          "sampling": { "initial_samples": 4000, "output_samples": 500 }
        }"#,
    );
    let d = render_drawing(&cfg).unwrap();
    // lcm(2, 3) / gcd(1, 2)
    assert_eq!(d.stats.period, Ratio::integer(6));
    assert_eq!(d.stats.dense_samples, 4000);
    assert_eq!(d.stats.output_points, 500);
    assert_eq!(d.points.len(), 500);
    assert!(d.stats.path_length > 0.0);
    assert!(d.svg.contains("<path d=\"M "));
}

#[test]
fn uniform_time_fallback_keeps_requested_count() {
    let cfg = config(
        r#"{
          "pipeline": ["circle"],
          "stages": { "circle": { "radius": 5 } },
          "sampling": { "initial_samples": 1000, "output_samples": 10, "use_arc_length": false }
        }"#,
    );
    let d = render_drawing(&cfg).unwrap();
    assert_eq!(d.points.len(), 10);
    let b = d.stats.bounds.unwrap();
    assert!((b.x1 - 5.0).abs() < 1e-9);
}

#[test]
fn constant_pipeline_produces_degenerate_but_valid_output() {
    let cfg = config(
        r#"{
          "pipeline": ["shift"],
          "stages": { "shift": { "type": "translation", "start_x": 10, "end_x": 10 } },
          "sampling": { "initial_samples": 50, "output_samples": 5 },
          "output": { "width": 100, "height": 100 }
        }"#,
    );
    let d = render_drawing(&cfg).unwrap();
    assert_eq!(d.stats.bounds, Some(Rect::new(10.0, 0.0, 10.0, 0.0)));
    assert_eq!(d.stats.path_length, 0.0);
    assert!(d.points.iter().all(|&p| p == Point::new(50.0, 50.0)));
}

#[test]
fn empty_pipeline_draws_the_seed() {
    let cfg = config(
        r#"{
          "pipeline": [],
          "sampling": { "initial_samples": 10, "output_samples": 3 },
          "output": { "start_x": 4, "start_y": -2 }
        }"#,
    );
    let d = render_drawing(&cfg).unwrap();
    assert_eq!(d.stats.period, Ratio::ONE);
    assert_eq!(d.stats.bounds, Some(Rect::new(4.0, -2.0, 4.0, -2.0)));
}

#[test]
fn configuration_errors_stop_before_sampling() {
    let cfg = config(
        r#"{
          "pipeline": ["gear"],
          "stages": { "gear": { "type": "circle", "cycles": "seven" } }
        }"#,
    );
    let err = render_drawing(&cfg).unwrap_err().to_string();
    assert!(err.contains("configuration error"));
    assert!(err.contains("'cycles'"));
}

#[test]
fn parallel_and_sequential_runs_match() {
    let json = |parallel: bool| {
        format!(
            r#"{{
              "pipeline": ["lissajous", "wobble"],
              "stages": {{
                "lissajous": {{ "freq_x": 5, "freq_y": 4 }},
                "wobble": {{ "type": "oscillating_rotation", "oscillations": 3 }}
              }},
              "sampling": {{ "initial_samples": 3000, "output_samples": 200, "parallel": {parallel} }}
            }}"#
        )
    };
    let a = render_drawing(&config(&json(false))).unwrap();
    let b = render_drawing(&config(&json(true))).unwrap();
    assert_eq!(a.svg, b.svg);
}

#[test]
fn write_creates_parent_dirs() {
    let dir = std::path::PathBuf::from("target")
        .join("unit_render_drawing")
        .join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("out.svg");

    let cfg = config(
        r#"{
          "pipeline": ["circle"],
          "stages": { "circle": {} },
          "sampling": { "initial_samples": 100, "output_samples": 20 }
        }"#,
    );
    let d = render_drawing(&cfg).unwrap();
    write_drawing(&d, &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), d.svg);
}
