use super::*;

#[test]
fn minimal_document_takes_defaults() {
    let cfg = DrawingConfig::from_json(
        r#"{ "pipeline": ["circle"], "stages": { "circle": {} } }"#,
    )
    .unwrap();
    assert_eq!(cfg.pipeline, vec!["circle"]);
    assert_eq!(cfg.sampling, SamplingConfig::default());
    assert_eq!(cfg.sampling.initial_samples, 100_000);
    assert_eq!(cfg.sampling.output_samples, 10_000);
    assert!(cfg.sampling.use_arc_length);
    assert_eq!(cfg.output, OutputConfig::default());
    assert_eq!(cfg.output.filename, PathBuf::from("output.svg"));
    assert_eq!(cfg.output.seed(), Point::ORIGIN);
    cfg.validate().unwrap();
}

#[test]
fn comma_separated_pipeline_is_accepted() {
    let cfg = DrawingConfig::from_json(
        r#"{ "pipeline": " circle , rotation.slow ,", "stages": {} }"#,
    )
    .unwrap();
    assert_eq!(cfg.pipeline, vec!["circle", "rotation.slow"]);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = DrawingConfig::from_json(r#"{ "pipeline": [], "bogus": 1 }"#)
        .unwrap_err()
        .to_string();
    assert!(err.contains("serialization error"));
    assert!(
        DrawingConfig::from_json(r#"{ "pipeline": [], "output": { "widht": 3 } }"#).is_err()
    );
}

#[test]
fn validate_resolves_every_pipeline_entry() {
    let cfg = DrawingConfig::from_json(
        r#"{ "pipeline": ["circle", "missing"], "stages": { "circle": {} } }"#,
    )
    .unwrap();
    let err = cfg.validate().unwrap_err().to_string();
    assert!(err.contains("'missing'"));

    let cfg = DrawingConfig::from_json(
        r#"{ "pipeline": ["x"], "stages": { "x": { "type": "hypotrochoid" } } }"#,
    )
    .unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_checks_run_parameters() {
    let base = r#"{ "pipeline": [], "sampling": SAMPLING, "output": OUTPUT }"#;
    let check = |sampling: &str, output: &str| {
        let json = base
            .replace("SAMPLING", sampling)
            .replace("OUTPUT", output);
        DrawingConfig::from_json(&json).unwrap().validate()
    };

    assert!(check("{}", "{}").is_ok());
    assert!(check(r#"{ "initial_samples": 0 }"#, "{}").is_err());
    assert!(check(r#"{ "output_samples": 0 }"#, "{}").is_err());
    assert!(check(r#"{ "threads": 0 }"#, "{}").is_err());
    assert!(check("{}", r#"{ "width": -5 }"#).is_err());
    assert!(check("{}", r#"{ "margin": 0.6 }"#).is_err());
    assert!(check("{}", r#"{ "stroke_color": "" }"#).is_err());
    assert!(check("{}", r#"{ "filename": "" }"#).is_err());
}

#[test]
fn sampling_opts_mirror_config() {
    let cfg = DrawingConfig::from_json(
        r#"{ "pipeline": [], "sampling": { "initial_samples": 12, "parallel": true, "threads": 2 } }"#,
    )
    .unwrap();
    let opts = cfg.sampling_opts();
    assert_eq!(opts.samples, 12);
    assert!(opts.parallel);
    assert_eq!(opts.threads, Some(2));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = DrawingConfig::from_path("target/definitely/not/here.json")
        .unwrap_err()
        .to_string();
    assert!(err.contains("configuration error"));
}
