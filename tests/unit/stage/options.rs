use super::*;
use serde_json::json;

fn section(v: Value) -> Map<String, Value> {
    match v {
        Value::Object(m) => m,
        _ => panic!("expected object"),
    }
}

#[test]
fn absent_keys_use_defaults() {
    let values = section(json!({}));
    let opts = StageOptions::new("s", &values);
    assert_eq!(opts.f64_or("radius", 50.0).unwrap(), 50.0);
    assert_eq!(opts.i64_or("freq", 3).unwrap(), 3);
    assert!(opts.bool_or("normalize", true).unwrap());
    assert_eq!(opts.str_or("name", "x").unwrap(), "x");
    assert_eq!(opts.type_tag().unwrap(), None);
}

#[test]
fn typed_values_are_read() {
    let values = section(json!({
        "type": " circle ",
        "radius": 12.5,
        "freq": 4.0,
        "normalize": "off",
        "name": "abc"
    }));
    let opts = StageOptions::new("s", &values);
    assert_eq!(opts.type_tag().unwrap(), Some("circle"));
    assert_eq!(opts.f64_or("radius", 0.0).unwrap(), 12.5);
    assert_eq!(opts.i64_or("freq", 0).unwrap(), 4);
    assert!(!opts.bool_or("normalize", true).unwrap());
    assert_eq!(opts.str_or("name", "").unwrap(), "abc");
}

#[test]
fn wrong_types_fail_with_section_and_key() {
    let values = section(json!({ "radius": "big", "freq": 2.5, "flag": 3, "type": 7 }));
    let opts = StageOptions::new("gear", &values);

    let err = opts.f64_or("radius", 0.0).unwrap_err().to_string();
    assert!(err.contains("configuration error"));
    assert!(err.contains("[gear]"));
    assert!(err.contains("'radius'"));

    assert!(opts.i64_or("freq", 0).is_err());
    assert!(opts.bool_or("flag", false).is_err());
    assert!(opts.type_tag().is_err());
}

#[test]
fn positive_values_are_enforced() {
    let values = section(json!({ "cycles": 0.0 }));
    let opts = StageOptions::new("s", &values);
    assert!(opts.positive_f64_or("cycles", 1.0).is_err());
    assert_eq!(opts.positive_f64_or("other", 1.0).unwrap(), 1.0);
}

#[test]
fn unknown_keys_are_rejected() {
    let values = section(json!({ "type": "circle", "radius": 1.0, "raduis": 2.0 }));
    let opts = StageOptions::new("s", &values);
    let err = opts.deny_unknown(&["radius"]).unwrap_err().to_string();
    assert!(err.contains("raduis"));
    assert!(opts.deny_unknown(&["radius", "raduis"]).is_ok());
}

#[test]
fn cycles_become_bounded_ratios() {
    let values = section(json!({}));
    let opts = StageOptions::new("s", &values);
    let p = opts.period_from_cycles("cycles", 2.5).unwrap();
    assert_eq!((p.numer(), p.denom()), (5, 2));
}
