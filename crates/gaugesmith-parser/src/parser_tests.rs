//! Tests for document parsing and layer elaboration.
//!
//! These go through [`crate::parse`] and check the resulting layers or the
//! reported diagnostics.

use float_cmp::assert_approx_eq;

use gaugesmith_core::{
    draw::{Canvas, Drawable},
    geometry::Size,
    semantic::{Layer, Operation, Shadow},
};

use crate::{
    ElaborateConfig, GaugeDocument, ParseError, parse,
    error::{ErrorCategory, ErrorCode},
};

fn parse_default(source: &str) -> GaugeDocument {
    parse(source, &ElaborateConfig::default()).expect("document should parse")
}

/// Parses a single-layer document and returns its layer.
fn single_layer(source: &str) -> Layer {
    let document = parse_default(source);
    assert_eq!(document.len(), 1, "expected exactly one layer");
    match document.into_layers().remove(0).into_result() {
        Ok(layer) => layer,
        Err(err) => panic!("expected layer to elaborate, got: {err}"),
    }
}

/// Parses a single-layer document and returns the layer error.
fn single_layer_error(source: &str) -> ParseError {
    let document = parse_default(source);
    assert_eq!(document.len(), 1, "expected exactly one layer");
    match document.into_layers().remove(0).into_result() {
        Ok(_) => panic!("expected layer to fail"),
        Err(err) => err,
    }
}

fn layer_with(operations: &str) -> String {
    format!(r#"{{ "layers": [ {{ "name": "dial", "operations": [ {operations} ] }} ] }}"#)
}

fn first_code(err: &ParseError) -> Option<ErrorCode> {
    err.errors().next().and_then(|diag| diag.code())
}

#[test]
fn test_layer_defaults() {
    let layer = single_layer(r#"{ "layers": [ {} ] }"#);

    assert_eq!(layer.name(), "unnamed");
    assert_eq!(layer.size(), Size::new(600.0, 600.0));
    assert_eq!(layer.shadow(), None);
    assert!(layer.operations().is_empty());
}

#[test]
fn test_document_without_layers() {
    let document = parse_default("{}");
    assert!(document.is_empty());
}

#[test]
fn test_circle_operation() {
    let layer = single_layer(&layer_with(
        r##"{ "type": "circle", "radius": 100, "fill": "#fff" }"##,
    ));

    assert_eq!(layer.operations().len(), 1);
    let Operation::Circle(circle) = &layer.operations()[0] else {
        panic!("expected a circle");
    };
    assert_approx_eq!(f32, circle.radius(), 100.0);
    assert_eq!(circle.fill().as_str(), "#fff");

    let node = layer.operations()[0].render(&layer.canvas());
    assert_eq!(node.attribute("cx"), Some("300"));
    assert_eq!(node.attribute("cy"), Some("300"));
}

#[test]
fn test_missing_radius_is_missing_field_error() {
    let err = single_layer_error(&layer_with(r##"{ "type": "circle", "fill": "#fff" }"##));

    assert_eq!(first_code(&err), Some(ErrorCode::E100));
    assert!(err.has_category(ErrorCategory::MissingField));

    let diag = err.errors().next().unwrap();
    assert!(diag.message().contains("`radius`"));
    assert!(diag.message().contains("`circle`"));
    assert_eq!(diag.help(), Some("operation #1 of layer `dial`"));
}

#[test]
fn test_location_added_after_own_help() {
    let err = single_layer_error(&layer_with(
        r#"
        { "type": "text", "x": 10, "y": 10, "text": "a" },
        { "type": "text", "x": 20, "y": 10, "text": "b" },
        { "type": "text", "x": "left", "y": 10, "text": "c" }
        "#,
    ));

    let diag = err.errors().next().unwrap();
    assert_eq!(diag.code(), Some(ErrorCode::E102));
    let help = diag.help().unwrap();
    assert!(help.starts_with("use a number or a percentage"));
    assert!(help.ends_with("operation #3 of layer `dial`"));
}

#[test]
fn test_named_operation_in_help() {
    let err = single_layer_error(&layer_with(
        r#"{ "type": "arc", "name": "redline", "radius": 200 }"#,
    ));
    let diag = err.errors().next().unwrap();
    assert_eq!(diag.help(), Some("operation #1 (`redline`) of layer `dial`"));
}

#[test]
fn test_operation_order_is_preserved() {
    let layer = single_layer(&layer_with(
        r#"
        { "type": "circle", "radius": 250, "fill": "black" },
        { "type": "arc", "radius": 240, "degreesStart": -120, "degreesEnd": 120,
          "innerThickness": 10, "fill": "white" },
        { "type": "gaugeTicks", "radius": 230, "degreesStart": -120, "degreesEnd": 120,
          "degreesGap": 20 },
        { "type": "gaugeTickLabels", "radius": 190, "degreesStart": -120, "degreesEnd": 120,
          "labels": [0, 20, 40, 60, 80, 100, 120] },
        { "type": "text", "x": "50%", "y": 420, "text": "km/h" },
        { "type": "square", "x": 300, "y": 500, "width": 80, "height": 30, "round": 4 },
        { "type": "triangle", "x": "50%", "y": "30%", "width": 12, "height": 160,
          "rotation": 30, "fill": "red" }
        "#,
    ));

    let kinds: Vec<_> = layer.operations().iter().map(Operation::kind).collect();
    assert_eq!(
        kinds,
        [
            "circle",
            "arc",
            "gaugeTicks",
            "gaugeTickLabels",
            "text",
            "square",
            "triangle"
        ]
    );
}

#[test]
fn test_unknown_operation_is_skipped_with_warning() {
    let document = parse_default(&layer_with(
        r#"
        { "type": "needle", "length": 10 },
        { "type": "circle", "radius": 10 }
        "#,
    ));

    let entry = &document.layers()[0];
    let layer = entry.result().expect("unknown operations are not fatal");
    assert_eq!(layer.operations().len(), 1);

    assert_eq!(entry.warnings().len(), 1);
    let warning = &entry.warnings()[0];
    assert!(warning.severity().is_warning());
    assert_eq!(warning.code(), Some(ErrorCode::W300));
    assert_eq!(
        warning.code().map(|code| code.category()),
        Some(ErrorCategory::UnknownOperation)
    );
}

#[test]
fn test_skip_flag_drops_operation() {
    let layer = single_layer(&layer_with(
        r#"
        { "type": "circle", "radius": 10, "skip": true },
        { "type": "circle", "radius": 20 }
        "#,
    ));
    assert_eq!(layer.operations().len(), 1);
}

#[test]
fn test_skipped_operation_is_still_validated() {
    let err = single_layer_error(&layer_with(r#"{ "type": "circle", "skip": true }"#));
    assert_eq!(first_code(&err), Some(ErrorCode::E100));
}

#[test]
fn test_missing_type() {
    let err = single_layer_error(&layer_with(r#"{ "radius": 10 }"#));
    let diag = err.errors().next().unwrap();
    assert_eq!(diag.code(), Some(ErrorCode::E100));
    assert!(diag.message().contains("`type`"));
}

#[test]
fn test_invalid_coordinate() {
    let err = single_layer_error(&layer_with(
        r#"{ "type": "text", "x": "left", "y": 10, "text": "A" }"#,
    ));
    assert_eq!(first_code(&err), Some(ErrorCode::E102));
    assert!(err.has_category(ErrorCategory::InvalidCoordinate));
}

#[test]
fn test_invalid_color() {
    let err = single_layer_error(&layer_with(
        r#"{ "type": "circle", "radius": 10, "fill": "blurple" }"#,
    ));
    assert_eq!(first_code(&err), Some(ErrorCode::E103));
}

#[test]
fn test_non_positive_tick_gap_is_rejected() {
    for gap in ["0", "-10"] {
        let err = single_layer_error(&layer_with(&format!(
            r#"{{ "type": "gaugeTicks", "radius": 100, "degreesStart": 0,
                 "degreesEnd": 90, "degreesGap": {gap} }}"#
        )));
        assert_eq!(first_code(&err), Some(ErrorCode::E200));
    }
}

#[test]
fn test_tick_gap_too_small_for_span_is_rejected() {
    for gap in ["1e-38", "1e-9", "0.001"] {
        let err = single_layer_error(&layer_with(&format!(
            r#"{{ "type": "gaugeTicks", "radius": 100, "degreesStart": 0,
                 "degreesEnd": 360, "degreesGap": {gap} }}"#
        )));
        assert_eq!(first_code(&err), Some(ErrorCode::E200), "gap {gap}");
    }

    let layer = single_layer(&layer_with(
        r#"{ "type": "gaugeTicks", "radius": 100, "degreesStart": 0,
             "degreesEnd": 360, "degreesGap": 0.01 }"#,
    ));
    assert_eq!(layer.operations().len(), 1);
}

#[test]
fn test_arc_thickness_exceeding_radius_is_rejected() {
    let err = single_layer_error(&layer_with(
        r#"{ "type": "arc", "radius": 20, "degreesStart": 0, "degreesEnd": 90,
             "innerThickness": 30, "fill": "red" }"#,
    ));
    assert_eq!(first_code(&err), Some(ErrorCode::E201));
}

#[test]
fn test_arc_thickness_equal_to_radius_is_a_full_wedge() {
    let layer = single_layer(&layer_with(
        r#"{ "type": "arc", "radius": 20, "degreesStart": 0, "degreesEnd": 90,
             "innerThickness": 20, "fill": "red" }"#,
    ));
    let Operation::Arc(arc) = &layer.operations()[0] else {
        panic!("expected an arc");
    };
    assert_approx_eq!(f32, arc.inner_radius(), 0.0);
}

#[test]
fn test_all_operation_errors_are_reported() {
    let err = single_layer_error(&layer_with(
        r#"
        { "type": "circle" },
        { "type": "circle", "radius": 5 },
        { "type": "square", "x": 1, "y": 1, "width": 2 }
        "#,
    ));
    assert_eq!(err.errors().count(), 2);
}

#[test]
fn test_layer_failures_are_isolated() {
    let document = parse_default(
        r#"{ "layers": [
            { "name": "good", "operations": [ { "type": "circle", "radius": 10 } ] },
            { "name": "bad", "operations": [ { "type": "circle" } ] },
            { "name": "also-good" }
        ] }"#,
    );

    assert_eq!(document.len(), 3);
    assert_eq!(document.failed_count(), 1);

    let names: Vec<_> = document.layers().iter().map(|entry| entry.name()).collect();
    assert_eq!(names, ["good", "bad", "also-good"]);
    assert!(document.layers()[0].result().is_ok());
    assert!(document.layers()[1].result().is_err());
    assert!(document.layers()[2].result().is_ok());
    assert_eq!(document.layers()[1].index(), 1);
}

#[test]
fn test_duplicate_layer_name_fails_later_layer() {
    let document = parse_default(
        r#"{ "layers": [
            { "name": "dial", "operations": [ { "type": "circle", "radius": 10 } ] },
            { "name": "needle" },
            { "name": "dial", "operations": [ { "type": "circle", "radius": 20 } ] },
            {},
            {}
        ] }"#,
    );

    assert_eq!(document.failed_count(), 2);
    assert!(document.layers()[0].result().is_ok());
    assert!(document.layers()[1].result().is_ok());
    assert!(document.layers()[3].result().is_ok());

    let err = document.layers()[2].result().unwrap_err();
    assert_eq!(first_code(err), Some(ErrorCode::E101));
    assert!(err.errors().next().unwrap().message().contains("`dial`"));

    let err = document.layers()[4].result().unwrap_err();
    assert!(err.errors().next().unwrap().message().contains("`unnamed`"));
}

#[test]
fn test_shadow_forms() {
    let document = parse_default(
        r#"{ "layers": [
            { "name": "off", "shadow": false },
            { "name": "null", "shadow": null },
            { "name": "default", "shadow": true },
            { "name": "sized", "shadow": { "size": 8 } },
            { "name": "full", "shadow": { "size": 2, "x": -1, "y": 5 } }
        ] }"#,
    );

    let shadows: Vec<_> = document
        .layers()
        .iter()
        .map(|entry| entry.result().unwrap().shadow())
        .collect();

    assert_eq!(
        shadows,
        [
            None,
            None,
            Some(Shadow::default()),
            Some(Shadow::new(8.0, 3.0, 3.0)),
            Some(Shadow::new(2.0, -1.0, 5.0)),
        ]
    );
}

#[test]
fn test_invalid_shadow_value() {
    let err = single_layer_error(r#"{ "layers": [ { "shadow": "yes" } ] }"#);
    assert_eq!(first_code(&err), Some(ErrorCode::E101));
}

#[test]
fn test_configured_defaults() {
    let config = ElaborateConfig::new(Size::new(320.0, 240.0), Shadow::new(1.0, 2.0, 2.0), "Verdana");
    let document = parse(
        r#"{ "layers": [ { "shadow": true, "operations": [
            { "type": "text", "x": 10, "y": 10, "text": "A" }
        ] } ] }"#,
        &config,
    )
    .unwrap();

    let layer = document.layers()[0].result().unwrap();
    assert_eq!(layer.size(), Size::new(320.0, 240.0));
    assert_eq!(layer.shadow(), Some(Shadow::new(1.0, 2.0, 2.0)));

    let node = layer.operations()[0].render(&Canvas::new(layer.size()));
    assert_eq!(node.attribute("font-family"), Some("Verdana"));
}

#[test]
fn test_document_size_defaults() {
    let document = parse_default(
        r#"{ "width": 400, "height": 300, "layers": [ { "name": "a" }, { "name": "b", "width": 100 } ] }"#,
    );

    assert_eq!(
        document.layers()[0].result().unwrap().size(),
        Size::new(400.0, 300.0)
    );
    assert_eq!(
        document.layers()[1].result().unwrap().size(),
        Size::new(100.0, 300.0)
    );
}

#[test]
fn test_non_positive_dimensions() {
    let err = single_layer_error(r#"{ "layers": [ { "width": 0 } ] }"#);
    assert_eq!(first_code(&err), Some(ErrorCode::E202));

    let err = parse(r#"{ "height": -5, "layers": [] }"#, &ElaborateConfig::default())
        .unwrap_err();
    assert_eq!(first_code(&err), Some(ErrorCode::E202));
}

#[test]
fn test_layer_name_must_be_a_file_name() {
    for name in ["", "..", "a/b", "a\\\\b"] {
        let err = single_layer_error(&format!(r#"{{ "layers": [ {{ "name": "{name}" }} ] }}"#));
        assert_eq!(first_code(&err), Some(ErrorCode::E101), "name {name:?}");
    }
}

#[test]
fn test_syntax_error_aborts_document() {
    let err = parse(r#"{ "layers": [ "#, &ElaborateConfig::default()).unwrap_err();
    assert_eq!(first_code(&err), Some(ErrorCode::E001));
    assert!(err.has_category(ErrorCategory::Config));
}

#[test]
fn test_structure_errors() {
    let err = parse(r#"{ "layers": 3 }"#, &ElaborateConfig::default()).unwrap_err();
    assert_eq!(first_code(&err), Some(ErrorCode::E002));

    let err = single_layer_error(r#"{ "layers": [ 42 ] }"#);
    assert_eq!(first_code(&err), Some(ErrorCode::E002));

    let err = single_layer_error(r#"{ "layers": [ { "operations": {} } ] }"#);
    assert_eq!(first_code(&err), Some(ErrorCode::E002));
}

#[test]
fn test_labels_accept_numbers_and_strings() {
    let layer = single_layer(&layer_with(
        r#"{ "type": "gaugeTickLabels", "radius": 100, "degreesStart": 0, "degreesEnd": 90,
             "labels": ["low", 50, "high"] }"#,
    ));
    let Operation::GaugeTickLabels(labels) = &layer.operations()[0] else {
        panic!("expected tick labels");
    };
    assert_eq!(labels.labels(), ["low", "50", "high"]);
    assert_eq!(labels.angles(), [0.0, 45.0, 90.0]);
}
