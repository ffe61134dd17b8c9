mod cases;

use pretty_assertions::assert_eq;
use stencil::{Bindings, Engine, EngineOptions, Error, Severity, render_error_to_string_no_color};

#[test]
fn test_parse_error_reports_location() {
    let err = cases::engine()
        .compile("line one\nline two {{ name")
        .unwrap_err();

    let Error::Parse { error, .. } = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(error.position.line, 2);
    assert_eq!(err.code(), "P001");
    assert!(err.to_string().contains("2:"));
}

#[test]
fn test_invalid_number_literal() {
    let err = cases::engine()
        .compile("{{ 99999999999999999999 }}")
        .unwrap_err();
    assert_eq!(err.code(), "P003");
}

#[test]
fn test_undefined_variable() {
    let err = cases::engine()
        .render("Hi {{ who }}", &Bindings::new())
        .unwrap_err();

    assert_eq!(err.code(), "R003");
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.span.0, 6..9);
    assert!(diagnostic.message.contains("Undefined variable 'who'"));
    assert!(diagnostic.help.is_some());
}

#[test]
fn test_unknown_method_and_arity() {
    let engine = cases::engine();
    let bindings = cases::bindings([("name", "Ada".into())]);

    let err = engine.render("{{ name.shout() }}", &bindings).unwrap_err();
    assert_eq!(err.code(), "R004");
    assert!(err.to_string().contains("Unknown operation 'shout'"));

    let err = engine.render("{{ name.find() }}", &bindings).unwrap_err();
    assert_eq!(err.code(), "R004");
}

#[test]
fn test_error_keeps_template_text() {
    let source = "{{when missing}}x{{end}}";
    let err = cases::engine().render(source, &Bindings::new()).unwrap_err();
    assert_eq!(err.template(), source);
}

#[test]
fn test_render_failure_is_rendered_with_source() {
    let err = cases::engine()
        .render("Dear {{ user.name.capitalizeFirstLetter().invert() }}", &Bindings::new())
        .unwrap_err();

    let output = render_error_to_string_no_color(&err);
    assert!(output.contains("R003"));
    assert!(output.contains("Dear {{ user.name"));
}

#[test]
fn test_execution_depth_limit() {
    let mut options = EngineOptions::default();
    options.execution.max_depth = 3;
    let engine = Engine::new(options, |_| {});

    assert_eq!(engine.render("{{ [[1]] == [[1]] }}", &Bindings::new()).unwrap_err().code(), "R005");
    assert_eq!(engine.render("{{ 1 }}", &Bindings::new()).unwrap(), "1");
}

#[test]
fn test_when_nesting_limit() {
    let mut options = EngineOptions::default();
    options.parse.max_nesting_depth = 2;
    let engine = Engine::new(options, |_| {});

    assert!(engine.compile("{{when a}}{{when b}}{{end}}{{end}}").is_ok());
    let err = engine
        .compile("{{when a}}{{when b}}{{when c}}{{end}}{{end}}{{end}}")
        .unwrap_err();
    assert_eq!(err.code(), "P004");
}
