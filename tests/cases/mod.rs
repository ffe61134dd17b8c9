//! Shared harness for end-to-end rendering cases.

#![allow(dead_code, unused_macros)]

use stencil::{Bindings, Engine, EngineOptions, Value};

/// Engine used by every case. `site` is registered as a global.
pub fn engine() -> Engine {
    Engine::new(EngineOptions::default(), |env| {
        env.register("site", "Stencil");
    })
}

pub fn bindings<const N: usize>(entries: [(&str, Value); N]) -> Bindings {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Render `template`, reducing a failure to its error code.
pub fn render(template: &str, bindings: &Bindings) -> Result<String, String> {
    engine()
        .render(template, bindings)
        .map_err(|e| e.code().to_string())
}

/// Declare a test rendering `template` with `bindings`.
///
/// `rendered` is `Ok(text)` for the expected output or `Err(code)` for the
/// expected error code.
macro_rules! render_case {
    (
        $name:ident,
        template: $template:expr,
        bindings: [$($key:literal => $value:expr),* $(,)?],
        rendered: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let bindings = cases::bindings([$(($key, stencil::Value::from($value))),*]);
            let actual = cases::render($template, &bindings);
            let expected: Result<&str, &str> = $expected;
            pretty_assertions::assert_eq!(
                actual.as_ref().map(String::as_str).map_err(String::as_str),
                expected
            );
        }
    };
}
