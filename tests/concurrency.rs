mod cases;

use pretty_assertions::assert_eq;
use stencil::Value;

#[test]
fn test_one_template_many_threads() {
    let template = cases::engine()
        .compile("{{ site }} #{{ n }}{{when n == 0}} (first){{end}}")
        .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let template = &template;
                scope.spawn(move || {
                    let bindings = cases::bindings([("n", Value::integer(n))]);
                    (0..50)
                        .map(|_| template.render(&bindings).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let expected = if n == 0 {
                "Stencil #0 (first)".to_string()
            } else {
                format!("Stencil #{n}")
            };
            for output in handle.join().unwrap() {
                assert_eq!(output, expected);
            }
        }
    });
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = cases::engine();

    std::thread::scope(|scope| {
        for n in 0..4 {
            let engine = &engine;
            scope.spawn(move || {
                let source = format!("{{{{ site }}}}-{n}");
                let output = engine.render(&source, &Default::default()).unwrap();
                assert_eq!(output, format!("Stencil-{n}"));
            });
        }
    });
}
