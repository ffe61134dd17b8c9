//! Unit tests for the evaluator.

use super::*;
use crate::{api::ParseOptions, parser, values::ValueError};
use pretty_assertions::assert_eq;

struct Runner {
    globals: Bindings,
    variables: Bindings,
}

impl Runner {
    fn new() -> Self {
        Self {
            globals: Bindings::new(),
            variables: Bindings::new(),
        }
    }

    fn global(mut self, name: &str, value: Value) -> Self {
        self.globals.insert(name.to_string(), value);
        self
    }

    fn var(mut self, name: &str, value: Value) -> Self {
        self.variables.insert(name.to_string(), value);
        self
    }

    fn run(&self, input: &str) -> Result<Value, EvalError> {
        self.run_with_limits(input, ExecutionOptions::default())
    }

    fn run_with_limits(&self, input: &str, options: ExecutionOptions) -> Result<Value, EvalError> {
        let expr = parser::parse_statement(input, &ParseOptions::default())
            .unwrap_or_else(|e| panic!("parsing failed: {}\n{}", input, e));
        eval_with_limits(&expr, &self.globals, &self.variables, &options)
    }
}

fn run(input: &str) -> Result<Value, EvalError> {
    Runner::new().run(input)
}

#[test]
fn test_literals() {
    assert_eq!(run("42"), Ok(Value::integer(42)));
    assert_eq!(run("2.5"), Ok(Value::real(2.5)));
    assert_eq!(run("'hi'"), Ok(Value::string("hi")));
    assert_eq!(run("void"), Ok(Value::VOID));
    assert_eq!(
        run("[1, 'a']"),
        Ok(Value::list([Value::integer(1), Value::string("a")]))
    );
    assert_eq!(
        run("{'a': 1, 'a': 2}"),
        Ok(Value::map([(Value::string("a"), Value::integer(2))]))
    );
}

#[test]
fn test_variables_shadow_globals() {
    let runner = Runner::new()
        .global("site", Value::string("global"))
        .global("lang", Value::string("en"))
        .var("site", Value::string("local"));
    assert_eq!(runner.run("site"), Ok(Value::string("local")));
    assert_eq!(runner.run("lang"), Ok(Value::string("en")));
}

#[test]
fn test_undefined_variable() {
    assert_eq!(
        run("missing"),
        Err(EvalError::UndefinedVariable {
            name: "missing".to_string()
        })
    );
    assert_eq!(run("missing").unwrap_err().code(), "R003");
}

#[test]
fn test_field_and_index_fetch() {
    let runner = Runner::new().var(
        "user",
        Value::map([
            (Value::string("name"), Value::string("Ada")),
            (
                Value::string("tags"),
                Value::list([Value::string("x"), Value::string("y")]),
            ),
        ]),
    );
    assert_eq!(runner.run("user.name"), Ok(Value::string("Ada")));
    assert_eq!(runner.run("user['name']"), Ok(Value::string("Ada")));
    assert_eq!(runner.run("user.tags[1]"), Ok(Value::string("y")));
    assert_eq!(runner.run("user.tags[1].isLast()"), Ok(Value::boolean(true)));
    assert_eq!(runner.run("user.tags[0].index()"), Ok(Value::integer(0)));
    assert_eq!(runner.run("user.age.isVoid()"), Ok(Value::boolean(true)));
    assert_eq!(runner.run("user.age.index()"), Ok(Value::string("age")));
}

#[test]
fn test_fetch_out_of_range_has_no_position() {
    let runner = Runner::new().var(
        "xs",
        Value::list([Value::integer(10), Value::integer(20), Value::integer(30)]),
    );
    assert_eq!(runner.run("xs[3].isVoid()"), Ok(Value::boolean(true)));
    assert_eq!(runner.run("xs.fetch(-1).index()"), Ok(Value::integer(-1)));
    let err = runner.run("xs[3].isFirst()").unwrap_err();
    assert!(matches!(
        err,
        EvalError::Value(ValueError::NotApplicableOperation { .. })
    ));
    assert_eq!(err.code(), "R002");
}

#[test]
fn test_find() {
    assert_eq!(run("'a1c'.find(1).index()"), Ok(Value::integer(1)));
    assert_eq!(run("'a1c'.find(1) == '1'"), Ok(Value::boolean(true)));
    assert_eq!(run("'a1c'.find(2)"), Ok(Value::VOID));
    assert_eq!(run("[1, 2, 3].find([2, 3]).index()"), Ok(Value::integer(1)));
    assert_eq!(run("[1, 2, 3].find(4).isVoid()"), Ok(Value::boolean(true)));
}

#[test]
fn test_equality_is_type_strict() {
    assert_eq!(run("'1' == 1"), Ok(Value::boolean(false)));
    assert_eq!(run("1 == 1"), Ok(Value::boolean(true)));
    assert_eq!(run("1 != 1.0"), Ok(Value::boolean(true)));
    assert_eq!(run("void == void"), Ok(Value::boolean(true)));
    assert_eq!(run("void == ''"), Ok(Value::boolean(false)));
    assert_eq!(run("[1, [2]] == [1, [2]]"), Ok(Value::boolean(true)));
    assert_eq!(run("'a'.eq('a')"), Ok(Value::boolean(true)));
}

#[test]
fn test_boolean_operators_short_circuit() {
    // The right side would fail with an undefined variable if evaluated.
    assert_eq!(run("false and missing"), Ok(Value::boolean(false)));
    assert_eq!(run("true or missing"), Ok(Value::boolean(true)));
    assert!(run("true and missing").is_err());
}

#[test]
fn test_boolean_context_coerces() {
    assert_eq!(run("'true' and 'FALSE'"), Ok(Value::boolean(false)));
    assert_eq!(run("not 'false'"), Ok(Value::boolean(true)));

    let err = run("1 and true").unwrap_err();
    assert_eq!(err.code(), "R001");
    assert_eq!(err.to_string(), "Value of type integer cannot be cast to boolean");
}

#[test]
fn test_methods() {
    assert_eq!(run("'hello'.capitalizeFirstLetter()"), Ok(Value::string("Hello")));
    assert_eq!(run("' \t'.isBlank()"), Ok(Value::boolean(true)));
    assert_eq!(run("[].isEmpty()"), Ok(Value::boolean(true)));
    assert_eq!(run("{}.isEmpty()"), Ok(Value::boolean(true)));
    assert_eq!(run("true.invert()"), Ok(Value::boolean(false)));
    assert_eq!(run("-(3)"), Ok(Value::integer(-3)));
    assert_eq!(run("'12'.asInteger()"), Ok(Value::integer(12)));
    assert_eq!(run("3.asReal()"), Ok(Value::real(3.0)));
    assert_eq!(run("3.0.asString()"), Ok(Value::string("3.0")));
    assert_eq!(run("'[1]'.asList()"), Ok(Value::list([Value::integer(1)])));
    assert_eq!(run("[1].typename()"), Ok(Value::string("list")));
}

#[test]
fn test_invert_on_string_fails() {
    let err = run("'a'.invert()").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Operation 'invert' is not applicable for value type string. Expected boolean, integer or real"
    );
}

#[test]
fn test_metadata_on_plain_value_fails() {
    let err = run("'abc'.index()").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Operation 'index' is not applicable for this value"
    );
}

#[test]
fn test_stack_overflow() {
    let runner = Runner::new();
    let options = ExecutionOptions { max_depth: 3 };
    assert_eq!(
        runner.run_with_limits("[[1]]", options.clone()),
        Ok(Value::list([Value::list([Value::integer(1)])]))
    );

    let err = runner.run_with_limits("[[[1]]]", options).unwrap_err();
    assert_eq!(
        err,
        EvalError::StackOverflow {
            depth: 3,
            max_depth: 3
        }
    );
    assert_eq!(err.code(), "R005");
}

#[test]
fn test_evaluator_trait() {
    let mut globals = Bindings::new();
    globals.insert("greeting".to_string(), Value::string("hi"));
    let evaluator = Evaluator::new(ExecutionOptions::default(), globals);

    let expression =
        Expression::parse("greeting.capitalizeFirstLetter()", &ParseOptions::default()).unwrap();
    assert_eq!(
        expression.evaluate(&evaluator, &Bindings::new()),
        Ok(Value::string("Hi"))
    );
}

#[test]
fn test_eval_constant() {
    let expr = parser::parse_statement("{'k': [true]}", &ParseOptions::default()).unwrap();
    assert_eq!(
        eval_constant(&expr),
        Ok(Value::map([(
            Value::string("k"),
            Value::list([Value::boolean(true)])
        )]))
    );

    let expr = parser::parse_statement("name", &ParseOptions::default()).unwrap();
    assert!(eval_constant(&expr).is_err());
}
