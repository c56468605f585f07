//! Contract tests for interpreter API
//!
//! These tests verify evaluation behaves as the language defines it.

use core_types::{ErrorKind, TrioError};
use interpreter::{
    create_global_environment, evaluate, Environment, NativeFunction, Value,
};
use parser::{parse, ASTNode};
use std::rc::Rc;

/// Global environment with a minimal `Array` constructor
fn global() -> Rc<Environment> {
    let env = create_global_environment();
    let array = NativeFunction::new("Array", |args, _env| {
        let size = args.first().and_then(Value::as_number).unwrap_or(0.0);
        Ok(Value::array(vec![Value::Null; size as usize]))
    });
    env.declare("Array", Value::NativeFunction(array), true)
        .unwrap();
    env
}

fn run_in(source: &str, env: &Rc<Environment>) -> Result<Value, TrioError> {
    let program = parse(source)?;
    evaluate(&ASTNode::Program(program), env)
}

fn run(source: &str) -> Result<Value, TrioError> {
    run_in(source, &global())
}

fn runtime_error(source: &str) -> TrioError {
    let err = run(source).unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError, "{}", err);
    err
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_precedence() {
    assert_eq!(run("2 + 3 * 4;").unwrap(), Value::Number(14.0));
    assert_eq!(run("(2 + 3) * 4;").unwrap(), Value::Number(20.0));
    assert_eq!(run("10 - 4 - 3;").unwrap(), Value::Number(3.0));
    assert_eq!(run("1 + 2 < 4;").unwrap(), Value::Boolean(true));
}

#[test]
fn test_empty_program_is_null() {
    assert_eq!(run("").unwrap(), Value::Null);
}

#[test]
fn test_division_by_zero() {
    let err = runtime_error("1 / 0;");
    assert!(err.message.contains("zero"));
    runtime_error("5 % 0;");
}

#[test]
fn test_string_equality() {
    assert_eq!(run("'abc' == 'abc';").unwrap(), Value::Boolean(true));
    assert_eq!(run("'abc' != 'abd';").unwrap(), Value::Boolean(true));
    assert_eq!(run("'a' < 'b';").unwrap(), Value::Null);
}

#[test]
fn test_mixed_comparison_is_null() {
    assert_eq!(run("1 == '1';").unwrap(), Value::Null);
    assert_eq!(run("true == 1;").unwrap(), Value::Null);
    assert_eq!(run("true == true;").unwrap(), Value::Boolean(true));
}

#[test]
fn test_undefined_variable() {
    let err = runtime_error("missing;");
    assert!(err.message.contains("\"missing\""));
}

#[test]
fn test_assignment_value_and_chain() {
    let env = global();
    assert_eq!(run_in("let a; let b; a = b = 7;", &env).unwrap(), Value::Number(7.0));
    assert_eq!(env.lookup("a").unwrap(), Value::Number(7.0));
    assert_eq!(env.lookup("b").unwrap(), Value::Number(7.0));
}

#[test]
fn test_invalid_assignment_target() {
    let err = runtime_error("1 = 2;");
    assert!(err.message.contains("assignment target"));
}

// ============================================================================
// Declarations and scopes
// ============================================================================

#[test]
fn test_const_cannot_be_reassigned() {
    runtime_error("const y = 1; y = 2;");
}

#[test]
fn test_redeclaration_in_same_scope() {
    let err = runtime_error("let x = 1; let x = 2;");
    assert!(err.message.contains("redeclare"));
}

#[test]
fn test_shadowing_in_nested_scope() {
    let source = "
        const x = 1;
        let seen = 0;
        for (let x = 10; x < 12; x = x + 1) { seen = seen + x; }
        seen;
    ";
    assert_eq!(run(source).unwrap(), Value::Number(21.0));
}

#[test]
fn test_builtin_constants() {
    assert_eq!(run("true;").unwrap(), Value::Boolean(true));
    assert_eq!(run("null;").unwrap(), Value::Null);
    runtime_error("true = false;");
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_closure_keeps_environment_alive() {
    let source = "fn make(n) { fn inner() { n; } } let g = make(5); g();";
    assert_eq!(run(source).unwrap(), Value::Number(5.0));
}

#[test]
fn test_closures_share_captured_bindings() {
    let source = "
        fn counter() {
            let count = 0;
            fn next() { count = count + 1; }
        }
        let a = counter();
        let b = counter();
        a(); a(); b();
        a();
    ";
    assert_eq!(run(source).unwrap(), Value::Number(3.0));
}

#[test]
fn test_lexical_not_dynamic_scope() {
    let source = "
        let x = 1;
        fn read() { x; }
        fn shadow() { let x = 2; read(); }
        shadow();
    ";
    assert_eq!(run(source).unwrap(), Value::Number(1.0));
}

#[test]
fn test_recursion() {
    let source = "
        fn fact(n) {
            let result = 1;
            if (n > 1) { result = n * fact(n - 1); }
            result;
        }
        fact(5);
    ";
    assert_eq!(run(source).unwrap(), Value::Number(120.0));
}

#[test]
fn test_empty_function_body_is_null() {
    assert_eq!(run("fn f() {} f();").unwrap(), Value::Null);
}

#[test]
fn test_arity_is_permissive() {
    assert_eq!(run("fn first(a, b) { a; } first(1);").unwrap(), Value::Number(1.0));
    assert_eq!(run("fn one(a) { a; } one(1, 2, 3);").unwrap(), Value::Number(1.0));
    assert_eq!(run("fn second(a, b) { b; } second(1);").unwrap(), Value::Null);
}

#[test]
fn test_missing_parameter_shadows_outer_binding() {
    let source = "let b = 99; fn second(a, b) { b; } second(1);";
    assert_eq!(run(source).unwrap(), Value::Null);

    let source = "let b = 99; fn set_second(a, b) { b = 5; } set_second(1); b;";
    assert_eq!(run(source).unwrap(), Value::Number(99.0));
}

#[test]
fn test_deep_recursion_completes() {
    let source = "
        fn down(n) {
            let result = 0;
            if (n > 0) { result = down(n - 1) + 1; }
            result;
        }
        down(20000);
    ";
    assert_eq!(run(source).unwrap(), Value::Number(20000.0));
}

#[test]
fn test_deep_recursion_error_keeps_every_frame() {
    let source = "fn down(n) { if (n > 0) down(n - 1); else 1 / 0; } down(10000);";
    let err = runtime_error(source);
    assert_eq!(err.stack.len(), 10001);
    assert!(err.stack.iter().all(|frame| frame.function_name == "down"));
}

#[test]
fn test_call_non_function() {
    let err = runtime_error("let x = 1; x();");
    assert!(err.message.contains("not callable"));
}

#[test]
fn test_error_records_function_frames() {
    let err = runtime_error("fn inner() { 1 / 0; } fn outer() { inner(); } outer();");
    let names: Vec<&str> = err.stack.iter().map(|f| f.function_name.as_str()).collect();
    assert_eq!(names, ["inner", "outer"]);
}

#[test]
fn test_native_receives_arguments_in_order() {
    let env = global();
    let join = NativeFunction::new("join", |args, _env| {
        let parts: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        Ok(Value::String(parts.join("-")))
    });
    env.declare("join", Value::NativeFunction(join), true).unwrap();
    assert_eq!(
        run_in("join(1, 'b', 2 + 1);", &env).unwrap(),
        Value::String("1-b-3".to_string())
    );
}

#[test]
fn test_new_requires_native() {
    let err = runtime_error("fn Point() {} new Point();");
    assert!(err.message.contains("not a constructor"));
}

// ============================================================================
// Arrays and objects
// ============================================================================

#[test]
fn test_array_read_write() {
    let source = "let a = new Array(3); a[1] = 10; a[3] = 30; a[1] + a[3];";
    assert_eq!(run(source).unwrap(), Value::Number(40.0));
    assert_eq!(run("let a = new Array(3); a[2];").unwrap(), Value::Null);
    assert_eq!(run("let a = new Array(3); a.size;").unwrap(), Value::Number(3.0));
}

#[test]
fn test_array_out_of_bounds() {
    let err = runtime_error("let a = new Array(3); a[4] = 1;");
    assert!(err.message.contains("out of bounds"));
    runtime_error("let a = new Array(3); a[0];");
    runtime_error("let a = new Array(3); a['1'];");
    runtime_error("let a = new Array(3); a.length;");
}

#[test]
fn test_arrays_alias() {
    let source = "let a = new Array(1); let b = a; b[1] = 'x'; a[1];";
    assert_eq!(run(source).unwrap(), Value::String("x".to_string()));
}

#[test]
fn test_object_member_access() {
    assert_eq!(run("{foo: 1, bar: 2}.foo;").unwrap(), Value::Number(1.0));
    assert_eq!(run("let o = {foo: 1}; o.missing;").unwrap(), Value::Null);
    assert_eq!(run("let o = {foo: 1}; o['foo'];").unwrap(), Value::Number(1.0));
}

#[test]
fn test_object_shorthand_property() {
    let source = "let bar = 9; let o = {foo: 1, bar}; o.bar;";
    assert_eq!(run(source).unwrap(), Value::Number(9.0));
    runtime_error("let o = {nothing};");
}

#[test]
fn test_object_member_assignment() {
    let source = "let o = {a: 1}; o.a = 2; o['b'] = 3; o.a + o.b;";
    assert_eq!(run(source).unwrap(), Value::Number(5.0));
    runtime_error("let o = {a: 1}; o[1] = 2;");
}

#[test]
fn test_non_identifier_dot_property() {
    runtime_error("let o = {a: 1}; o.'a';");
}

#[test]
fn test_member_of_scalar() {
    let err = runtime_error("let n = 1; n.x;");
    assert!(err.message.contains("number"));
}

// ============================================================================
// Control flow
// ============================================================================

#[test]
fn test_for_loop_sum() {
    let env = global();
    run_in(
        "let sum = 0; for (let i = 0; i < 5; i = i + 1) sum = sum + i;",
        &env,
    )
    .unwrap();
    assert_eq!(env.lookup("sum").unwrap(), Value::Number(10.0));
}

#[test]
fn test_truthiness_in_conditions() {
    assert_eq!(run("if (0) 1; else 2;").unwrap(), Value::Number(2.0));
    assert_eq!(run("if (-1) 1; else 2;").unwrap(), Value::Number(1.0));
    assert_eq!(run("if ('x') 1; else 2;").unwrap(), Value::Number(1.0));
    assert_eq!(run("if (null) 1; else 2;").unwrap(), Value::Number(2.0));
    assert_eq!(run("if ({}) 1; else 2;").unwrap(), Value::Number(1.0));
    assert_eq!(run("if (false) 1; else 2;").unwrap(), Value::Number(2.0));
}

#[test]
fn test_conditionless_for_breaks() {
    let env = global();
    let value = run_in("let n = 0; for (;;) { n = n + 1; }", &env).unwrap();
    assert_eq!(value, Value::Null);
    assert_eq!(env.lookup("n").unwrap(), Value::Number(0.0));
}

#[test]
fn test_evaluate_accepts_any_node() {
    let env = global();
    let program = parse("let x = 3; x * 2;").unwrap();
    let declaration = program.body[0].clone();
    evaluate(&ASTNode::Statement(declaration), &env).unwrap();

    let expression = match &program.body[1] {
        parser::Statement::Expression(e) => e.clone(),
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(
        evaluate(&ASTNode::Expression(expression), &env).unwrap(),
        Value::Number(6.0)
    );
}
