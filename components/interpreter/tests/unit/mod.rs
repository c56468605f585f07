//! Unit tests for interpreter components

use interpreter::{
    call_function, create_global_environment, Environment, FunctionValue, NativeFunction, Value,
};
use parser::parse;
use std::collections::BTreeMap;
use std::rc::Rc;

// ============================================================================
// Value Tests
// ============================================================================

#[test]
fn test_value_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::Boolean(true).type_name(), "boolean");
    assert_eq!(Value::String("s".to_string()).type_name(), "string");
    assert_eq!(Value::array(vec![]).type_name(), "array");
    assert_eq!(Value::object(BTreeMap::new()).type_name(), "object");
}

#[test]
fn test_value_display_forms() {
    let mut map = BTreeMap::new();
    map.insert("name".to_string(), Value::String("trio".to_string()));
    map.insert("list".to_string(), Value::array(vec![Value::Number(1.5), Value::Null]));
    assert_eq!(
        Value::object(map).to_string(),
        "{ list: [1.5, null], name: trio }"
    );
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::Number(-0.5).to_string(), "-0.5");
}

#[test]
fn test_function_display() {
    let env = create_global_environment();
    let function = FunctionValue {
        name: "add".to_string(),
        parameters: vec!["a".to_string(), "b".to_string()],
        body: parse("a + b;").unwrap(),
        closure: Rc::clone(&env),
    };
    assert_eq!(Value::Function(Rc::new(function)).to_string(), "[Function: add]");
}

#[test]
fn test_native_function_call() {
    let env = create_global_environment();
    let double = NativeFunction::new("double", |args, _env| {
        Ok(Value::Number(args[0].as_number().unwrap_or(0.0) * 2.0))
    });
    assert_eq!(double.call(&[Value::Number(4.0)], &env).unwrap(), Value::Number(8.0));
}

#[test]
fn test_native_sees_calling_environment() {
    let env = create_global_environment();
    env.declare("answer", Value::Number(42.0), false).unwrap();
    let read = NativeFunction::new("read", |_args, env| env.lookup("answer"));
    let child = Environment::with_parent(&env);
    assert_eq!(read.call(&[], &child).unwrap(), Value::Number(42.0));
}

// ============================================================================
// Environment Tests
// ============================================================================

#[test]
fn test_environment_chain() {
    let global = create_global_environment();
    let middle = Environment::with_parent(&global);
    let inner = Environment::with_parent(&middle);

    middle.declare("x", Value::Number(1.0), false).unwrap();
    inner.assign("x", Value::Number(2.0)).unwrap();

    assert_eq!(middle.lookup("x").unwrap(), Value::Number(2.0));
    assert!(inner.parent().is_some());
    assert!(global.parent().is_none());
    assert!(global.lookup("x").is_err());
}

#[test]
fn test_child_keeps_parent_alive() {
    let child = {
        let parent = Environment::new_global();
        parent.declare("kept", Value::Boolean(true), false).unwrap();
        Environment::with_parent(&parent)
    };
    assert_eq!(child.lookup("kept").unwrap(), Value::Boolean(true));
}

#[test]
fn test_is_constant_through_chain() {
    let global = create_global_environment();
    let child = Environment::with_parent(&global);
    assert!(child.is_constant("true"));
    assert!(!child.is_constant("undeclared"));
}

// ============================================================================
// Call Tests
// ============================================================================

#[test]
fn test_call_function_binds_parameters() {
    let env = create_global_environment();
    let function = Rc::new(FunctionValue {
        name: "sub".to_string(),
        parameters: vec!["a".to_string(), "b".to_string()],
        body: parse("a - b;").unwrap(),
        closure: Rc::clone(&env),
    });
    let result = call_function(&function, vec![Value::Number(9.0), Value::Number(4.0)]);
    assert_eq!(result.unwrap(), Value::Number(5.0));
}

#[test]
fn test_call_function_does_not_leak_parameters() {
    let env = create_global_environment();
    let function = Rc::new(FunctionValue {
        name: "id".to_string(),
        parameters: vec!["a".to_string()],
        body: parse("a;").unwrap(),
        closure: Rc::clone(&env),
    });
    call_function(&function, vec![Value::Null]).unwrap();
    assert!(!env.contains_local("a"));
}

#[test]
fn test_duplicate_parameter_names() {
    let env = create_global_environment();
    let function = Rc::new(FunctionValue {
        name: "dup".to_string(),
        parameters: vec!["a".to_string(), "a".to_string()],
        body: parse("a;").unwrap(),
        closure: env,
    });
    let err = call_function(&function, vec![Value::Null, Value::Null]).unwrap_err();
    assert!(err.message.contains("redeclare"));
    assert_eq!(err.stack[0].function_name, "dup");
}
