//! Builtins exercised through Trio programs

use builtins::{register, register_with_output, ConsoleWriter, Console, register_with_console};
use core_types::TrioError;
use interpreter::{create_global_environment, evaluate_program, Environment, Value};
use std::cell::RefCell;
use std::rc::Rc;

fn setup() -> (Rc<Environment>, Rc<RefCell<Vec<String>>>) {
    let output = Rc::new(RefCell::new(Vec::new()));
    let env = create_global_environment();
    register_with_output(&env, output.clone()).unwrap();
    (env, output)
}

fn run(env: &Rc<Environment>, source: &str) -> Result<Value, TrioError> {
    evaluate_program(&parser::parse(source)?, env)
}

#[test]
fn test_register_declares_constants() {
    let env = create_global_environment();
    register(&env).unwrap();
    for name in ["print", "clock", "Array"] {
        assert!(env.contains_local(name), "{} missing", name);
        assert!(env.is_constant(name));
    }
    assert_eq!(env.lookup("print").unwrap().to_string(), "[NativeFunction: print]");
}

#[test]
fn test_register_twice_fails() {
    let env = create_global_environment();
    register(&env).unwrap();
    let err = register(&env).unwrap_err();
    assert!(err.is_runtime_error());
}

#[test]
fn test_print_from_program() {
    let (env, output) = setup();
    let value = run(&env, "let o = {b: 2, a: 'x'}; print('o is', o); print();").unwrap();
    assert_eq!(value, Value::Null);
    assert_eq!(output.borrow().as_slice(), ["o is { a: x, b: 2 }", ""]);
}

#[test]
fn test_print_functions() {
    let (env, output) = setup();
    run(&env, "fn f() {} print(f, print);").unwrap();
    assert_eq!(output.borrow()[0], "[Function: f] [NativeFunction: print]");
}

#[test]
fn test_new_array() {
    let (env, _) = setup();
    assert_eq!(run(&env, "let a = new Array(3); a.size;").unwrap(), Value::Number(3.0));
    assert_eq!(run(&env, "a[3] = 5; a[3];").unwrap(), Value::Number(5.0));
    let err = run(&env, "a[4] = 1;").unwrap_err();
    assert!(err.message.contains("out of bounds"));
}

#[test]
fn test_array_called_directly() {
    let (env, _) = setup();
    assert_eq!(run(&env, "Array(2);").unwrap().to_string(), "[null, null]");
    assert!(run(&env, "new Array(-1);").is_err());
    assert!(run(&env, "new Array;").is_err());
}

#[test]
fn test_clock_elapsed() {
    let (env, _) = setup();
    let source = "let start = clock(); let elapsed = clock() - start; elapsed >= 0;";
    assert_eq!(run(&env, source).unwrap(), Value::Boolean(true));
}

#[test]
fn test_custom_writer() {
    struct Upper(Rc<RefCell<String>>);
    impl ConsoleWriter for Upper {
        fn write(&self, message: &str) {
            self.0.borrow_mut().push_str(&message.to_uppercase());
        }
    }

    let sink = Rc::new(RefCell::new(String::new()));
    let env = create_global_environment();
    register_with_console(&env, Console::with_writer(Box::new(Upper(sink.clone())))).unwrap();
    run(&env, "print('shout');").unwrap();
    assert_eq!(*sink.borrow(), "SHOUT");
}
