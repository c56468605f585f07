//! Tree-walking interpreter for Trio
//!
//! This crate provides:
//! - [`Value`] - runtime values with reference semantics for objects and arrays
//! - [`Environment`] - chained lexical scopes shared by closures
//! - [`evaluate`] - evaluation of programs, statements and expressions
//!
//! Native functions are not part of this crate; callers register them into
//! the environment returned by [`create_global_environment`].
//!
//! # Example
//!
//! ```
//! use interpreter::{create_global_environment, evaluate_program, Value};
//!
//! let env = create_global_environment();
//! let program = parser::parse("fn make(n) { fn inner() { n; } } let g = make(5); g();").unwrap();
//!
//! assert_eq!(evaluate_program(&program, &env).unwrap(), Value::Number(5.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod environment;
pub mod error;
pub mod eval;
pub mod value;

// Re-export main types at crate root
pub use environment::{create_global_environment, Environment};
pub use eval::{
    call_function, evaluate, evaluate_binary, evaluate_block, evaluate_expression,
    evaluate_program, evaluate_statement,
};
pub use value::{ArrayRef, FunctionValue, NativeCallback, NativeFunction, ObjectRef, Value};
