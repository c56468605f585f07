//! Tree-walking evaluator.
//!
//! Each node kind is handled by one arm of an exhaustive `match`; the only
//! state is the environment passed in.

mod expressions;
mod statements;

pub use expressions::{call_function, evaluate_binary, evaluate_expression};
pub use statements::{evaluate_block, evaluate_statement};

use crate::environment::Environment;
use crate::value::Value;
use core_types::TrioError;
use parser::{ASTNode, Program};
use std::rc::Rc;

/// Evaluate any AST node against `env`.
///
/// ```
/// use interpreter::{create_global_environment, evaluate, Value};
/// use parser::{parse, ASTNode};
///
/// let env = create_global_environment();
/// let program = parse("2 + 3 * 4;").unwrap();
/// let value = evaluate(&ASTNode::Program(program), &env).unwrap();
/// assert_eq!(value, Value::Number(14.0));
/// ```
pub fn evaluate(node: &ASTNode, env: &Rc<Environment>) -> Result<Value, TrioError> {
    match node {
        ASTNode::Program(program) => evaluate_program(program, env),
        ASTNode::Statement(statement) => evaluate_statement(statement, env),
        ASTNode::Expression(expression) => evaluate_expression(expression, env),
    }
}

/// Evaluate statements in order; the value of the last one, or Null
pub fn evaluate_program(program: &Program, env: &Rc<Environment>) -> Result<Value, TrioError> {
    evaluate_block(&program.body, env)
}
