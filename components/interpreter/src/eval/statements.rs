//! Statement evaluation

use super::evaluate_expression;
use crate::environment::Environment;
use crate::value::{FunctionValue, Value};
use core_types::{ensure_sufficient_stack, TrioError};
use parser::{Expression, Statement};
use std::rc::Rc;

/// Evaluate a statement in `env`
pub fn evaluate_statement(statement: &Statement, env: &Rc<Environment>) -> Result<Value, TrioError> {
    ensure_sufficient_stack(|| execute(statement, env))
}

fn execute(statement: &Statement, env: &Rc<Environment>) -> Result<Value, TrioError> {
    match statement {
        Statement::VariableDeclaration {
            name,
            constant,
            value,
        } => {
            let value = match value {
                Some(expression) => evaluate_expression(expression, env)?,
                None => Value::Null,
            };
            env.declare(name, value, *constant)
        }
        Statement::FunctionDeclaration {
            name,
            parameters,
            body,
        } => {
            // The frame holds the function and the function holds the frame.
            // That Rc cycle is never collected, so each call that declares a
            // nested function keeps its frame alive for the life of the process.
            let function = FunctionValue {
                name: name.clone(),
                parameters: parameters.clone(),
                body: body.clone(),
                closure: Rc::clone(env),
            };
            env.declare(name, Value::Function(Rc::new(function)), true)
        }
        Statement::IfStatement {
            condition,
            then_body,
            else_body,
        } => {
            if evaluate_expression(condition, env)?.is_truthy() {
                evaluate_block(then_body, env)
            } else if let Some(else_body) = else_body {
                evaluate_block(else_body, env)
            } else {
                Ok(Value::Null)
            }
        }
        Statement::ForStatement {
            init,
            condition,
            increment,
            body,
        } => evaluate_for(init.as_deref(), condition.as_ref(), increment.as_ref(), body, env),
        Statement::Expression(expression) => evaluate_expression(expression, env),
    }
}

/// Run statements in `env` itself, yielding the last value or Null
pub fn evaluate_block(body: &[Statement], env: &Rc<Environment>) -> Result<Value, TrioError> {
    let mut result = Value::Null;
    for statement in body {
        result = evaluate_statement(statement, env)?;
    }
    Ok(result)
}

fn evaluate_for(
    init: Option<&Statement>,
    condition: Option<&Expression>,
    increment: Option<&Expression>,
    body: &[Statement],
    env: &Rc<Environment>,
) -> Result<Value, TrioError> {
    // One frame for the whole loop, shared by every iteration
    let scope = Environment::with_parent(env);
    if let Some(init) = init {
        evaluate_statement(init, &scope)?;
    }

    let condition = match condition {
        Some(condition) => condition,
        None => {
            tracing::warn!("for loop without a condition, breaking instead of looping forever");
            return Ok(Value::Null);
        }
    };

    let mut result = Value::Null;
    while evaluate_expression(condition, &scope)?.is_truthy() {
        result = evaluate_block(body, &scope)?;
        if let Some(increment) = increment {
            evaluate_expression(increment, &scope)?;
        }
    }
    Ok(result)
}
