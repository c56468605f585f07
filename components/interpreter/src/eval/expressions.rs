//! Expression evaluation

use super::evaluate_program;
use crate::environment::Environment;
use crate::error::runtime_error;
use crate::value::{FunctionValue, Value};
use core_types::{ensure_sufficient_stack, format_number, TrioError};
use parser::{BinaryOperator, Expression, Property};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Evaluate an expression in `env`
pub fn evaluate_expression(
    expression: &Expression,
    env: &Rc<Environment>,
) -> Result<Value, TrioError> {
    ensure_sufficient_stack(|| evaluate_node(expression, env))
}

fn evaluate_node(expression: &Expression, env: &Rc<Environment>) -> Result<Value, TrioError> {
    match expression {
        Expression::NumericLiteral(n) => Ok(Value::Number(*n)),
        Expression::StringLiteral(s) => Ok(Value::String(s.clone())),
        Expression::Identifier(name) => env.lookup(name),
        Expression::ObjectLiteral(properties) => evaluate_object_literal(properties, env),
        Expression::BinaryExpr {
            left,
            right,
            operator,
        } => {
            let left = evaluate_expression(left, env)?;
            let right = evaluate_expression(right, env)?;
            evaluate_binary(*operator, &left, &right)
        }
        Expression::AssignmentExpr { assignee, value } => {
            evaluate_assignment(assignee, value, env)
        }
        Expression::MemberExpr {
            object,
            property,
            computed,
        } => {
            let object = evaluate_expression(object, env)?;
            let key = property_key(property, *computed, env)?;
            read_member(&object, &key)
        }
        Expression::CallExpr { callee, args } => {
            let callee = evaluate_expression(callee, env)?;
            let args = evaluate_arguments(args, env)?;
            match callee {
                Value::NativeFunction(native) => native.call(&args, env),
                Value::Function(function) => call_function(&function, args),
                other => Err(runtime_error(format!(
                    "{} is not callable",
                    describe(&other)
                ))),
            }
        }
        Expression::NewExpr { callee, args } => {
            let callee = evaluate_expression(callee, env)?;
            let args = evaluate_arguments(args, env)?;
            match callee {
                Value::NativeFunction(native) => native.call(&args, env),
                other => Err(runtime_error(format!(
                    "{} is not a constructor",
                    describe(&other)
                ))),
            }
        }
    }
}

/// Apply a binary operator to two evaluated operands.
///
/// Numbers support arithmetic and every comparison. Strings and booleans
/// support `==` and `!=`. Any other combination evaluates to Null.
pub fn evaluate_binary(
    operator: BinaryOperator,
    left: &Value,
    right: &Value,
) -> Result<Value, TrioError> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => evaluate_numeric(operator, *l, *r),
        (Value::String(l), Value::String(r)) => Ok(equality(operator, l == r)),
        (Value::Boolean(l), Value::Boolean(r)) => Ok(equality(operator, l == r)),
        _ => Ok(Value::Null),
    }
}

fn evaluate_numeric(operator: BinaryOperator, l: f64, r: f64) -> Result<Value, TrioError> {
    let value = match operator {
        BinaryOperator::Add => Value::Number(l + r),
        BinaryOperator::Sub => Value::Number(l - r),
        BinaryOperator::Mul => Value::Number(l * r),
        BinaryOperator::Div => {
            if r == 0.0 {
                return Err(runtime_error("division by zero"));
            }
            Value::Number(l / r)
        }
        BinaryOperator::Mod => {
            if r == 0.0 {
                return Err(runtime_error("modulo by zero"));
            }
            Value::Number(l % r)
        }
        BinaryOperator::Lt => Value::Boolean(l < r),
        BinaryOperator::LtEq => Value::Boolean(l <= r),
        BinaryOperator::Gt => Value::Boolean(l > r),
        BinaryOperator::GtEq => Value::Boolean(l >= r),
        BinaryOperator::Eq | BinaryOperator::StrictEq => Value::Boolean(l == r),
        BinaryOperator::NotEq => Value::Boolean(l != r),
    };
    Ok(value)
}

fn equality(operator: BinaryOperator, equal: bool) -> Value {
    match operator {
        BinaryOperator::Eq => Value::Boolean(equal),
        BinaryOperator::NotEq => Value::Boolean(!equal),
        _ => Value::Null,
    }
}

fn evaluate_object_literal(
    properties: &[Property],
    env: &Rc<Environment>,
) -> Result<Value, TrioError> {
    let mut map = BTreeMap::new();
    for property in properties {
        let value = match &property.value {
            Some(expression) => evaluate_expression(expression, env)?,
            None => env.lookup(&property.key)?,
        };
        map.insert(property.key.clone(), value);
    }
    Ok(Value::object(map))
}

fn evaluate_arguments(args: &[Expression], env: &Rc<Environment>) -> Result<Vec<Value>, TrioError> {
    args.iter()
        .map(|arg| evaluate_expression(arg, env))
        .collect()
}

/// Call a user function with already evaluated arguments.
///
/// The body runs in a fresh frame whose parent is the environment the
/// function was declared in. Parameters without an argument are bound to
/// Null and surplus arguments are dropped.
pub fn call_function(function: &Rc<FunctionValue>, args: Vec<Value>) -> Result<Value, TrioError> {
    ensure_sufficient_stack(|| invoke(function, args))
}

fn invoke(function: &Rc<FunctionValue>, args: Vec<Value>) -> Result<Value, TrioError> {
    if args.len() != function.parameters.len() {
        tracing::debug!(
            function = %function.name,
            expected = function.parameters.len(),
            received = args.len(),
            "argument count mismatch"
        );
    }

    let scope = Environment::with_parent(&function.closure);
    let mut args = args.into_iter();
    let bound = function.parameters.iter().try_for_each(|name| {
        let arg = args.next().unwrap_or(Value::Null);
        scope.declare(name, arg, false).map(|_| ())
    });

    bound
        .and_then(|()| evaluate_program(&function.body, &scope))
        .map_err(|mut err| {
            err.push_frame(&function.name);
            err
        })
}

/// Property selector after evaluation of a member expression's key
#[derive(Debug)]
enum PropertyKey {
    /// `object.name`
    Named(String),
    /// `object[value]`
    Computed(Value),
}

fn property_key(
    property: &Expression,
    computed: bool,
    env: &Rc<Environment>,
) -> Result<PropertyKey, TrioError> {
    if computed {
        return Ok(PropertyKey::Computed(evaluate_expression(property, env)?));
    }
    match property {
        Expression::Identifier(name) => Ok(PropertyKey::Named(name.clone())),
        other => Err(runtime_error(format!(
            "property after '.' must be an identifier, got {}",
            other
        ))),
    }
}

fn read_member(object: &Value, key: &PropertyKey) -> Result<Value, TrioError> {
    match (object, key) {
        (Value::Array(items), PropertyKey::Named(name)) if name == "size" => {
            Ok(Value::Number(items.borrow().len() as f64))
        }
        (Value::Array(_), PropertyKey::Named(name)) => Err(runtime_error(format!(
            "arrays have no property \"{}\"",
            name
        ))),
        (Value::Array(items), PropertyKey::Computed(index)) => {
            let items = items.borrow();
            let slot = array_slot(index, items.len())?;
            Ok(items[slot].clone())
        }
        (Value::Object(map), key) => {
            let name = object_key(key)?;
            Ok(map.borrow().get(name).cloned().unwrap_or(Value::Null))
        }
        (other, _) => Err(runtime_error(format!(
            "cannot read properties of {}",
            describe(other)
        ))),
    }
}

fn evaluate_assignment(
    assignee: &Expression,
    value: &Expression,
    env: &Rc<Environment>,
) -> Result<Value, TrioError> {
    match assignee {
        Expression::Identifier(name) => {
            let value = evaluate_expression(value, env)?;
            env.assign(name, value)
        }
        Expression::MemberExpr {
            object,
            property,
            computed,
        } => {
            let object = evaluate_expression(object, env)?;
            let key = property_key(property, *computed, env)?;
            let value = evaluate_expression(value, env)?;
            write_member(&object, &key, value)
        }
        other => Err(runtime_error(format!(
            "invalid assignment target {}",
            other
        ))),
    }
}

fn write_member(object: &Value, key: &PropertyKey, value: Value) -> Result<Value, TrioError> {
    match (object, key) {
        (Value::Array(items), PropertyKey::Computed(index)) => {
            let mut items = items.borrow_mut();
            let slot = array_slot(index, items.len())?;
            items[slot] = value.clone();
            Ok(value)
        }
        (Value::Array(_), PropertyKey::Named(name)) => Err(runtime_error(format!(
            "cannot assign to array property \"{}\"",
            name
        ))),
        (Value::Object(map), key) => {
            let name = object_key(key)?.to_string();
            map.borrow_mut().insert(name, value.clone());
            Ok(value)
        }
        (other, _) => Err(runtime_error(format!(
            "cannot set properties of {}",
            describe(other)
        ))),
    }
}

/// Zero-based slot for a one-based Trio index
fn array_slot(index: &Value, size: usize) -> Result<usize, TrioError> {
    let index = match index {
        Value::Number(n) => *n,
        other => {
            return Err(runtime_error(format!(
                "array index must be a number, got {}",
                other.type_name()
            )))
        }
    };
    if index.fract() != 0.0 || index < 1.0 || index > size as f64 {
        return Err(runtime_error(format!(
            "array index {} out of bounds [1, {}]",
            format_number(index),
            size
        )));
    }
    Ok(index as usize - 1)
}

fn object_key(key: &PropertyKey) -> Result<&str, TrioError> {
    match key {
        PropertyKey::Named(name) => Ok(name),
        PropertyKey::Computed(Value::String(name)) => Ok(name),
        PropertyKey::Computed(other) => Err(runtime_error(format!(
            "object key must be a string, got {}",
            other.type_name()
        ))),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Function(_) | Value::NativeFunction(_) => value.to_string(),
        other => other.type_name().to_string(),
    }
}
