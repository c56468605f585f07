//! Runtime values produced by the evaluator.
//!
//! Scalars are stored inline. Objects and arrays live behind
//! `Rc<RefCell<..>>` so that assigning them to a second variable aliases the
//! same storage. Functions keep the environment they were declared in.

use crate::environment::Environment;
use core_types::{format_number, TrioError};
use parser::Program;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Host callback behind a [`NativeFunction`]: receives the evaluated
/// arguments and the calling environment.
pub type NativeCallback = dyn Fn(&[Value], &Rc<Environment>) -> Result<Value, TrioError>;

/// Shared, mutable object storage. Keys are kept sorted.
pub type ObjectRef = Rc<RefCell<BTreeMap<String, Value>>>;

/// Shared, mutable array storage. Indexed from 1 by Trio code.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Represents any Trio value.
///
/// # Examples
///
/// ```
/// use interpreter::Value;
///
/// let number = Value::Number(3.0);
/// assert!(number.is_truthy());
/// assert_eq!(number.type_name(), "number");
/// assert_eq!(Value::array(vec![Value::Null; 2]).to_string(), "[null, null]");
/// ```
#[derive(Clone)]
pub enum Value {
    /// Absence of a value
    Null,
    /// IEEE 754 double
    Number(f64),
    /// `true` or `false`
    Boolean(bool),
    /// Text
    String(String),
    /// Key/value map with reference semantics
    Object(ObjectRef),
    /// Fixed-size sequence with reference semantics
    Array(ArrayRef),
    /// User-defined closure
    Function(Rc<FunctionValue>),
    /// Host-provided function
    NativeFunction(NativeFunction),
}

impl Value {
    /// Wrap a map as a new object
    pub fn object(properties: BTreeMap<String, Value>) -> Self {
        Value::Object(Rc::new(RefCell::new(properties)))
    }

    /// Wrap elements as a new array
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(elements)))
    }

    /// Truthiness used by `if` and `for` conditions
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Object(_)
            | Value::Array(_)
            | Value::Function(_)
            | Value::NativeFunction(_) => true,
        }
    }

    /// Name of the value's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::Function(_) => "function",
            Value::NativeFunction(_) => "native-function",
        }
    }

    /// Whether the value is Null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The number inside a Number value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn identity(&self) -> Option<*const ()> {
        match self {
            Value::Object(map) => Some(Rc::as_ptr(map) as *const ()),
            Value::Array(items) => Some(Rc::as_ptr(items) as *const ()),
            _ => None,
        }
    }
}

/// Scalars compare by value; objects, arrays and functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::NativeFunction(a), Value::NativeFunction(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Object(_) | Value::Array(_) => write!(f, "{}", self),
            Value::Function(func) => f.debug_tuple("Function").field(&func.name).finish(),
            Value::NativeFunction(native) => f
                .debug_tuple("NativeFunction")
                .field(&native.name)
                .finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &mut Vec::new())
    }
}

// `seen` holds the containers currently being printed so self-references
// terminate.
fn write_value(
    f: &mut fmt::Formatter<'_>,
    value: &Value,
    seen: &mut Vec<*const ()>,
) -> fmt::Result {
    if let Some(id) = value.identity() {
        if seen.contains(&id) {
            return f.write_str("[Circular]");
        }
        seen.push(id);
    }

    let result = match value {
        Value::Null => f.write_str("null"),
        Value::Number(n) => f.write_str(&format_number(*n)),
        Value::Boolean(b) => write!(f, "{}", b),
        Value::String(s) => f.write_str(s),
        Value::Object(map) => {
            let map = map.borrow();
            if map.is_empty() {
                f.write_str("{}")
            } else {
                f.write_str("{ ")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: ", key)?;
                    write_value(f, item, seen)?;
                }
                f.write_str(" }")
            }
        }
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.borrow().iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(f, item, seen)?;
            }
            f.write_str("]")
        }
        Value::Function(func) => write!(f, "[Function: {}]", func.name),
        Value::NativeFunction(native) => write!(f, "[NativeFunction: {}]", native.name),
    };

    if value.identity().is_some() {
        seen.pop();
    }
    result
}

/// A function declared in Trio source, closed over its defining environment
pub struct FunctionValue {
    /// Declared name
    pub name: String,
    /// Parameter names in order
    pub parameters: Vec<String>,
    /// Function body
    pub body: Program,
    /// Environment the declaration was evaluated in.
    ///
    /// The function is also bound in this environment, so the two form an
    /// `Rc` cycle that is not reclaimed. A closure returned from a call must
    /// keep its frame alive, so a `Weak` link here is not an option.
    pub closure: Rc<Environment>,
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// A function implemented by the host
#[derive(Clone)]
pub struct NativeFunction {
    /// Name shown when the function is printed
    pub name: String,
    callback: Rc<NativeCallback>,
}

impl NativeFunction {
    /// Create a native function from a host callback
    pub fn new<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&[Value], &Rc<Environment>) -> Result<Value, TrioError> + 'static,
    {
        Self {
            name: name.into(),
            callback: Rc::new(callback),
        }
    }

    /// Invoke the callback
    pub fn call(&self, args: &[Value], env: &Rc<Environment>) -> Result<Value, TrioError> {
        (self.callback)(args, env)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunction").field(&self.name).finish()
    }
}
