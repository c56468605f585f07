//! Lexical scopes.
//!
//! Every frame owns its bindings and points at its parent. Children keep
//! their parents alive through `Rc`; a parent never refers to its children.

use crate::error::{runtime_error, unresolved_variable};
use crate::value::Value;
use core_types::TrioError;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

/// A scope frame: bindings, constant names and an optional parent
pub struct Environment {
    parent: Option<Rc<Environment>>,
    variables: RefCell<HashMap<String, Value>>,
    constants: RefCell<HashSet<String>>,
}

impl Environment {
    /// Create a root frame
    pub fn new_global() -> Rc<Self> {
        Rc::new(Self {
            parent: None,
            variables: RefCell::new(HashMap::new()),
            constants: RefCell::new(HashSet::new()),
        })
    }

    /// Create a frame nested in `parent`
    pub fn with_parent(parent: &Rc<Environment>) -> Rc<Self> {
        Rc::new(Self {
            parent: Some(Rc::clone(parent)),
            variables: RefCell::new(HashMap::new()),
            constants: RefCell::new(HashSet::new()),
        })
    }

    /// Enclosing frame, if any
    pub fn parent(&self) -> Option<&Rc<Environment>> {
        self.parent.as_ref()
    }

    /// Bind `name` in this frame.
    ///
    /// Fails when the name is already bound here; shadowing a name from an
    /// enclosing frame is allowed.
    pub fn declare(&self, name: &str, value: Value, constant: bool) -> Result<Value, TrioError> {
        let mut variables = self.variables.borrow_mut();
        if variables.contains_key(name) {
            return Err(runtime_error(format!(
                "cannot redeclare variable \"{}\"",
                name
            )));
        }
        variables.insert(name.to_string(), value.clone());
        if constant {
            self.constants.borrow_mut().insert(name.to_string());
        }
        Ok(value)
    }

    /// Find the nearest frame that binds `name`
    pub fn resolve(self: &Rc<Self>, name: &str) -> Result<Rc<Environment>, TrioError> {
        if self.contains_local(name) {
            return Ok(Rc::clone(self));
        }
        match &self.parent {
            Some(parent) => parent.resolve(name),
            None => Err(unresolved_variable(name)),
        }
    }

    /// Current value of `name`
    pub fn lookup(&self, name: &str) -> Result<Value, TrioError> {
        if let Some(value) = self.variables.borrow().get(name) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.lookup(name),
            None => Err(unresolved_variable(name)),
        }
    }

    /// Rebind `name` in the frame that owns it
    pub fn assign(&self, name: &str, value: Value) -> Result<Value, TrioError> {
        if self.contains_local(name) {
            if self.constants.borrow().contains(name) {
                return Err(runtime_error(format!(
                    "cannot assign to constant \"{}\"",
                    name
                )));
            }
            self.variables
                .borrow_mut()
                .insert(name.to_string(), value.clone());
            return Ok(value);
        }
        match &self.parent {
            Some(parent) => parent.assign(name, value),
            None => Err(unresolved_variable(name)),
        }
    }

    /// Bind a constant, replacing any existing binding in this frame
    fn define_constant(&self, name: &str, value: Value) {
        self.variables.borrow_mut().insert(name.to_string(), value);
        self.constants.borrow_mut().insert(name.to_string());
    }

    /// Whether the frame owning `name` marks it constant
    pub fn is_constant(&self, name: &str) -> bool {
        if self.contains_local(name) {
            return self.constants.borrow().contains(name);
        }
        self.parent
            .as_ref()
            .map_or(false, |parent| parent.is_constant(name))
    }

    /// Whether `name` is bound in this frame itself
    pub fn contains_local(&self, name: &str) -> bool {
        self.variables.borrow().contains_key(name)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.variables.borrow().keys().cloned().collect();
        names.sort();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Create a root frame holding the `true`, `false` and `null` constants.
///
/// ```
/// use interpreter::{create_global_environment, Value};
///
/// let env = create_global_environment();
/// assert_eq!(env.lookup("true").unwrap(), Value::Boolean(true));
/// assert!(env.is_constant("null"));
/// ```
pub fn create_global_environment() -> Rc<Environment> {
    let env = Environment::new_global();
    let globals = [
        ("true", Value::Boolean(true)),
        ("false", Value::Boolean(false)),
        ("null", Value::Null),
    ];
    for (name, value) in globals {
        env.define_constant(name, value);
    }
    env
}
