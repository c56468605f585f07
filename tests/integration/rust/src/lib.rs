//! Integration test suite for Trio
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

use core_types::TrioError;
use interpreter::{create_global_environment, evaluate_program, Environment, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Re-export components for test convenience
pub mod components {
    pub use builtins;
    pub use core_types;
    pub use interpreter;
    pub use parser;
    pub use trio_cli;
}

/// A global environment with builtins whose `print` output is captured
pub struct Session {
    /// Global scope
    pub env: Rc<Environment>,
    /// Lines written by `print`
    pub output: Rc<RefCell<Vec<String>>>,
}

impl Session {
    /// Fresh environment with builtins registered
    pub fn new() -> Self {
        let output = Rc::new(RefCell::new(Vec::new()));
        let env = create_global_environment();
        builtins::register_with_output(&env, output.clone())
            .expect("fresh environment accepts builtins");
        Self { env, output }
    }

    /// Parse and evaluate `source` in this session
    pub fn run(&self, source: &str) -> Result<Value, TrioError> {
        let program = parser::parse(source)?;
        evaluate_program(&program, &self.env)
    }

    /// Lines printed so far
    pub fn printed(&self) -> Vec<String> {
        self.output.borrow().clone()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
