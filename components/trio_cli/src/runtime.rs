//! Runtime orchestration for Trio execution
//!
//! The Runtime owns one global environment, populated with the builtins,
//! and runs every source string against it so that declarations persist
//! from one execution to the next.

use crate::error::{CliError, CliResult};
use builtins::Console;
use interpreter::{create_global_environment, evaluate_program, Environment, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Main runtime that ties the parser, evaluator and builtins together
pub struct Runtime {
    /// Whether to print the parsed program before execution
    print_ast: bool,
    /// Whether to print tokens before parsing
    print_tokens: bool,
    /// Persistent global scope
    env: Rc<Environment>,
}

impl Runtime {
    /// Create a runtime whose `print` writes to stdout
    ///
    /// # Example
    /// ```
    /// use trio_cli::Runtime;
    ///
    /// let runtime = Runtime::new().unwrap();
    /// assert!(!runtime.is_print_ast_enabled());
    /// ```
    pub fn new() -> CliResult<Self> {
        Self::with_console(Console::new())
    }

    /// Create a runtime whose `print` appends to `output`
    pub fn with_output(output: Rc<RefCell<Vec<String>>>) -> CliResult<Self> {
        Self::with_console(Console::new_with_output(output))
    }

    fn with_console(console: Console) -> CliResult<Self> {
        let env = create_global_environment();
        builtins::register_with_console(&env, console)?;
        Ok(Self {
            print_ast: false,
            print_tokens: false,
            env,
        })
    }

    /// Enable AST printing
    pub fn with_print_ast(mut self, enabled: bool) -> Self {
        self.print_ast = enabled;
        self
    }

    /// Enable token printing
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Execute a Trio file
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or execution fails
    ///
    /// # Example
    /// ```no_run
    /// use trio_cli::Runtime;
    ///
    /// let mut runtime = Runtime::new().unwrap();
    /// let result = runtime.execute_file("example.trio").unwrap();
    /// ```
    pub fn execute_file(&mut self, path: &str) -> CliResult<Value> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_string(),
            source,
        })?;
        tracing::debug!(path, bytes = source.len(), "loaded script");

        self.execute_string(&source)
    }

    /// Execute a Trio source string
    ///
    /// # Errors
    /// Returns `CliError::Script` if lexing, parsing or evaluation fails
    ///
    /// # Example
    /// ```
    /// use trio_cli::Runtime;
    /// use interpreter::Value;
    ///
    /// let mut runtime = Runtime::new().unwrap();
    /// runtime.execute_string("let x = 40;").unwrap();
    /// let result = runtime.execute_string("x + 2;").unwrap();
    /// assert_eq!(result, Value::Number(42.0));
    /// ```
    pub fn execute_string(&mut self, source: &str) -> CliResult<Value> {
        if self.print_tokens {
            for token in parser::tokenize(source)? {
                println!("{}", token);
            }
        }

        let program = parser::parse(source)?;

        if self.print_ast {
            print!("{}", program);
        }

        tracing::debug!(statements = program.body.len(), "evaluating program");
        Ok(evaluate_program(&program, &self.env)?)
    }

    /// Start the REPL (Read-Eval-Print Loop)
    ///
    /// # Errors
    /// Returns `CliError` if the line editor fails
    ///
    /// # Example
    /// ```no_run
    /// use trio_cli::Runtime;
    ///
    /// let mut runtime = Runtime::new().unwrap();
    /// runtime.repl().unwrap();
    /// ```
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }

    /// The global environment shared by every execution
    pub fn environment(&self) -> &Rc<Environment> {
        &self.env
    }

    /// Check if AST printing is enabled
    pub fn is_print_ast_enabled(&self) -> bool {
        self.print_ast
    }

    /// Check if token printing is enabled
    pub fn is_print_tokens_enabled(&self) -> bool {
        self.print_tokens
    }
}
