//! Host functions for Trio programs
//!
//! This crate provides the native functions a Trio program can call:
//! - `print(...values)` - writes display forms separated by spaces
//! - `clock()` - milliseconds since the Unix epoch
//! - `Array(n)` - constructor for an array of `n` nulls, used as `new Array(n)`
//!
//! # Example
//!
//! ```
//! use builtins::register_with_output;
//! use interpreter::{create_global_environment, evaluate_program};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let output = Rc::new(RefCell::new(Vec::new()));
//! let env = create_global_environment();
//! register_with_output(&env, output.clone()).unwrap();
//!
//! let program = parser::parse("let a = new Array(2); a[1] = 'hi'; print(a, a.size);").unwrap();
//! evaluate_program(&program, &env).unwrap();
//!
//! assert_eq!(output.borrow()[0], "[hi, null] 2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod clock;
pub mod console;

pub use console::{Console, ConsoleWriter};

use core_types::TrioError;
use interpreter::{Environment, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Declare every native as a constant in `env`, printing to stdout
pub fn register(env: &Rc<Environment>) -> Result<(), TrioError> {
    register_with_console(env, Console::new())
}

/// Like [`register`], but `print` appends its lines to `output`
pub fn register_with_output(
    env: &Rc<Environment>,
    output: Rc<RefCell<Vec<String>>>,
) -> Result<(), TrioError> {
    register_with_console(env, Console::new_with_output(output))
}

/// Declare every native, with `print` writing through `console`
pub fn register_with_console(env: &Rc<Environment>, console: Console) -> Result<(), TrioError> {
    let natives = [
        console::print_function(Rc::new(console)),
        clock::clock_function(),
        array::array_constructor(),
    ];
    for native in natives {
        let name = native.name.clone();
        env.declare(&name, Value::NativeFunction(native), true)?;
    }
    Ok(())
}
