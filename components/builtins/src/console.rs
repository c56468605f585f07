//! The `print` function and its output sink

use interpreter::{NativeFunction, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Console output writer trait
pub trait ConsoleWriter {
    /// Write one line of output
    fn write(&self, message: &str);
}

/// Default console writer that prints to stdout
struct StdoutWriter;

impl ConsoleWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{}", message);
    }
}

/// Writer that captures output to a vector
struct CaptureWriter {
    output: Rc<RefCell<Vec<String>>>,
}

impl ConsoleWriter for CaptureWriter {
    fn write(&self, message: &str) {
        self.output.borrow_mut().push(message.to_string());
    }
}

/// Output sink behind `print`
pub struct Console {
    writer: Box<dyn ConsoleWriter>,
}

impl Console {
    /// Create a new console with default stdout output
    pub fn new() -> Self {
        Self::with_writer(Box::new(StdoutWriter))
    }

    /// Create a console that appends every line to `output`
    pub fn new_with_output(output: Rc<RefCell<Vec<String>>>) -> Self {
        Self::with_writer(Box::new(CaptureWriter { output }))
    }

    /// Create a console around any writer
    pub fn with_writer(writer: Box<dyn ConsoleWriter>) -> Self {
        Console { writer }
    }

    /// Display forms joined by a single space
    pub fn format_values(values: &[Value]) -> String {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// print(...values)
    pub fn print(&self, values: &[Value]) {
        self.writer.write(&Self::format_values(values));
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// The `print` native, writing through `console`
pub fn print_function(console: Rc<Console>) -> NativeFunction {
    NativeFunction::new("print", move |args, _env| {
        console.print(args);
        Ok(Value::Null)
    })
}
