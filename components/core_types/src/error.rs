//! Trio error types.
//!
//! Every failure in the pipeline, from an unknown character in the source
//! to a division by zero at runtime, is reported as a [`TrioError`].

use crate::{SourcePosition, StackFrame};
use std::fmt;
use thiserror::Error;

/// The kind of Trio error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character during tokenization
    LexError,
    /// Unexpected token, malformed construct or unterminated string
    ParseError,
    /// Semantic error raised while evaluating
    RuntimeError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::LexError => "LexError",
            ErrorKind::ParseError => "ParseError",
            ErrorKind::RuntimeError => "RuntimeError",
        };
        f.write_str(name)
    }
}

/// A Trio error with message, position and call stack.
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, SourcePosition, TrioError};
///
/// let error = TrioError::new(ErrorKind::LexError, "unknown character '#'")
///     .with_position(SourcePosition { line: 2, column: 7, offset: 15 });
///
/// assert_eq!(error.kind, ErrorKind::LexError);
/// assert_eq!(error.to_string(), "LexError: unknown character '#' (line 2, column 7)");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}{}", location_suffix(.source_position))]
pub struct TrioError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Functions the error propagated through, innermost first
    pub stack: Vec<StackFrame>,
    /// Source position where the error occurred
    pub source_position: Option<SourcePosition>,
}

impl TrioError {
    /// Create an error with no position and an empty stack
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            stack: vec![],
            source_position: None,
        }
    }

    /// Attach a source position
    pub fn with_position(mut self, position: SourcePosition) -> Self {
        self.source_position = Some(position);
        self
    }

    /// Record that the error propagated out of the named function
    pub fn push_frame(&mut self, function_name: impl Into<String>) {
        self.stack.push(StackFrame {
            function_name: function_name.into(),
        });
    }

    /// Whether this error was raised by the lexer
    pub fn is_lex_error(&self) -> bool {
        self.kind == ErrorKind::LexError
    }

    /// Whether this error was raised by the parser
    pub fn is_parse_error(&self) -> bool {
        self.kind == ErrorKind::ParseError
    }

    /// Whether this error was raised by the evaluator
    pub fn is_runtime_error(&self) -> bool {
        self.kind == ErrorKind::RuntimeError
    }
}

fn location_suffix(position: &Option<SourcePosition>) -> String {
    match position {
        Some(pos) => format!(" (line {}, column {})", pos.line, pos.column),
        None => String::new(),
    }
}
