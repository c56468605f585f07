//! Core types shared by every Trio component.
//!
//! This crate provides the error model used by the lexer, parser and
//! evaluator, source location tracking, and the canonical number formatting
//! shared by the printer and the runtime.
//!
//! # Overview
//!
//! - [`TrioError`] - Lex, parse and runtime errors with a call stack
//! - [`ErrorKind`] - The three kinds of Trio errors
//! - [`SourcePosition`] - Source code location
//! - [`StackFrame`] - Call stack frame information
//! - [`format_number`] - Display form of a Trio number
//! - [`ensure_sufficient_stack`] - Stack growth for deep recursion
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, TrioError, format_number};
//!
//! let error = TrioError::new(ErrorKind::RuntimeError, "division by zero");
//! assert_eq!(error.to_string(), "RuntimeError: division by zero");
//!
//! assert_eq!(format_number(14.0), "14");
//! assert_eq!(format_number(2.5), "2.5");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod number;
mod source;
mod stack;

pub use error::{ErrorKind, TrioError};
pub use number::format_number;
pub use source::{SourcePosition, StackFrame};
pub use stack::ensure_sufficient_stack;
