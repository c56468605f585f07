//! Runtime error constructors

use core_types::{ErrorKind, TrioError};

/// Create a runtime error
pub fn runtime_error(message: impl Into<String>) -> TrioError {
    TrioError::new(ErrorKind::RuntimeError, message)
}

/// Error for a name that no frame in the chain declares
pub fn unresolved_variable(name: &str) -> TrioError {
    runtime_error(format!("cannot resolve variable \"{}\"", name))
}
