//! The `Array` constructor

use core_types::{format_number, TrioError};
use interpreter::error::runtime_error;
use interpreter::{NativeFunction, Value};

/// Largest array `new Array(n)` will allocate
pub const MAX_ARRAY_SIZE: usize = 1 << 24;

/// Build an array of `args[0]` Nulls
pub fn construct(args: &[Value]) -> Result<Value, TrioError> {
    let size = match args.first() {
        Some(Value::Number(n)) => *n,
        Some(other) => {
            return Err(runtime_error(format!(
                "Array size must be a number, got {}",
                other.type_name()
            )))
        }
        None => return Err(runtime_error("Array expects a size")),
    };

    if size < 0.0 || size.fract() != 0.0 || size > MAX_ARRAY_SIZE as f64 {
        return Err(runtime_error(format!(
            "invalid Array size {}",
            format_number(size)
        )));
    }

    Ok(Value::array(vec![Value::Null; size as usize]))
}

/// The `Array` native
pub fn array_constructor() -> NativeFunction {
    NativeFunction::new("Array", |args, _env| construct(args))
}
