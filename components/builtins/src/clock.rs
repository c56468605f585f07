//! Wall clock access

use chrono::Utc;
use interpreter::{NativeFunction, Value};

/// Milliseconds since the Unix epoch
pub fn now_millis() -> f64 {
    Utc::now().timestamp_millis() as f64
}

/// The `clock` native
pub fn clock_function() -> NativeFunction {
    NativeFunction::new("clock", |_args, _env| Ok(Value::Number(now_millis())))
}
