//! Positional argument accessors for function bodies.
//!
//! These are strict: a body declared with an `int` parameter gets exactly an
//! `Integer` here, so an unresolved literal shows up as a type error.

use litcast_core::{ConvertError, Kind, LitcastError, Result, Value};

fn mismatch(function: &str, index: usize, expected: Kind, found: &Value) -> LitcastError {
    LitcastError::argument(function, index + 1, ConvertError::TypeMismatch { expected, found: found.type_name() })
}

pub fn value<'a>(function: &str, args: &'a [Value], index: usize) -> Result<&'a Value> {
    args.get(index).ok_or_else(|| LitcastError::Arity {
        function: function.to_string(),
        expected: format!("at least {}", index + 1),
        found: args.len(),
    })
}

pub fn int(function: &str, args: &[Value], index: usize) -> Result<i64> {
    match value(function, args, index)? {
        Value::Integer(n) => Ok(*n),
        other => Err(mismatch(function, index, Kind::Integer, other)),
    }
}

pub fn float(function: &str, args: &[Value], index: usize) -> Result<f64> {
    match value(function, args, index)? {
        Value::Real(f) => Ok(*f),
        Value::Integer(n) => Ok(*n as f64),
        other => Err(mismatch(function, index, Kind::Float64, other)),
    }
}

pub fn string<'a>(function: &str, args: &'a [Value], index: usize) -> Result<&'a str> {
    match value(function, args, index)? {
        Value::String(s) => Ok(s),
        other => Err(mismatch(function, index, Kind::String, other)),
    }
}

pub fn list<'a>(function: &str, args: &'a [Value], index: usize) -> Result<&'a [Value]> {
    match value(function, args, index)? {
        Value::List(items) => Ok(items),
        other => Err(LitcastError::runtime(function, format!("cannot slice on type {}", other.type_name()))),
    }
}
