use crate::literal::{LiteralShape, NumericLiteral};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub type AssocMap = HashMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Literal(NumericLiteral),
    String(String),
    List(Vec<Value>),
    Assoc(AssocMap),
    /// An intermediate result the engine handed back wrapped once more.
    Boxed(Box<Value>),
}

impl Value {
    pub fn literal<S: Into<String>>(s: S) -> Self { Value::Literal(NumericLiteral::new(s)) }
    pub fn string<S: Into<String>>(s: S) -> Self { Value::String(s.into()) }
    pub fn list(items: Vec<Value>) -> Self { Value::List(items) }
    pub fn boxed(v: Value) -> Self { Value::Boxed(Box::new(v)) }
    pub fn assoc(pairs: Vec<(impl Into<String>, Value)>) -> Self {
        let mut m = AssocMap::with_capacity(pairs.len());
        for (k, v) in pairs { m.insert(k.into(), v); }
        Value::Assoc(m)
    }

    /// Strip exactly one level of boxing.
    pub fn unboxed(self) -> Value {
        match self {
            Value::Boxed(inner) => *inner,
            other => other,
        }
    }

    /// Borrowing variant of [`Value::unboxed`].
    pub fn peel(&self) -> &Value {
        match self {
            Value::Boxed(inner) => inner,
            other => other,
        }
    }

    pub fn is_integer_like(&self) -> bool {
        match self {
            Value::Integer(_) => true,
            Value::Literal(l) => l.shape() == LiteralShape::Integer,
            _ => false,
        }
    }

    pub fn is_float_like(&self) -> bool {
        match self {
            Value::Real(_) => true,
            Value::Literal(l) => l.shape() == LiteralShape::Float,
            _ => false,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "nil",
            Value::Boolean(_) => "bool",
            Value::Integer(_) => "int64",
            Value::Real(_) => "float64",
            Value::Literal(_) => "number literal",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Assoc(_) => "map",
            Value::Boxed(_) => "boxed value",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::pretty::format_value(self))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self { Value::Integer(n) }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self { Value::Real(x) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Boolean(b) }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}

impl From<NumericLiteral> for Value {
    fn from(l: NumericLiteral) -> Self { Value::Literal(l) }
}
