//! JSON decoding that keeps every number as a [`NumericLiteral`].
//!
//! `serde_json` is built with `arbitrary_precision`, so a decoded number still
//! carries the exact text it was written with.

use crate::error::Result;
use crate::literal::NumericLiteral;
use crate::value::{AssocMap, Value};

pub fn from_str(src: &str) -> Result<Value> {
    let raw: serde_json::Value = serde_json::from_str(src)?;
    Ok(Value::from_json(raw))
}

impl Value {
    pub fn from_json(j: serde_json::Value) -> Value {
        match j {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Literal(NumericLiteral::new(n.to_string())),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::List(items.into_iter().map(Value::from_json).collect()),
            serde_json::Value::Object(obj) => {
                let mut m = AssocMap::with_capacity(obj.len());
                for (k, v) in obj { m.insert(k, Value::from_json(v)); }
                Value::Assoc(m)
            }
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(n) => serde_json::Value::from(*n),
            Value::Real(f) => serde_json::Value::from(*f),
            Value::Literal(l) => serde_json::Value::Number(l.as_str().parse::<serde_json::Number>()?),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect::<Result<_>>()?),
            Value::Assoc(m) => {
                let mut obj = serde_json::Map::with_capacity(m.len());
                for (k, v) in m { obj.insert(k.clone(), v.to_json()?); }
                serde_json::Value::Object(obj)
            }
            Value::Boxed(inner) => inner.to_json()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_keep_their_text() {
        let v = from_str(r#"{"replicas": 3, "ratio": 0.50, "huge": 12345678901234567890}"#).unwrap();
        let Value::Assoc(m) = v else { panic!("expected map") };
        assert_eq!(m["replicas"], Value::literal("3"));
        assert_eq!(m["ratio"], Value::literal("0.50"));
        assert_eq!(m["huge"], Value::literal("12345678901234567890"));
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(matches!(from_str("{"), Err(crate::LitcastError::Json(_))));
    }
}
