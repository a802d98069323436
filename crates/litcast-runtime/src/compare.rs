//! The six comparison built-ins, implemented over [`Value`] directly.
//!
//! Values are grouped into basic kinds first. Integers and floats compare by
//! numeric value with each other; every other kind only compares with itself.
//! An unresolved literal is just its text here, so `"3"` and `"3.0"` differ
//! until a caller resolves them (see `relational`).

use litcast_core::{LitcastError, Result, Value};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BasicKind {
    Null,
    Bool,
    Int,
    Float,
    String,
    Other,
}

fn basic_kind(v: &Value) -> BasicKind {
    match v {
        Value::Null => BasicKind::Null,
        Value::Boolean(_) => BasicKind::Bool,
        Value::Integer(_) => BasicKind::Int,
        Value::Real(_) => BasicKind::Float,
        Value::Literal(_) | Value::String(_) => BasicKind::String,
        Value::List(_) | Value::Assoc(_) | Value::Boxed(_) => BasicKind::Other,
    }
}

fn is_number(k: BasicKind) -> bool { matches!(k, BasicKind::Int | BasicKind::Float) }

fn text(v: &Value) -> &str {
    match v {
        Value::Literal(l) => l.as_str(),
        Value::String(s) => s,
        _ => "",
    }
}

fn as_f64(v: &Value) -> f64 {
    match v {
        Value::Integer(n) => *n as f64,
        Value::Real(f) => *f,
        _ => f64::NAN,
    }
}

fn numeric_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => Some(x.cmp(y)),
        _ => as_f64(a).partial_cmp(&as_f64(b)),
    }
}

/// True when `a` equals any value in `rest`.
pub fn eq(a: &Value, rest: &[Value]) -> Result<bool> {
    let a = a.peel();
    if rest.is_empty() {
        return Err(LitcastError::NoComparison);
    }
    let k1 = basic_kind(a);
    for b in rest {
        let b = b.peel();
        let k2 = basic_kind(b);
        let truth = if is_number(k1) && is_number(k2) {
            numeric_cmp(a, b) == Some(Ordering::Equal)
        } else if k1 != k2 {
            if k1 != BasicKind::Null && k2 != BasicKind::Null {
                return Err(LitcastError::BadComparison);
            }
            false
        } else {
            match (a, b) {
                (Value::Boolean(x), Value::Boolean(y)) => x == y,
                (Value::Null, Value::Null) => true,
                _ if k1 == BasicKind::String => text(a) == text(b),
                _ => a == b,
            }
        };
        if truth {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn ne(a: &Value, b: &Value) -> Result<bool> {
    eq(a, std::slice::from_ref(b)).map(|t| !t)
}

pub fn lt(a: &Value, b: &Value) -> Result<bool> {
    let (a, b) = (a.peel(), b.peel());
    let (k1, k2) = (basic_kind(a), basic_kind(b));
    if is_number(k1) && is_number(k2) {
        return Ok(numeric_cmp(a, b) == Some(Ordering::Less));
    }
    if k1 != k2 {
        return Err(LitcastError::BadComparison);
    }
    match k1 {
        BasicKind::String => Ok(text(a) < text(b)),
        _ => Err(LitcastError::BadComparisonType),
    }
}

pub fn le(a: &Value, b: &Value) -> Result<bool> {
    Ok(lt(a, b)? || eq(a, std::slice::from_ref(b))?)
}

pub fn gt(a: &Value, b: &Value) -> Result<bool> {
    le(a, b).map(|t| !t)
}

pub fn ge(a: &Value, b: &Value) -> Result<bool> {
    lt(a, b).map(|t| !t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_representations() {
        assert!(eq(&Value::Integer(3), &[Value::Real(3.0)]).unwrap());
        assert!(lt(&Value::Integer(2), &Value::Real(2.5)).unwrap());
        assert!(ge(&Value::Real(2.5), &Value::Integer(2)).unwrap());
    }

    #[test]
    fn eq_matches_any_comparand() {
        let a = Value::string("b");
        assert!(eq(&a, &[Value::string("a"), Value::string("b")]).unwrap());
        assert!(!eq(&a, &[Value::string("a"), Value::string("c")]).unwrap());
        assert_eq!(eq(&a, &[]), Err(LitcastError::NoComparison));
    }

    #[test]
    fn unresolved_literals_are_text() {
        assert!(!eq(&Value::literal("3"), &[Value::literal("3.0")]).unwrap());
        assert!(eq(&Value::literal("3"), &[Value::string("3")]).unwrap());
    }

    #[test]
    fn incompatible_kinds() {
        assert_eq!(eq(&Value::Integer(1), &[Value::string("1")]), Err(LitcastError::BadComparison));
        assert_eq!(lt(&Value::Boolean(true), &Value::Boolean(false)), Err(LitcastError::BadComparisonType));
        assert!(!eq(&Value::Null, &[Value::Integer(0)]).unwrap());
        assert!(eq(&Value::Null, &[Value::Null]).unwrap());
    }

    #[test]
    fn boxed_values_are_looked_through() {
        assert!(eq(&Value::boxed(Value::Integer(4)), &[Value::Integer(4)]).unwrap());
        assert!(gt(&Value::Integer(5), &Value::boxed(Value::Integer(4))).unwrap());
    }
}
