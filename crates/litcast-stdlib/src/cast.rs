//! Loose conversions used by helper bodies. Anything that cannot be read as
//! a number becomes zero; that includes unresolved literals.

use litcast_core::Value;

fn trim_zero_decimal(s: &str) -> &str {
    match s.split_once('.') {
        Some((whole, frac)) if !frac.is_empty() && frac.bytes().all(|b| b == b'0') => whole,
        _ => s,
    }
}

pub fn to_int64(v: &Value) -> i64 {
    match v.peel() {
        Value::Integer(n) => *n,
        Value::Real(f) => *f as i64,
        Value::Boolean(b) => i64::from(*b),
        Value::String(s) => trim_zero_decimal(s.trim()).parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

pub fn to_float64(v: &Value) -> f64 {
    match v.peel() {
        Value::Integer(n) => *n as f64,
        Value::Real(f) => *f,
        Value::Boolean(b) => if *b { 1.0 } else { 0.0 },
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}
