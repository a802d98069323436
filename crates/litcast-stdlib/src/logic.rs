//! Comparison built-ins as a host registry would provide them.
//!
//! These see literals as strings. `augment` swaps them for adapters that
//! resolve literals first.

use litcast_core::{Kind, LitcastError, Result, Value};
use litcast_runtime::{args, compare, Attributes, FuncMap, Output, Param};

const OUTPUTS: [Output; 2] = [Output::Bool, Output::Error];

pub fn register_logic(m: &mut FuncMap) {
    m.register("eq", &[Param::ANY, Param::variadic(Kind::Opaque)], &OUTPUTS, Attributes::RELATIONAL, eq);
    m.register("ne", &[Param::ANY, Param::ANY], &OUTPUTS, Attributes::RELATIONAL, |a| binary("ne", a, compare::ne));
    m.register("lt", &[Param::ANY, Param::ANY], &OUTPUTS, Attributes::RELATIONAL, |a| binary("lt", a, compare::lt));
    m.register("le", &[Param::ANY, Param::ANY], &OUTPUTS, Attributes::RELATIONAL, |a| binary("le", a, compare::le));
    m.register("gt", &[Param::ANY, Param::ANY], &OUTPUTS, Attributes::RELATIONAL, |a| binary("gt", a, compare::gt));
    m.register("ge", &[Param::ANY, Param::ANY], &OUTPUTS, Attributes::RELATIONAL, |a| binary("ge", a, compare::ge));
}

fn eq(a: &[Value]) -> Result<Value> {
    match a.split_first() {
        Some((first, rest)) => compare::eq(first, rest).map(Value::Boolean),
        None => Err(LitcastError::NoComparison),
    }
}

fn binary(name: &str, a: &[Value], op: fn(&Value, &Value) -> Result<bool>) -> Result<Value> {
    let x = args::value(name, a, 0)?;
    let y = args::value(name, a, 1)?;
    op(x, y).map(Value::Boolean)
}
