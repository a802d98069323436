use crate::cast::{to_float64, to_int64};
use litcast_core::{Kind, LitcastError, Result, Value};
use litcast_runtime::{args, Attributes, FuncMap, Output, Param};

pub fn register_math(m: &mut FuncMap) {
    m.register("int64", &[Param::ANY], &[Output::Integer], Attributes::NUMERIC, int64_fn);
    m.register("int", &[Param::ANY], &[Output::Integer], Attributes::NUMERIC, int64_fn);
    m.register("float64", &[Param::ANY], &[Output::Float], Attributes::NUMERIC, float64_fn);
    m.register("add1", &[Param::INT64], &[Output::Integer], Attributes::empty(), add1);
    m.register("add", &[Param::variadic(Kind::Integer64)], &[Output::Integer], Attributes::empty(), add);
    m.register("sub", &[Param::INT64, Param::INT64], &[Output::Integer], Attributes::empty(), sub);
    m.register("mul", &[Param::INT64, Param::variadic(Kind::Integer64)], &[Output::Integer], Attributes::empty(), mul);
    m.register("div", &[Param::INT64, Param::INT64], &[Output::Integer, Output::Error], Attributes::empty(), div);
    m.register("mod", &[Param::INT64, Param::INT64], &[Output::Integer, Output::Error], Attributes::empty(), modulo);
    m.register("max", &[Param::INT64, Param::variadic(Kind::Integer64)], &[Output::Integer], Attributes::empty(), max_fn);
    m.register("biggest", &[Param::INT64, Param::variadic(Kind::Integer64)], &[Output::Integer], Attributes::empty(), max_fn);
    m.register("min", &[Param::INT64, Param::variadic(Kind::Integer64)], &[Output::Integer], Attributes::empty(), min_fn);
    m.register("ceil", &[Param::ANY], &[Output::Float], Attributes::NUMERIC, ceil_fn);
    m.register("floor", &[Param::ANY], &[Output::Float], Attributes::NUMERIC, floor_fn);
    m.register("round", &[Param::ANY, Param::INT, Param::variadic(Kind::Float64)], &[Output::Float], Attributes::NUMERIC, round_fn);
}

fn ints(args: &[Value]) -> impl Iterator<Item = i64> + '_ { args.iter().map(to_int64) }

fn int64_fn(a: &[Value]) -> Result<Value> {
    Ok(Value::Integer(to_int64(args::value("int64", a, 0)?)))
}

fn float64_fn(a: &[Value]) -> Result<Value> {
    Ok(Value::Real(to_float64(args::value("float64", a, 0)?)))
}

fn add1(a: &[Value]) -> Result<Value> {
    Ok(Value::Integer(to_int64(args::value("add1", a, 0)?).wrapping_add(1)))
}

fn add(a: &[Value]) -> Result<Value> {
    Ok(Value::Integer(ints(a).fold(0i64, i64::wrapping_add)))
}

fn sub(a: &[Value]) -> Result<Value> {
    let x = to_int64(args::value("sub", a, 0)?);
    let y = to_int64(args::value("sub", a, 1)?);
    Ok(Value::Integer(x.wrapping_sub(y)))
}

fn mul(a: &[Value]) -> Result<Value> {
    Ok(Value::Integer(ints(a).fold(1i64, i64::wrapping_mul)))
}

fn div(a: &[Value]) -> Result<Value> {
    let x = to_int64(args::value("div", a, 0)?);
    let y = to_int64(args::value("div", a, 1)?);
    if y == 0 {
        return Err(LitcastError::runtime("div", "integer divide by zero"));
    }
    Ok(Value::Integer(x.wrapping_div(y)))
}

fn modulo(a: &[Value]) -> Result<Value> {
    let x = to_int64(args::value("mod", a, 0)?);
    let y = to_int64(args::value("mod", a, 1)?);
    if y == 0 {
        return Err(LitcastError::runtime("mod", "integer divide by zero"));
    }
    Ok(Value::Integer(x.wrapping_rem(y)))
}

fn max_fn(a: &[Value]) -> Result<Value> {
    let first = to_int64(args::value("max", a, 0)?);
    Ok(Value::Integer(ints(&a[1..]).fold(first, i64::max)))
}

fn min_fn(a: &[Value]) -> Result<Value> {
    let first = to_int64(args::value("min", a, 0)?);
    Ok(Value::Integer(ints(&a[1..]).fold(first, i64::min)))
}

fn ceil_fn(a: &[Value]) -> Result<Value> {
    Ok(Value::Real(to_float64(args::value("ceil", a, 0)?).ceil()))
}

fn floor_fn(a: &[Value]) -> Result<Value> {
    Ok(Value::Real(to_float64(args::value("floor", a, 0)?).floor()))
}

/// `round x places [threshold]`: round up when the discarded fraction is at
/// least `threshold` (0.5 unless given).
fn round_fn(a: &[Value]) -> Result<Value> {
    let val = to_float64(args::value("round", a, 0)?);
    let places = args::int("round", a, 1)?;
    let round_on = if a.len() > 2 { args::float("round", a, 2)? } else { 0.5 };
    let pow = 10f64.powi(places.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
    let digit = pow * val;
    let rounded = if digit.fract() >= round_on { digit.ceil() } else { digit.floor() };
    Ok(Value::Real(rounded / pow))
}
