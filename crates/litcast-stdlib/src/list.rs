use crate::cast::to_int64;
use litcast_core::{Kind, LitcastError, Result, Value};
use litcast_runtime::{args, Attributes, FuncMap, Output, Param};

pub fn register_list(m: &mut FuncMap) {
    m.register("until", &[Param::INT], &[Output::List], Attributes::empty(), until);
    m.register("untilStep", &[Param::INT, Param::INT, Param::INT], &[Output::List], Attributes::empty(), until_step_fn);
    m.register("slice", &[Param::ANY, Param::variadic(Kind::Opaque)], &[Output::Any], Attributes::NUMERIC, slice);
}

pub fn until_step(start: i64, stop: i64, step: i64) -> Vec<i64> {
    let mut out = Vec::new();
    if stop < start {
        if step >= 0 {
            return out;
        }
        let mut i = Some(start);
        while let Some(n) = i.filter(|n| *n > stop) {
            out.push(n);
            i = n.checked_add(step);
        }
        return out;
    }
    if step <= 0 {
        return out;
    }
    let mut i = Some(start);
    while let Some(n) = i.filter(|n| *n < stop) {
        out.push(n);
        i = n.checked_add(step);
    }
    out
}

fn int_list(items: Vec<i64>) -> Value { Value::List(items.into_iter().map(Value::Integer).collect()) }

fn until(a: &[Value]) -> Result<Value> {
    let count = args::int("until", a, 0)?;
    let step = if count < 0 { -1 } else { 1 };
    Ok(int_list(until_step(0, count, step)))
}

fn until_step_fn(a: &[Value]) -> Result<Value> {
    let start = args::int("untilStep", a, 0)?;
    let stop = args::int("untilStep", a, 1)?;
    let step = args::int("untilStep", a, 2)?;
    Ok(int_list(until_step(start, stop, step)))
}

/// `slice list [start [end]]`
fn slice(a: &[Value]) -> Result<Value> {
    let items = args::list("slice", a, 0)?;
    let indices = &a[1..];
    let start = indices.first().map_or(0, to_int64);
    let end = indices.get(1).map_or(items.len() as i64, to_int64);
    if start < 0 || end < start || end > items.len() as i64 {
        return Err(LitcastError::runtime(
            "slice",
            format!("slice bounds out of range [{}:{}] with length {}", start, end, items.len()),
        ));
    }
    Ok(Value::List(items[start as usize..end as usize].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps() {
        assert_eq!(until_step(0, 5, 2), vec![0, 2, 4]);
        assert_eq!(until_step(5, 0, -2), vec![5, 3, 1]);
        assert!(until_step(5, 0, 1).is_empty());
        assert!(until_step(0, 5, 0).is_empty());
    }

    #[test]
    fn steps_stop_at_integer_bounds() {
        assert_eq!(until_step(i64::MAX - 1, i64::MAX, 2), vec![i64::MAX - 1]);
        assert_eq!(until_step(i64::MIN + 1, i64::MIN, -2), vec![i64::MIN + 1]);
    }
}
