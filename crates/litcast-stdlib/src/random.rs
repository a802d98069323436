use litcast_core::{LitcastError, Result, Value};
use litcast_runtime::{args, Attributes, FuncMap, Output, Param};
use rand::Rng;

const ALPHA: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMERIC: &[u8] = b"0123456789";
const ALPHA_NUM: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub fn register_random(m: &mut FuncMap) {
    m.register("randAlphaNum", &[Param::INT], &[Output::String], Attributes::empty(), |a: &[Value]| {
        random_string("randAlphaNum", a, Charset::Table(ALPHA_NUM))
    });
    m.register("randAlpha", &[Param::INT], &[Output::String], Attributes::empty(), |a: &[Value]| {
        random_string("randAlpha", a, Charset::Table(ALPHA))
    });
    m.register("randNumeric", &[Param::INT], &[Output::String], Attributes::empty(), |a: &[Value]| {
        random_string("randNumeric", a, Charset::Table(NUMERIC))
    });
    m.register("randAscii", &[Param::INT], &[Output::String], Attributes::empty(), |a: &[Value]| {
        random_string("randAscii", a, Charset::Printable)
    });
}

#[derive(Clone, Copy)]
enum Charset {
    Table(&'static [u8]),
    /// Space through tilde.
    Printable,
}

fn random_string(name: &str, a: &[Value], charset: Charset) -> Result<Value> {
    let count = args::int(name, a, 0)?;
    if count < 0 {
        return Err(LitcastError::runtime(name, format!("requested random string length {} is less than 0", count)));
    }
    let mut rng = rand::thread_rng();
    let s: String = (0..count)
        .map(|_| match charset {
            Charset::Table(t) => t[rng.gen_range(0..t.len())] as char,
            Charset::Printable => rng.gen_range(b' '..=b'~') as char,
        })
        .collect();
    Ok(Value::String(s))
}
