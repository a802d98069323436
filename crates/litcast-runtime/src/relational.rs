//! Literal-aware adapters for the six comparison built-ins.
//!
//! Every argument is treated as an `Opaque` parameter, so the call's own
//! numbers decide how literals are read: `eq "3" "3.0"` resolves both sides
//! to floats and compares `3.0 == 3.0`. When a non-numeric operand takes part
//! (`eq .port "http"`), literals stay text and compare as strings.

use crate::attrs::Attributes;
use crate::compare;
use crate::function::{Function, Output, Param};
use crate::signature::FunctionSignature;
use crate::wrap::{convert_call, CallArgs};
use litcast_core::{Kind, LitcastError, Result, Value};
use log::trace;
use std::sync::{Arc, OnceLock};

pub type BinaryFn = fn(&Value, &Value) -> Result<bool>;
pub type OnePlusFn = fn(&Value, &[Value]) -> Result<bool>;

pub const RELATIONAL_NAMES: [&str; 6] = ["eq", "ge", "gt", "le", "lt", "ne"];

const OUTPUTS: [Output; 2] = [Output::Bool, Output::Error];

fn relational_sig(fixed: usize, variadic: bool) -> Arc<FunctionSignature> {
    Arc::new(FunctionSignature {
        fixed: vec![Kind::Opaque; fixed],
        variadic: variadic.then_some(Kind::Opaque),
        outputs: OUTPUTS.to_vec(),
    })
}

/// Resolve literals only when every operand is numeric. Otherwise they keep
/// their text, which is how the host compares them against strings.
fn operands(name: &str, sig: &FunctionSignature, args: &[Value]) -> Result<Vec<Value>> {
    let call = CallArgs::split(sig, args);
    let vals = if call.context().all_opaque() {
        convert_call(name, sig, call)?
    } else {
        call.into_flat()
    };
    trace!("{}: comparing {:?}", name, vals);
    Ok(vals)
}

/// `name(a, b...)`: one argument plus a variable tail.
pub fn overload_one_plus(name: &str, prim: OnePlusFn) -> Function {
    let sig = relational_sig(1, true);
    let params = sig.widened_params();
    let fname = name.to_string();
    Function::new(name, &params, &OUTPUTS, Attributes::RELATIONAL | Attributes::COERCING, move |args| {
        let vals = operands(&fname, &sig, args)?;
        match vals.split_first() {
            Some((first, rest)) => prim(first, rest).map(Value::Boolean),
            None => Err(LitcastError::NoComparison),
        }
    })
}

/// `name(a, b)`: exactly two arguments.
pub fn overload_tuple(name: &str, prim: BinaryFn) -> Function {
    let sig = relational_sig(2, false);
    let params = [Param::ANY, Param::ANY];
    let fname = name.to_string();
    Function::new(name, &params, &OUTPUTS, Attributes::RELATIONAL | Attributes::COERCING, move |args| {
        let vals = operands(&fname, &sig, args)?;
        match vals.as_slice() {
            [a, b] => prim(a, b).map(Value::Boolean),
            _ => Err(LitcastError::Arity { function: fname.clone(), expected: "2".into(), found: vals.len() }),
        }
    })
}

static ADAPTERS: OnceLock<Vec<Function>> = OnceLock::new();

/// Adapters for `eq`, `ge`, `gt`, `le`, `lt` and `ne`, built on first use and
/// shared afterwards.
pub fn relational_adapters() -> &'static [Function] {
    ADAPTERS.get_or_init(|| {
        vec![
            overload_one_plus("eq", compare::eq),
            overload_tuple("ge", compare::ge),
            overload_tuple("gt", compare::gt),
            overload_tuple("le", compare::le),
            overload_tuple("lt", compare::lt),
            overload_tuple("ne", compare::ne),
        ]
    })
}
