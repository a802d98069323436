//! Wrapper factory.
//!
//! A wrapper has the same name, arity, variadic flag and outputs as the
//! function it wraps; only its numeric parameters are advertised as `Opaque`.
//! Per call it:
//! - splits the flat argument list into fixed arguments and the variadic tail,
//!   unboxing every argument once;
//! - infers one [`ArgumentContext`] over both groups;
//! - converts every argument with its declared kind into a fresh buffer;
//! - calls the original with that buffer and returns its result untouched.

use crate::attrs::Attributes;
use crate::context::{guess_groups, ArgumentContext};
use crate::function::{Function, NativeFn};
use crate::resolve::convert_value;
use crate::signature::FunctionSignature;
use litcast_core::{LitcastError, Result, Value};
use log::{debug, trace};
use std::sync::Arc;

/// Arguments of one call, grouped the way the signature declares them.
#[derive(Debug, Clone, PartialEq)]
pub struct CallArgs {
    pub fixed: Vec<Value>,
    pub tail: Option<Vec<Value>>,
}

impl CallArgs {
    pub fn split(sig: &FunctionSignature, args: &[Value]) -> Self {
        let n = sig.fixed.len().min(args.len());
        let fixed = args[..n].iter().cloned().map(Value::unboxed).collect();
        let tail = sig
            .is_variadic()
            .then(|| args[n..].iter().cloned().map(Value::unboxed).collect());
        Self { fixed, tail }
    }

    pub fn context(&self) -> ArgumentContext {
        guess_groups(&self.fixed, self.tail.as_deref())
    }

    pub fn len(&self) -> usize {
        self.fixed.len() + self.tail.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn into_flat(self) -> Vec<Value> {
        let mut out = self.fixed;
        out.extend(self.tail.unwrap_or_default());
        out
    }
}

/// Convert every argument of a call under one shared context. The first
/// failure aborts the whole call.
pub fn convert_call(name: &str, sig: &FunctionSignature, args: CallArgs) -> Result<Vec<Value>> {
    let ctx = args.context();
    trace!("{}: argument context {:?}", name, ctx);
    let mut out = Vec::with_capacity(args.len());
    for (i, (v, kind)) in args.fixed.into_iter().zip(&sig.fixed).enumerate() {
        out.push(convert_value(v, *kind, ctx).map_err(|e| LitcastError::argument(name, i + 1, e))?);
    }
    if let (Some(tail), Some(kind)) = (args.tail, sig.variadic) {
        let base = out.len();
        for (i, v) in tail.into_iter().enumerate() {
            out.push(convert_value(v, kind, ctx).map_err(|e| LitcastError::argument(name, base + i + 1, e))?);
        }
    }
    Ok(out)
}

pub fn build_wrapper(name: &str, f: &Function) -> Result<Function> {
    let sig = FunctionSignature::derive(f).map_err(|e| {
        debug!("not wrapping {}: {}", name, e);
        e
    })?;
    let sig = Arc::new(sig);
    let params = sig.widened_params();
    let outputs = sig.outputs.clone();
    let inner = f.clone();
    let fname = name.to_string();
    let imp: NativeFn = Arc::new(move |args: &[Value]| -> Result<Value> {
        let call = CallArgs::split(&sig, args);
        let converted = convert_call(&fname, &sig, call)?;
        inner.call(&converted)
    });
    Ok(Function::from_native(name.to_string(), params, outputs, f.attrs() | Attributes::COERCING, imp))
}
