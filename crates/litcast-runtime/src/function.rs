//! Registry entries and the name → function map the template engine
//! dispatches through.

use crate::attrs::Attributes;
use litcast_core::{Kind, LitcastError, Result, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// One declared parameter. A variadic parameter absorbs every remaining
/// argument, each of which is read with `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub kind: Kind,
    pub variadic: bool,
}

impl Param {
    pub const INT: Param = Param::new(Kind::Integer);
    pub const INT64: Param = Param::new(Kind::Integer64);
    pub const FLOAT64: Param = Param::new(Kind::Float64);
    pub const STRING: Param = Param::new(Kind::String);
    pub const ANY: Param = Param::new(Kind::Opaque);

    pub const fn new(kind: Kind) -> Self { Self { kind, variadic: false } }
    pub const fn variadic(kind: Kind) -> Self { Self { kind, variadic: true } }
}

/// Declared result type. A trailing `Error` marks a fallible function, so a
/// `(bool, error)` built-in declares two outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Bool,
    Integer,
    Float,
    String,
    List,
    Assoc,
    Any,
    Error,
}

#[derive(Clone)]
pub struct Function {
    name: String,
    params: Vec<Param>,
    outputs: Vec<Output>,
    attrs: Attributes,
    imp: NativeFn,
}

impl Function {
    pub fn new<F>(name: &str, params: &[Param], outputs: &[Output], attrs: Attributes, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self::from_native(name.to_string(), params.to_vec(), outputs.to_vec(), attrs, Arc::new(f))
    }

    pub(crate) fn from_native(
        name: String,
        params: Vec<Param>,
        outputs: Vec<Output>,
        attrs: Attributes,
        imp: NativeFn,
    ) -> Self {
        Self { name, params, outputs, attrs, imp }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn params(&self) -> &[Param] { &self.params }
    pub fn outputs(&self) -> &[Output] { &self.outputs }
    pub fn attrs(&self) -> Attributes { self.attrs }

    pub fn is_variadic(&self) -> bool { self.params.iter().any(|p| p.variadic) }

    /// Number of arguments that must always be supplied.
    pub fn fixed_arity(&self) -> usize { self.params.iter().filter(|p| !p.variadic).count() }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        self.check_arity(args.len())?;
        (self.imp)(args)
    }

    fn check_arity(&self, found: usize) -> Result<()> {
        let fixed = self.fixed_arity();
        let ok = if self.is_variadic() { found >= fixed } else { found == fixed };
        if ok {
            return Ok(());
        }
        let expected = if self.is_variadic() { format!("at least {}", fixed) } else { fixed.to_string() };
        Err(LitcastError::Arity { function: self.name.clone(), expected, found })
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("outputs", &self.outputs)
            .field("attrs", &self.attrs)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Default)]
pub struct FuncMap {
    funcs: HashMap<String, Function>,
}

static DEFAULT_REGISTRAR: OnceLock<fn(&mut FuncMap)> = OnceLock::new();

/// Install the registration hook [`FuncMap::with_defaults`] runs. Only the
/// first call takes effect.
pub fn set_default_registrar(f: fn(&mut FuncMap)) {
    let _ = DEFAULT_REGISTRAR.set(f);
}

impl FuncMap {
    pub fn new() -> Self { Self::default() }

    pub fn with_defaults() -> Self {
        let mut map = Self::new();
        if let Some(f) = DEFAULT_REGISTRAR.get().copied() {
            f(&mut map);
        }
        map
    }

    pub fn register<F>(&mut self, name: &str, params: &[Param], outputs: &[Output], attrs: Attributes, f: F)
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.insert(Function::new(name, params, outputs, attrs, f));
    }

    /// Add or replace an entry under its own name.
    pub fn insert(&mut self, f: Function) -> Option<Function> {
        self.funcs.insert(f.name().to_string(), f)
    }

    pub fn get(&self, name: &str) -> Option<&Function> { self.funcs.get(name) }

    pub fn contains(&self, name: &str) -> bool { self.funcs.contains_key(name) }

    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        match self.funcs.get(name) {
            Some(f) => f.call(args),
            None => Err(LitcastError::UnknownFunction(name.to_string())),
        }
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.funcs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &Function> { self.funcs.values() }

    pub fn len(&self) -> usize { self.funcs.len() }

    pub fn is_empty(&self) -> bool { self.funcs.is_empty() }
}

impl fmt::Debug for FuncMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
