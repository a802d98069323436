use crate::function::{Function, Output, Param};
use litcast_core::{Kind, LitcastError, Result};

/// Validated shape of a function: fixed parameter kinds, the element kind of
/// a trailing variadic parameter, and declared outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub fixed: Vec<Kind>,
    pub variadic: Option<Kind>,
    pub outputs: Vec<Output>,
}

impl FunctionSignature {
    pub fn derive(f: &Function) -> Result<Self> {
        Self::from_params(f.name(), f.params(), f.outputs())
    }

    pub fn from_params(name: &str, params: &[Param], outputs: &[Output]) -> Result<Self> {
        let unsupported = |reason: &str| LitcastError::WrapperConstruction {
            function: name.to_string(),
            reason: reason.to_string(),
        };
        let variadics = params.iter().filter(|p| p.variadic).count();
        if variadics > 1 {
            return Err(unsupported("more than one variadic parameter"));
        }
        if variadics == 1 && !params.last().is_some_and(|p| p.variadic) {
            return Err(unsupported("variadic parameter must be last"));
        }
        let fixed = params.iter().filter(|p| !p.variadic).map(|p| p.kind).collect();
        let variadic = params.iter().find(|p| p.variadic).map(|p| p.kind);
        Ok(Self { fixed, variadic, outputs: outputs.to_vec() })
    }

    pub fn is_variadic(&self) -> bool { self.variadic.is_some() }

    /// Kind expected at a 0-based argument index.
    pub fn kind_at(&self, index: usize) -> Option<Kind> {
        self.fixed.get(index).copied().or(self.variadic)
    }

    pub fn has_numeric(&self) -> bool {
        self.fixed.iter().chain(self.variadic.iter()).any(|k| k.is_numeric())
    }

    /// Parameters a coercing wrapper advertises: numeric kinds widened to
    /// `Opaque`, positions and the variadic flag kept.
    pub fn widened_params(&self) -> Vec<Param> {
        let mut out: Vec<Param> = self.fixed.iter().map(|k| Param::new(k.widened())).collect();
        if let Some(k) = self.variadic {
            out.push(Param::variadic(k.widened()));
        }
        out
    }
}
