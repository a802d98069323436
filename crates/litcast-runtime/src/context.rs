//! Numeric flavor of a call, inferred from the arguments actually passed.
//!
//! A literal alone cannot say whether `3` means an integer or a float. The
//! rest of the call can: if a float shows up anywhere (a fixed position or
//! inside the variadic tail), every literal in that call is read as a float.

use litcast_core::{LiteralShape, Value};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ArgumentContext: u8 {
        const INTEGER    = 0b001;
        const FLOAT      = 0b010;
        /// No argument seen so far had a non-numeric kind. Comparisons read
        /// this: once a string takes part, literals are compared as text.
        const ALL_OPAQUE = 0b100;
    }
}

impl Default for ArgumentContext {
    /// The context of an empty group.
    fn default() -> Self { ArgumentContext::ALL_OPAQUE }
}

impl ArgumentContext {
    pub fn is_mixed(self) -> bool {
        self.contains(ArgumentContext::INTEGER | ArgumentContext::FLOAT)
    }

    pub fn is_integer_only(self) -> bool {
        self.contains(ArgumentContext::INTEGER) && !self.contains(ArgumentContext::FLOAT)
    }

    pub fn has_numeric(self) -> bool {
        self.intersects(ArgumentContext::INTEGER | ArgumentContext::FLOAT)
    }

    pub fn all_opaque(self) -> bool { self.contains(ArgumentContext::ALL_OPAQUE) }

    /// Combine two independently inferred groups: numeric flags union,
    /// all-opaque only if both groups were.
    pub fn merge(self, other: ArgumentContext) -> ArgumentContext {
        let numeric = (self | other) & (ArgumentContext::INTEGER | ArgumentContext::FLOAT);
        numeric | (self & other & ArgumentContext::ALL_OPAQUE)
    }

    fn observe(&mut self, v: &Value) {
        match v.peel() {
            Value::Integer(_) => self.insert(ArgumentContext::INTEGER),
            Value::Real(_) => self.insert(ArgumentContext::FLOAT),
            Value::Literal(l) => match l.shape() {
                LiteralShape::Integer => self.insert(ArgumentContext::INTEGER),
                LiteralShape::Float => self.insert(ArgumentContext::FLOAT),
                LiteralShape::Malformed => self.remove(ArgumentContext::ALL_OPAQUE),
            },
            _ => self.remove(ArgumentContext::ALL_OPAQUE),
        }
    }
}

/// Infer one group of arguments, each looked at through at most one box.
pub fn guess_group(values: &[Value]) -> ArgumentContext {
    let mut ctx = ArgumentContext::default();
    for v in values {
        ctx.observe(v);
    }
    ctx
}

/// Infer the fixed arguments and, if present, the variadic tail as two
/// groups and merge them.
pub fn guess_groups(fixed: &[Value], tail: Option<&[Value]>) -> ArgumentContext {
    let ctx = guess_group(fixed);
    match tail {
        Some(tail) => ctx.merge(guess_group(tail)),
        None => ctx,
    }
}

/// Infer a whole call. With `is_variadic`, the last argument is the variadic
/// tail packed as a `List` and is inferred as its own group.
pub fn guess_context(args: &[Value], is_variadic: bool) -> ArgumentContext {
    match (is_variadic, args.split_last()) {
        (true, Some((Value::List(tail), fixed))) => guess_groups(fixed, Some(tail.as_slice())),
        _ => guess_groups(args, None),
    }
}
