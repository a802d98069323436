use serde::{Deserialize, Serialize};
use std::fmt;

/// Target classification of a function parameter.
///
/// `Opaque` means the parameter carries no static numeric expectation; a
/// literal passed there is resolved from the numeric flavor of the whole call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Integer,
    Integer64,
    Float64,
    String,
    Opaque,
}

impl Kind {
    pub fn is_integer(self) -> bool {
        matches!(self, Kind::Integer | Kind::Integer64)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Kind::Float64)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Kind exposed by a coercing wrapper: numeric kinds accept anything.
    pub fn widened(self) -> Kind {
        if self.is_numeric() { Kind::Opaque } else { self }
    }
}

pub fn is_integer_kind(k: Kind) -> bool { k.is_integer() }

pub fn is_float_kind(k: Kind) -> bool { k.is_float() }

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Kind::Integer => "int",
            Kind::Integer64 => "int64",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Opaque => "any",
        };
        f.write_str(s)
    }
}
