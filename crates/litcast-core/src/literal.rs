use crate::error::ConvertError;
use crate::kind::Kind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal text of a number whose concrete type is not yet known.
///
/// Decoders produce these instead of `Integer`/`Real` so no precision is lost
/// before the consuming function decides how to read the number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericLiteral(String);

/// How the text of a literal reads when nothing else is known about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralShape {
    Integer,
    Float,
    Malformed,
}

impl NumericLiteral {
    pub fn new<S: Into<String>>(text: S) -> Self { Self(text.into()) }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn into_string(self) -> String { self.0 }

    /// Parse as a platform-sized integer.
    pub fn int(&self) -> Result<i64, ConvertError> {
        self.0
            .parse::<isize>()
            .map(|n| n as i64)
            .map_err(|_| self.format_error(Kind::Integer))
    }

    pub fn int64(&self) -> Result<i64, ConvertError> {
        self.0.parse::<i64>().map_err(|_| self.format_error(Kind::Integer64))
    }

    pub fn float64(&self) -> Result<f64, ConvertError> {
        // f64's parser also takes "inf" and "NaN", which never come out of a decoder
        if !self.0.bytes().any(|b| b.is_ascii_digit()) {
            return Err(self.format_error(Kind::Float64));
        }
        self.0.parse::<f64>().map_err(|_| self.format_error(Kind::Float64))
    }

    pub fn shape(&self) -> LiteralShape {
        if self.int64().is_ok() {
            LiteralShape::Integer
        } else if self.float64().is_ok() {
            LiteralShape::Float
        } else {
            LiteralShape::Malformed
        }
    }

    fn format_error(&self, target: Kind) -> ConvertError {
        ConvertError::NumericFormat { text: self.0.clone(), target }
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for NumericLiteral {
    fn from(s: &str) -> Self { Self::new(s) }
}

impl From<String> for NumericLiteral {
    fn from(s: String) -> Self { Self(s) }
}
