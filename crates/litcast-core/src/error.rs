use crate::kind::Kind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LitcastError>;

/// Failure to turn one argument into the value its parameter expects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("cannot parse {text:?} as {target}")]
    NumericFormat { text: String, target: Kind },
    #[error("expected {expected}, got {found}")]
    TypeMismatch { expected: Kind, found: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LitcastError {
    #[error("{function}: argument {position}: {source}")]
    Argument {
        function: String,
        position: usize,
        #[source]
        source: ConvertError,
    },
    #[error("{function}: wrong number of args: want {expected}, got {found}")]
    Arity { function: String, expected: String, found: usize },
    #[error("cannot wrap {function}: {reason}")]
    WrapperConstruction { function: String, reason: String },
    #[error("missing argument for comparison")]
    NoComparison,
    #[error("incompatible types for comparison")]
    BadComparison,
    #[error("invalid type for comparison")]
    BadComparisonType,
    #[error("{function}: {message}")]
    Runtime { function: String, message: String },
    #[error("function {0:?} not defined")]
    UnknownFunction(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl LitcastError {
    pub fn runtime<F: Into<String>, M: Into<String>>(function: F, message: M) -> Self {
        LitcastError::Runtime { function: function.into(), message: message.into() }
    }

    pub fn argument<F: Into<String>>(function: F, position: usize, source: ConvertError) -> Self {
        LitcastError::Argument { function: function.into(), position, source }
    }
}

impl From<serde_json::Error> for LitcastError {
    fn from(e: serde_json::Error) -> Self { LitcastError::Json(e.to_string()) }
}
