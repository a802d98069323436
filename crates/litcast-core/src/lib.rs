pub mod error;
pub mod json;
pub mod kind;
pub mod literal;
pub mod pretty;
pub mod value;

pub use error::{ConvertError, LitcastError, Result};
pub use kind::{is_float_kind, is_integer_kind, Kind};
pub use literal::{LiteralShape, NumericLiteral};
pub use pretty::format_value;
pub use value::{AssocMap, Value};
