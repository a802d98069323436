use crate::context::ArgumentContext;
use litcast_core::{ConvertError, Kind, NumericLiteral, Value};

/// Turn a literal into the concrete value a parameter of kind `target` takes.
///
/// `Opaque` parameters follow the call's context: integers only gives an
/// int64, any float gives a float64, and no numeric context at all leaves the
/// original text as a string.
pub fn convert_literal(lit: &NumericLiteral, target: Kind, ctx: ArgumentContext) -> Result<Value, ConvertError> {
    match target {
        Kind::Integer => lit.int().map(Value::Integer),
        Kind::Integer64 => lit.int64().map(Value::Integer),
        Kind::Float64 => lit.float64().map(Value::Real),
        Kind::String => Ok(Value::String(lit.as_str().to_string())),
        Kind::Opaque if ctx.is_integer_only() => lit.int64().map(Value::Integer),
        Kind::Opaque if ctx.contains(ArgumentContext::FLOAT) => lit.float64().map(Value::Real),
        Kind::Opaque => Ok(Value::String(lit.as_str().to_string())),
    }
}

/// Convert one argument. Literals go through [`convert_literal`]; concrete
/// values are returned as they are, except that a string parameter refuses
/// anything that is not already a string.
pub fn convert_value(v: Value, target: Kind, ctx: ArgumentContext) -> Result<Value, ConvertError> {
    match v {
        Value::Literal(lit) => convert_literal(&lit, target, ctx),
        Value::String(_) => Ok(v),
        other if target == Kind::String => {
            Err(ConvertError::TypeMismatch { expected: Kind::String, found: other.type_name() })
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> NumericLiteral { NumericLiteral::new(s) }

    #[test]
    fn explicit_kinds_ignore_context() {
        let float_ctx = ArgumentContext::FLOAT;
        assert_eq!(convert_literal(&lit("7"), Kind::Integer64, float_ctx), Ok(Value::Integer(7)));
        assert_eq!(convert_literal(&lit("7"), Kind::Float64, ArgumentContext::INTEGER), Ok(Value::Real(7.0)));
        assert!(convert_literal(&lit("7.5"), Kind::Integer, float_ctx).is_err());
    }

    #[test]
    fn opaque_follows_context() {
        let mixed = ArgumentContext::INTEGER | ArgumentContext::FLOAT;
        assert_eq!(convert_literal(&lit("3"), Kind::Opaque, ArgumentContext::INTEGER), Ok(Value::Integer(3)));
        assert_eq!(convert_literal(&lit("3"), Kind::Opaque, mixed), Ok(Value::Real(3.0)));
        assert_eq!(convert_literal(&lit("3"), Kind::Opaque, ArgumentContext::empty()), Ok(Value::string("3")));
    }

    #[test]
    fn string_parameter_rejects_numbers() {
        let err = convert_value(Value::Integer(1), Kind::String, ArgumentContext::default()).unwrap_err();
        assert_eq!(err, ConvertError::TypeMismatch { expected: Kind::String, found: "int64" });
        assert_eq!(
            convert_value(Value::literal("01"), Kind::String, ArgumentContext::INTEGER),
            Ok(Value::string("01"))
        );
    }

    #[test]
    fn concrete_values_pass_through() {
        let ctx = ArgumentContext::INTEGER;
        assert_eq!(convert_value(Value::Integer(9), Kind::Integer64, ctx), Ok(Value::Integer(9)));
        assert_eq!(convert_value(Value::Real(0.5), Kind::Integer64, ctx), Ok(Value::Real(0.5)));
    }
}
