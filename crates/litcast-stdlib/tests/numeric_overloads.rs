use litcast_core::{json, ConvertError, Kind, LitcastError, Value};
use litcast_runtime::{augment, set_default_registrar, FuncMap};
use pretty_assertions::assert_eq;

fn registries() -> (FuncMap, FuncMap) {
    let _ = env_logger::builder().is_test(true).try_init();
    set_default_registrar(litcast_stdlib::register_all);
    let base = FuncMap::with_defaults();
    let aug = augment(&base).unwrap();
    (base, aug)
}

/// Decode a JSON array the way template data arrives: numbers stay literals.
fn decoded(src: &str) -> Vec<Value> {
    match json::from_str(src).unwrap() {
        Value::List(items) => items,
        other => panic!("expected a JSON array, got {other}"),
    }
}

fn ints(ns: &[i64]) -> Value { Value::List(ns.iter().copied().map(Value::Integer).collect()) }

#[test]
fn arithmetic_sees_literal_values() {
    let (base, aug) = registries();
    let args = decoded("[41]");
    assert_eq!(args, vec![Value::literal("41")]);
    assert_eq!(base.call("add1", &args).unwrap(), Value::Integer(1));
    assert_eq!(aug.call("add1", &args).unwrap(), Value::Integer(42));
    assert_eq!(aug.call("add", &decoded("[1, 2, 3]")).unwrap(), Value::Integer(6));
    assert_eq!(aug.call("max", &decoded("[4, 9, 2]")).unwrap(), Value::Integer(9));
    assert_eq!(aug.call("div", &decoded("[7, 2]")).unwrap(), Value::Integer(3));
}

#[test]
fn float_context_rounds() {
    let (_, aug) = registries();
    assert_eq!(aug.call("round", &decoded("[3.14159, 2]")).unwrap(), Value::Real(3.14));
    assert_eq!(aug.call("ceil", &decoded("[1.2]")).unwrap(), Value::Real(2.0));
    assert_eq!(aug.call("float64", &decoded("[7]")).unwrap(), Value::Real(7.0));
}

#[test]
fn list_builders_take_literal_counts() {
    let (base, aug) = registries();
    let args = decoded("[3]");
    assert!(matches!(base.call("until", &args), Err(LitcastError::Argument { .. })));
    assert_eq!(aug.call("until", &args).unwrap(), ints(&[0, 1, 2]));
    assert_eq!(aug.call("untilStep", &decoded("[0, 10, 4]")).unwrap(), ints(&[0, 4, 8]));
}

#[test]
fn slice_with_literal_bounds() {
    let (_, aug) = registries();
    let list = Value::list(vec![Value::string("a"), Value::string("b"), Value::string("c"), Value::string("d")]);
    let mut args = vec![list];
    args.extend(decoded("[1, 3]"));
    assert_eq!(aug.call("slice", &args).unwrap(), Value::list(vec![Value::string("b"), Value::string("c")]));
}

#[test]
fn comparisons_resolve_both_sides() {
    let (base, aug) = registries();
    let args = decoded("[3, 3.0]");
    assert_eq!(base.call("eq", &args).unwrap(), Value::Boolean(false));
    assert_eq!(aug.call("eq", &args).unwrap(), Value::Boolean(true));
    assert_eq!(aug.call("lt", &decoded("[9, 10]")).unwrap(), Value::Boolean(true));
    assert_eq!(aug.call("ge", &decoded("[2.5, 3]")).unwrap(), Value::Boolean(false));
}

#[test]
fn literal_against_string_matches_raw_registry() {
    let (base, aug) = registries();
    let same = [Value::literal("3"), Value::string("3")];
    assert_eq!(base.call("eq", &same).unwrap(), Value::Boolean(true));
    assert_eq!(aug.call("eq", &same).unwrap(), Value::Boolean(true));
    let port = [Value::literal("80"), Value::string("http")];
    assert_eq!(aug.call("eq", &port).unwrap(), Value::Boolean(false));
    assert_eq!(aug.call("ne", &port).unwrap(), Value::Boolean(true));
    assert_eq!(aug.call("lt", &port).unwrap(), base.call("lt", &port).unwrap());
}

#[test]
fn until_step_near_the_integer_limit() {
    let (_, aug) = registries();
    let args = [Value::Integer(i64::MAX - 1), Value::Integer(i64::MAX), Value::literal("2")];
    assert_eq!(aug.call("untilStep", &args).unwrap(), ints(&[i64::MAX - 1]));
}

#[test]
fn bad_literal_reports_its_position() {
    let (_, aug) = registries();
    let err = aug.call("sub", &decoded("[5, 2.5]")).unwrap_err();
    assert_eq!(
        err,
        LitcastError::Argument {
            function: "sub".into(),
            position: 2,
            source: ConvertError::NumericFormat { text: "2.5".into(), target: Kind::Integer64 },
        }
    );
    assert_eq!(err.to_string(), "sub: argument 2: cannot parse \"2.5\" as int64");
}

#[test]
fn random_strings_have_requested_length() {
    let (_, aug) = registries();
    for name in ["randAlphaNum", "randAlpha", "randNumeric", "randAscii"] {
        match aug.call(name, &decoded("[12]")).unwrap() {
            Value::String(s) => assert_eq!(s.chars().count(), 12, "{name}"),
            other => panic!("{name} returned {other}"),
        }
    }
    assert!(aug.call("randAlpha", &decoded("[-1]")).is_err());
}
