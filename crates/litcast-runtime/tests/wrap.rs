use litcast_core::{ConvertError, Kind, LitcastError, Result, Value};
use litcast_runtime::{build_wrapper, Attributes, Function, FunctionSignature, Output, Param};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

type Calls = Arc<Mutex<Vec<Vec<Value>>>>;

fn spy(name: &str, params: &[Param]) -> (Function, Calls) {
    let calls: Calls = Arc::default();
    let seen = Arc::clone(&calls);
    let f = Function::new(name, params, &[Output::Any], Attributes::empty(), move |args: &[Value]| -> Result<Value> {
        seen.lock().unwrap().push(args.to_vec());
        Ok(Value::Null)
    });
    (f, calls)
}

#[test]
fn wrapper_keeps_shape_and_order() {
    let (f, calls) = spy("sub", &[Param::INT64, Param::INT64]);
    let w = build_wrapper("sub", &f).unwrap();
    assert_eq!(w.params(), &[Param::ANY, Param::ANY]);
    assert_eq!(w.outputs(), f.outputs());
    assert!(!w.is_variadic());

    w.call(&[Value::literal("10"), Value::Integer(4)]).unwrap();
    assert_eq!(calls.lock().unwrap()[0], vec![Value::Integer(10), Value::Integer(4)]);
}

#[test]
fn variadic_wrapper_passes_every_argument() {
    let (f, calls) = spy("max", &[Param::INT64, Param::variadic(Kind::Integer64)]);
    let w = build_wrapper("max", &f).unwrap();
    assert!(w.is_variadic());
    assert_eq!(FunctionSignature::derive(&w).unwrap().fixed.len(), 1);

    let args = vec![Value::literal("1"), Value::boxed(Value::literal("2")), Value::Integer(3), Value::literal("-4")];
    let before = args.clone();
    w.call(&args).unwrap();
    assert_eq!(args, before);
    assert_eq!(
        calls.lock().unwrap()[0],
        vec![Value::Integer(1), Value::Integer(2), Value::Integer(3), Value::Integer(-4)]
    );
}

#[test]
fn failed_conversion_never_reaches_the_original() {
    let (f, calls) = spy("until", &[Param::INT]);
    let w = build_wrapper("until", &f).unwrap();
    let err = w.call(&[Value::literal("2.5")]).unwrap_err();
    assert_eq!(
        err,
        LitcastError::Argument {
            function: "until".into(),
            position: 1,
            source: ConvertError::NumericFormat { text: "2.5".into(), target: Kind::Integer },
        }
    );
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn string_parameter_gets_literal_text() {
    let (f, calls) = spy("repeat", &[Param::INT, Param::STRING]);
    let w = build_wrapper("repeat", &f).unwrap();
    w.call(&[Value::literal("2"), Value::literal("1.50")]).unwrap();
    assert_eq!(calls.lock().unwrap()[0], vec![Value::Integer(2), Value::string("1.50")]);
    let err = w.call(&[Value::literal("2"), Value::list(vec![])]).unwrap_err();
    assert!(matches!(err, LitcastError::Argument { position: 2, source: ConvertError::TypeMismatch { .. }, .. }));
}

#[test]
fn unsupported_signature_fails_at_build_time() {
    let (f, _) = spy("bad", &[Param::variadic(Kind::Integer), Param::variadic(Kind::Integer)]);
    assert!(matches!(build_wrapper("bad", &f), Err(LitcastError::WrapperConstruction { .. })));
}

#[test]
fn arity_errors_come_from_the_wrapper() {
    let (f, calls) = spy("sub", &[Param::INT64, Param::INT64]);
    let w = build_wrapper("sub", &f).unwrap();
    assert!(matches!(w.call(&[Value::Integer(1)]), Err(LitcastError::Arity { found: 1, .. })));
    assert!(calls.lock().unwrap().is_empty());
}
