use crate::value::Value;

/// Render a value the way template output prints it.
pub fn format_value(v: &Value) -> String {
    match v {
        Value::Null => "<nil>".into(),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Real(f) => format_float(*f),
        Value::Literal(l) => l.as_str().to_string(),
        Value::String(s) => s.clone(),
        Value::List(items) => {
            let inner: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", inner.join(" "))
        }
        Value::Assoc(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let parts: Vec<String> = keys
                .into_iter()
                .map(|k| format!("{}:{}", k, format_value(&map[k])))
                .collect();
            format!("map[{}]", parts.join(" "))
        }
        Value::Boxed(inner) => format_value(inner),
    }
}

/// Shortest round-tripping form, switching to exponent notation at the same
/// magnitudes `%v` does.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".into();
    }
    if f.is_infinite() {
        return if f > 0.0 { "+Inf".into() } else { "-Inf".into() };
    }
    let a = f.abs();
    if a != 0.0 && !(1e-4..1e21).contains(&a) {
        let s = format!("{:e}", f);
        // templates render exponents signed and two digits wide: 1e+21
        match s.split_once('e') {
            Some((m, e)) if !e.starts_with('-') => format!("{}e+{:0>2}", m, e),
            Some((m, e)) => format!("{}e-{:0>2}", m, &e[1..]),
            None => s,
        }
    } else {
        f.to_string()
    }
}
