use litcast_core::{AssocMap, LitcastError, Result, Value};
use litcast_runtime::{args, Attributes, FuncMap, Output, Param};

pub fn register_string(m: &mut FuncMap) {
    m.register("splitn", &[Param::STRING, Param::INT, Param::STRING], &[Output::Assoc], Attributes::empty(), splitn);
    m.register("abbrev", &[Param::INT, Param::STRING], &[Output::String], Attributes::empty(), abbrev);
    m.register("abbrevboth", &[Param::INT, Param::INT, Param::STRING], &[Output::String], Attributes::empty(), abbrevboth);
    m.register("trunc", &[Param::INT, Param::STRING], &[Output::String], Attributes::empty(), trunc);
    m.register("substr", &[Param::INT, Param::INT, Param::STRING], &[Output::String], Attributes::empty(), substr);
    m.register("repeat", &[Param::INT, Param::STRING], &[Output::String], Attributes::empty(), repeat);
    m.register("wrap", &[Param::INT, Param::STRING], &[Output::String], Attributes::empty(), wrap);
    m.register("wrapWith", &[Param::INT, Param::STRING, Param::STRING], &[Output::String], Attributes::empty(), wrap_with);
    m.register("indent", &[Param::INT, Param::STRING], &[Output::String], Attributes::empty(), indent);
    m.register("nindent", &[Param::INT, Param::STRING], &[Output::String], Attributes::empty(), nindent);
    m.register("plural", &[Param::STRING, Param::STRING, Param::INT], &[Output::String], Attributes::empty(), plural);
}

fn chars_of(s: &str) -> Vec<char> { s.chars().collect() }

fn collect(chars: &[char]) -> String { chars.iter().collect() }

/// Split into at most `n` pieces keyed `_0`, `_1`, ...; negative `n` means
/// no limit.
fn splitn(a: &[Value]) -> Result<Value> {
    let sep = args::string("splitn", a, 0)?;
    let n = args::int("splitn", a, 1)?;
    let orig = args::string("splitn", a, 2)?;
    let parts: Vec<String> = match n {
        0 => Vec::new(),
        _ if sep.is_empty() => {
            let chars = chars_of(orig);
            let limit = if n < 0 { chars.len() } else { (n as usize).min(chars.len()) };
            let mut parts: Vec<String> = chars.iter().take(limit.saturating_sub(1)).map(|c| c.to_string()).collect();
            if limit > 0 {
                parts.push(collect(&chars[limit - 1..]));
            }
            parts
        }
        _ if n < 0 => orig.split(sep).map(str::to_string).collect(),
        _ => orig.splitn(n as usize, sep).map(str::to_string).collect(),
    };
    let mut m = AssocMap::with_capacity(parts.len());
    for (i, p) in parts.into_iter().enumerate() {
        m.insert(format!("_{}", i), Value::String(p));
    }
    Ok(Value::Assoc(m))
}

/// Keep a window of `max_width` characters starting near `offset`, marking
/// cut ends with `...`. Callers guarantee `max_width >= 4`.
fn abbreviate_full(s: &str, offset: i64, max_width: i64) -> String {
    let chars = chars_of(s);
    let len = chars.len() as i64;
    if len <= max_width {
        return s.to_string();
    }
    let keep = max_width - 3;
    let mut offset = offset.min(len);
    if len - offset < keep {
        offset = len - keep;
    }
    if offset <= 4 {
        return format!("{}...", collect(&chars[..keep as usize]));
    }
    if offset + keep < len {
        let rest = collect(&chars[offset as usize..]);
        return format!("...{}", abbreviate_full(&rest, 0, keep));
    }
    format!("...{}", collect(&chars[(len - keep) as usize..]))
}

fn abbrev(a: &[Value]) -> Result<Value> {
    let width = args::int("abbrev", a, 0)?;
    let s = args::string("abbrev", a, 1)?;
    if width < 4 {
        return Ok(Value::string(s));
    }
    Ok(Value::String(abbreviate_full(s, 0, width)))
}

fn abbrevboth(a: &[Value]) -> Result<Value> {
    let left = args::int("abbrevboth", a, 0)?;
    let right = args::int("abbrevboth", a, 1)?;
    let s = args::string("abbrevboth", a, 2)?;
    if right < 4 || (left > 0 && right < 7) {
        return Ok(Value::string(s));
    }
    Ok(Value::String(abbreviate_full(s, left, right)))
}

fn trunc(a: &[Value]) -> Result<Value> {
    let c = args::int("trunc", a, 0)?;
    let s = args::string("trunc", a, 1)?;
    let chars = chars_of(s);
    let len = chars.len() as i64;
    let out = if c < 0 && len + c > 0 {
        collect(&chars[(len + c) as usize..])
    } else if c >= 0 && len > c {
        collect(&chars[..c as usize])
    } else {
        s.to_string()
    };
    Ok(Value::String(out))
}

fn substr(a: &[Value]) -> Result<Value> {
    let start = args::int("substr", a, 0)?;
    let end = args::int("substr", a, 1)?;
    let s = args::string("substr", a, 2)?;
    let chars = chars_of(s);
    let len = chars.len() as i64;
    let (from, to) = if start < 0 {
        (0, end.clamp(0, len))
    } else if end < 0 || end > len {
        (start.min(len), len)
    } else {
        (start.min(end), end)
    };
    Ok(Value::String(collect(&chars[from as usize..to as usize])))
}

fn repeat(a: &[Value]) -> Result<Value> {
    let count = args::int("repeat", a, 0)?;
    let s = args::string("repeat", a, 1)?;
    if count < 0 {
        return Err(LitcastError::runtime("repeat", "negative repeat count"));
    }
    Ok(Value::String(s.repeat(count as usize)))
}

/// Break `s` into lines of at most `width` characters at spaces. Words longer
/// than `width` are split only when `wrap_long_words` is set.
pub fn wrap_custom(s: &str, width: i64, newline: &str, wrap_long_words: bool) -> String {
    if s.is_empty() {
        return String::new();
    }
    let newline = if newline.is_empty() { "\n" } else { newline };
    let width = width.max(1) as usize;
    let chars = chars_of(s);
    let len = chars.len();
    let mut offset = 0usize;
    let mut out = String::with_capacity(s.len());
    while len - offset > width {
        if chars[offset] == ' ' {
            offset += 1;
            continue;
        }
        let window = &chars[offset..offset + width + 1];
        match window.iter().rposition(|&c| c == ' ') {
            Some(i) => {
                out.extend(&chars[offset..offset + i]);
                out.push_str(newline);
                offset += i + 1;
            }
            None if wrap_long_words => {
                out.extend(&chars[offset..offset + width]);
                out.push_str(newline);
                offset += width;
            }
            None => {
                let end = offset + width;
                match chars[end..].iter().position(|&c| c == ' ') {
                    Some(i) => {
                        out.extend(&chars[offset..end + i]);
                        out.push_str(newline);
                        offset = end + i + 1;
                    }
                    None => {
                        out.extend(&chars[offset..]);
                        offset = len;
                    }
                }
            }
        }
    }
    out.extend(&chars[offset..]);
    out
}

fn wrap(a: &[Value]) -> Result<Value> {
    let width = args::int("wrap", a, 0)?;
    let s = args::string("wrap", a, 1)?;
    Ok(Value::String(wrap_custom(s, width, "\n", false)))
}

fn wrap_with(a: &[Value]) -> Result<Value> {
    let width = args::int("wrapWith", a, 0)?;
    let sep = args::string("wrapWith", a, 1)?;
    let s = args::string("wrapWith", a, 2)?;
    Ok(Value::String(wrap_custom(s, width, sep, true)))
}

fn indent_text(spaces: i64, s: &str) -> String {
    let pad = " ".repeat(spaces.max(0) as usize);
    format!("{}{}", pad, s.replace('\n', &format!("\n{}", pad)))
}

fn indent(a: &[Value]) -> Result<Value> {
    let spaces = args::int("indent", a, 0)?;
    let s = args::string("indent", a, 1)?;
    Ok(Value::String(indent_text(spaces, s)))
}

fn nindent(a: &[Value]) -> Result<Value> {
    let spaces = args::int("nindent", a, 0)?;
    let s = args::string("nindent", a, 1)?;
    Ok(Value::String(format!("\n{}", indent_text(spaces, s))))
}

fn plural(a: &[Value]) -> Result<Value> {
    let one = args::string("plural", a, 0)?;
    let many = args::string("plural", a, 1)?;
    let count = args::int("plural", a, 2)?;
    Ok(Value::string(if count == 1 { one } else { many }))
}
