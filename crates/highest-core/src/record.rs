use serde::Serialize;
use serde_json::{Number, Value};

/// A validated `(score, id)` pair taken from one input line.
///
/// Field order is the serialized key order: `score` first, then `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub score: u64,
    pub id: Value,
}

impl Record {
    /// Numbers inside `id` are normalized with [`normalize_numbers`].
    pub fn new(score: u64, id: Value) -> Self {
        Self {
            score,
            id: normalize_numbers(id),
        }
    }
}

/// Rewrite floats with no fractional part as integers, recursively, so
/// `1.0` and `1e2` print as `1` and `100`. Floats outside the `i64`/`u64`
/// range keep their float form.
pub fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(integral_number(n)),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (key, normalize_numbers(value)))
                .collect(),
        ),
        other => other,
    }
}

fn integral_number(n: Number) -> Number {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0; // 2^63
    const U64_BOUND: f64 = 18_446_744_073_709_551_616.0; // 2^64

    let Some(f) = n.as_f64().filter(|f| n.is_f64() && f.fract() == 0.0) else {
        return n;
    };
    if (-I64_BOUND..I64_BOUND).contains(&f) {
        Number::from(f as i64)
    } else if (0.0..U64_BOUND).contains(&f) {
        Number::from(f as u64)
    } else {
        n
    }
}

/// Whether `value` is accepted as a record id.
///
/// Rejected: `null`, `false`, numeric zero and the empty string. Every
/// other value, including empty arrays and objects, is accepted.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Pull a truthy `id` out of a parsed payload. Non-object payloads have no id.
pub fn extract_id(payload: &Value) -> Option<&Value> {
    payload.get("id").filter(|id| is_truthy(id))
}
