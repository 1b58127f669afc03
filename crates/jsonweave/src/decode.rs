//! Boundary to the external incremental decoder.
//!
//! The crate never parses JSON text itself: [`jiter`] turns the whole
//! accumulated buffer into a best-effort value on every call, tolerating one
//! incomplete trailing string literal. Anything structurally invalid beyond
//! that surfaces as a [`DecodeError`].

use jiter::{JsonValue, PartialMode};
use num_traits::ToPrimitive;

use crate::{
    error::DecodeError,
    value::{Map, Value},
};

/// Decode the entire accumulated buffer into an owned snapshot.
pub(crate) fn decode_partial(buf: &[u8]) -> Result<Value, DecodeError> {
    let parsed = JsonValue::parse_with_config(buf, false, PartialMode::TrailingStrings)?;
    Ok(materialize(&parsed))
}

#[allow(clippy::cast_precision_loss)]
fn materialize(parsed: &JsonValue<'_>) -> Value {
    match parsed {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Boolean(*b),
        JsonValue::Int(i) => Value::Number(*i as f64),
        JsonValue::BigInt(big) => Value::Number(big.to_f64().unwrap_or(f64::INFINITY)),
        JsonValue::Float(f) => Value::Number(*f),
        JsonValue::Str(s) => Value::String(s.as_ref().to_owned()),
        JsonValue::Array(items) => Value::Array(items.iter().map(materialize).collect()),
        JsonValue::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.as_ref().to_owned(), materialize(v)))
                .collect::<Map>(),
        ),
    }
}
