//! Applying string transforms to arbitrary values.
//!
//! Strings are transformed directly. Numbers and booleans are transformed
//! through their textual form (`true` is `"1"`, `false` is `""`); when that
//! leaves the text unchanged the original value is kept, so `42` stays a
//! number and `true` stays a boolean. Floats only printable in exponent form
//! (`1e+20`) have no word text and pass through untouched. Sequences are mapped
//! element by element with the same scalar rule, keeping nulls, objects and
//! nested sequences as they are. Null and objects pass through untouched.

use serde_json::Value;

use crate::{
  error::Result,
  filter::StringTransform,
};

/// A filter input, classified once before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterInput {
  Text(String),
  /// A number or a boolean.
  Scalar(Value),
  Sequence(Vec<Value>),
  Other(Value),
}

impl From<Value> for FilterInput {
  fn from(value: Value) -> Self {
    match value {
      Value::String(text) => Self::Text(text),
      Value::Number(_) | Value::Bool(_) => Self::Scalar(value),
      Value::Array(items) => Self::Sequence(items),
      Value::Null | Value::Object(_) => Self::Other(value),
    }
  }
}

pub fn map<T: StringTransform + ?Sized>(value: Value, transform: &T) -> Result<Value> {
  match FilterInput::from(value) {
    FilterInput::Text(text) => {
      transform.check()?;
      transform.transform(&text).map(Value::String)
    },
    FilterInput::Scalar(value) => {
      transform.check()?;
      map_scalar(value, transform)
    },
    FilterInput::Sequence(items) => {
      transform.check()?;
      items
        .into_iter()
        .map(|item| map_element(item, transform))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
    },
    FilterInput::Other(value) => {
      tracing::trace!(value = %value, "value is not filterable, passing through");
      Ok(value)
    },
  }
}

fn map_element<T: StringTransform + ?Sized>(item: Value, transform: &T) -> Result<Value> {
  match item {
    Value::String(text) => transform.transform(&text).map(Value::String),
    Value::Number(_) | Value::Bool(_) => map_scalar(item, transform),
    other => Ok(other),
  }
}

/// Text a number or boolean is filtered as, `None` when it has none.
fn scalar_text(value: &Value) -> Option<String> {
  match value {
    Value::Bool(true) => Some("1".to_string()),
    Value::Bool(false) => Some(String::new()),
    Value::Number(number) => {
      let text = number.to_string();
      (!text.contains(['e', 'E'])).then_some(text)
    },
    _ => None,
  }
}

fn map_scalar<T: StringTransform + ?Sized>(value: Value, transform: &T) -> Result<Value> {
  let Some(text) = scalar_text(&value) else {
    return Ok(value);
  };
  let transformed = transform.transform(&text)?;
  if transformed == text {
    Ok(value)
  } else {
    Ok(Value::String(transformed))
  }
}
