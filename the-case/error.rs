use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("'{option}' must be a string, got {found}")]
  InvalidSeparator {
    option: &'static str,
    found:  &'static str,
  },
  #[error("a search separator must be provided for this filter to work")]
  MissingSearchSeparator,
  #[error("unknown filter '{0}'")]
  UnknownFilter(String),
  #[error("filter options must be a string or a table, got {0}")]
  InvalidOptions(&'static str),
  #[error(transparent)]
  Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Name of a JSON value's type, for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
  use serde_json::Value;

  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
