//! Filter definitions read from TOML.
//!
//! ```toml
//! filter = "camel-case-to-separator"
//!
//! [options]
//! separator = "::"
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::{
  error::Result,
  filter::{
    FilterKind,
    WordFilter,
  },
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
  pub filter:  FilterKind,
  /// Either a bare separator string or a table, see
  /// [`WordFilter::from_options`].
  #[serde(default)]
  pub options: Value,
}

impl FilterConfig {
  pub fn new(filter: FilterKind) -> Self {
    Self {
      filter,
      options: Value::Null,
    }
  }

  pub fn from_toml_str(config: &str) -> Result<Self> {
    Ok(toml::from_str(config)?)
  }

  pub fn build(&self) -> Result<WordFilter> {
    WordFilter::from_options(self.filter, &self.options)
  }
}
