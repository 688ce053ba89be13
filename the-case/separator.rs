//! Separator values shared by the filters.

use std::{
  fmt,
  ops::Deref,
};

use serde_json::Value;

use crate::error::{
  Error,
  Result,
  kind_of,
};

/// A word delimiter, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Separator(String);

impl Separator {
  pub const DASH: &'static str = "-";
  pub const SPACE: &'static str = " ";
  pub const UNDERSCORE: &'static str = "_";

  pub fn new(separator: impl Into<String>) -> Self {
    Self(separator.into())
  }

  pub fn dash() -> Self {
    Self::new(Self::DASH)
  }

  pub fn space() -> Self {
    Self::new(Self::SPACE)
  }

  pub fn underscore() -> Self {
    Self::new(Self::UNDERSCORE)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Reads the separator stored under `option` in an option bag.
  ///
  /// Anything other than a string is rejected.
  pub fn from_option(option: &'static str, value: &Value) -> Result<Self> {
    match value {
      Value::String(separator) => Ok(Self::new(separator.as_str())),
      other => {
        Err(Error::InvalidSeparator {
          option,
          found: kind_of(other),
        })
      },
    }
  }
}

impl Default for Separator {
  fn default() -> Self {
    Self::space()
  }
}

impl Deref for Separator {
  type Target = str;

  fn deref(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Separator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for Separator {
  fn from(separator: &str) -> Self {
    Self::new(separator)
  }
}

impl From<String> for Separator {
  fn from(separator: String) -> Self {
    Self(separator)
  }
}

/// Search and replacement separators of a substitution.
///
/// The search separator may be unset; filtering through a pair without one
/// fails with [`Error::MissingSearchSeparator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorPair {
  search:      Option<Separator>,
  replacement: Separator,
}

impl SeparatorPair {
  pub fn new(search: impl Into<Separator>, replacement: impl Into<Separator>) -> Self {
    Self {
      search:      Some(search.into()),
      replacement: replacement.into(),
    }
  }

  /// A pair with no search separator.
  pub fn without_search(replacement: impl Into<Separator>) -> Self {
    Self {
      search:      None,
      replacement: replacement.into(),
    }
  }

  pub fn search(&self) -> Option<&Separator> {
    self.search.as_ref()
  }

  pub fn replacement(&self) -> &Separator {
    &self.replacement
  }

  pub fn with_search(self, search: Option<Separator>) -> Self {
    Self { search, ..self }
  }

  pub fn with_replacement(self, replacement: Separator) -> Self {
    Self {
      replacement,
      ..self
    }
  }
}

impl Default for SeparatorPair {
  fn default() -> Self {
    Self::new(Separator::space(), Separator::dash())
  }
}
