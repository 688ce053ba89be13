//! Filter traits and the named word filter presets.

use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::{
  Map,
  Value,
};

use crate::{
  error::{
    Error,
    Result,
    kind_of,
  },
  recombine::{
    SeparatorRecombiner,
    StudlyCaseAdapter,
  },
  separator::{
    Separator,
    SeparatorPair,
  },
  split::CaseSplitter,
  substitute::SeparatorSubstitution,
  value,
};

/// A transform over a single string.
pub trait StringTransform {
  fn transform(&self, text: &str) -> Result<String>;

  /// Validates the configuration before any value is transformed.
  fn check(&self) -> Result<()> {
    Ok(())
  }
}

/// A transform over arbitrary values; see [`crate::value`] for which values
/// are touched.
pub trait Filter {
  fn filter(&self, value: Value) -> Result<Value>;
}

impl<T: StringTransform + ?Sized> Filter for T {
  fn filter(&self, value: Value) -> Result<Value> {
    value::map(value, self)
  }
}

/// Names of the preset filters, as used in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
  CamelCaseToSeparator,
  CamelCaseToDash,
  CamelCaseToUnderscore,
  SeparatorToCamelCase,
  DashToCamelCase,
  UnderscoreToCamelCase,
  UnderscoreToStudlyCase,
  SeparatorToSeparator,
  SeparatorToDash,
  DashToSeparator,
  DashToUnderscore,
  UnderscoreToDash,
  UnderscoreToSeparator,
}

impl FilterKind {
  pub const VARIANTS: &'static [Self] = &[
    Self::CamelCaseToSeparator,
    Self::CamelCaseToDash,
    Self::CamelCaseToUnderscore,
    Self::SeparatorToCamelCase,
    Self::DashToCamelCase,
    Self::UnderscoreToCamelCase,
    Self::UnderscoreToStudlyCase,
    Self::SeparatorToSeparator,
    Self::SeparatorToDash,
    Self::DashToSeparator,
    Self::DashToUnderscore,
    Self::UnderscoreToDash,
    Self::UnderscoreToSeparator,
  ];

  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::CamelCaseToSeparator => "camel-case-to-separator",
      Self::CamelCaseToDash => "camel-case-to-dash",
      Self::CamelCaseToUnderscore => "camel-case-to-underscore",
      Self::SeparatorToCamelCase => "separator-to-camel-case",
      Self::DashToCamelCase => "dash-to-camel-case",
      Self::UnderscoreToCamelCase => "underscore-to-camel-case",
      Self::UnderscoreToStudlyCase => "underscore-to-studly-case",
      Self::SeparatorToSeparator => "separator-to-separator",
      Self::SeparatorToDash => "separator-to-dash",
      Self::DashToSeparator => "dash-to-separator",
      Self::DashToUnderscore => "dash-to-underscore",
      Self::UnderscoreToDash => "underscore-to-dash",
      Self::UnderscoreToSeparator => "underscore-to-separator",
    }
  }
}

impl fmt::Display for FilterKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for FilterKind {
  type Err = Error;

  fn from_str(name: &str) -> Result<Self> {
    Self::VARIANTS
      .iter()
      .copied()
      .find(|kind| kind.as_str() == name)
      .ok_or_else(|| Error::UnknownFilter(name.to_string()))
  }
}

/// A configured word filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordFilter {
  Split(CaseSplitter),
  Recombine(SeparatorRecombiner),
  Studly(StudlyCaseAdapter),
  Substitute(SeparatorSubstitution),
}

impl WordFilter {
  /// `fooBar` -> `foo Bar` with the given separator (a space by default).
  pub fn camel_case_to_separator(separator: impl Into<Separator>) -> Self {
    Self::Split(CaseSplitter::new(separator))
  }

  pub fn camel_case_to_dash() -> Self {
    Self::camel_case_to_separator(Separator::dash())
  }

  pub fn camel_case_to_underscore() -> Self {
    Self::camel_case_to_separator(Separator::underscore())
  }

  /// `foo bar` -> `FooBar` with the given separator (a space by default).
  pub fn separator_to_camel_case(separator: impl Into<Separator>) -> Self {
    Self::Recombine(SeparatorRecombiner::new(separator))
  }

  pub fn dash_to_camel_case() -> Self {
    Self::separator_to_camel_case(Separator::dash())
  }

  pub fn underscore_to_camel_case() -> Self {
    Self::separator_to_camel_case(Separator::underscore())
  }

  /// `foo_bar` -> `fooBar`. Despite the name the first character is
  /// lowercased; see [`StudlyCaseAdapter`].
  pub fn underscore_to_studly_case() -> Self {
    Self::Studly(StudlyCaseAdapter::new(Separator::underscore()))
  }

  pub fn separator_to_separator(
    search: impl Into<Separator>,
    replacement: impl Into<Separator>,
  ) -> Self {
    Self::Substitute(SeparatorSubstitution::new(search, replacement))
  }

  pub fn separator_to_dash(separator: impl Into<Separator>) -> Self {
    Self::separator_to_separator(separator, Separator::dash())
  }

  pub fn dash_to_separator(separator: impl Into<Separator>) -> Self {
    Self::separator_to_separator(Separator::dash(), separator)
  }

  pub fn dash_to_underscore() -> Self {
    Self::separator_to_separator(Separator::dash(), Separator::underscore())
  }

  pub fn underscore_to_dash() -> Self {
    Self::separator_to_separator(Separator::underscore(), Separator::dash())
  }

  pub fn underscore_to_separator(separator: impl Into<Separator>) -> Self {
    Self::separator_to_separator(Separator::underscore(), separator)
  }

  /// Builds the preset `kind` from an option bag.
  ///
  /// `options` may be null (all defaults), a string (the separator, or the
  /// search separator for [`FilterKind::SeparatorToSeparator`]) or an object
  /// with `separator`, `search_separator` and `replacement_separator` keys.
  /// Missing keys keep the preset defaults; `search_separator = null` unsets
  /// the search separator. Presets with fixed separators ignore the options.
  pub fn from_options(kind: FilterKind, options: &Value) -> Result<Self> {
    tracing::debug!(%kind, %options, "building word filter");

    let options = Options::parse(kind, options)?;
    let separator = options.separator.unwrap_or_default();

    let filter = match kind {
      FilterKind::CamelCaseToSeparator => Self::camel_case_to_separator(separator),
      FilterKind::CamelCaseToDash => Self::camel_case_to_dash(),
      FilterKind::CamelCaseToUnderscore => Self::camel_case_to_underscore(),
      FilterKind::SeparatorToCamelCase => Self::separator_to_camel_case(separator),
      FilterKind::DashToCamelCase => Self::dash_to_camel_case(),
      FilterKind::UnderscoreToCamelCase => Self::underscore_to_camel_case(),
      FilterKind::UnderscoreToStudlyCase => Self::underscore_to_studly_case(),
      FilterKind::SeparatorToSeparator => {
        let mut separators = SeparatorPair::default();
        if let Some(search) = options.search {
          separators = separators.with_search(search);
        }
        if let Some(replacement) = options.replacement {
          separators = separators.with_replacement(replacement);
        }
        Self::Substitute(SeparatorSubstitution::from_pair(separators))
      },
      FilterKind::SeparatorToDash => Self::separator_to_dash(separator),
      FilterKind::DashToSeparator => Self::dash_to_separator(separator),
      FilterKind::DashToUnderscore => Self::dash_to_underscore(),
      FilterKind::UnderscoreToDash => Self::underscore_to_dash(),
      FilterKind::UnderscoreToSeparator => Self::underscore_to_separator(separator),
    };

    Ok(filter)
  }
}

impl StringTransform for WordFilter {
  fn transform(&self, text: &str) -> Result<String> {
    match self {
      Self::Split(splitter) => splitter.transform(text),
      Self::Recombine(recombiner) => recombiner.transform(text),
      Self::Studly(adapter) => adapter.transform(text),
      Self::Substitute(substitution) => substitution.transform(text),
    }
  }

  fn check(&self) -> Result<()> {
    match self {
      Self::Substitute(substitution) => substitution.check(),
      _ => Ok(()),
    }
  }
}

#[derive(Debug, Default)]
struct Options {
  separator:   Option<Separator>,
  /// `Some(None)` when the search separator is explicitly unset.
  search:      Option<Option<Separator>>,
  replacement: Option<Separator>,
}

impl Options {
  fn parse(kind: FilterKind, options: &Value) -> Result<Self> {
    match options {
      Value::Null => Ok(Self::default()),
      Value::String(separator) if kind == FilterKind::SeparatorToSeparator => {
        Ok(Self {
          search: Some(Some(Separator::new(separator.as_str()))),
          ..Self::default()
        })
      },
      Value::String(separator) => {
        Ok(Self {
          separator: Some(Separator::new(separator.as_str())),
          ..Self::default()
        })
      },
      Value::Object(map) => {
        let search = match map.get("search_separator") {
          None => None,
          Some(Value::Null) => Some(None),
          Some(value) => Some(Some(Separator::from_option("search_separator", value)?)),
        };
        Ok(Self {
          separator: separator_option(map, "separator")?,
          search,
          replacement: separator_option(map, "replacement_separator")?,
        })
      },
      other => Err(Error::InvalidOptions(kind_of(other))),
    }
  }
}

fn separator_option(map: &Map<String, Value>, option: &'static str) -> Result<Option<Separator>> {
  map
    .get(option)
    .map(|value| Separator::from_option(option, value))
    .transpose()
}
