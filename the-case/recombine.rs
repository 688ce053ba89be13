//! Separated words to StudlyCase and camelCase.

use std::marker::PhantomData;

use crate::{
  error::Result,
  filter::StringTransform,
  policy::{
    DefaultPolicy,
    TextBoundaryPolicy,
  },
  separator::Separator,
};

pub fn recombine<P: TextBoundaryPolicy>(text: &str, separator: &str) -> String {
  let mut res = String::with_capacity(text.len());
  recombine_with::<P>(text, separator, &mut res);
  res
}

/// Drops every `separator` that is followed by a non-blank character and
/// uppercases that character. The first character of the output is
/// uppercased as well unless it is blank.
///
/// Matches never overlap: in `a--b` the first `-` consumes the second one,
/// giving `A-b`. An empty separator uppercases every non-blank character.
pub fn recombine_with<P: TextBoundaryPolicy>(text: &str, separator: &str, buf: &mut String) {
  let start = buf.len();
  let mut rest = text;

  while let Some(ch) = rest.chars().next() {
    if let Some(after) = rest.strip_prefix(separator)
      && let Some(next) = after.chars().next()
      && !P::is_blank(next)
    {
      P::push_upper(next, buf);
      rest = &after[next.len_utf8()..];
      continue;
    }

    if buf.len() == start && !P::is_blank(ch) {
      P::push_upper(ch, buf);
    } else {
      buf.push(ch);
    }
    rest = &rest[ch.len_utf8()..];
  }
}

/// Joins separated words into StudlyCase (`dash-to-camel` -> `DashToCamel`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorRecombiner<P = DefaultPolicy> {
  separator: Separator,
  policy:    PhantomData<P>,
}

impl<P: TextBoundaryPolicy> SeparatorRecombiner<P> {
  pub fn new(separator: impl Into<Separator>) -> Self {
    Self {
      separator: separator.into(),
      policy:    PhantomData,
    }
  }

  pub fn separator(&self) -> &Separator {
    &self.separator
  }
}

impl<P: TextBoundaryPolicy> Default for SeparatorRecombiner<P> {
  fn default() -> Self {
    Self::new(Separator::default())
  }
}

impl<P: TextBoundaryPolicy> StringTransform for SeparatorRecombiner<P> {
  fn transform(&self, text: &str) -> Result<String> {
    Ok(recombine::<P>(text, &self.separator))
  }
}

/// Recombines like [`SeparatorRecombiner`], then lowercases the first
/// character.
///
/// The output is camelCase (`under_score_case` -> `underScoreCase`) even
/// though the filter built on it is called "underscore to StudlyCase". Plain
/// [`SeparatorRecombiner`] output is the one with a leading capital.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudlyCaseAdapter<P = DefaultPolicy> {
  inner: SeparatorRecombiner<P>,
}

impl<P: TextBoundaryPolicy> StudlyCaseAdapter<P> {
  pub fn new(separator: impl Into<Separator>) -> Self {
    Self {
      inner: SeparatorRecombiner::new(separator),
    }
  }

  pub fn separator(&self) -> &Separator {
    self.inner.separator()
  }
}

impl<P: TextBoundaryPolicy> StringTransform for StudlyCaseAdapter<P> {
  fn transform(&self, text: &str) -> Result<String> {
    let recombined = self.inner.transform(text)?;
    Ok(P::lower_first(&recombined))
  }
}

pub fn to_studly<P: TextBoundaryPolicy>(text: &str, separator: &str) -> String {
  P::lower_first(&recombine::<P>(text, separator))
}
