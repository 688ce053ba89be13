//! camelCase and StudlyCase to separated words.
//!
//! A separator is inserted before an uppercase character when
//!
//! - the previous character is lowercase or a digit (`fooBar`, `utf8Name`), or
//! - the previous character is uppercase and the next one is lowercase, which
//!   ends an acronym (`HTTPServer` -> `HTTP Server`).
//!
//! Casing is left as it is.

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

pub fn split<P: TextBoundaryPolicy>(text: &str, separator: &str) -> String {
  let mut res = String::with_capacity(text.len());
  split_with::<P>(text, separator, &mut res);
  res
}

pub fn split_with<P: TextBoundaryPolicy>(text: &str, separator: &str, buf: &mut String) {
  let mut chars = text.chars().peekable();
  let mut prev = None;

  while let Some(ch) = chars.next() {
    if let Some(prev) = prev
      && P::is_upper(ch)
      && (P::is_lower_or_digit(prev)
        || (P::is_upper(prev) && chars.peek().is_some_and(|&next| P::is_lower(next))))
    {
      buf.push_str(separator);
    }
    buf.push(ch);
    prev = Some(ch);
  }
}

/// Inserts a fixed separator at every camelCase word boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSplitter<P = DefaultPolicy> {
  separator: Separator,
  policy:    PhantomData<P>,
}

impl<P: TextBoundaryPolicy> CaseSplitter<P> {
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

impl<P: TextBoundaryPolicy> Default for CaseSplitter<P> {
  fn default() -> Self {
    Self::new(Separator::default())
  }
}

impl<P: TextBoundaryPolicy> StringTransform for CaseSplitter<P> {
  fn transform(&self, text: &str) -> Result<String> {
    Ok(split::<P>(text, &self.separator))
  }
}
