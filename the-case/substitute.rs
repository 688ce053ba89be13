//! Literal separator substitution.

use crate::{
  error::{
    Error,
    Result,
  },
  filter::StringTransform,
  separator::{
    Separator,
    SeparatorPair,
  },
};

/// Replaces every occurrence of `search` with `replacement`. The search text is
/// matched literally; an empty search inserts `replacement` at every character
/// boundary, both ends included.
pub fn substitute(text: &str, search: &str, replacement: &str) -> String {
  text.replace(search, replacement)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeparatorSubstitution {
  separators: SeparatorPair,
}

impl SeparatorSubstitution {
  pub fn new(search: impl Into<Separator>, replacement: impl Into<Separator>) -> Self {
    Self {
      separators: SeparatorPair::new(search, replacement),
    }
  }

  pub fn from_pair(separators: SeparatorPair) -> Self {
    Self { separators }
  }

  pub fn separators(&self) -> &SeparatorPair {
    &self.separators
  }

  fn search(&self) -> Result<&Separator> {
    self.separators.search().ok_or(Error::MissingSearchSeparator)
  }
}

impl StringTransform for SeparatorSubstitution {
  fn transform(&self, text: &str) -> Result<String> {
    let search = self.search()?;
    Ok(substitute(text, search, self.separators.replacement()))
  }

  fn check(&self) -> Result<()> {
    self.search().map(|_| ())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_substitute() {
    assert_eq!(substitute("a-b-c", "-", "_"), "a_b_c");
    assert_eq!(substitute("a b c", " ", ""), "abc");
    assert_eq!(substitute("a::b", "::", "."), "a.b");
    assert_eq!(substitute("no match", "_", "-"), "no match");
    assert_eq!(substitute("", "_", "-"), "");
  }

  #[test]
  fn test_substitute_is_literal() {
    assert_eq!(substitute("a.b.c", ".", "-"), "a-b-c");
    assert_eq!(substitute("a+b", "+", "$1"), "a$1b");
    assert_eq!(substitute("abc", ".", "-"), "abc");
    assert_eq!(substitute("a#b", "#", "/"), "a/b");
  }

  #[test]
  fn test_substitute_empty_search() {
    assert_eq!(substitute("ab", "", "-"), "-a-b-");
  }

  #[test]
  fn test_missing_search_separator() {
    let substitution = SeparatorSubstitution::from_pair(SeparatorPair::without_search("-"));
    assert!(matches!(
      substitution.transform("a b"),
      Err(Error::MissingSearchSeparator)
    ));
    assert!(substitution.check().is_err());
  }

  #[test]
  fn test_default_replaces_spaces_with_dashes() {
    let substitution = SeparatorSubstitution::default();
    assert!(substitution.check().is_ok());
    assert_eq!(substitution.transform("one two three").unwrap(), "one-two-three");
  }

  quickcheck::quickcheck! {
    fn round_trip(text: String) -> bool {
      // `|` never occurs in the replaced text, so swapping back is exact.
      if text.contains('|') {
        return true;
      }
      substitute(&substitute(&text, "-", "|"), "|", "-") == text
    }
  }
}
