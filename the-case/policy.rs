//! Character classes used to find word boundaries.
//!
//! Two regimes exist: [`Unicode`], driven by Unicode general categories, and
//! [`Ascii`], which only recognises ASCII letters and digits and leaves every
//! other character alone. The regime is chosen once at build time through the
//! `unicode` feature and exposed as [`DefaultPolicy`]; filters take it as a type
//! parameter so no call ever branches on it.
//!
//! Both regimes classify pure-ASCII text identically.

use std::fmt::Debug;

use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

#[cfg(feature = "unicode")]
pub type DefaultPolicy = Unicode;
#[cfg(not(feature = "unicode"))]
pub type DefaultPolicy = Ascii;

pub trait TextBoundaryPolicy: Copy + Default + Debug + Send + Sync + 'static {
  fn is_upper(ch: char) -> bool;

  fn is_lower(ch: char) -> bool;

  fn is_digit(ch: char) -> bool;

  /// Whitespace that can never start a word.
  fn is_blank(ch: char) -> bool;

  fn push_upper(ch: char, buf: &mut String);

  fn push_lower(ch: char, buf: &mut String);

  #[inline]
  fn is_lower_or_digit(ch: char) -> bool {
    Self::is_lower(ch) || Self::is_digit(ch)
  }

  /// Lowercases the first character of `text`, leaving the rest untouched.
  fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
      return String::new();
    };
    let mut res = String::with_capacity(text.len());
    Self::push_lower(first, &mut res);
    res.push_str(chars.as_str());
    res
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unicode;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ascii;

/// `\s` of a byte-oriented regex engine.
#[inline]
fn is_ascii_space(ch: char) -> bool {
  matches!(ch, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

impl TextBoundaryPolicy for Unicode {
  #[inline]
  fn is_upper(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::UppercaseLetter
  }

  #[inline]
  fn is_lower(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::LowercaseLetter
  }

  #[inline]
  fn is_digit(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::DecimalNumber
  }

  #[inline]
  fn is_blank(ch: char) -> bool {
    // Control characters like `\t` are not in the separator categories, but
    // treating them as blank keeps ASCII input in line with `Ascii`.
    is_ascii_space(ch)
      || matches!(
        get_general_category(ch),
        GeneralCategory::SpaceSeparator
          | GeneralCategory::LineSeparator
          | GeneralCategory::ParagraphSeparator
      )
  }

  #[inline]
  fn push_upper(ch: char, buf: &mut String) {
    buf.extend(ch.to_uppercase());
  }

  #[inline]
  fn push_lower(ch: char, buf: &mut String) {
    buf.extend(ch.to_lowercase());
  }
}

impl TextBoundaryPolicy for Ascii {
  #[inline]
  fn is_upper(ch: char) -> bool {
    ch.is_ascii_uppercase()
  }

  #[inline]
  fn is_lower(ch: char) -> bool {
    ch.is_ascii_lowercase()
  }

  #[inline]
  fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
  }

  #[inline]
  fn is_blank(ch: char) -> bool {
    is_ascii_space(ch)
  }

  #[inline]
  fn push_upper(ch: char, buf: &mut String) {
    buf.push(ch.to_ascii_uppercase());
  }

  #[inline]
  fn push_lower(ch: char, buf: &mut String) {
    buf.push(ch.to_ascii_lowercase());
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_unicode_classes() {
    assert!(Unicode::is_upper('É'));
    assert!(Unicode::is_upper('Σ'));
    assert!(Unicode::is_lower('é'));
    assert!(Unicode::is_lower('ß'));
    assert!(Unicode::is_digit('٣'));
    assert!(Unicode::is_blank('\u{00A0}'));
    assert!(Unicode::is_blank('\u{2028}'));
    assert!(Unicode::is_blank('\t'));
    assert!(!Unicode::is_blank('_'));
    // Titlecase letters are neither upper nor lower.
    assert!(!Unicode::is_upper('ǅ'));
    assert!(!Unicode::is_lower('ǅ'));
  }

  #[test]
  fn test_ascii_classes() {
    assert!(Ascii::is_upper('A'));
    assert!(!Ascii::is_upper('É'));
    assert!(!Ascii::is_lower('é'));
    assert!(!Ascii::is_digit('٣'));
    assert!(!Ascii::is_blank('\u{00A0}'));
    assert!(Ascii::is_blank('\u{0B}'));
  }

  #[test]
  fn test_case_mapping() {
    let mut buf = String::new();
    Unicode::push_upper('ß', &mut buf);
    Unicode::push_upper('é', &mut buf);
    Ascii::push_upper('é', &mut buf);
    Ascii::push_upper('a', &mut buf);
    assert_eq!(buf, "SSÉéA");
  }

  #[test]
  fn test_lower_first() {
    assert_eq!(Unicode::lower_first("ÉCOLE"), "éCOLE");
    assert_eq!(Ascii::lower_first("ÉCOLE"), "ÉCOLE");
    assert_eq!(Ascii::lower_first("Hello"), "hello");
    assert_eq!(Unicode::lower_first(""), "");
  }

  quickcheck::quickcheck! {
    fn regimes_agree_on_ascii(ch: char) -> bool {
      if !ch.is_ascii() {
        return true;
      }
      Unicode::is_upper(ch) == Ascii::is_upper(ch)
        && Unicode::is_lower(ch) == Ascii::is_lower(ch)
        && Unicode::is_digit(ch) == Ascii::is_digit(ch)
        && Unicode::is_blank(ch) == Ascii::is_blank(ch)
    }
  }
}
