use serde_json::json;
use the_case::{
  Error,
  Filter,
  FilterConfig,
  FilterKind,
  StringTransform,
  WordFilter,
  policy::{
    Ascii,
    Unicode,
  },
  recombine::{
    SeparatorRecombiner,
    StudlyCaseAdapter,
    recombine,
    to_studly,
  },
  split::{
    CaseSplitter,
    split,
  },
  substitute::substitute,
};

#[test]
fn camel_case_to_dash() {
  assert_eq!(split::<Unicode>("CamelCaseWord", "-"), "Camel-Case-Word");
  assert_eq!(split::<Ascii>("CamelCaseWord", "-"), "Camel-Case-Word");
}

#[test]
fn acronym_boundary() {
  assert_eq!(split::<Unicode>("HTTPServerError", "_"), "HTTP_Server_Error");
  assert_eq!(
    WordFilter::camel_case_to_underscore()
      .transform("HTTPServerError")
      .unwrap(),
    "HTTP_Server_Error"
  );
}

#[test]
fn dash_to_camel() {
  assert_eq!(recombine::<Unicode>("dash-to-camel", "-"), "DashToCamel");
  assert_eq!(
    SeparatorRecombiner::<Ascii>::new("-")
      .transform("dash-to-camel")
      .unwrap(),
    "DashToCamel"
  );
}

#[test]
fn underscore_to_studly_lowercases_first_char() {
  assert_eq!(to_studly::<Unicode>("under_score_case", "_"), "underScoreCase");
  assert_eq!(
    StudlyCaseAdapter::<Unicode>::new("_")
      .transform("under_score_case")
      .unwrap(),
    "underScoreCase"
  );
}

#[test]
fn separator_substitution() {
  assert_eq!(substitute("a-b-c", "-", "_"), "a_b_c");
  assert_eq!(
    WordFilter::dash_to_underscore().filter(json!("a-b-c")).unwrap(),
    json!("a_b_c")
  );
}

#[test]
fn number_passes_through_splitter() {
  assert_eq!(
    CaseSplitter::<Unicode>::new("-").filter(json!(42)).unwrap(),
    json!(42)
  );
  assert_eq!(
    WordFilter::camel_case_to_dash().filter(json!(42)).unwrap(),
    json!(42)
  );
}

#[test]
fn split_then_recombine_restores_words() {
  let words = ["CamelCaseWord", "HTTPServerError", "Version2Beta"];
  for word in words {
    let dashed = split::<Unicode>(word, "-");
    assert_eq!(recombine::<Unicode>(&dashed, "-"), word);
  }
}

#[test]
fn every_kind_builds_from_config() {
  for &kind in FilterKind::VARIANTS {
    let config = FilterConfig::from_toml_str(&format!("filter = \"{kind}\"")).unwrap();
    let filter = config.build().unwrap();
    assert_eq!(filter.filter(json!(null)).unwrap(), json!(null));
    assert_eq!(filter.filter(json!({"a": "bC"})).unwrap(), json!({"a": "bC"}));
    assert!(filter.filter(json!(["x"])).is_ok());
  }
}

#[test]
fn configuration_errors_surface() {
  assert!(matches!(
    WordFilter::from_options(FilterKind::CamelCaseToSeparator, &json!({"separator": true})),
    Err(Error::InvalidSeparator { .. })
  ));
  assert!(matches!(
    "no-such-filter".parse::<FilterKind>(),
    Err(Error::UnknownFilter(_))
  ));
}
