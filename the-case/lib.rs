//! Word case and separator filters.
//!
//! Filters convert between camelCase, StudlyCase and separated words
//! (`snake_case`, `dash-case`, plain spaces) or swap one separator for another.
//! Every filter works on a single string through [`StringTransform`] and on
//! arbitrary [`serde_json::Value`]s through [`Filter`]: strings and other
//! scalars are transformed, sequences element-wise, anything else is returned
//! unchanged.
//!
//! ```
//! use serde_json::json;
//! use the_case::{Filter, StringTransform, WordFilter};
//!
//! let dash = WordFilter::camel_case_to_dash();
//! assert_eq!(dash.transform("CamelCaseWord").unwrap(), "Camel-Case-Word");
//! assert_eq!(
//!   dash.filter(json!(["fooBar", 42, null])).unwrap(),
//!   json!(["foo-Bar", 42, null])
//! );
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod policy;
pub mod recombine;
pub mod separator;
pub mod split;
pub mod substitute;
pub mod value;

pub use config::FilterConfig;
pub use error::{
  Error,
  Result,
};
pub use filter::{
  Filter,
  FilterKind,
  StringTransform,
  WordFilter,
};
pub use policy::{
  DefaultPolicy,
  TextBoundaryPolicy,
};
pub use separator::{
  Separator,
  SeparatorPair,
};
