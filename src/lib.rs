//! # Policy Util
//!
//! Stateless string and array helpers for an access-control policy engine.
//!
//! ## Modules
//!
//! - `expression` - Matcher preprocessing: dot escaping and ABAC attribute rewriting
//! - `array` - Equality, set equality, deduplication and display for string arrays
//! - `config` - Attribute vocabulary used by the attribute rewriter
//! - `error` - Error type for the fallible vocabulary layer
//!
//! ## Usage
//!
//! ```
//! use policy_util::array::{array_remove_duplicates, array_to_string};
//! use policy_util::expression::fix_attribute;
//!
//! let matcher = fix_attribute("r.sub.Age > 18");
//! assert_eq!(matcher, r#"subAttr(r.sub, "Age") > 18"#);
//!
//! let mut roles = vec!["admin", "reader", "admin"];
//! array_remove_duplicates(&mut roles);
//! assert_eq!(array_to_string(&roles), "admin, reader");
//! ```
pub mod array;
pub mod config;
pub mod error;
pub mod expression;


pub use error::{Error, Result};
