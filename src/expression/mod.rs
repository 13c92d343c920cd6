//! Expression preprocessing for policy matchers
//!
//! Provides pure functions that prepare matcher text for an expression
//! evaluator:
//! - `escape_assertion`: replace `.` in variable names with `_`
//! - `fix_attribute`: turn `r.sub.Age` style attribute access into
//!   `subAttr(r.sub, "Age")` calls
//!
//! # Examples
//!
//! ```
//! use policy_util::expression::{escape_assertion, fix_attribute};
//!
//! let matcher = fix_attribute("r.sub.Age > 18 && r.obj == p.obj");
//! assert_eq!(matcher, r#"subAttr(r.sub, "Age") > 18 && r.obj == p.obj"#);
//! assert_eq!(escape_assertion("r.obj == p.obj"), "r_obj == p_obj");
//! ```

mod attribute;
mod escape;

pub use attribute::{fix_attribute, AttributeRef, AttributeRewriter};
pub use escape::escape_assertion;
