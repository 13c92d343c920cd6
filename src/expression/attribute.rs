//! Attribute access rewriting for ABAC matchers
//!
//! Matchers reference structured attributes as `r.sub.Age`. Evaluators
//! without member lookup cannot resolve those, so each access is rewritten
//! into a call to an attribute hook: `subAttr(r.sub, "Age")`.

use crate::config::AttributeVocabulary;
use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::{debug, trace};

/// Replacement template: `${2}Attr(${1}.${2}, "${3}")`
///
/// Group references are braced so `$2Attr` is not read as a group named `2Attr`.
const REPLACEMENT: &str = r#"${2}Attr(${1}.${2}, "${3}")"#;

/// Rewriter for the default `r`/`p` and `sub`/`obj`/`act` vocabulary
static DEFAULT_REWRITER: Lazy<AttributeRewriter> = Lazy::new(|| {
    AttributeRewriter::new(AttributeVocabulary::default()).expect("Valid default vocabulary")
});

/// One `entity.field.attribute` access found in an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRef<'a> {
    pub entity: &'a str,
    pub field: &'a str,
    pub attribute: &'a str,
}

/// Rewrites attribute access for a given vocabulary
///
/// The attribute name is the longest run of ASCII letters and digits after
/// the second dot, and may be empty. Matches are not anchored to word
/// boundaries.
#[derive(Debug, Clone)]
pub struct AttributeRewriter {
    pattern: Regex,
    vocabulary: AttributeVocabulary,
}

impl Default for AttributeRewriter {
    fn default() -> Self {
        DEFAULT_REWRITER.clone()
    }
}

impl AttributeRewriter {
    /// Compile a rewriter for `vocabulary`
    ///
    /// Fails when the vocabulary has an empty token list or a token that is
    /// not an identifier.
    pub fn new(vocabulary: AttributeVocabulary) -> Result<Self> {
        let vocabulary = vocabulary.normalized()?;
        let pattern = Regex::new(&build_pattern(&vocabulary))?;

        debug!(
            pattern = pattern.as_str(),
            "Compiled attribute rewrite pattern"
        );

        Ok(Self {
            pattern,
            vocabulary,
        })
    }

    pub fn vocabulary(&self) -> &AttributeVocabulary {
        &self.vocabulary
    }

    /// Pure: Rewrite every attribute access in `expression`
    ///
    /// Leftmost-first, non-overlapping, single pass. Text without a match is
    /// returned unchanged.
    pub fn rewrite(&self, expression: &str) -> String {
        match self.pattern.replace_all(expression, REPLACEMENT) {
            Cow::Borrowed(unchanged) => unchanged.to_string(),
            Cow::Owned(rewritten) => {
                trace!(
                    before = expression,
                    after = rewritten.as_str(),
                    "Rewrote attribute access"
                );
                rewritten
            }
        }
    }

    /// Pure: List the attribute accesses `rewrite` would replace, in order
    pub fn attribute_references<'a>(&self, expression: &'a str) -> Vec<AttributeRef<'a>> {
        self.pattern
            .captures_iter(expression)
            .filter_map(|cap| {
                Some(AttributeRef {
                    entity: cap.get(1)?.as_str(),
                    field: cap.get(2)?.as_str(),
                    attribute: cap.get(3)?.as_str(),
                })
            })
            .collect()
    }
}

/// Build `(e1|e2)\.(f1|f2|f3)\.([A-Za-z0-9]*)` from the vocabulary
fn build_pattern(vocabulary: &AttributeVocabulary) -> String {
    format!(
        r"({})\.({})\.([A-Za-z0-9]*)",
        alternation(&vocabulary.entities),
        alternation(&vocabulary.fields)
    )
}

fn alternation(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}

/// Pure: Translate ABAC attribute access into attribute function calls
///
/// Uses the default vocabulary: entities `r`, `p` and fields `sub`, `obj`,
/// `act`.
///
/// ```
/// use policy_util::expression::fix_attribute;
///
/// assert_eq!(fix_attribute("r.sub.Age"), r#"subAttr(r.sub, "Age")"#);
/// assert_eq!(fix_attribute("p.obj.Owner"), r#"objAttr(p.obj, "Owner")"#);
/// assert_eq!(fix_attribute("r.sub == p.sub"), "r.sub == p.sub");
/// ```
pub fn fix_attribute(s: &str) -> String {
    DEFAULT_REWRITER.rewrite(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_fix_attribute_single() {
        assert_eq!(fix_attribute("r.sub.Age"), r#"subAttr(r.sub, "Age")"#);
        assert_eq!(fix_attribute("p.obj.Owner"), r#"objAttr(p.obj, "Owner")"#);
        assert_eq!(fix_attribute("r.act.Name1"), r#"actAttr(r.act, "Name1")"#);
    }

    #[test]
    fn test_fix_attribute_multiple_matches() {
        assert_eq!(
            fix_attribute("r.sub.Age > 18 && r.obj.Owner == r.sub.Name"),
            r#"subAttr(r.sub, "Age") > 18 && objAttr(r.obj, "Owner") == subAttr(r.sub, "Name")"#
        );
    }

    #[test]
    fn test_fix_attribute_no_match_unchanged() {
        let matcher = "r.sub == p.sub && keyMatch(r.obj, p.obj)";
        assert_eq!(fix_attribute(matcher), matcher);
        assert_eq!(fix_attribute(""), "");
    }

    #[test]
    fn test_fix_attribute_unknown_tokens_unchanged() {
        assert_eq!(fix_attribute("q.sub.Age"), "q.sub.Age");
        assert_eq!(fix_attribute("r.env.Region"), "r.env.Region");
        assert_eq!(fix_attribute("r.subject.Age"), "r.subject.Age");
    }

    #[test]
    fn test_fix_attribute_attribute_stops_at_non_alphanumeric() {
        assert_eq!(
            fix_attribute("r.sub.Home.City"),
            r#"subAttr(r.sub, "Home").City"#
        );
        assert_eq!(
            fix_attribute("r.obj.owner_id"),
            r#"objAttr(r.obj, "owner")_id"#
        );
    }

    #[test]
    fn test_fix_attribute_empty_attribute() {
        assert_eq!(fix_attribute("r.sub. "), r#"subAttr(r.sub, "") "#);
    }

    #[test]
    fn test_fix_attribute_not_word_bounded() {
        assert_eq!(fix_attribute("xr.sub.Age"), r#"xsubAttr(r.sub, "Age")"#);
    }

    #[test]
    fn test_attribute_references() {
        let rewriter = AttributeRewriter::default();
        let refs = rewriter.attribute_references("r.sub.Age > 18 && p.obj.Owner == r.sub");
        assert_eq!(
            refs,
            vec![
                AttributeRef {
                    entity: "r",
                    field: "sub",
                    attribute: "Age"
                },
                AttributeRef {
                    entity: "p",
                    field: "obj",
                    attribute: "Owner"
                },
            ]
        );
        assert!(rewriter.attribute_references("r.sub == p.sub").is_empty());
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocab = AttributeVocabulary::new(["r", "p", "q"], ["sub", "env"]);
        let rewriter = AttributeRewriter::new(vocab).unwrap();

        assert_eq!(
            rewriter.rewrite("q.env.Region == r.sub.Region"),
            r#"envAttr(q.env, "Region") == subAttr(r.sub, "Region")"#
        );
        assert_eq!(rewriter.rewrite("r.obj.Owner"), "r.obj.Owner");
    }

    #[test]
    fn test_custom_vocabulary_prefix_tokens() {
        let vocab = AttributeVocabulary::new(["r"], ["sub", "subject"]);
        let rewriter = AttributeRewriter::new(vocab).unwrap();

        assert_eq!(
            rewriter.rewrite("r.subject.Name"),
            r#"subjectAttr(r.subject, "Name")"#
        );
        assert_eq!(rewriter.rewrite("r.sub.Name"), r#"subAttr(r.sub, "Name")"#);
    }

    #[test]
    fn test_invalid_vocabulary_rejected() {
        let vocab = AttributeVocabulary::new(Vec::<String>::new(), ["sub"]);
        let err = AttributeRewriter::new(vocab).unwrap_err();
        assert!(matches!(err, Error::Vocabulary(_)));

        let vocab = AttributeVocabulary::new(["r|p"], ["sub"]);
        assert!(AttributeRewriter::new(vocab).is_err());
    }

    #[test]
    fn test_default_rewriter_vocabulary() {
        let rewriter = AttributeRewriter::default();
        assert_eq!(rewriter.vocabulary(), &AttributeVocabulary::default());
    }
}
