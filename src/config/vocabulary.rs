//! Attribute vocabulary for ABAC expressions
//!
//! A vocabulary names the request/policy entities (`r`, `p`) and the fields
//! (`sub`, `obj`, `act`) whose attributes may be referenced as
//! `entity.field.attribute` in a matcher expression.

use crate::array::array_remove_duplicates;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Entity tokens recognized when no vocabulary is configured
pub const DEFAULT_ENTITIES: &[&str] = &["r", "p"];

/// Field tokens recognized when no vocabulary is configured
pub const DEFAULT_FIELDS: &[&str] = &["sub", "obj", "act"];

static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Valid regex pattern"));

/// Entity and field tokens for attribute rewriting
///
/// Loaded from TOML; keys that are absent keep their defaults:
///
/// ```
/// use policy_util::config::AttributeVocabulary;
///
/// let vocab = AttributeVocabulary::from_toml_str(r#"fields = ["sub", "obj", "act", "env"]"#)
///     .unwrap();
/// assert_eq!(vocab.entities, vec!["r", "p"]);
/// assert_eq!(vocab.fields.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeVocabulary {
    pub entities: Vec<String>,
    pub fields: Vec<String>,
}

impl Default for AttributeVocabulary {
    fn default() -> Self {
        Self {
            entities: DEFAULT_ENTITIES.iter().map(|s| s.to_string()).collect(),
            fields: DEFAULT_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AttributeVocabulary {
    pub fn new<E, F>(entities: E, fields: F) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            entities: entities.into_iter().map(Into::into).collect(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse and validate a vocabulary from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let vocabulary: AttributeVocabulary = toml::from_str(content)?;
        vocabulary.normalized()
    }

    /// Load and validate a vocabulary from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let vocabulary = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            entities = vocabulary.entities.len(),
            fields = vocabulary.fields.len(),
            "Loaded attribute vocabulary"
        );
        Ok(vocabulary)
    }

    /// Check that both token lists are non-empty identifiers
    pub fn validate(&self) -> Result<()> {
        validate_tokens("entity", &self.entities)?;
        validate_tokens("field", &self.fields)
    }

    /// Validate and drop repeated tokens, keeping first-seen order
    pub fn normalized(mut self) -> Result<Self> {
        self.validate()?;
        array_remove_duplicates(&mut self.entities);
        array_remove_duplicates(&mut self.fields);
        Ok(self)
    }
}

fn validate_tokens(kind: &str, tokens: &[String]) -> Result<()> {
    if tokens.is_empty() {
        return Err(Error::Vocabulary(format!(
            "at least one {} token is required",
            kind
        )));
    }

    if let Some(bad) = tokens.iter().find(|t| !TOKEN_REGEX.is_match(t)) {
        return Err(Error::Vocabulary(format!(
            "invalid {} token '{}': expected an identifier",
            kind, bad
        )));
    }

    Ok(())
}
