//! Configuration for the expression helpers
//!
//! The only configurable surface is the attribute vocabulary: the entity and
//! field tokens the attribute rewriter recognizes.

mod vocabulary;

pub use vocabulary::{AttributeVocabulary, DEFAULT_ENTITIES, DEFAULT_FIELDS};
