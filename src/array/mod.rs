//! Helpers for string arrays used while normalizing policy rows
//!
//! - `equality`: order-sensitive array/2D-array comparison and set comparison
//! - `dedup`: first-occurrence deduplication
//! - `display`: printable form of an array

mod dedup;
mod display;
mod equality;

pub use dedup::{array_remove_duplicates, deduplicated};
pub use display::array_to_string;
pub use equality::{array_2d_equals, array_equals, is_same_set, set_equals};
