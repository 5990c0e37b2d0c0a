//! String matching: edit distance and the fuzzy matcher built on it.

mod distance;
mod fuzzy;

pub use distance::distance;
pub use fuzzy::{fuzzy_match, Matcher, DEFAULT_THRESHOLD};
