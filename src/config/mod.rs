//! YAML loading and merging
//!
//! Parses each discovered file and shallow-merges its top-level keys into
//! one accumulator mapping, later sources overwriting earlier ones.

pub mod loader;
pub mod merge;

pub use loader::{load_document, load_merged, LoadError};
pub use merge::merge_into;
