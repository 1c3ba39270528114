//! Reading and writing variable-definition files.
//!
//! The parser's output is persisted as a JSON array (4-space indent) or,
//! alternatively, as block-style YAML. The loaders read the JSON form back,
//! either as the raw definition list or as an insertion-ordered name →
//! attributes mapping.

pub mod dumpers;
pub mod loaders;

#[cfg(test)]
mod loaders_tests;

pub use dumpers::{dump_definitions, dump_json, dump_yaml};
pub use loaders::{load_definitions, load_variables};
