//! Core domain models shared by the parser, the loaders and the cleaning
//! utilities.

pub mod domain;

pub use domain::{VariableAttrs, VariableDefinition, VariableKind, Variables};
