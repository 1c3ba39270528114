//! Parsers for the dataset documentation format.
//!
//! The documentation file is plain Latin-1 text: each variable starts with a
//! header line naming it and its kind, and qualitative variables follow with
//! one indented line per legal category value.
//!
//! # Parsers
//!
//! - [`definitions_parser`]: Extract variable definitions from the
//!   documentation file

pub mod definitions_parser;


pub use definitions_parser::{parse_definitions_file, parse_definitions_str};
