//! Utilities for the house-prices exploratory analysis: extract variable
//! definitions from the dataset documentation file and clean the tabular
//! data with group-wise statistics.

pub mod core;
pub mod io;
pub mod parsing;
pub mod transformations;
