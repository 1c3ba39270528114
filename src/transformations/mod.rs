//! Data-cleaning utilities over polars DataFrames.
//!
//! These helpers cover the cleaning steps of the analysis: counting and
//! repairing invalid categorical values, filling missing data with group-wise
//! statistics, and categorizing rows by predicate rules.
//!
//! # Modules
//!
//! - [`cleaning`]: Null/invalid counting, invalid-value replacement, mode and
//!   median statistics with group-wise fills
//! - [`categorize`]: Label rows by predicate rules and count the distinct
//!   label combinations

pub mod categorize;
pub mod cleaning;

pub use categorize::{categorize, mask_for_case, CategoryRule};
pub use cleaning::{
    count_invalid, count_null, fill_null_with_median_by, fill_null_with_mode_by, median,
    median_by, mode, mode_by, replace_invalid, unique_invalid,
};
