use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::BTreeMap;

/// Label shown for null values in categorized output
const NULL_LABEL: &str = "null";

/// Name of the count column added to categorized output
const COUNT_COLUMN: &str = "Count";

/// One categorization rule: rows of `column` are labeled `label` where the
/// predicate holds, `not_label` where it does not, and `"null"` when the
/// value is missing.
pub struct CategoryRule<'a> {
    pub column: &'a str,
    pub label: &'a str,
    pub not_label: &'a str,
    pub predicate: Box<dyn Fn(&AnyValue) -> bool + 'a>,
}

impl<'a> CategoryRule<'a> {
    pub fn new(
        column: &'a str,
        label: &'a str,
        not_label: &'a str,
        predicate: impl Fn(&AnyValue) -> bool + 'a,
    ) -> Self {
        Self {
            column,
            label,
            not_label,
            predicate: Box::new(predicate),
        }
    }
}

/// Categorize rows according to rules.
///
/// Returns two frames: the per-row label frame (one label column per rule
/// plus a `Count` column of ones) and the case frame (distinct label
/// combinations with summed counts, sorted by the label columns).
pub fn categorize(df: &DataFrame, rules: &[CategoryRule]) -> Result<(DataFrame, DataFrame)> {
    let height = df.height();

    let mut label_columns: Vec<(&str, Vec<&str>)> = Vec::with_capacity(rules.len());
    for rule in rules {
        let column = df.column(rule.column)?;
        let mut labels = Vec::with_capacity(height);
        for i in 0..height {
            let value = column.get(i)?;
            let label = if matches!(value, AnyValue::Null) {
                NULL_LABEL
            } else if (rule.predicate)(&value) {
                rule.label
            } else {
                rule.not_label
            };
            labels.push(label);
        }
        label_columns.push((rule.column, labels));
    }

    // Per-row label frame with a unit count column.
    let mut columns: Vec<Column> = label_columns
        .iter()
        .map(|(name, labels)| Column::new((*name).into(), labels))
        .collect();
    columns.push(Column::new(COUNT_COLUMN.into(), vec![1u32; height]));
    let category = DataFrame::new(columns)?;

    // Distinct label combinations with summed counts, sorted by labels.
    let mut cases: BTreeMap<Vec<&str>, u32> = BTreeMap::new();
    for i in 0..height {
        let combination: Vec<&str> = label_columns.iter().map(|(_, labels)| labels[i]).collect();
        *cases.entry(combination).or_insert(0) += 1;
    }

    let mut case_columns: Vec<Vec<&str>> = vec![Vec::with_capacity(cases.len()); rules.len()];
    let mut counts = Vec::with_capacity(cases.len());
    for (combination, count) in cases {
        for (j, label) in combination.into_iter().enumerate() {
            case_columns[j].push(label);
        }
        counts.push(count);
    }

    let mut columns: Vec<Column> = rules
        .iter()
        .zip(case_columns)
        .map(|(rule, labels)| Column::new(rule.column.into(), labels))
        .collect();
    columns.push(Column::new(COUNT_COLUMN.into(), counts));
    let case = DataFrame::new(columns)?;

    Ok((category, case))
}

/// Mask selecting the rows of the category frame that belong to one row of
/// the case frame.
pub fn mask_for_case(
    category: &DataFrame,
    case: &DataFrame,
    case_index: usize,
) -> Result<BooleanChunked> {
    let mut mask = vec![true; category.height()];

    for case_column in case.get_columns() {
        if case_column.name().as_str() == COUNT_COLUMN {
            continue;
        }
        let labels_column = case_column.str()?;
        let wanted = (case_index < labels_column.len())
            .then(|| labels_column.get(case_index))
            .flatten()
            .with_context(|| format!("No case at index {}", case_index))?;

        let labels = category.column(case_column.name().as_str())?.str()?;
        for (i, label) in labels.into_iter().enumerate() {
            if label != Some(wanted) {
                mask[i] = false;
            }
        }
    }

    Ok(mask.into_iter().collect::<BooleanChunked>().with_name("mask".into()))
}
