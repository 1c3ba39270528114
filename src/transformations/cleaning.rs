use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Number of null values in a column.
pub fn count_null(column: &Column) -> usize {
    column.null_count()
}

/// Number of values outside the legal set. Nulls count as invalid.
pub fn count_invalid(column: &Column, valid: &[String]) -> Result<usize> {
    let ca = column
        .str()
        .with_context(|| format!("Column {:?} must be a string column", column.name()))?;
    let valid: HashSet<&str> = valid.iter().map(String::as_str).collect();

    Ok(ca
        .into_iter()
        .filter(|v| !matches!(v, Some(s) if valid.contains(s)))
        .count())
}

/// Unique non-null invalid values, in first-appearance order.
pub fn unique_invalid(column: &Column, valid: &[String]) -> Result<Vec<String>> {
    let ca = column
        .str()
        .with_context(|| format!("Column {:?} must be a string column", column.name()))?;
    let valid: HashSet<&str> = valid.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let mut invalid = Vec::new();
    for value in ca.into_iter().flatten() {
        if !valid.contains(value) && seen.insert(value) {
            invalid.push(value.to_string());
        }
    }

    Ok(invalid)
}

/// Replace invalid values through a replacement table.
///
/// Valid values and nulls pass through unchanged. An invalid value with no
/// entry in the table becomes null.
pub fn replace_invalid(
    column: &Column,
    valid: &[String],
    replacements: &HashMap<String, String>,
) -> Result<Column> {
    let ca = column
        .str()
        .with_context(|| format!("Column {:?} must be a string column", column.name()))?;
    let valid: HashSet<&str> = valid.iter().map(String::as_str).collect();

    let replaced: Vec<Option<&str>> = ca
        .into_iter()
        .map(|v| match v {
            Some(s) if valid.contains(s) => Some(s),
            Some(s) => {
                let replacement = replacements.get(s).map(String::as_str);
                if replacement.is_none() {
                    log::warn!("No replacement for invalid value {:?}; nulling it", s);
                }
                replacement
            }
            None => None,
        })
        .collect();

    Ok(Column::new(column.name().clone(), replaced))
}

/// Mode of a string column, ignoring nulls; `None` when the column has no
/// non-null values. Ties are broken by the smallest value.
pub fn mode(column: &Column) -> Result<Option<String>> {
    let ca = column
        .str()
        .with_context(|| format!("Column {:?} must be a string column", column.name()))?;
    Ok(mode_of(ca.into_iter()))
}

/// Median of a float column, ignoring nulls and NaNs; `None` when nothing
/// remains.
pub fn median(column: &Column) -> Result<Option<f64>> {
    let ca = column
        .f64()
        .with_context(|| format!("Column {:?} must be a Float64 column", column.name()))?;
    Ok(median_of(ca.into_iter().flatten().collect()))
}

/// Fill nulls in `df[name]` with the mode of each `df[by]` group, falling
/// back to the overall mode for all-null groups.
pub fn fill_null_with_mode_by(df: &DataFrame, name: &str, by: &str) -> Result<DataFrame> {
    let values = df.column(name)?.str()?;
    let overall = mode_of(values.into_iter())
        .with_context(|| format!("Column {:?} is entirely null; no mode to fill with", name))?;

    let key_column = df.column(by)?;
    let mut filled: Vec<Option<String>> =
        values.into_iter().map(|v| v.map(str::to_string)).collect();

    for rows in group_rows(key_column)?.into_values() {
        let group_mode = mode_of(rows.iter().map(|&i| values.get(i)))
            .unwrap_or_else(|| overall.clone());
        for &i in &rows {
            if filled[i].is_none() {
                filled[i] = Some(group_mode.clone());
            }
        }
    }

    let mut out = df.clone();
    out.with_column(Series::new(name.into(), filled))?;
    Ok(out)
}

/// Fill nulls in `df[name]` with the median of each `df[by]` group, falling
/// back to the overall median for all-null groups.
pub fn fill_null_with_median_by(df: &DataFrame, name: &str, by: &str) -> Result<DataFrame> {
    let values = df.column(name)?.f64()?;
    let overall = median_of(values.into_iter().flatten().collect())
        .with_context(|| format!("Column {:?} is entirely null; no median to fill with", name))?;

    let key_column = df.column(by)?;
    let mut filled: Vec<Option<f64>> = values.into_iter().collect();

    for rows in group_rows(key_column)?.into_values() {
        let group_median =
            median_of(rows.iter().filter_map(|&i| values.get(i)).collect()).unwrap_or(overall);
        for &i in &rows {
            if filled[i].is_none() {
                filled[i] = Some(group_median);
            }
        }
    }

    let mut out = df.clone();
    out.with_column(Series::new(name.into(), filled))?;
    Ok(out)
}

/// Per-group modes of `df[name]` grouped by `df[by]`, one row per group key,
/// sorted by key. All-null groups fall back to the overall mode.
pub fn mode_by(df: &DataFrame, name: &str, by: &str) -> Result<DataFrame> {
    let values = df.column(name)?.str()?;
    let overall = mode_of(values.into_iter())
        .with_context(|| format!("Column {:?} is entirely null; no mode to fill with", name))?;

    let key_column = df.column(by)?;
    let sorted: BTreeMap<&str, Vec<usize>> = group_rows(key_column)?
        .into_iter()
        .filter_map(|(key, rows)| key.map(|k| (k, rows)))
        .collect();

    let mut keys = Vec::with_capacity(sorted.len());
    let mut modes = Vec::with_capacity(sorted.len());
    for (key, rows) in sorted {
        keys.push(key);
        modes.push(
            mode_of(rows.iter().map(|&i| values.get(i))).unwrap_or_else(|| overall.clone()),
        );
    }

    Ok(DataFrame::new(vec![
        Column::new(by.into(), keys),
        Column::new(name.into(), modes),
    ])?)
}

/// Per-group medians of `df[name]` grouped by `df[by]`, one row per group
/// key, sorted by key. All-null groups fall back to the overall median.
pub fn median_by(df: &DataFrame, name: &str, by: &str) -> Result<DataFrame> {
    let values = df.column(name)?.f64()?;
    let overall = median_of(values.into_iter().flatten().collect())
        .with_context(|| format!("Column {:?} is entirely null; no median to fill with", name))?;

    let key_column = df.column(by)?;
    let sorted: BTreeMap<&str, Vec<usize>> = group_rows(key_column)?
        .into_iter()
        .filter_map(|(key, rows)| key.map(|k| (k, rows)))
        .collect();

    let mut keys = Vec::with_capacity(sorted.len());
    let mut medians = Vec::with_capacity(sorted.len());
    for (key, rows) in sorted {
        keys.push(key);
        medians.push(
            median_of(rows.iter().filter_map(|&i| values.get(i)).collect()).unwrap_or(overall),
        );
    }

    Ok(DataFrame::new(vec![
        Column::new(by.into(), keys),
        Column::new(name.into(), medians),
    ])?)
}

/// Row indices grouped by the string key column; a null key is its own group.
fn group_rows(keys: &Column) -> Result<HashMap<Option<&str>, Vec<usize>>> {
    let ca = keys
        .str()
        .with_context(|| format!("Grouping column {:?} must be a string column", keys.name()))?;

    let mut groups: HashMap<Option<&str>, Vec<usize>> = HashMap::new();
    for (i, key) in ca.into_iter().enumerate() {
        groups.entry(key).or_default().push(i);
    }

    Ok(groups)
}

fn mode_of<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values.flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(value, _)| value.to_string())
}

fn median_of(mut values: Vec<f64>) -> Option<f64> {
    values.retain(|v| !v.is_nan());
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}
