use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::domain::{VariableDefinition, Variables};

/// Load the raw definition list from a JSON file.
pub fn load_definitions(path: &Path) -> Result<Vec<VariableDefinition>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open definitions file: {}", path.display()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse definitions JSON: {}", path.display()))
}

/// Load definitions from a JSON file as an insertion-ordered name →
/// attributes mapping.
pub fn load_variables(path: &Path) -> Result<Variables> {
    let definitions = load_definitions(path)?;
    Ok(Variables::from_definitions(definitions))
}
