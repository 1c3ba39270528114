use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::domain::VariableDefinition;

/// Write definitions to a file, picking the format from the extension
/// (`.json`, `.yaml` or `.yml`).
pub fn dump_definitions(definitions: &[VariableDefinition], path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .context("Output file has no extension")?;

    match extension.to_lowercase().as_str() {
        "json" => dump_json(definitions, path),
        "yaml" | "yml" => dump_yaml(definitions, path),
        _ => anyhow::bail!("Unsupported output format: {}", extension),
    }
}

/// Write definitions as an indented JSON array.
pub fn dump_json(definitions: &[VariableDefinition], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    // 4-space indentation, matching the reference output.
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    definitions
        .serialize(&mut serializer)
        .context("Failed to serialize definitions to JSON")?;
    serializer
        .into_inner()
        .flush()
        .with_context(|| format!("Failed to write JSON file: {}", path.display()))?;

    Ok(())
}

/// Write definitions as block-style YAML.
pub fn dump_yaml(definitions: &[VariableDefinition], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create YAML file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_yaml::to_writer(&mut writer, definitions)
        .context("Failed to serialize definitions to YAML")?;
    writer
        .flush()
        .with_context(|| format!("Failed to write YAML file: {}", path.display()))?;

    Ok(())
}
