//! Extract variable definitions from the dataset documentation.
//!
//! Usage: `extract_variables [DOCUMENTATION [OUTPUT]]`, defaulting to
//! `documentation.txt` and `variables.json`. The output format follows the
//! output extension (`.json`, `.yaml` or `.yml`).

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use datadict::io::dumpers::dump_definitions;
use datadict::parsing::definitions_parser::parse_definitions_file;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("documentation.txt"));
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("variables.json"));

    let definitions = parse_definitions_file(&input)?;
    dump_definitions(&definitions, &output)?;

    println!(
        "Extracted {} definitions from {} into {}",
        definitions.len(),
        input.display(),
        output.display()
    );

    Ok(())
}
