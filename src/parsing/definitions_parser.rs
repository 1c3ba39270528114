use anyhow::{Context, Result};
use std::path::Path;

use crate::core::domain::{VariableDefinition, VariableKind};

/// Kind keywords as they appear inside the parentheses of a header line
const KIND_KEYWORDS: &[(&str, VariableKind)] = &[
    ("Nominal", VariableKind::Nominal),
    ("Ordinal", VariableKind::Ordinal),
    ("Discrete", VariableKind::Discrete),
    ("Continuous", VariableKind::Continuous),
];

/// Indentation that introduces a category value line
const VALUE_INDENT: &str = "       "; // exactly 7 spaces

/// Scanner state: either between definitions, or accumulating the category
/// values of an open qualitative definition.
enum ScanState {
    Idle,
    InQualitative {
        name: String,
        kind: VariableKind,
        values: Vec<String>,
    },
}

/// Parse variable definitions from a documentation file.
///
/// The file is decoded as Latin-1, matching the encoding of the reference
/// documentation. Latin-1 maps every byte, so only I/O failures surface here.
pub fn parse_definitions_file(path: &Path) -> Result<Vec<VariableDefinition>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read documentation file: {}", path.display()))?;
    let text = encoding_rs::mem::decode_latin1(&bytes);

    Ok(parse_definitions_str(&text))
}

/// Parse variable definitions from documentation text.
///
/// Lines are classified as qualitative headers, quantitative headers or
/// (inside an open qualitative definition) indented value lines; blank lines
/// are skipped and anything else is free text. A non-value line both closes
/// the open definition and is immediately re-examined as a header, so one
/// line can end a definition and start the next.
pub fn parse_definitions_str(text: &str) -> Vec<VariableDefinition> {
    let mut definitions = Vec::new();
    let mut state = ScanState::Idle;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        state = scan_line(state, line, &mut definitions);
    }

    // A qualitative definition still open at end of input is dropped, exactly
    // like the reference implementation.
    if let ScanState::InQualitative { name, .. } = state {
        log::warn!(
            "Documentation ended inside the definition of {:?}; its values were discarded",
            name
        );
    }

    definitions
}

/// Advance the scanner by one non-blank line, appending any completed
/// definitions.
fn scan_line(
    state: ScanState,
    line: &str,
    definitions: &mut Vec<VariableDefinition>,
) -> ScanState {
    match state {
        ScanState::InQualitative {
            name,
            kind,
            mut values,
        } => {
            if let Some(value) = match_value(line) {
                values.push(value.to_string());
                return ScanState::InQualitative { name, kind, values };
            }

            // Anything that is not a value line ends the open definition and
            // is then considered as a potential header itself.
            definitions.push(VariableDefinition::qualitative(name, kind, values));
            scan_header(line, definitions)
        }
        ScanState::Idle => scan_header(line, definitions),
    }
}

/// Classify a line while no definition is open.
///
/// A qualitative header opens a new definition; a quantitative header is a
/// complete definition on its own; everything else is ignored.
fn scan_header(line: &str, definitions: &mut Vec<VariableDefinition>) -> ScanState {
    match match_header(line) {
        Some((name, kind)) if kind.is_qualitative() => ScanState::InQualitative {
            name: name.to_string(),
            kind,
            values: Vec::new(),
        },
        Some((name, kind)) => {
            definitions.push(VariableDefinition::quantitative(name.to_string(), kind));
            ScanState::Idle
        }
        None => ScanState::Idle,
    }
}

/// Match a header line: `name (Kind):` with arbitrary trailing text.
///
/// The name is everything before the first `(` (at least one character,
/// trimmed); the kind keyword must sit immediately inside the parentheses,
/// followed by `)`, optional blanks and `:`.
fn match_header(line: &str) -> Option<(&str, VariableKind)> {
    let open = line.find('(')?;
    if open == 0 {
        return None;
    }
    let name = &line[..open];
    let rest = &line[open + 1..];

    for (keyword, kind) in KIND_KEYWORDS {
        if let Some(after_kind) = rest.strip_prefix(keyword) {
            if let Some(after_paren) = after_kind.strip_prefix(')') {
                if after_paren.trim_start_matches([' ', '\t']).starts_with(':') {
                    return Some((name.trim(), *kind));
                }
            }
        }
    }

    None
}

/// Match a category value line: exactly seven leading spaces, then the value
/// text (at least one character), then a tab.
fn match_value(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(VALUE_INDENT)?;
    let tab = rest.find('\t')?;
    if tab == 0 {
        return None;
    }

    Some(rest[..tab].trim())
}
