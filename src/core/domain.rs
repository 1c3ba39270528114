//! Domain models for variable definitions extracted from the dataset
//! documentation.
//!
//! A *definition* describes one documented variable: its display name, its
//! statistical kind, and — for qualitative variables only — the ordered list
//! of legal category labels.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Statistical kind of a documented variable.
///
/// Qualitative variables (`Nominal`, `Ordinal`) take one of a finite set of
/// named categories; quantitative variables (`Discrete`, `Continuous`) are
/// numeric. Serializes as the literal keyword used in the documentation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    Nominal,
    Ordinal,
    Discrete,
    Continuous,
}

impl VariableKind {
    /// Returns `true` for `Nominal` and `Ordinal` variables.
    pub fn is_qualitative(self) -> bool {
        matches!(self, VariableKind::Nominal | VariableKind::Ordinal)
    }

    /// Returns `true` for `Discrete` and `Continuous` variables.
    pub fn is_quantitative(self) -> bool {
        !self.is_qualitative()
    }
}

/// One parsed variable definition.
///
/// `values` is `Some` exactly when the variable is qualitative: it holds the
/// legal category labels in the order they appear in the documentation file,
/// duplicates included. Quantitative definitions carry no `values` and the
/// key is omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDefinition {
    pub name: String,
    pub kind: VariableKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl VariableDefinition {
    /// Creates a qualitative definition with its accumulated category values.
    pub fn qualitative(name: String, kind: VariableKind, values: Vec<String>) -> Self {
        Self {
            name,
            kind,
            values: Some(values),
        }
    }

    /// Creates a quantitative definition (no category values).
    pub fn quantitative(name: String, kind: VariableKind) -> Self {
        Self {
            name,
            kind,
            values: None,
        }
    }
}

/// Attributes of a variable as seen by downstream consumers: the kind plus
/// the category values when the variable is qualitative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAttrs {
    pub kind: VariableKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl VariableAttrs {
    pub fn is_qualitative(&self) -> bool {
        self.kind.is_qualitative()
    }

    pub fn is_quantitative(&self) -> bool {
        self.kind.is_quantitative()
    }
}

/// Name → attributes mapping that preserves insertion order.
///
/// Re-inserting an existing name replaces its attributes but keeps the
/// original position, so iteration order always mirrors first appearance in
/// the definitions file.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    order: Vec<String>,
    attrs: HashMap<String, VariableAttrs>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mapping from parsed definitions, preserving their order.
    pub fn from_definitions(definitions: Vec<VariableDefinition>) -> Self {
        let mut variables = Self::new();
        for definition in definitions {
            variables.insert(
                definition.name,
                VariableAttrs {
                    kind: definition.kind,
                    values: definition.values,
                },
            );
        }
        variables
    }

    pub fn insert(&mut self, name: String, attrs: VariableAttrs) {
        if !self.attrs.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.attrs.insert(name, attrs);
    }

    pub fn get(&self, name: &str) -> Option<&VariableAttrs> {
        self.attrs.get(name)
    }

    /// Iterates over `(name, attributes)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableAttrs)> {
        self.order
            .iter()
            .map(|name| (name.as_str(), &self.attrs[name]))
    }

    /// Variable names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
