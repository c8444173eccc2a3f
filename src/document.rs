//! Nested YAML infile documents.
//!
//! A [`NestedDocument`] is a tree of named groups whose leaves are
//! [`Quantity`] maps:
//!
//! ```yaml
//! grid:
//!   model_depth:
//!     value: 40
//!     units: m
//!     variable_name: grid%D
//!     description: depth of modelled domain
//! ```
//!
//! Raw YAML is checked against the schema by [`deserialize`], which reports
//! every problem it finds rather than stopping at the first.

use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::debug;

use crate::config::validation::{suggest_correction, yaml_key, ValidationIssue};
use crate::schema::{ParamValue, SchemaEntry, SchemaGroup, SchemaNode, YamlSchema};

const QUANTITY_FIELDS: [&str; 4] = ["value", "units", "variable_name", "description"];

/// One leaf of a nested document.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Quantity {
    pub value: ParamValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Quantity {
    pub fn new(value: ParamValue) -> Self {
        Self {
            value,
            units: None,
            variable_name: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(Quantity),
    Group(NestedDocument),
}

/// A group of named nodes, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NestedDocument {
    entries: Vec<(String, Node)>,
}

impl NestedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    fn child(&self, name: &str) -> Option<&Node> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, node)| node)
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.entries.iter_mut().find(|(n, _)| n == name).map(|(_, node)| node)
    }

    /// Node at a dotted path.
    pub fn get(&self, path: &str) -> Option<&Node> {
        let (first, rest) = path.split_once('.').map_or((path, None), |(f, r)| (f, Some(r)));
        match (self.child(first)?, rest) {
            (node, None) => Some(node),
            (Node::Group(group), Some(rest)) => group.get(rest),
            (Node::Leaf(_), Some(_)) => None,
        }
    }

    pub fn quantity(&self, path: &str) -> Option<&Quantity> {
        match self.get(path)? {
            Node::Leaf(q) => Some(q),
            Node::Group(_) => None,
        }
    }

    pub fn quantity_mut(&mut self, path: &str) -> Option<&mut Quantity> {
        let (first, rest) = path.split_once('.').map_or((path, None), |(f, r)| (f, Some(r)));
        match (self.child_mut(first)?, rest) {
            (Node::Leaf(q), None) => Some(q),
            (Node::Group(group), Some(rest)) => group.quantity_mut(rest),
            _ => None,
        }
    }

    /// Set the quantity at a dotted path, creating groups as needed.
    pub fn insert(&mut self, path: &str, quantity: Quantity) -> Result<(), DocumentError> {
        let conflict = || DocumentError::PathConflict(path.to_string());
        let mut group = self;
        let mut segments = path.split('.').peekable();
        while let Some(name) = segments.next() {
            if segments.peek().is_none() {
                match group.child_mut(name) {
                    Some(Node::Group(_)) => return Err(conflict()),
                    Some(Node::Leaf(existing)) => *existing = quantity,
                    None => group.entries.push((name.to_string(), Node::Leaf(quantity))),
                }
                return Ok(());
            }
            if group.child(name).is_none() {
                group.entries.push((name.to_string(), Node::Group(Self::new())));
            }
            group = match group.child_mut(name) {
                Some(Node::Group(g)) => g,
                _ => return Err(conflict()),
            };
        }
        Err(conflict())
    }

    /// Dotted paths of every leaf, depth first.
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_leaf_paths("", &mut paths);
        paths
    }

    fn collect_leaf_paths(&self, prefix: &str, out: &mut Vec<String>) {
        for (name, node) in &self.entries {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            match node {
                Node::Leaf(_) => out.push(path),
                Node::Group(group) => group.collect_leaf_paths(&path, out),
            }
        }
    }

    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl Serialize for NestedDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unable to parse {}: Are you sure that it is YAML?", .path.display())]
    NotYaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error(
        "Invalid SOG YAML in {}. The following parameters are missing or misspelled:\n{}",
        .path.display(),
        .issues.iter().map(|i| format!("  {i}")).collect::<Vec<_>>().join("\n")
    )]
    Invalid {
        path: PathBuf,
        issues: Vec<ValidationIssue>,
    },

    #[error("Unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0} is both a parameter and a group of parameters")]
    PathConflict(String),
}

// ============================================================================
// Deserialization
// ============================================================================

/// Validate raw YAML against `schema` and build a document from it.
///
/// With `allow_missing` (edit files) absent parameters and absent
/// `variable_name`/`description` fields are fine; only unknown keys and
/// badly typed values are reported. Without it every required parameter
/// must be present.
pub fn deserialize(
    raw: &Value,
    schema: &YamlSchema,
    allow_missing: bool,
) -> Result<NestedDocument, Vec<ValidationIssue>> {
    let known = schema.known_paths();
    let mut checker = Checker {
        known: &known,
        allow_missing,
        issues: Vec::new(),
    };
    let doc = checker.group(raw, schema.root());
    if checker.issues.is_empty() {
        Ok(doc)
    } else {
        Err(checker.issues)
    }
}

/// Read and validate a YAML infile.
pub fn load_document(path: &Path, schema: &YamlSchema, allow_missing: bool) -> Result<NestedDocument, DocumentError> {
    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Value = serde_yaml::from_str(&text).map_err(|source| DocumentError::NotYaml {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), allow_missing, "Validating YAML infile");
    deserialize(&raw, schema, allow_missing).map_err(|issues| DocumentError::Invalid {
        path: path.to_path_buf(),
        issues,
    })
}

struct Checker<'a> {
    known: &'a [&'a str],
    allow_missing: bool,
    issues: Vec<ValidationIssue>,
}

fn child_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// String form of a scalar description or units field.
fn scalar_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl Checker<'_> {
    fn missing(&mut self, path: String) {
        self.issues.push(ValidationIssue::new(path.clone(), format!("{path}: missing")));
    }

    fn unknown(&mut self, path: String, candidates: &[&str]) {
        let suggestion = suggest_correction(&path, candidates.iter().copied());
        self.issues.push(ValidationIssue {
            message: format!("{path}: unknown parameter"),
            field: path,
            suggestion,
        });
    }

    fn mapping<'v>(&mut self, raw: &'v Value, path: &str) -> Option<&'v Mapping> {
        match raw {
            Value::Mapping(m) => Some(m),
            _ => {
                let shown = if path.is_empty() { "document" } else { path };
                self.issues.push(ValidationIssue::new(
                    path,
                    format!("{shown}: expected a mapping of parameters"),
                ));
                None
            }
        }
    }

    fn group(&mut self, raw: &Value, group: &SchemaGroup) -> NestedDocument {
        let mut doc = NestedDocument::new();
        // An empty document or group still has its required parameters checked.
        let empty = Mapping::new();
        let mapping = if raw.is_null() {
            &empty
        } else {
            let Some(mapping) = self.mapping(raw, &group.path) else {
                return doc;
            };
            mapping
        };

        for key in mapping.keys() {
            let name = yaml_key(key);
            if group.child(&name).is_none() {
                let known = self.known;
                self.unknown(child_path(&group.path, &name), known);
            }
        }

        for child in &group.children {
            let found = mapping.get(child.name()).filter(|v| !v.is_null());
            match (child, found) {
                (SchemaEntry::Group(g), Some(raw_child)) => {
                    let sub = self.group(raw_child, g);
                    if !sub.is_empty() {
                        doc.entries.push((g.name.clone(), Node::Group(sub)));
                    }
                }
                (SchemaEntry::Group(g), None) => {
                    if !self.allow_missing && g.has_required() {
                        self.missing(g.path.clone());
                    }
                }
                (SchemaEntry::Leaf(node), Some(raw_leaf)) => {
                    if let Some(q) = self.quantity(raw_leaf, node) {
                        doc.entries.push((node.name().to_string(), Node::Leaf(q)));
                    }
                }
                (SchemaEntry::Leaf(node), None) => {
                    if !self.allow_missing && node.required {
                        self.missing(node.path.to_string());
                    }
                }
            }
        }
        doc
    }

    fn text_field(&mut self, fields: &Mapping, path: &str, field: &str, required: bool) -> Option<String> {
        let field_path = format!("{path}.{field}");
        match fields.get(field) {
            None | Some(Value::Null) => {
                if required {
                    self.missing(field_path);
                }
                None
            }
            Some(raw) => {
                let text = scalar_text(raw);
                if text.is_none() {
                    self.issues.push(ValidationIssue::new(
                        field_path.clone(),
                        format!("{field_path}: expected text"),
                    ));
                }
                text
            }
        }
    }

    fn quantity(&mut self, raw: &Value, node: &SchemaNode) -> Option<Quantity> {
        let before = self.issues.len();
        let fields = self.mapping(raw, node.path)?;

        for key in fields.keys() {
            let name = yaml_key(key);
            if !QUANTITY_FIELDS.contains(&name.as_str()) {
                let candidates: Vec<String> = QUANTITY_FIELDS.iter().map(|f| child_path(node.path, f)).collect();
                let candidates: Vec<&str> = candidates.iter().map(String::as_str).collect();
                self.unknown(child_path(node.path, &name), &candidates);
            }
        }

        let value = match fields.get("value").filter(|v| !v.is_null()) {
            None => {
                self.missing(format!("{}.value", node.path));
                None
            }
            Some(raw_value) => match node.kind.from_yaml(raw_value) {
                Ok(v) => Some(v),
                Err(e) => {
                    let field = format!("{}.value", node.path);
                    self.issues.push(ValidationIssue::new(field.clone(), format!("{field}: {e}")));
                    None
                }
            },
        };
        let required = !self.allow_missing;
        let variable_name = self.text_field(fields, node.path, "variable_name", required);
        let description = self.text_field(fields, node.path, "description", required);
        let units = self.text_field(fields, node.path, "units", false);

        if self.issues.len() > before {
            return None;
        }
        Some(Quantity {
            value: value?,
            units,
            variable_name,
            description,
        })
    }
}
