//! Conversion between nested documents and infile records.
//!
//! Both directions walk the schema's leaves depth first, so a path is a
//! leaf in one direction exactly when it is a leaf in the other.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::document::{DocumentError, NestedDocument, Quantity};
use crate::infile::{self, InfileError, InfileRecord, InfileRecords};
use crate::schema::{ParamValue, ValueError, YamlSchema};

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("No value for required parameter {0}")]
    MissingValue(String),

    #[error("Infile key not found: {0}")]
    MissingKey(String),

    #[error("Unknown parameter: {0}")]
    UnknownPath(String),

    #[error("Bad value for {path}: {source}")]
    Value {
        path: String,
        #[source]
        source: ValueError,
    },

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Infile(#[from] InfileError),

    #[error("Unable to write YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Build infile records from a nested document.
///
/// Optional parameters absent from the document are skipped; the infile
/// emitter reports them only if a selector asks for them.
pub fn flatten(doc: &NestedDocument, schema: &YamlSchema) -> Result<InfileRecords, TransformError> {
    let mut records = InfileRecords::new();
    for node in schema.leaves() {
        let Some(quantity) = doc.quantity(node.path) else {
            if node.required {
                return Err(TransformError::MissingValue(node.path.to_string()));
            }
            continue;
        };
        let value = node
            .kind
            .to_infile(&quantity.value)
            .map_err(|source| TransformError::Value {
                path: node.path.to_string(),
                source,
            })?;
        records.insert(
            node.infile_key.to_string(),
            InfileRecord {
                value,
                description: quantity.description.clone().unwrap_or_default(),
                units: quantity.units.clone(),
            },
        );
    }
    Ok(records)
}

/// Build a nested document from infile records.
pub fn unflatten(records: &InfileRecords, schema: &YamlSchema) -> Result<NestedDocument, TransformError> {
    let mut doc = NestedDocument::new();
    for node in schema.leaves() {
        let Some(record) = records.get(node.infile_key) else {
            if node.required {
                return Err(TransformError::MissingKey(node.infile_key.to_string()));
            }
            continue;
        };
        let value = node
            .kind
            .from_infile(&record.value)
            .map_err(|source| TransformError::Value {
                path: node.path.to_string(),
                source,
            })?;
        let quantity = Quantity {
            value,
            units: record.units.clone(),
            variable_name: Some(node.variable_name.to_string()),
            description: Some(record.description.clone()),
        };
        doc.insert(node.path, quantity)?;
    }
    Ok(doc)
}

/// Value of the parameter at a dotted path.
pub fn read_value<'a>(doc: &'a NestedDocument, schema: &YamlSchema, path: &str) -> Result<&'a ParamValue, TransformError> {
    if schema.leaf(path).is_none() {
        return Err(TransformError::UnknownPath(path.to_string()));
    }
    doc.quantity(path)
        .map(|q| &q.value)
        .ok_or_else(|| TransformError::MissingValue(path.to_string()))
}

/// Convert a Fortran-style infile to the nested YAML form.
pub fn infile_to_yaml(legacy_infile: &Path, schema: &YamlSchema) -> Result<String, TransformError> {
    let file = File::open(legacy_infile).map_err(InfileError::from)?;
    let records = infile::load(BufReader::new(file))?;
    debug!(infile = %legacy_infile.display(), records = records.len(), "Loaded legacy infile");
    let doc = unflatten(&records, schema)?;
    Ok(doc.to_yaml_string()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::yaml_schema;
    use pretty_assertions::assert_eq;

    fn depth_only() -> NestedDocument {
        let mut doc = NestedDocument::new();
        doc.insert(
            "grid.model_depth",
            Quantity::new(ParamValue::Number(40.0))
                .with_units("m")
                .with_description("depth of modelled domain"),
        )
        .unwrap();
        doc
    }

    #[test]
    fn test_flatten_reports_first_missing_required_value() {
        let err = flatten(&depth_only(), yaml_schema()).unwrap_err();
        assert!(matches!(err, TransformError::MissingValue(ref p) if p == "initial_conditions.init_datetime"));
    }

    #[test]
    fn test_unflatten_reports_missing_key() {
        let records = InfileRecords::new();
        let err = unflatten(&records, yaml_schema()).unwrap_err();
        assert!(matches!(err, TransformError::MissingKey(ref k) if k == "init datetime"));
    }

    #[test]
    fn test_read_value() {
        let doc = depth_only();
        let schema = yaml_schema();
        assert_eq!(read_value(&doc, schema, "grid.model_depth").unwrap(), &ParamValue::Number(40.0));
        assert!(matches!(
            read_value(&doc, schema, "grid"),
            Err(TransformError::UnknownPath(_))
        ));
        assert!(matches!(
            read_value(&doc, schema, "grid.grid_size"),
            Err(TransformError::MissingValue(_))
        ));
    }

    #[test]
    fn test_infile_to_yaml_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = infile_to_yaml(&dir.path().join("nope.infile"), yaml_schema()).unwrap_err();
        assert!(matches!(err, TransformError::Infile(InfileError::Io(_))));
    }

    #[test]
    fn test_infile_to_yaml_incomplete_infile() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "\"maxdepth\"  40.0d0  \"depth of modelled domain [m]\"\n").unwrap();
        let err = infile_to_yaml(file.path(), yaml_schema()).unwrap_err();
        assert!(matches!(err, TransformError::MissingKey(_)));
    }
}
