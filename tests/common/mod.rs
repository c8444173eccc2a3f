//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use sog_command::schema::infile_layout::AVG_HIST_TRIGGER;
use sog_command::schema::{SchemaNode, SemanticType};
use sog_command::{NestedDocument, ParamValue, Quantity, YamlSchema};

/// A value of the right type for `node`, varied by `seed`.
///
/// Booleans are false so no conditional parameters are needed, and the
/// average/historical trigger is `no` for the same reason.
#[allow(clippy::cast_precision_loss)]
pub fn sample_value(node: &SchemaNode, seed: usize) -> ParamValue {
    let seed_f = seed as f64;
    match node.kind {
        SemanticType::Number => ParamValue::Number(0.25 * seed_f + 1.0e-3),
        SemanticType::Integer => ParamValue::Integer(i64::try_from(seed).unwrap_or_default()),
        SemanticType::Boolean => ParamValue::Boolean(false),
        SemanticType::DateTime => ParamValue::DateTime(
            NaiveDate::from_ymd_opt(2012, 10, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
        ),
        SemanticType::NumberList => ParamValue::NumberList(vec![0.5, seed_f, 3.0e-7]),
        SemanticType::IntegerList => ParamValue::IntegerList(vec![1, 2, 3]),
        SemanticType::String if node.infile_key == AVG_HIST_TRIGGER => ParamValue::String("no".to_string()),
        SemanticType::String => ParamValue::String(format!("input/{}.dat", node.name())),
    }
}

pub fn quantity(node: &SchemaNode, value: ParamValue) -> Quantity {
    Quantity {
        value,
        units: None,
        variable_name: Some(node.variable_name.to_string()),
        description: Some(format!("{} parameter", node.name())),
    }
}

/// A base document holding every required parameter.
pub fn complete_document(schema: &YamlSchema) -> NestedDocument {
    let mut doc = NestedDocument::new();
    for (seed, node) in schema.leaves().iter().enumerate() {
        if node.required {
            doc.insert(node.path, quantity(node, sample_value(node, seed)))
                .unwrap();
        }
    }
    doc
}

pub fn write_yaml(dir: &Path, name: &str, doc: &NestedDocument) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, doc.to_yaml_string().unwrap()).unwrap();
    path
}

pub fn write_text(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}
