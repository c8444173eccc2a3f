//! Create Infile Tests
//!
//! YAML infile + edit files -> temporary Fortran infile, and the error
//! messages users see for bad YAML.

mod common;

use pretty_assertions::assert_eq;
use sog_command::document::DocumentError;
use sog_command::infile::load_str;
use sog_command::run::{create_infile, load_merged, RunError};
use sog_command::transform::read_value;
use sog_command::{yaml_schema, ParamValue};
use tempfile::TempDir;

use common::{complete_document, write_text, write_yaml};

const DEPTH_EDIT: &str = "\
grid:
  model_depth:
    value: 42
";

const DEPTH_AND_LATITUDE_EDIT: &str = "\
grid:
  model_depth:
    value: 0
    description: zero depth
location:
  latitude:
    value: 49.5
";

fn base(dir: &TempDir) -> std::path::PathBuf {
    write_yaml(dir.path(), "infile.yaml", &complete_document(yaml_schema()))
}

#[test]
fn creates_fortran_infile_from_yaml() {
    let dir = TempDir::new().unwrap();
    let infile = create_infile(&base(&dir), &[]).unwrap();
    let records = load_str(&std::fs::read_to_string(&infile).unwrap()).unwrap();
    assert_eq!(records.len(), yaml_schema().leaves().iter().filter(|n| n.required).count());
    assert_eq!(records["maxdepth"].description, "model_depth parameter");
}

#[test]
fn temporary_infile_is_removed_when_dropped() {
    let dir = TempDir::new().unwrap();
    let infile = create_infile(&base(&dir), &[]).unwrap();
    let path = infile.to_path_buf();
    assert!(path.exists());
    assert!(path.to_string_lossy().ends_with(".infile"));
    drop(infile);
    assert!(!path.exists());
}

#[test]
fn edit_file_overrides_base_value() {
    let dir = TempDir::new().unwrap();
    let edit = write_text(dir.path(), "edit.yaml", DEPTH_EDIT);
    let infile = create_infile(&base(&dir), &[edit]).unwrap();
    let records = load_str(&std::fs::read_to_string(&infile).unwrap()).unwrap();
    assert_eq!(records["maxdepth"].value, "4.200000d+01");
}

#[test]
fn later_edit_files_win_and_zero_counts() {
    let dir = TempDir::new().unwrap();
    let first = write_text(dir.path(), "first.yaml", DEPTH_EDIT);
    let second = write_text(dir.path(), "second.yaml", DEPTH_AND_LATITUDE_EDIT);
    let doc = load_merged(&base(&dir), &[first.clone(), second.clone()]).unwrap();
    let schema = yaml_schema();
    assert_eq!(read_value(&doc, schema, "grid.model_depth").unwrap(), &ParamValue::Number(0.0));
    assert_eq!(read_value(&doc, schema, "location.latitude").unwrap(), &ParamValue::Number(49.5));
    assert_eq!(
        doc.quantity("grid.model_depth").unwrap().description.as_deref(),
        Some("zero depth")
    );

    let doc = load_merged(&base(&dir), &[second, first]).unwrap();
    assert_eq!(read_value(&doc, schema, "grid.model_depth").unwrap(), &ParamValue::Number(42.0));
    assert_eq!(read_value(&doc, schema, "location.latitude").unwrap(), &ParamValue::Number(49.5));
}

#[test]
fn non_yaml_file_is_reported_as_such() {
    let dir = TempDir::new().unwrap();
    let bad = write_text(dir.path(), "bad.yaml", "grid: [1, 2\n");
    let err = create_infile(&bad, &[]).unwrap_err();
    assert!(matches!(err, RunError::Document(DocumentError::NotYaml { .. })));
    let message = err.to_string();
    assert!(message.starts_with("Unable to parse"), "{message}");
    assert!(message.ends_with("Are you sure that it is YAML?"), "{message}");
}

#[test]
fn misspelled_edit_parameter_is_reported_with_suggestion() {
    let dir = TempDir::new().unwrap();
    let edit = write_text(dir.path(), "edit.yaml", "grid:\n  model_dpth:\n    value: 42\n");
    let err = create_infile(&base(&dir), &[edit]).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Invalid SOG YAML in"), "{message}");
    assert!(message.contains("The following parameters are missing or misspelled:"));
    assert!(message.contains("grid.model_dpth: unknown parameter; did you mean 'grid.model_depth'?"));
}

#[test]
fn base_infile_missing_parameters_lists_them_all() {
    let dir = TempDir::new().unwrap();
    let partial = write_text(dir.path(), "partial.yaml", DEPTH_EDIT);
    let err = create_infile(&partial, &[]).unwrap_err();
    let RunError::Document(DocumentError::Invalid { issues, .. }) = err else {
        panic!("expected an invalid document error");
    };
    let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
    assert!(fields.contains(&"initial_conditions"));
    assert!(fields.contains(&"grid.model_depth.variable_name"));
    assert!(fields.contains(&"grid.grid_size"));
}

#[test]
fn empty_base_infile_lists_every_missing_group() {
    let dir = TempDir::new().unwrap();
    let empty = write_text(dir.path(), "empty.yaml", "");
    let err = create_infile(&empty, &[]).unwrap_err();
    let RunError::Document(DocumentError::Invalid { issues, .. }) = err else {
        panic!("expected an invalid document error");
    };
    let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
    assert!(fields.contains(&"initial_conditions"));
    assert!(fields.contains(&"grid"));
    assert!(fields.contains(&"forcing_data"));
}

#[test]
fn missing_base_infile_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = create_infile(&dir.path().join("nope.yaml"), &[]).unwrap_err();
    assert!(matches!(err, RunError::Document(DocumentError::Io { .. })));
}
