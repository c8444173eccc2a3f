//! Applying YAML edit files on top of a base infile.

use tracing::debug;

use crate::document::{DocumentError, NestedDocument};
use crate::schema::YamlSchema;

/// Overwrite `base` with every quantity present in `edit`.
///
/// The value is always taken from the edit; `units`, `variable_name` and
/// `description` only when the edit gives them. Presence is what counts, so
/// a zero or `false` value overwrites too. An optional parameter the base
/// lacks is adopted from the edit.
pub fn merge(edit: &NestedDocument, base: &mut NestedDocument, schema: &YamlSchema) -> Result<(), DocumentError> {
    for node in schema.leaves() {
        let Some(from) = edit.quantity(node.path) else {
            continue;
        };
        if let Some(to) = base.quantity_mut(node.path) {
            to.value = from.value.clone();
            if from.units.is_some() {
                to.units.clone_from(&from.units);
            }
            if from.variable_name.is_some() {
                to.variable_name.clone_from(&from.variable_name);
            }
            if from.description.is_some() {
                to.description.clone_from(&from.description);
            }
        } else {
            debug!(path = node.path, "Adding parameter from edit file");
            let mut adopted = from.clone();
            adopted
                .variable_name
                .get_or_insert_with(|| node.variable_name.to_string());
            base.insert(node.path, adopted)?;
        }
    }
    Ok(())
}

/// Apply `edits` to `base` in order; later edits win.
pub fn merge_all<'a>(
    mut base: NestedDocument,
    edits: impl IntoIterator<Item = &'a NestedDocument>,
    schema: &YamlSchema,
) -> Result<NestedDocument, DocumentError> {
    for edit in edits {
        merge(edit, &mut base, schema)?;
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Quantity;
    use crate::schema::{yaml_schema, ParamValue};
    use pretty_assertions::assert_eq;

    fn doc(entries: &[(&str, f64)]) -> NestedDocument {
        let mut doc = NestedDocument::new();
        for (path, x) in entries {
            doc.insert(
                path,
                Quantity::new(ParamValue::Number(*x)).with_description("base description"),
            )
            .unwrap();
        }
        doc
    }

    fn value(doc: &NestedDocument, path: &str) -> ParamValue {
        doc.quantity(path).unwrap().value.clone()
    }

    #[test]
    fn test_edit_overwrites_value_and_keeps_base_description() {
        let mut base = doc(&[("grid.model_depth", 40.0), ("grid.lambda_factor", 0.0)]);
        let mut edit = NestedDocument::new();
        edit.insert("grid.model_depth", Quantity::new(ParamValue::Number(42.0))).unwrap();
        merge(&edit, &mut base, yaml_schema()).unwrap();
        let q = base.quantity("grid.model_depth").unwrap();
        assert_eq!(q.value, ParamValue::Number(42.0));
        assert_eq!(q.description.as_deref(), Some("base description"));
        assert_eq!(value(&base, "grid.lambda_factor"), ParamValue::Number(0.0));
    }

    #[test]
    fn test_edit_description_and_units_overwrite() {
        let mut base = doc(&[("grid.model_depth", 40.0)]);
        let mut edit = NestedDocument::new();
        edit.insert(
            "grid.model_depth",
            Quantity::new(ParamValue::Number(40.0)).with_units("m").with_description("deeper"),
        )
        .unwrap();
        merge(&edit, &mut base, yaml_schema()).unwrap();
        let q = base.quantity("grid.model_depth").unwrap();
        assert_eq!(q.units.as_deref(), Some("m"));
        assert_eq!(q.description.as_deref(), Some("deeper"));
    }

    #[test]
    fn test_zero_overwrites() {
        let mut base = doc(&[("grid.model_depth", 40.0)]);
        let edit = doc(&[("grid.model_depth", 0.0)]);
        merge(&edit, &mut base, yaml_schema()).unwrap();
        assert_eq!(value(&base, "grid.model_depth"), ParamValue::Number(0.0));
    }

    #[test]
    fn test_merge_into_itself_is_unchanged() {
        let original = doc(&[("grid.model_depth", 40.0), ("location.latitude", 49.0)]);
        let mut base = original.clone();
        merge(&original, &mut base, yaml_schema()).unwrap();
        assert_eq!(base, original);
    }

    #[test]
    fn test_same_edit_twice_equals_once() {
        let base = doc(&[("grid.model_depth", 40.0), ("location.latitude", 49.0)]);
        let edit = doc(&[("grid.model_depth", 42.0)]);
        let once = merge_all(base.clone(), [&edit], yaml_schema()).unwrap();
        let twice = merge_all(base, [&edit, &edit], yaml_schema()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_later_edit_wins() {
        let base = doc(&[("grid.model_depth", 40.0), ("location.latitude", 49.0)]);
        let a = doc(&[("grid.model_depth", 41.0), ("location.latitude", 48.0)]);
        let b = doc(&[("grid.model_depth", 42.0)]);
        let merged = merge_all(base, [&a, &b], yaml_schema()).unwrap();
        assert_eq!(value(&merged, "grid.model_depth"), ParamValue::Number(42.0));
        assert_eq!(value(&merged, "location.latitude"), ParamValue::Number(48.0));
    }

    #[test]
    fn test_empty_edit_is_harmless() {
        let original = doc(&[("grid.model_depth", 40.0)]);
        let merged = merge_all(original.clone(), [&NestedDocument::new()], yaml_schema()).unwrap();
        assert_eq!(merged, original);
    }

    #[test]
    fn test_optional_parameter_adopted_from_edit() {
        let mut base = doc(&[("vary.wind", 0.0)]);
        let mut edit = NestedDocument::new();
        edit.insert("vary.wind_fixed", Quantity::new(ParamValue::Boolean(true))).unwrap();
        merge(&edit, &mut base, yaml_schema()).unwrap();
        let q = base.quantity("vary.wind_fixed").unwrap();
        assert_eq!(q.value, ParamValue::Boolean(true));
        assert_eq!(q.variable_name.as_deref(), Some("vary%wind%fixed"));
    }
}
