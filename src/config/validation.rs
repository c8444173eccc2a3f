//! Unknown-key detection with Levenshtein suggestions.
//!
//! Two-pass parse approach: first walk the raw TOML or YAML value tree and
//! compare every key against the known field names, emitting issues with
//! "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. For settings and batch files the issues are warnings
//! only; the YAML infile loader treats them as errors.

use std::collections::HashSet;

use super::defaults::MAX_SUGGESTION_DISTANCE;

/// A config problem tied to one dotted key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, "; did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Keys
// ============================================================================

/// Valid dotted key paths for `Settings`.
///
/// Maintained manually to match the struct in settings.rs.
pub fn known_settings_keys() -> HashSet<&'static str> {
    ["poll_interval_ms", "watch_interval_ms", "default_nice", "temp_dir"]
        .into_iter()
        .collect()
}

/// Valid top-level keys of a batch description file.
pub fn known_batch_keys() -> HashSet<&'static str> {
    [
        "max_concurrent_jobs",
        "SOG_executable",
        "base_infile",
        "edit_files",
        "nice",
        "legacy_infile",
        "jobs",
    ]
    .into_iter()
    .collect()
}

/// Valid keys inside one job of a batch description file.
pub fn known_job_keys() -> HashSet<&'static str> {
    [
        "SOG_executable",
        "base_infile",
        "edit_files",
        "outfile",
        "nice",
        "legacy_infile",
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// Key Walking
// ============================================================================

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = join_path(prefix, k);
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

/// Render a YAML mapping key as text.
pub fn yaml_key(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit
/// distance 3. Ties go to the key seen first.
pub fn suggest_correction<'a>(unknown: &str, known: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for k in known {
        let dist = levenshtein(unknown, k);
        if dist <= MAX_SUGGESTION_DISTANCE && best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((k, dist));
        }
    }
    best.map(|(k, _)| k.to_string())
}

/// Issues for every key of `found` that `known` does not contain.
///
/// Suggestions are taken from `known` in sorted order so they do not depend
/// on hash order.
pub fn unknown_keys(found: &[String], known: &HashSet<&str>, what: &str) -> Vec<ValidationIssue> {
    let mut sorted: Vec<&str> = known.iter().copied().collect();
    sorted.sort_unstable();
    found
        .iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationIssue {
            field: key.clone(),
            message: format!("Unknown {what} key '{key}'"),
            suggestion: suggest_correction(key, sorted.iter().copied()),
        })
        .collect()
}

// ============================================================================
// Unknown Key Validation (entry points)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown settings keys.
pub fn validate_unknown_settings_keys(raw_toml: &str) -> Vec<ValidationIssue> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        // parse errors are reported by serde later
        return Vec::new();
    };
    unknown_keys(&walk_toml_keys(&value, ""), &known_settings_keys(), "settings")
}

/// Warnings for unknown keys at the top level of a batch description and
/// inside each of its jobs.
pub fn validate_unknown_batch_keys(raw: &serde_yaml::Value) -> Vec<ValidationIssue> {
    let Some(mapping) = raw.as_mapping() else {
        return Vec::new();
    };
    let top: Vec<String> = mapping.keys().map(yaml_key).collect();
    let mut issues = unknown_keys(&top, &known_batch_keys(), "batch");

    let known_job = known_job_keys();
    let jobs = mapping
        .get("jobs")
        .and_then(serde_yaml::Value::as_sequence)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for entry in jobs.iter().filter_map(serde_yaml::Value::as_mapping) {
        for (name, spec) in entry {
            let Some(spec) = spec.as_mapping() else {
                continue;
            };
            let name = yaml_key(name);
            let keys: Vec<String> = spec.keys().map(yaml_key).collect();
            for mut issue in unknown_keys(&keys, &known_job, "job") {
                issue.message = format!("{} in job '{name}'", issue.message);
                issue.field = format!("jobs.{name}.{}", issue.field);
                issues.push(issue);
            }
        }
    }
    issues
}

// ============================================================================
// Tests
// ============================================================================
