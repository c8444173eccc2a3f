//! Batch Tests
//!
//! Batch descriptions read from disk, expanded into jobs and run, with a
//! shell script standing in for the SOG executable.

mod common;

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use sog_command::batch::{build_jobs, read_config, run_batch, BatchError};
use sog_command::config::{self, Settings};
use sog_command::yaml_schema;
use tempfile::TempDir;

use common::{complete_document, write_text, write_yaml};

fn fast_polling() {
    config::init(Settings {
        poll_interval_ms: 20,
        watch_interval_ms: 10,
        ..Settings::default()
    });
}

/// A stand-in for SOG that swallows its infile, says hello and exits with `code`.
#[cfg(unix)]
fn fake_sog(dir: &Path, name: &str, code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = write_text(dir, name, &format!("#!/bin/sh\ncat > /dev/null\necho \"{name} ran\"\nexit {code}\n"));
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn legacy_infile_with_edit_files_fails_before_running() {
    let dir = TempDir::new().unwrap();
    let batchfile = write_text(
        dir.path(),
        "batch.yaml",
        "\
SOG_executable: SOG
jobs:
  - legacy_run:
      legacy_infile: true
      base_infile: legacy.infile
      edit_files:
        - edit.yaml
",
    );
    let config = read_config(&batchfile).unwrap();
    let err = build_jobs(&config).unwrap_err();
    assert!(matches!(err, BatchError::LegacyWithEditFiles(ref job) if job == "legacy_run"));
    assert_eq!(
        err.to_string(),
        "legacy_run job with legacy_infile = true cannot have edit_files"
    );
}

#[test]
fn legacy_job_cannot_inherit_default_edit_files() {
    let dir = TempDir::new().unwrap();
    let batchfile = write_text(
        dir.path(),
        "batch.yaml",
        "\
SOG_executable: SOG
edit_files:
  - common.yaml
jobs:
  - old:
      legacy_infile: true
      base_infile: legacy.infile
",
    );
    let err = run_batch(&batchfile, true, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, BatchError::LegacyWithEditFiles(ref job) if job == "old"));
}

#[test]
fn batch_level_legacy_infile_forbids_default_edit_files() {
    let dir = TempDir::new().unwrap();
    let batchfile = write_text(
        dir.path(),
        "batch.yaml",
        "\
SOG_executable: SOG
legacy_infile: true
edit_files:
  - edit.yaml
jobs:
  - run:
      base_infile: legacy.infile
",
    );
    let err = run_batch(&batchfile, true, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, BatchError::DefaultWithLegacy("edit_files")));
}

#[test]
fn dry_run_lists_jobs_in_order() {
    fast_polling();
    let dir = TempDir::new().unwrap();
    let batchfile = write_text(
        dir.path(),
        "batch.yaml",
        "\
max_concurrent_jobs: 2
SOG_executable: SOG-code/SOG
base_infile: infile.yaml
edit_files:
  - common.yaml
nice: 10
jobs:
  - high_wind:
      edit_files:
        - high_wind.yaml
  - baseline:
",
    );
    let mut out = Vec::new();
    assert_eq!(run_batch(&batchfile, true, &mut out).unwrap(), 0);
    let report = String::from_utf8(out).unwrap();
    let expected = "\
The following SOG jobs would have been run:
  job name: command

  high_wind: sog run SOG-code/SOG infile.yaml -e common.yaml -e high_wind.yaml -o high_wind.yaml.out --nice 10

  baseline: sog run SOG-code/SOG infile.yaml -e common.yaml -o infile.yaml.out --nice 10

2 job(s) would have been run concurrently.
";
    assert_eq!(report, expected);
}

#[test]
fn unparseable_batch_file() {
    let dir = TempDir::new().unwrap();
    let batchfile = write_text(dir.path(), "batch.yaml", "jobs: [\n");
    let err = read_config(&batchfile).unwrap_err();
    assert!(matches!(err, BatchError::Parse { .. }));
}

#[test]
fn missing_batch_file() {
    let dir = TempDir::new().unwrap();
    let err = run_batch(&dir.path().join("nope.yaml"), false, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, BatchError::NotFound(_)));
}

#[cfg(unix)]
#[test]
fn batch_returns_largest_exit_code_and_writes_outfiles() {
    fast_polling();
    let dir = TempDir::new().unwrap();
    let ok = fake_sog(dir.path(), "sog_ok", 0);
    let failing = fake_sog(dir.path(), "sog_fail", 2);
    let legacy_infile = write_text(dir.path(), "legacy.infile", "\"maxdepth\"  40.0d0  \"depth [m]\"\n");
    let yaml_infile = write_yaml(dir.path(), "infile.yaml", &complete_document(yaml_schema()));
    let out_a = dir.path().join("a.out");
    let out_b = dir.path().join("b.out");
    let out_c = dir.path().join("c.out");

    let batchfile = write_text(
        dir.path(),
        "batch.yaml",
        &format!(
            "\
max_concurrent_jobs: 2
SOG_executable: {ok}
jobs:
  - a:
      base_infile: {yaml}
      outfile: {out_a}
  - b:
      SOG_executable: {failing}
      base_infile: {legacy}
      legacy_infile: true
      outfile: {out_b}
  - c:
      base_infile: {legacy}
      legacy_infile: true
      outfile: {out_c}
",
            ok = ok.display(),
            failing = failing.display(),
            yaml = yaml_infile.display(),
            legacy = legacy_infile.display(),
            out_a = out_a.display(),
            out_b = out_b.display(),
            out_c = out_c.display(),
        ),
    );

    assert_eq!(run_batch(&batchfile, false, &mut Vec::new()).unwrap(), 2);
    assert_eq!(std::fs::read_to_string(&out_a).unwrap(), "sog_ok ran\n");
    assert_eq!(std::fs::read_to_string(&out_b).unwrap(), "sog_fail ran\n");
    assert_eq!(std::fs::read_to_string(&out_c).unwrap(), "sog_ok ran\n");
}

#[cfg(unix)]
#[test]
fn job_that_cannot_start_counts_as_one() {
    fast_polling();
    let dir = TempDir::new().unwrap();
    let ok = fake_sog(dir.path(), "sog_ok", 0);
    let legacy_infile = write_text(dir.path(), "legacy.infile", "\"maxdepth\"  40.0d0  \"depth [m]\"\n");
    let batchfile = write_text(
        dir.path(),
        "batch.yaml",
        &format!(
            "\
SOG_executable: {ok}
jobs:
  - missing_infile:
      base_infile: {missing}
      legacy_infile: true
      outfile: {out_missing}
  - fine:
      base_infile: {legacy}
      legacy_infile: true
      outfile: {out_fine}
",
            ok = ok.display(),
            missing = dir.path().join("nope.infile").display(),
            legacy = legacy_infile.display(),
            out_missing = dir.path().join("missing.out").display(),
            out_fine = dir.path().join("fine.out").display(),
        ),
    );

    assert_eq!(run_batch(&batchfile, false, &mut Vec::new()).unwrap(), 1);
    assert!(dir.path().join("fine.out").exists());
}
