//! Batch runs of SOG.
//!
//! A batch description is a YAML file of defaults and an ordered list of
//! jobs, each of which may override any default:
//!
//! ```yaml
//! max_concurrent_jobs: 2
//! SOG_executable: SOG-code/SOG
//! base_infile: SOG-code/infile.yaml
//! edit_files:
//!   - common_edits.yaml
//! jobs:
//!   - high_wind:
//!       edit_files:
//!         - high_wind.yaml
//!   - low_wind:
//!       nice: 10
//! ```
//!
//! [`build_jobs`] expands the description into fully resolved [`Job`]s and
//! checks the legacy infile rules before anything starts.
//! [`BatchScheduler`] then runs them.

mod scheduler;

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use scheduler::{BatchReport, BatchScheduler, JobHandle, JobLauncher, JobOutcome, ProcessLauncher};

use crate::config::{self, defaults, validation};
use crate::run::{append_suffix, RunOptions};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("batchfile not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unable to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Unable to parse batch file {}: {source}", .path.display())]
    Parse { path: PathBuf, source: serde_yaml::Error },

    #[error("max_concurrent_jobs must be at least 1")]
    NoConcurrency,

    #[error("Job entry {0} must map exactly one job name to its settings")]
    JobEntry(usize),

    #[error("No {key} key found for job: {job}")]
    MissingKey { key: &'static str, job: String },

    #[error("Default {0} not allowed with legacy_infile = true")]
    DefaultWithLegacy(&'static str),

    #[error("{0} job with legacy_infile = true requires base_infile")]
    LegacyWithoutBaseInfile(String),

    #[error("{0} job with legacy_infile = true cannot have edit_files")]
    LegacyWithEditFiles(String),

    #[error("I/O error: {0}")]
    Output(#[from] std::io::Error),
}

fn default_max_concurrent_jobs() -> usize {
    defaults::DEFAULT_MAX_CONCURRENT_JOBS
}

/// A batch description file as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_max_concurrent_jobs")]
    pub max_concurrent_jobs: usize,
    #[serde(rename = "SOG_executable")]
    pub sog_executable: Option<PathBuf>,
    pub base_infile: Option<PathBuf>,
    pub edit_files: Option<Vec<PathBuf>>,
    pub nice: Option<i32>,
    pub legacy_infile: Option<bool>,
    #[serde(default)]
    pub jobs: Vec<BTreeMap<String, Option<JobSpec>>>,
}

/// Per-job overrides of the batch defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobSpec {
    #[serde(rename = "SOG_executable")]
    pub sog_executable: Option<PathBuf>,
    pub base_infile: Option<PathBuf>,
    pub edit_files: Option<Vec<PathBuf>>,
    pub outfile: Option<PathBuf>,
    pub nice: Option<i32>,
    pub legacy_infile: Option<bool>,
}

impl BatchConfig {
    /// Parse a batch description, warning about unknown keys.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        let raw: serde_yaml::Value = serde_yaml::from_str(text)?;
        for w in validation::validate_unknown_batch_keys(&raw) {
            warn!("{w}");
        }
        serde_yaml::from_value(raw)
    }
}

/// Read a batch description file.
pub fn read_config(batchfile: &Path) -> Result<BatchConfig, BatchError> {
    if !batchfile.exists() {
        return Err(BatchError::NotFound(batchfile.to_path_buf()));
    }
    info!(batchfile = %batchfile.display(), "Building jobs described in batch file");
    let text = std::fs::read_to_string(batchfile).map_err(|source| BatchError::Io {
        path: batchfile.to_path_buf(),
        source,
    })?;
    let config = BatchConfig::from_yaml_str(&text).map_err(|source| BatchError::Parse {
        path: batchfile.to_path_buf(),
        source,
    })?;
    info!(max_concurrent_jobs = config.max_concurrent_jobs, "Max concurrent jobs");
    Ok(config)
}

/// One fully resolved SOG run of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    pub sog_exec: PathBuf,
    pub infile: PathBuf,
    pub edit_files: Vec<PathBuf>,
    pub outfile: PathBuf,
    pub nice: i32,
    pub legacy_infile: bool,
}

impl Job {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            sog_exec: self.sog_exec.clone(),
            infile: self.infile.clone(),
            edit_files: self.edit_files.clone(),
            outfile: Some(self.outfile.clone()),
            nice: self.nice,
            legacy_infile: self.legacy_infile,
            dry_run: false,
        }
    }

    /// The `sog run` command equivalent to this job.
    pub fn command_line(&self) -> String {
        let mut cmd = format!(
            "{}: sog run {} {}",
            self.name,
            self.sog_exec.display(),
            self.infile.display()
        );
        for edit_file in &self.edit_files {
            cmd.push_str(&format!(" -e {}", edit_file.display()));
        }
        cmd.push_str(&format!(" -o {}", self.outfile.display()));
        if self.legacy_infile {
            cmd.push_str(" --legacy-infile");
        }
        cmd.push_str(&format!(" --nice {}", self.nice));
        cmd
    }
}

fn job_or_default<T: Clone + Debug>(
    job: &str,
    key: &'static str,
    from_job: Option<&T>,
    from_defaults: Option<&T>,
) -> Result<T, BatchError> {
    if let Some(value) = from_job {
        debug!(job, key, ?value, "From job description");
        return Ok(value.clone());
    }
    if let Some(value) = from_defaults {
        debug!(job, key, ?value, "From top level defaults");
        return Ok(value.clone());
    }
    Err(BatchError::MissingKey {
        key,
        job: job.to_string(),
    })
}

/// `legacy_infile` at the top level rules out a default base infile and
/// default edit files.
fn legacy_default_rules(config: &BatchConfig) -> Result<bool, BatchError> {
    let legacy = config.legacy_infile.unwrap_or(false);
    if legacy && config.base_infile.is_some() {
        return Err(BatchError::DefaultWithLegacy("base_infile"));
    }
    if legacy && config.edit_files.is_some() {
        return Err(BatchError::DefaultWithLegacy("edit_files"));
    }
    Ok(legacy)
}

/// A legacy job names its own infile and takes no edit files, neither its
/// own nor the batch defaults.
fn legacy_job_rules(
    name: &str,
    spec: &JobSpec,
    default_legacy: bool,
    default_edit_files: &[PathBuf],
) -> Result<bool, BatchError> {
    let legacy = default_legacy || spec.legacy_infile.unwrap_or(false);
    if legacy && spec.base_infile.is_none() {
        return Err(BatchError::LegacyWithoutBaseInfile(name.to_string()));
    }
    if legacy && (spec.edit_files.is_some() || !default_edit_files.is_empty()) {
        return Err(BatchError::LegacyWithEditFiles(name.to_string()));
    }
    Ok(legacy)
}

/// Expand a batch description into jobs, in batch file order.
///
/// Every rule is checked here, so a bad description fails before any job
/// starts.
pub fn build_jobs(config: &BatchConfig) -> Result<Vec<Job>, BatchError> {
    if config.max_concurrent_jobs == 0 {
        return Err(BatchError::NoConcurrency);
    }
    let default_edit_files = config.edit_files.clone().unwrap_or_default();
    debug!(edit_files = ?default_edit_files, "YAML edit files used in all jobs (in order)");
    let default_legacy = legacy_default_rules(config)?;

    let mut jobs = Vec::with_capacity(config.jobs.len());
    for (index, entry) in config.jobs.iter().enumerate() {
        let mut entries = entry.iter();
        let (Some((name, spec)), None) = (entries.next(), entries.next()) else {
            return Err(BatchError::JobEntry(index + 1));
        };
        let spec = spec.clone().unwrap_or_default();
        info!(job = %name, "Building command for job");

        let legacy_infile = legacy_job_rules(name, &spec, default_legacy, &default_edit_files)?;
        let sog_exec = job_or_default(
            name,
            "SOG_executable",
            spec.sog_executable.as_ref(),
            config.sog_executable.as_ref(),
        )?;
        let infile = job_or_default(name, "base_infile", spec.base_infile.as_ref(), config.base_infile.as_ref())?;

        let job_edit_files = spec.edit_files.unwrap_or_default();
        let outfile = spec.outfile.unwrap_or_else(|| {
            let stem = job_edit_files.last().unwrap_or(&infile);
            append_suffix(stem, defaults::OUTFILE_SUFFIX)
        });
        let nice = spec.nice.or(config.nice).unwrap_or(config::get().default_nice);
        let edit_files: Vec<PathBuf> = default_edit_files.iter().chain(&job_edit_files).cloned().collect();
        debug!(job = %name, ?edit_files, outfile = %outfile.display(), legacy_infile, nice, "Job resolved");

        jobs.push(Job {
            name: name.clone(),
            sog_exec,
            infile,
            edit_files,
            outfile,
            nice,
            legacy_infile,
        });
    }
    Ok(jobs)
}

/// Text printed instead of running a batch.
pub fn dry_run_report(jobs: &[Job], max_concurrent_jobs: usize) -> String {
    let mut report = String::from("The following SOG jobs would have been run:\n  job name: command\n\n");
    for job in jobs {
        report.push_str("  ");
        report.push_str(&job.command_line());
        report.push_str("\n\n");
    }
    report.push_str(&format!("{max_concurrent_jobs} job(s) would have been run concurrently.\n"));
    report
}

/// Run the batch described in `batchfile` and return the aggregate exit
/// code. A dry run writes its report to `out` and returns 0.
pub fn run_batch<W: Write>(batchfile: &Path, dry_run: bool, out: &mut W) -> Result<i32, BatchError> {
    let config = read_config(batchfile)?;
    let jobs = build_jobs(&config)?;
    if dry_run {
        out.write_all(dry_run_report(&jobs, config.max_concurrent_jobs).as_bytes())?;
        return Ok(0);
    }
    let scheduler = BatchScheduler::new(config.max_concurrent_jobs, config::get().poll_interval());
    let report = scheduler.run(jobs, &mut ProcessLauncher);
    Ok(report.returncode)
}
