//! Single SOG runs.
//!
//! A run turns a YAML infile (plus edit files) into a temporary Fortran
//! infile and starts SOG on it:
//!
//! ```text
//! nice -n <nice> <SOG_exec> < <infile> > <outfile> 2>&1
//! ```
//!
//! The command is executed directly, not through a shell. The temporary
//! infile lives as long as the [`RunCommand`] that names it.

mod watch;

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};

use tempfile::TempPath;
use thiserror::Error;
use tracing::{debug, info};

pub use watch::watch_outfile;

use crate::batch::JobHandle;
use crate::config::{self, defaults};
use crate::document::{load_document, DocumentError, NestedDocument};
use crate::infile::{dump_to_string, InfileError};
use crate::merge::merge_all;
use crate::schema::{sog_layout, yaml_schema};
use crate::transform::{flatten, TransformError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("infile not found: {}", .0.display())]
    InfileNotFound(PathBuf),

    #[error("SOG executable not found: {}", .0.display())]
    ExecutableNotFound(PathBuf),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Infile(#[from] InfileError),

    #[error("Unable to start {}: {source}", .exec.display())]
    Spawn { exec: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What to run and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub sog_exec: PathBuf,
    pub infile: PathBuf,
    pub edit_files: Vec<PathBuf>,
    /// Defaults to `<basename of infile>.out` in the current directory
    pub outfile: Option<PathBuf>,
    pub nice: i32,
    /// `infile` is a Fortran-style infile to hand to SOG as is
    pub legacy_infile: bool,
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(sog_exec: impl Into<PathBuf>, infile: impl Into<PathBuf>) -> Self {
        Self {
            sog_exec: sog_exec.into(),
            infile: infile.into(),
            edit_files: Vec::new(),
            outfile: None,
            nice: defaults::DEFAULT_NICE,
            legacy_infile: false,
            dry_run: false,
        }
    }
}

/// The Fortran infile a run reads.
#[derive(Debug)]
pub enum RunInfile {
    /// A legacy infile given by the user
    Given(PathBuf),
    /// Built from YAML; deleted when dropped
    Temporary(TempPath),
    /// Name a temporary infile would have had
    DryRun(PathBuf),
}

impl RunInfile {
    pub fn path(&self) -> &Path {
        match self {
            Self::Given(path) | Self::DryRun(path) => path.as_path(),
            Self::Temporary(path) => &**path,
        }
    }
}

/// A fully prepared SOG invocation.
#[derive(Debug)]
pub struct RunCommand {
    pub sog_exec: PathBuf,
    pub infile: RunInfile,
    pub outfile: PathBuf,
    pub nice: i32,
}

impl RunCommand {
    /// The equivalent shell command line.
    pub fn shell_line(&self) -> String {
        format!(
            "nice -n {} {} < {} > {} 2>&1",
            self.nice,
            self.sog_exec.display(),
            self.infile.path().display(),
            self.outfile.display()
        )
    }

    /// Start SOG with stdin from the infile and stdout and stderr both
    /// going to the outfile.
    pub fn spawn(&self) -> Result<Child, RunError> {
        let stdin = File::open(self.infile.path())?;
        let stdout = File::create(&self.outfile)?;
        let stderr = stdout.try_clone()?;
        let child = Command::new("nice")
            .arg("-n")
            .arg(self.nice.to_string())
            .arg(&self.sog_exec)
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .spawn()
            .map_err(|source| RunError::Spawn {
                exec: self.sog_exec.clone(),
                source,
            })?;
        debug!(pid = child.id(), command = %self.shell_line(), "Started SOG");
        Ok(child)
    }
}

/// A running SOG process together with the command that started it, so
/// its temporary infile outlives the process.
#[derive(Debug)]
pub struct ProcessHandle {
    child: Child,
    command: RunCommand,
}

impl ProcessHandle {
    pub fn start(command: RunCommand) -> Result<Self, RunError> {
        let child = command.spawn()?;
        Ok(Self { child, command })
    }

    pub fn command(&self) -> &RunCommand {
        &self.command
    }

    pub fn child_mut(&mut self) -> &mut Child {
        &mut self.child
    }

    /// Block until SOG finishes.
    pub fn wait(&mut self) -> Result<i32, RunError> {
        Ok(exit_code(self.child.wait()?))
    }
}

impl JobHandle for ProcessHandle {
    fn pid(&self) -> u32 {
        self.child.id()
    }

    fn try_wait(&mut self) -> io::Result<Option<i32>> {
        Ok(self.child.try_wait()?.map(exit_code))
    }
}

/// Exit code of a finished process. A process killed by a signal reports
/// the negated signal number.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    1
}

/// `path` with `suffix` appended to its final component.
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// `<basename of infile>.out` in the current directory.
pub fn default_outfile(infile: &Path) -> io::Result<PathBuf> {
    let basename = infile.file_name().unwrap_or(infile.as_os_str());
    Ok(std::env::current_dir()?.join(append_suffix(Path::new(basename), defaults::OUTFILE_SUFFIX)))
}

fn temp_infile() -> io::Result<tempfile::NamedTempFile> {
    let dir = config::get().temp_dir.clone().unwrap_or_else(std::env::temp_dir);
    tempfile::Builder::new()
        .prefix("sog")
        .suffix(defaults::TEMP_INFILE_SUFFIX)
        .tempfile_in(dir)
}

/// Load a YAML infile and apply edit files to it in order.
pub fn load_merged(yaml_infile: &Path, edit_files: &[PathBuf]) -> Result<NestedDocument, RunError> {
    let schema = yaml_schema();
    let base = load_document(yaml_infile, schema, false)?;
    let edits = edit_files
        .iter()
        .map(|f| load_document(f, schema, true))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(merge_all(base, &edits, schema)?)
}

/// Build a temporary Fortran infile from a YAML infile and edit files.
///
/// Nothing is written unless the whole infile renders.
pub fn create_infile(yaml_infile: &Path, edit_files: &[PathBuf]) -> Result<TempPath, RunError> {
    let merged = load_merged(yaml_infile, edit_files)?;
    let records = flatten(&merged, yaml_schema())?;
    let text = dump_to_string(&records, sog_layout())?;

    let mut file = temp_infile()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    let path = file.into_temp_path();
    info!(
        yaml = %yaml_infile.display(),
        edits = edit_files.len(),
        infile = %path.display(),
        "Created SOG infile"
    );
    Ok(path)
}

/// Check the inputs and build the command for a run.
///
/// In a dry run no infile is written; the command names a temporary file
/// that no longer exists.
pub fn prepare(opts: &RunOptions) -> Result<RunCommand, RunError> {
    if !opts.infile.exists() {
        return Err(RunError::InfileNotFound(opts.infile.clone()));
    }
    if !opts.sog_exec.exists() {
        return Err(RunError::ExecutableNotFound(opts.sog_exec.clone()));
    }
    let outfile = match &opts.outfile {
        Some(outfile) => outfile.clone(),
        None => default_outfile(&opts.infile)?,
    };
    let infile = if opts.legacy_infile {
        RunInfile::Given(opts.infile.clone())
    } else if opts.dry_run {
        RunInfile::DryRun(temp_infile()?.path().to_path_buf())
    } else {
        RunInfile::Temporary(create_infile(&opts.infile, &opts.edit_files)?)
    };
    Ok(RunCommand {
        sog_exec: opts.sog_exec.clone(),
        infile,
        outfile,
        nice: opts.nice,
    })
}

/// Text printed instead of running SOG.
pub fn dry_run_report(command: &RunCommand, watch: bool) -> String {
    let mut report = format!(
        "Command that would have been used to run SOG:\n  {}\n",
        command.shell_line()
    );
    if watch {
        report.push_str(&format!(
            "Contents of {} would have been shown on screen while SOG run was in progress.\n",
            command.outfile.display()
        ));
    }
    report
}

/// Prepare and start a run, returning the live process.
pub fn launch(opts: &RunOptions) -> Result<ProcessHandle, RunError> {
    ProcessHandle::start(prepare(opts)?)
}

/// Do a run from start to finish and return SOG's exit code.
///
/// A dry run writes its report to `out` and returns 0. With `watch`, the
/// outfile is echoed to `out` while SOG runs.
pub fn run<W: Write>(opts: &RunOptions, watch: bool, out: &mut W) -> Result<i32, RunError> {
    let command = prepare(opts)?;
    if opts.dry_run {
        out.write_all(dry_run_report(&command, watch).as_bytes())?;
        return Ok(0);
    }

    let mut handle = ProcessHandle::start(command)?;
    info!(pid = handle.pid(), outfile = %handle.command().outfile.display(), "SOG run started");
    let code = if watch {
        let outfile = handle.command().outfile.clone();
        watch_outfile(&mut handle, &outfile, config::get().watch_interval(), out)?
    } else {
        handle.wait()?
    };
    info!(returncode = code, "SOG run finished");
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn test_legacy_command_line() {
        let dir = TempDir::new().unwrap();
        let exec = touch(&dir, "SOG");
        let infile = touch(&dir, "infile");
        let mut opts = RunOptions::new(&exec, &infile);
        opts.legacy_infile = true;
        opts.outfile = Some(PathBuf::from("/runs/out"));
        let command = prepare(&opts).unwrap();
        assert_eq!(
            command.shell_line(),
            format!("nice -n 19 {} < {} > /runs/out 2>&1", exec.display(), infile.display())
        );
    }

    #[test]
    fn test_default_outfile_is_in_current_directory() {
        let outfile = default_outfile(Path::new("/some/where/infile.yaml")).unwrap();
        assert_eq!(outfile, std::env::current_dir().unwrap().join("infile.yaml.out"));
    }

    #[test]
    fn test_missing_infile() {
        let opts = RunOptions::new("SOG", "/no/such/infile.yaml");
        assert!(matches!(prepare(&opts), Err(RunError::InfileNotFound(_))));
    }

    #[test]
    fn test_missing_executable() {
        let dir = TempDir::new().unwrap();
        let infile = touch(&dir, "infile.yaml");
        let opts = RunOptions::new(dir.path().join("SOG"), infile);
        let err = prepare(&opts).unwrap_err();
        assert!(err.to_string().starts_with("SOG executable not found"), "{err}");
    }

    #[test]
    fn test_dry_run_writes_no_infile() {
        let dir = TempDir::new().unwrap();
        let exec = touch(&dir, "SOG");
        // Not valid YAML; a dry run never reads it.
        let infile = touch(&dir, "infile.yaml");
        let mut opts = RunOptions::new(exec, infile);
        opts.dry_run = true;
        opts.outfile = Some(PathBuf::from("out"));
        let command = prepare(&opts).unwrap();
        assert!(matches!(command.infile, RunInfile::DryRun(_)));
        assert!(!command.infile.path().exists());
        assert!(command.infile.path().to_string_lossy().ends_with(".infile"));

        let report = dry_run_report(&command, true);
        assert!(report.starts_with("Command that would have been used to run SOG:\n  nice -n 19 "));
        assert!(report.ends_with("Contents of out would have been shown on screen while SOG run was in progress.\n"));
        assert_eq!(dry_run_report(&command, false).lines().count(), 2);
    }

    #[test]
    fn test_append_suffix() {
        assert_eq!(append_suffix(Path::new("runs/edit.yaml"), ".out"), PathBuf::from("runs/edit.yaml.out"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_from_signal() {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(exit_code(ExitStatus::from_raw(2 << 8)), 2);
        assert_eq!(exit_code(ExitStatus::from_raw(9)), -9);
    }
}
