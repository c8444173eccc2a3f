//! sog: command processor for the SOG ocean model
//!
//! # Usage
//!
//! ```bash
//! # Run SOG with a YAML infile and an edit file, echoing the outfile
//! sog run ../SOG/SOG infile.yaml -e edits.yaml --watch
//!
//! # Run every job in a batch description
//! sog batch runs.yaml
//!
//! # Show the commands a batch would run
//! sog batch runs.yaml --dry-run
//!
//! # Look up a parameter value
//! sog read infile.yaml grid.model_depth -e edits.yaml
//!
//! # Convert a Fortran-style infile to YAML
//! sog infile2yaml legacy.infile -o infile.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `SOG_CONFIG`: Path to a settings file (default: ./sog.toml if present)
//! - `RUST_LOG`: Logging level (default: info)

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use sog_command::config::{self, defaults, Settings};
use sog_command::run::{self, RunOptions};
use sog_command::{batch, transform, yaml_schema};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "sog")]
#[command(about = "Command processor for the SOG coupled biophysical ocean model")]
#[command(version)]
struct CliArgs {
    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Run SOG with a YAML infile and optional edit files
    Run {
        /// SOG executable to run
        sog_exec: PathBuf,
        /// YAML infile (or a Fortran-style infile with --legacy-infile)
        infile: PathBuf,
        /// YAML edit file applied to the infile; repeatable, later files win
        #[arg(short = 'e', long = "editfile", value_name = "EDIT_FILE")]
        edit_files: Vec<PathBuf>,
        /// File for SOG's output (default: <basename of infile>.out)
        #[arg(short = 'o', long)]
        outfile: Option<PathBuf>,
        /// Hand the infile to SOG as is
        #[arg(long)]
        legacy_infile: bool,
        /// Priority to run SOG at
        #[arg(long, value_parser = clap::value_parser!(i32).range(-20..=19))]
        nice: Option<i32>,
        /// Show the command that would be run, and run nothing
        #[arg(long)]
        dry_run: bool,
        /// Show the outfile while SOG runs
        #[arg(long)]
        watch: bool,
    },

    /// Run the jobs described in a batch file
    Batch {
        /// YAML batch description
        batchfile: PathBuf,
        /// Show the commands that would be run, and run nothing
        #[arg(long)]
        dry_run: bool,
        /// Log how each job's command is built
        #[arg(long)]
        debug: bool,
    },

    /// Print the value of a parameter in a YAML infile
    Read {
        /// YAML infile
        infile: PathBuf,
        /// Dotted parameter path, e.g. grid.model_depth
        key: String,
        /// YAML edit file applied to the infile before reading
        #[arg(short = 'e', long = "editfile", value_name = "EDIT_FILE")]
        edit_files: Vec<PathBuf>,
    },

    /// Convert a Fortran-style infile to YAML
    #[command(name = "infile2yaml")]
    Infile2Yaml {
        /// Fortran-style infile
        legacy_infile: PathBuf,
        /// Where to write the YAML (default: stdout)
        #[arg(short = 'o', long)]
        outfile: Option<PathBuf>,
    },
}

impl SubCommand {
    fn wants_debug(&self) -> bool {
        matches!(self, SubCommand::Batch { debug: true, .. })
    }
}

// ============================================================================
// Subcommands
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn cmd_run(
    sog_exec: PathBuf,
    infile: PathBuf,
    edit_files: Vec<PathBuf>,
    outfile: Option<PathBuf>,
    legacy_infile: bool,
    nice: Option<i32>,
    dry_run: bool,
    watch: bool,
) -> Result<i32> {
    let opts = RunOptions {
        edit_files,
        outfile,
        nice: nice.unwrap_or(config::get().default_nice),
        legacy_infile,
        dry_run,
        ..RunOptions::new(sog_exec, infile)
    };
    let mut stdout = io::stdout().lock();
    run::run(&opts, watch, &mut stdout).context("SOG run failed")
}

fn cmd_batch(batchfile: PathBuf, dry_run: bool) -> Result<i32> {
    let mut stdout = io::stdout().lock();
    batch::run_batch(&batchfile, dry_run, &mut stdout)
        .with_context(|| format!("Batch {} failed", batchfile.display()))
}

fn cmd_read(infile: PathBuf, key: String, edit_files: Vec<PathBuf>) -> Result<i32> {
    let doc = run::load_merged(&infile, &edit_files)?;
    let value = transform::read_value(&doc, yaml_schema(), &key)
        .with_context(|| format!("Unable to read {key} from {}", infile.display()))?;
    println!("{value}");
    Ok(0)
}

fn cmd_infile2yaml(legacy_infile: PathBuf, outfile: Option<PathBuf>) -> Result<i32> {
    let yaml = transform::infile_to_yaml(&legacy_infile, yaml_schema())
        .with_context(|| format!("Unable to convert {}", legacy_infile.display()))?;
    match outfile {
        Some(path) => {
            std::fs::write(&path, yaml).with_context(|| format!("Unable to write {}", path.display()))?;
            info!(yaml = %path.display(), "Wrote YAML infile");
        }
        None => io::stdout().lock().write_all(yaml.as_bytes())?,
    }
    Ok(0)
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    let default_level = if args.command.wants_debug() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    config::init(Settings::load());
    if config::get().default_nice != defaults::DEFAULT_NICE {
        info!(nice = config::get().default_nice, "Using configured default niceness");
    }

    let code = match args.command {
        SubCommand::Run {
            sog_exec,
            infile,
            edit_files,
            outfile,
            legacy_infile,
            nice,
            dry_run,
            watch,
        } => cmd_run(sog_exec, infile, edit_files, outfile, legacy_infile, nice, dry_run, watch)?,
        SubCommand::Batch { batchfile, dry_run, .. } => cmd_batch(batchfile, dry_run)?,
        SubCommand::Read { infile, key, edit_files } => cmd_read(infile, key, edit_files)?,
        SubCommand::Infile2Yaml { legacy_infile, outfile } => cmd_infile2yaml(legacy_infile, outfile)?,
    };

    io::stdout().flush()?;
    std::process::exit(code)
}
