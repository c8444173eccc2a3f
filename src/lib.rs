//! SOG command processor
//!
//! Drives the SOG coupled biophysical ocean model: turns nested YAML infiles
//! into the simulator's Fortran-style infile format, applies YAML edit files
//! on top of a base infile, and runs single simulations or batches of them
//! with bounded concurrency.
//!
//! ## Layout
//!
//! - **infile**: Fortran-style infile parser and emitter
//! - **schema**: every recognized parameter, its flat key and semantic type
//! - **document**: validated nested YAML documents
//! - **transform**: nested <-> flat conversion
//! - **merge**: edit file overlays
//! - **run**: a single SOG run
//! - **batch**: batch description parsing and the job scheduler

pub mod config;
pub mod schema;
pub mod infile;
pub mod document;
pub mod transform;
pub mod merge;
pub mod run;
pub mod batch;

// Re-export settings
pub use config::Settings;

// Re-export the data model
pub use document::{DocumentError, NestedDocument, Node, Quantity};
pub use infile::{InfileError, InfileRecord, InfileRecords};
pub use schema::{yaml_schema, ParamValue, YamlSchema};

// Re-export conversions
pub use merge::{merge, merge_all};
pub use transform::{flatten, unflatten, TransformError};

// Re-export runners
pub use batch::{run_batch, BatchError, BatchScheduler, Job};
pub use run::{RunError, RunOptions};
