//! Fortran-style SOG infile parser and emitter.
//!
//! The format SOG's `input_processor.f90` reads is one logical record per
//! parameter:
//!
//! ```text
//! "maxdepth"  40.0d0  "depth of modelled domain [m]"
//! ```
//!
//! A quoted key, a value, and a quoted description whose trailing `[...]`
//! span, if any, holds the units. Lines starting with `!` and blank lines are
//! ignored. A record may be broken across several physical lines.
//!
//! Neither direction validates values; that is the job of the schema layer.

mod emitter;
mod parser;

use std::collections::BTreeMap;

use thiserror::Error;

pub use emitter::{dump, dump_to_string};
pub use parser::{load, load_str};

/// One infile record. `value` is the token string exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfileRecord {
    pub value: String,
    pub description: String,
    pub units: Option<String>,
}

impl InfileRecord {
    pub fn new(value: impl Into<String>, description: impl Into<String>, units: Option<&str>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
            units: units.map(ToString::to_string),
        }
    }
}

/// Infile records keyed by infile key.
pub type InfileRecords = BTreeMap<String, InfileRecord>;

#[derive(Debug, Error)]
pub enum InfileError {
    #[error("Infile parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Infile key not found: {0}")]
    MissingKey(String),

    #[error("Infile line for {key} is {len} characters long; SOG reads at most {max}")]
    LineTooLong { key: String, len: usize, max: usize },

    #[error("Infile I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Infile pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
