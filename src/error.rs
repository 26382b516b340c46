//! Errors of the command-line surface
//!
//! Analysis findings are never errors: they are [`crate::diagnostics::Diagnostic`]
//! values inside the report. This type only covers failures around the
//! pipeline, such as reading the input or writing the output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input is empty")]
    EmptyInput,
}
